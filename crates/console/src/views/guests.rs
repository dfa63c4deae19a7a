//! Guests tab.
//!
//! Admins see every account; a plain user sees only their own card. The
//! booking counters come from the bookings cache, which is why this tab is
//! re-rendered on every switch.

use std::fmt::Write;

use hotelier_core::UserRole;

use crate::cache::DomainCache;
use crate::policy::{self, Action, Actor};

use super::{NOT_SET, action_line, format_date};

pub(super) fn render(cache: &DomainCache, actor: Actor) -> String {
    let visible: Vec<_> = cache
        .users()
        .iter()
        .filter(|u| policy::sees_guest(actor, u))
        .collect();

    if visible.is_empty() {
        return "Гости не найдены\n".to_string();
    }

    let mut out = String::new();
    for user in visible {
        let active = cache.active_booking_count(user.id);
        let total = cache.bookings_for(user.id).len();

        let _ = writeln!(out, "{} (#{})", user.full_name(), user.id);
        let _ = writeln!(out, "  Email: {}", user.email);
        let _ = writeln!(
            out,
            "  Телефон: {}",
            user.phone.as_deref().unwrap_or(NOT_SET)
        );
        let _ = writeln!(out, "  Роль: {}", role_label(user.role));
        let _ = writeln!(out, "  Зарегистрирован: {}", format_date(user.created_at));
        let _ = writeln!(out, "  Бронирований: {active} активных, {total} всего");

        let mut actions = Vec::new();
        if policy::allows(actor, Action::EditUser { target: user.id }) {
            actions.push("редактировать");
        }
        if policy::allows(actor, Action::DeleteUser { target: user.id }) {
            actions.push("удалить");
        }
        actions.push("бронирования");
        out.push_str(&action_line(&actions));
        out.push('\n');
    }
    out
}

const fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "Администратор",
        UserRole::User => "Пользователь",
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{admin_actor, booking, user, user_actor};
    use super::*;

    #[test]
    fn test_user_sees_only_self() {
        let mut cache = DomainCache::default();
        cache.replace_users(vec![
            user(1, UserRole::Admin),
            user(7, UserRole::User),
            user(8, UserRole::User),
        ]);

        let output = render(&cache, user_actor(7));
        assert!(output.contains("(#7)"));
        assert!(!output.contains("(#1)"));
        assert!(!output.contains("(#8)"));

        let for_admin = render(&cache, admin_actor());
        assert!(for_admin.contains("(#1)"));
        assert!(for_admin.contains("(#7)"));
        assert!(for_admin.contains("(#8)"));
    }

    #[test]
    fn test_booking_counters_reflect_cache() {
        let mut cache = DomainCache::default();
        cache.replace_users(vec![user(7, UserRole::User)]);
        cache.replace_bookings(vec![
            booking(1, 7, 3, 12, "confirmed"),
            booking(2, 7, 3, 12, "cancelled"),
        ]);

        let output = render(&cache, user_actor(7));
        assert!(output.contains("Бронирований: 1 активных, 2 всего"));
    }

    #[test]
    fn test_missing_phone_renders_placeholder() {
        let mut cache = DomainCache::default();
        cache.replace_users(vec![user(7, UserRole::User)]);

        let output = render(&cache, user_actor(7));
        assert!(output.contains(&format!("Телефон: {NOT_SET}")));
    }

    #[test]
    fn test_user_cannot_edit_others() {
        let mut cache = DomainCache::default();
        cache.replace_users(vec![user(7, UserRole::User), user(8, UserRole::User)]);

        // Admin card list includes edit/delete for every guest.
        let for_admin = render(&cache, admin_actor());
        assert!(for_admin.contains("Действия: редактировать, удалить, бронирования"));

        // The plain user only ever renders their own card, with their own
        // profile actions.
        let for_user = render(&cache, user_actor(7));
        assert!(for_user.contains("Действия: редактировать, удалить, бронирования"));
        assert!(!for_user.contains("(#8)"));
    }
}
