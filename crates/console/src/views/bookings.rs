//! Bookings tab.

use std::fmt::Write;

use crate::cache::DomainCache;
use crate::policy::{self, Action, Actor};

use super::{UNKNOWN, action_line, booking_status_label, format_datetime};

pub(super) fn render(cache: &DomainCache, actor: Actor) -> String {
    if cache.bookings().is_empty() {
        return "Бронирования не найдены\n".to_string();
    }

    let mut out = String::new();
    for booking in cache.bookings() {
        let hotel_name = cache
            .hotel(booking.hotel_id)
            .map_or(UNKNOWN, |h| h.name.as_str());
        let room_number = cache
            .room(booking.room_id)
            .map_or(UNKNOWN, |r| r.room_number.as_str());

        let _ = writeln!(out, "Бронирование #{}", booking.booking_reference);
        if actor.is_admin() {
            let guest = cache
                .user(booking.user_id)
                .map_or_else(|| UNKNOWN.to_string(), crate::models::User::full_name);
            let _ = writeln!(out, "  Гость: {guest}");
        }
        let _ = writeln!(out, "  Отель: {hotel_name}");
        let _ = writeln!(out, "  Комната: {room_number}");
        let _ = writeln!(out, "  Заезд: {}", format_datetime(booking.check_in_date));
        let _ = writeln!(out, "  Выезд: {}", format_datetime(booking.check_out_date));
        let _ = writeln!(out, "  Гостей: {}", booking.number_of_guests);
        let _ = writeln!(out, "  Общая цена: {} руб.", booking.total_price);
        let _ = writeln!(out, "  Статус: {}", booking_status_label(booking.status));
        if let Some(requests) = &booking.special_requests {
            let _ = writeln!(out, "  Пожелания: {requests}");
        }

        let mut actions = Vec::new();
        if policy::can_check_in(actor, booking) {
            actions.push("заезд");
        }
        if policy::can_check_out(actor, booking) {
            actions.push("выезд");
        }
        if policy::can_cancel(actor, booking) {
            actions.push("отменить");
        }
        if policy::allows(actor, Action::DeleteBooking) {
            actions.push("удалить");
        }
        out.push_str(&action_line(&actions));
        out.push('\n');
    }
    out
}

/// Render one guest's bookings, for the per-guest dialog.
#[must_use]
pub fn render_bookings_of(cache: &DomainCache, user_id: hotelier_core::UserId) -> String {
    let bookings = cache.bookings_for(user_id);
    if bookings.is_empty() {
        return "У гостя нет бронирований\n".to_string();
    }

    let mut out = String::new();
    for booking in bookings {
        let hotel_name = cache
            .hotel(booking.hotel_id)
            .map_or(UNKNOWN, |h| h.name.as_str());
        let room_number = cache
            .room(booking.room_id)
            .map_or(UNKNOWN, |r| r.room_number.as_str());

        let _ = writeln!(out, "Бронирование #{}", booking.booking_reference);
        let _ = writeln!(out, "  Отель: {hotel_name}");
        let _ = writeln!(out, "  Комната: {room_number}");
        let _ = writeln!(
            out,
            "  Даты: {} - {}",
            format_datetime(booking.check_in_date),
            format_datetime(booking.check_out_date)
        );
        let _ = writeln!(out, "  Статус: {}", booking_status_label(booking.status));
        let _ = writeln!(out, "  Стоимость: {} руб.", booking.total_price);
        out.push('\n');
    }
    out
}
