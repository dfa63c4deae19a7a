//! Hotels tab.

use std::fmt::Write;

use crate::cache::DomainCache;
use crate::policy::{self, Action, Actor};

use super::{action_line, format_date};

pub(super) fn render(cache: &DomainCache, actor: Actor) -> String {
    if cache.hotels().is_empty() {
        return "Отели не найдены\n".to_string();
    }

    let manages = policy::allows(actor, Action::ManageHotels);

    let mut out = String::new();
    for hotel in cache.hotels() {
        let _ = writeln!(out, "{} (#{})", hotel.name, hotel.id);
        let _ = writeln!(out, "  Адрес: {}", hotel.address);
        let _ = writeln!(out, "  Город: {}, {}", hotel.city, hotel.country);
        match hotel.display_rating() {
            Some(rating) => {
                let _ = writeln!(out, "  Рейтинг: {rating}");
            }
            None => out.push_str("  Рейтинг: Нет оценки\n"),
        }
        if let Some(description) = &hotel.description {
            let _ = writeln!(out, "  Описание: {description}");
        }
        let _ = writeln!(out, "  Создан: {}", format_date(hotel.created_at));

        if manages {
            out.push_str(&action_line(&["редактировать", "удалить"]));
        }
        out.push('\n');
    }
    out
}
