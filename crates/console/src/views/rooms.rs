//! Rooms tab and availability search results.

use std::fmt::Write;

use crate::cache::DomainCache;
use crate::models::RoomWithHotel;
use crate::policy::{self, Action, Actor};

use super::{UNKNOWN, action_line, room_status_label};

pub(super) fn render(cache: &DomainCache, actor: Actor) -> String {
    if cache.rooms().is_empty() {
        return "Комнаты не найдены\n".to_string();
    }

    let manages = policy::allows(actor, Action::ManageRooms);

    let mut out = String::new();
    for room in cache.rooms() {
        let hotel_name = cache
            .hotel(room.hotel_id)
            .map_or(UNKNOWN, |h| h.name.as_str());

        let _ = writeln!(out, "Комната {} (#{})", room.room_number, room.id);
        let _ = writeln!(out, "  Отель: {hotel_name}");
        let _ = writeln!(out, "  Этаж: {}", room.floor);
        let _ = writeln!(out, "  Тип: {}", room.room_type);
        let _ = writeln!(out, "  Цена за ночь: {} руб.", room.price_per_night);
        let _ = writeln!(out, "  Вместимость: {} гостей", room.capacity);
        let _ = writeln!(out, "  Статус: {}", room_status_label(room.status));
        if let Some(description) = &room.description {
            let _ = writeln!(out, "  Описание: {description}");
        }
        if let Some(amenities) = &room.amenities {
            let _ = writeln!(out, "  Удобства: {amenities}");
        }

        if manages {
            out.push_str(&action_line(&["редактировать", "удалить", "статус"]));
        }
        out.push('\n');
    }
    out
}

/// Render availability search results. The hotel arrives embedded, so no
/// cache lookup is involved.
#[must_use]
pub fn render_search(results: &[RoomWithHotel]) -> String {
    if results.is_empty() {
        return "Свободные комнаты не найдены\n".to_string();
    }

    let mut out = String::new();
    for found in results {
        let _ = writeln!(
            out,
            "Комната {} (#{})",
            found.room.room_number, found.room.id
        );
        let _ = writeln!(
            out,
            "  Отель: {} ({}, {})",
            found.hotel.name, found.hotel.city, found.hotel.country
        );
        let _ = writeln!(out, "  Тип: {}", found.room.room_type);
        let _ = writeln!(out, "  Цена за ночь: {} руб.", found.room.price_per_night);
        let _ = writeln!(out, "  Вместимость: {} гостей", found.room.capacity);
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::tests::{admin_actor, hotel, room, user_actor};
    use super::*;

    #[test]
    fn test_hotel_cross_reference_resolves() {
        let mut cache = DomainCache::default();
        cache.replace_hotels(vec![hotel(3, "Гранд Отель")]);
        cache.replace_rooms(vec![room(12, 3)]);

        let output = render(&cache, user_actor(7));
        assert!(output.contains("Отель: Гранд Отель"));
    }

    #[test]
    fn test_missing_hotel_renders_placeholder() {
        // Room references hotel 99 which is not cached; render must not
        // fail and must show the placeholder.
        let mut cache = DomainCache::default();
        cache.replace_hotels(vec![hotel(3, "Гранд Отель")]);
        cache.replace_rooms(vec![room(12, 99)]);

        let output = render(&cache, admin_actor());
        assert!(output.contains(&format!("Отель: {UNKNOWN}")));
    }

    #[test]
    fn test_admin_gets_status_action() {
        let mut cache = DomainCache::default();
        cache.replace_rooms(vec![room(12, 3)]);

        let output = render(&cache, admin_actor());
        assert!(output.contains("Действия: редактировать, удалить, статус"));
        assert!(!render(&cache, user_actor(7)).contains("Действия:"));
    }

    #[test]
    fn test_search_results_embed_hotel() {
        let found: RoomWithHotel = serde_json::from_value(serde_json::json!({
            "id": 12,
            "hotel_id": 3,
            "room_number": "101",
            "floor": 1,
            "room_type": "standard",
            "price_per_night": 150.5,
            "capacity": 2,
            "status": "available",
            "created_at": "2024-01-02T00:00:00",
            "hotel": {
                "id": 3,
                "name": "Гранд Отель",
                "address": "ул. Ленина, 1",
                "city": "Москва",
                "country": "Россия",
                "created_at": "2024-01-01T00:00:00"
            }
        }))
        .unwrap();

        let output = render_search(&[found]);
        assert!(output.contains("Отель: Гранд Отель (Москва, Россия)"));

        assert_eq!(render_search(&[]), "Свободные комнаты не найдены\n");
    }
}
