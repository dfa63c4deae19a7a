//! Room entity and availability search parameters.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use hotelier_core::{HotelId, RoomId, RoomStatus};

use super::Hotel;

/// A room belonging to exactly one hotel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub hotel_id: HotelId,
    pub room_number: String,
    pub floor: i32,
    pub room_type: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_per_night: Decimal,
    pub capacity: i32,
    #[serde(default)]
    pub amenities: Option<String>,
    pub status: RoomStatus,
    pub created_at: NaiveDateTime,
}

/// A room with its hotel embedded, as returned by the availability search.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomWithHotel {
    #[serde(flatten)]
    pub room: Room,
    pub hotel: Hotel,
}

/// Query parameters for `GET /rooms/search/available`.
///
/// Dates travel as the backend expects them (ISO date or datetime text);
/// only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoomSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<i32>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_room_parses_with_float_price() {
        let json = r#"{
            "id": 12,
            "hotel_id": 3,
            "room_number": "101",
            "floor": 1,
            "room_type": "standard",
            "price_per_night": 150.5,
            "capacity": 2,
            "status": "available",
            "created_at": "2024-02-10T12:00:00"
        }"#;

        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.hotel_id, HotelId::new(3));
        assert_eq!(room.price_per_night.to_string(), "150.5");
        assert_eq!(room.status, RoomStatus::Available);
    }

    #[test]
    fn test_search_skips_unset_params() {
        let search = RoomSearch {
            city: Some("Москва".to_string()),
            guests: Some(2),
            ..RoomSearch::default()
        };

        let value = serde_json::to_value(&search).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("city"));
        assert!(object.contains_key("guests"));
    }

    #[test]
    fn test_room_with_hotel_flattens() {
        let json = r#"{
            "id": 12,
            "hotel_id": 3,
            "room_number": "101",
            "floor": 1,
            "room_type": "standard",
            "price_per_night": 99.0,
            "capacity": 2,
            "status": "available",
            "created_at": "2024-02-10T12:00:00",
            "hotel": {
                "id": 3,
                "name": "Гранд Отель",
                "address": "ул. Ленина, 1",
                "city": "Москва",
                "country": "Россия",
                "rating": 4.2,
                "created_at": "2024-01-01T00:00:00"
            }
        }"#;

        let found: RoomWithHotel = serde_json::from_str(json).unwrap();
        assert_eq!(found.room.id, RoomId::new(12));
        assert_eq!(found.hotel.name, "Гранд Отель");
    }
}
