//! Hotel entity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use hotelier_core::HotelId;

/// A hotel property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub address: String,
    pub city: String,
    pub country: String,
    /// 0.0-5.0; the backend defaults to 0.0, which the views treat as unrated.
    #[serde(default)]
    pub rating: Option<f32>,
    pub created_at: NaiveDateTime,
}

impl Hotel {
    /// Rating to display, if one has been assigned.
    #[must_use]
    pub fn display_rating(&self) -> Option<f32> {
        self.rating.filter(|r| *r > 0.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_parses_with_null_rating() {
        let json = r#"{
            "id": 3,
            "name": "Гранд Отель",
            "address": "ул. Ленина, 1",
            "city": "Москва",
            "country": "Россия",
            "rating": null,
            "created_at": "2024-02-10T12:00:00"
        }"#;

        let hotel: Hotel = serde_json::from_str(json).unwrap();
        assert_eq!(hotel.id, HotelId::new(3));
        assert_eq!(hotel.display_rating(), None);
    }

    #[test]
    fn test_zero_rating_counts_as_unrated() {
        let json = r#"{
            "id": 4,
            "name": "Hotel",
            "address": "a",
            "city": "b",
            "country": "c",
            "rating": 0.0,
            "created_at": "2024-02-10T12:00:00"
        }"#;

        let hotel: Hotel = serde_json::from_str(json).unwrap();
        assert_eq!(hotel.display_rating(), None);

        let rated = Hotel {
            rating: Some(4.5),
            ..hotel
        };
        assert_eq!(rated.display_rating(), Some(4.5));
    }
}
