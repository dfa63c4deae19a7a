//! Booking entity.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use hotelier_core::{BookingId, BookingStatus, HotelId, RoomId, UserId};

/// A reservation tying a user to a room in a hotel for a date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    /// Opaque display reference assigned by the backend.
    pub booking_reference: String,
    pub user_id: UserId,
    pub hotel_id: HotelId,
    pub room_id: RoomId,
    pub check_in_date: NaiveDateTime,
    pub check_out_date: NaiveDateTime,
    pub number_of_guests: i32,
    pub total_price: Decimal,
    pub status: BookingStatus,
    #[serde(default)]
    pub special_requests: Option<String>,
    pub created_at: NaiveDateTime,
}
