//! Domain entities as served by the reservation backend.
//!
//! These are wire types: field names and value representations match the
//! backend's JSON exactly. Identity is carried by the typed ids from
//! `hotelier-core`.

pub mod booking;
pub mod hotel;
pub mod room;
pub mod user;

pub use booking::Booking;
pub use hotel::Hotel;
pub use room::{Room, RoomSearch, RoomWithHotel};
pub use user::{LoginRequest, TokenResponse, User};
