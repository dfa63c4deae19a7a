//! In-memory domain collections.
//!
//! The cache owns the four collections for the lifetime of the session.
//! Reloads replace a collection wholesale - no in-place patching - so a
//! render never observes a mix of stale and fresh rows. Cross-references
//! are resolved by linear scan; the collections are small enough that an
//! id index would not pay for itself.

use hotelier_core::{BookingId, HotelId, RoomId, UserId};

use crate::models::{Booking, Hotel, Room, User};

/// The four owned collections the views render from.
#[derive(Debug, Default)]
pub struct DomainCache {
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
    users: Vec<User>,
}

impl DomainCache {
    /// Replace the hotels collection.
    pub fn replace_hotels(&mut self, hotels: Vec<Hotel>) {
        self.hotels = hotels;
    }

    /// Replace the rooms collection.
    pub fn replace_rooms(&mut self, rooms: Vec<Room>) {
        self.rooms = rooms;
    }

    /// Replace the bookings collection.
    pub fn replace_bookings(&mut self, bookings: Vec<Booking>) {
        self.bookings = bookings;
    }

    /// Replace the users collection.
    pub fn replace_users(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// Drop everything (used at logout).
    pub fn clear(&mut self) {
        self.hotels.clear();
        self.rooms.clear();
        self.bookings.clear();
        self.users.clear();
    }

    #[must_use]
    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Resolve a hotel reference. Absent ids are the caller's problem to
    /// render, never an error here.
    #[must_use]
    pub fn hotel(&self, id: HotelId) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == id)
    }

    /// Resolve a room reference.
    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Resolve a user reference.
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Resolve a booking reference.
    #[must_use]
    pub fn booking(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// All cached bookings belonging to one user.
    #[must_use]
    pub fn bookings_for(&self, user_id: UserId) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .collect()
    }

    /// How many of a user's cached bookings still occupy a room.
    #[must_use]
    pub fn active_booking_count(&self, user_id: UserId) -> usize {
        self.bookings
            .iter()
            .filter(|b| b.user_id == user_id && b.status.is_active())
            .count()
    }
}
