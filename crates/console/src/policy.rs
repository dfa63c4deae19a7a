//! Permission policy.
//!
//! One table decides what an actor may see and do. Views and the controller
//! both go through [`allows`] (or the composite booking guards below) -
//! never through ad-hoc role checks at call sites.

use hotelier_core::{BookingAction, UserId, UserRole};

use crate::models::{Booking, User};

/// The acting identity: who is asking, with which role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    pub role: UserRole,
}

impl Actor {
    /// Derive the actor from the session user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            role: user.role,
        }
    }

    #[must_use]
    pub const fn is_admin(self) -> bool {
        self.role.is_admin()
    }
}

/// An action a view may expose or the controller may execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Create, update or delete hotels.
    ManageHotels,
    /// Create, update, delete rooms or change their status.
    ManageRooms,
    /// See the full guest list (non-admins see only themselves).
    ViewGuestList,
    /// Create a new guest account from the console.
    CreateGuest,
    /// Edit a user's profile.
    EditUser { target: UserId },
    /// Delete a user account.
    DeleteUser { target: UserId },
    /// Create a booking on behalf of a user.
    CreateBooking { for_user: UserId },
    /// Edit an existing booking's details.
    EditBooking,
    /// Delete a booking record outright.
    DeleteBooking,
    /// Cancel a booking owned by `owner`.
    CancelBooking { owner: UserId },
    /// Register a guest's arrival.
    CheckInBooking,
    /// Register a guest's departure.
    CheckOutBooking,
}

/// The permission table.
///
/// Admins may do everything. Plain users keep to what they own: their
/// profile, their bookings, and cancelling those bookings.
#[must_use]
pub fn allows(actor: Actor, action: Action) -> bool {
    if actor.is_admin() {
        return true;
    }

    match action {
        Action::EditUser { target } | Action::DeleteUser { target } => target == actor.id,
        Action::CreateBooking { for_user } => for_user == actor.id,
        Action::CancelBooking { owner } => owner == actor.id,
        Action::ManageHotels
        | Action::ManageRooms
        | Action::ViewGuestList
        | Action::CreateGuest
        | Action::EditBooking
        | Action::DeleteBooking
        | Action::CheckInBooking
        | Action::CheckOutBooking => false,
    }
}

/// Whether `actor` may cancel `booking` right now: permission and the
/// lifecycle table must both agree.
#[must_use]
pub fn can_cancel(actor: Actor, booking: &Booking) -> bool {
    booking.status.permits(BookingAction::Cancel)
        && allows(
            actor,
            Action::CancelBooking {
                owner: booking.user_id,
            },
        )
}

/// Whether `actor` may check `booking` in right now.
#[must_use]
pub fn can_check_in(actor: Actor, booking: &Booking) -> bool {
    booking.status.permits(BookingAction::CheckIn) && allows(actor, Action::CheckInBooking)
}

/// Whether `actor` may check `booking` out right now.
#[must_use]
pub fn can_check_out(actor: Actor, booking: &Booking) -> bool {
    booking.status.permits(BookingAction::CheckOut) && allows(actor, Action::CheckOutBooking)
}

/// Whether `actor` sees `user` in the guests view.
#[must_use]
pub fn sees_guest(actor: Actor, user: &User) -> bool {
    sees_guest_id(actor, user.id)
}

/// Id-only form of [`sees_guest`], for callers that may hold a dangling
/// reference.
#[must_use]
pub fn sees_guest_id(actor: Actor, user_id: UserId) -> bool {
    actor.is_admin() || user_id == actor.id
}
