//! Role and status enums for the booking domain.
//!
//! Values mirror the backend's wire representation (snake_case strings).
//! [`BookingStatus`] carries the lifecycle transition table; everything that
//! moves a booking between states goes through [`BookingStatus::next`].

use serde::{Deserialize, Serialize};

/// Account role with different permission levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full access: hotel/room management, all bookings, all guests.
    Admin,
    /// Read-only listings, own profile, own bookings.
    #[default]
    User,
}

impl UserRole {
    /// Whether this role grants administrative access.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User => write!(f, "user"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

/// Operational status of a room.
///
/// `Inactive` exists on the backend but is never offered by the console;
/// it is parsed for forward compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
    Cleaning,
    Inactive,
}

impl RoomStatus {
    /// The statuses an operator may set from the console.
    pub const SELECTABLE: [Self; 4] = [
        Self::Available,
        Self::Occupied,
        Self::Maintenance,
        Self::Cleaning,
    ];

    /// Wire representation, matching the serde rename.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
            Self::Cleaning => "cleaning",
            Self::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoomStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            "maintenance" => Ok(Self::Maintenance),
            "cleaning" => Ok(Self::Cleaning),
            "inactive" => Ok(Self::Inactive),
            _ => Err(format!("invalid room status: {s}")),
        }
    }
}

/// Lifecycle action applied to a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingAction {
    CheckIn,
    CheckOut,
    Cancel,
}

/// Lifecycle status of a booking.
///
/// A booking is created `Confirmed`. `CheckedOut`, `Cancelled` and
/// `Completed` are terminal: no action leads out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// The transition table.
    ///
    /// Returns the status an action leads to from `self`, or `None` when the
    /// action is not permitted in the current state. Role/ownership gating is
    /// layered on top by the permission policy; this table is purely about
    /// state.
    #[must_use]
    pub const fn next(self, action: BookingAction) -> Option<Self> {
        match (self, action) {
            (Self::Confirmed, BookingAction::CheckIn) => Some(Self::CheckedIn),
            (Self::CheckedIn, BookingAction::CheckOut) => Some(Self::CheckedOut),
            (Self::Confirmed | Self::CheckedIn, BookingAction::Cancel) => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Whether an action is permitted from this state.
    #[must_use]
    pub const fn permits(self, action: BookingAction) -> bool {
        self.next(action).is_some()
    }

    /// Whether no further transition is permitted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::CheckedOut | Self::Cancelled | Self::Completed)
    }

    /// Whether the booking still occupies its room (counts as active).
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Confirmed | Self::CheckedIn)
    }

    /// Wire representation, matching the serde rename.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<UserRole>(), Ok(UserRole::Admin));
        assert_eq!("user".parse::<UserRole>(), Ok(UserRole::User));
        assert!("manager".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_serde_snake_case() {
        let role: UserRole = serde_json::from_str("\"admin\"").expect("deserialize");
        assert!(role.is_admin());
        assert_eq!(
            serde_json::to_string(&UserRole::User).expect("serialize"),
            "\"user\""
        );
    }

    #[test]
    fn test_room_status_selectable_excludes_inactive() {
        assert!(!RoomStatus::SELECTABLE.contains(&RoomStatus::Inactive));
        // Backend value still parses.
        let status: RoomStatus = serde_json::from_str("\"inactive\"").expect("deserialize");
        assert_eq!(status, RoomStatus::Inactive);
    }

    #[test]
    fn test_booking_happy_path() {
        let confirmed = BookingStatus::Confirmed;
        let checked_in = confirmed.next(BookingAction::CheckIn).expect("check-in");
        assert_eq!(checked_in, BookingStatus::CheckedIn);

        let checked_out = checked_in.next(BookingAction::CheckOut).expect("check-out");
        assert_eq!(checked_out, BookingStatus::CheckedOut);
        assert!(checked_out.is_terminal());
    }

    #[test]
    fn test_booking_cancel_from_either_active_state() {
        assert_eq!(
            BookingStatus::Confirmed.next(BookingAction::Cancel),
            Some(BookingStatus::Cancelled)
        );
        assert_eq!(
            BookingStatus::CheckedIn.next(BookingAction::Cancel),
            Some(BookingStatus::Cancelled)
        );
    }

    #[test]
    fn test_terminal_states_reject_every_action() {
        for status in [
            BookingStatus::CheckedOut,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
        ] {
            for action in [
                BookingAction::CheckIn,
                BookingAction::CheckOut,
                BookingAction::Cancel,
            ] {
                assert_eq!(status.next(action), None, "{status} must reject {action:?}");
            }
        }
    }

    #[test]
    fn test_no_skipping_states() {
        // Cannot check out without checking in, cannot check in twice.
        assert_eq!(BookingStatus::Confirmed.next(BookingAction::CheckOut), None);
        assert_eq!(BookingStatus::CheckedIn.next(BookingAction::CheckIn), None);
    }

    #[test]
    fn test_active_states() {
        assert!(BookingStatus::Confirmed.is_active());
        assert!(BookingStatus::CheckedIn.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
        assert!(!BookingStatus::Completed.is_active());
    }

    #[test]
    fn test_booking_status_serde_snake_case() {
        let status: BookingStatus = serde_json::from_str("\"checked_in\"").expect("deserialize");
        assert_eq!(status, BookingStatus::CheckedIn);
        assert_eq!(
            serde_json::to_string(&BookingStatus::CheckedOut).expect("serialize"),
            "\"checked_out\""
        );
    }
}
