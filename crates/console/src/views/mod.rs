//! Pure view rendering.
//!
//! Every view is a function of the cache, the acting identity and the
//! permission policy - same inputs, same text. Cross-references that fail
//! to resolve render as the "Неизвестно" placeholder instead of failing.
//! Action hints appear only when the policy allows the action.

mod bookings;
mod guests;
mod hotels;
mod rooms;

pub use bookings::render_bookings_of;
pub use rooms::render_search;

use chrono::NaiveDateTime;

use hotelier_core::{BookingStatus, RoomStatus};

use crate::cache::DomainCache;
use crate::policy::Actor;

/// Placeholder for a cross-reference with no match in the cache.
pub const UNKNOWN: &str = "Неизвестно";

/// Placeholder for an absent optional value.
pub const NOT_SET: &str = "Не указан";

/// The tabbed views of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Hotels,
    Rooms,
    Bookings,
    Guests,
}

impl std::str::FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hotels" => Ok(Self::Hotels),
            "rooms" => Ok(Self::Rooms),
            "bookings" => Ok(Self::Bookings),
            "guests" => Ok(Self::Guests),
            _ => Err(format!("unknown tab: {s}")),
        }
    }
}

/// Render the given tab from the cache.
#[must_use]
pub fn render(cache: &DomainCache, actor: Actor, tab: Tab) -> String {
    match tab {
        Tab::Hotels => hotels::render(cache, actor),
        Tab::Rooms => rooms::render(cache, actor),
        Tab::Bookings => bookings::render(cache, actor),
        Tab::Guests => guests::render(cache, actor),
    }
}

/// `DD.MM.YYYY`, the backend's audience formats dates the Russian way.
pub(crate) fn format_date(value: NaiveDateTime) -> String {
    value.format("%d.%m.%Y").to_string()
}

/// `DD.MM.YYYY HH:MM` for check-in/check-out moments.
pub(crate) fn format_datetime(value: NaiveDateTime) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// Human label for a room status.
pub(crate) const fn room_status_label(status: RoomStatus) -> &'static str {
    match status {
        RoomStatus::Available => "Доступна",
        RoomStatus::Occupied => "Занята",
        RoomStatus::Maintenance => "На обслуживании",
        RoomStatus::Cleaning => "Уборка",
        // Not offered by the console; show the wire value.
        RoomStatus::Inactive => "inactive",
    }
}

/// Human label for a booking status.
pub(crate) const fn booking_status_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Confirmed => "Подтверждено",
        BookingStatus::CheckedIn => "Заселен",
        BookingStatus::CheckedOut => "Выселен",
        BookingStatus::Cancelled => "Отменено",
        BookingStatus::Completed => "Завершено",
    }
}

/// Join per-card action labels into a trailing line, or nothing when the
/// policy allows none.
pub(crate) fn action_line(actions: &[&str]) -> String {
    if actions.is_empty() {
        String::new()
    } else {
        format!("  Действия: {}\n", actions.join(", "))
    }
}
