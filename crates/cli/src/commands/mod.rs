//! Command handlers.
//!
//! Every handler opens the console (restoring the persisted session),
//! performs its operation, prints the drained notices, and - for commands
//! that change or show data - prints the re-rendered view.

mod auth;
mod bookings;
mod guests;
mod hotels;
mod rooms;
mod show;

pub use auth::{login, logout, register};
pub use bookings::{BookingAction, booking};
pub use guests::{GuestAction, guest};
pub use hotels::{HotelAction, hotel};
pub use rooms::{RoomAction, SearchArgs, room, search};
pub use show::show;

use hotelier_console::config::ConsoleConfig;
use hotelier_console::notify::NoticeKind;
use hotelier_console::{AppError, Console};

/// Open the console against the configured backend.
pub(crate) async fn open_console() -> Result<Console, AppError> {
    let config = ConsoleConfig::from_env()?;
    Ok(Console::open(&config).await)
}

/// Print drained notices: successes to stdout, errors to stderr.
pub(crate) fn print_notices(console: &mut Console) {
    for notice in console.take_notices() {
        match notice.kind {
            NoticeKind::Success => println!("{}", notice.text),
            NoticeKind::Error => eprintln!("{}", notice.text),
        }
    }
}
