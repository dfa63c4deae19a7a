//! Booking lifecycle commands.

use clap::Subcommand;

use hotelier_console::AppError;
use hotelier_console::forms::Form;
use hotelier_console::views::Tab;
use hotelier_core::BookingId;

use super::hotels::set_opt;
use super::{open_console, print_notices};

/// Field set of the booking form.
const BOOKING_FIELDS: [&str; 7] = [
    "user_id",
    "hotel_id",
    "room_id",
    "check_in_date",
    "check_out_date",
    "number_of_guests",
    "special_requests",
];

#[derive(Subcommand)]
pub enum BookingAction {
    /// Create a booking (for yourself, or for any user as admin)
    Create {
        #[arg(long)]
        hotel_id: i32,
        #[arg(long)]
        room_id: i32,
        /// Check-in datetime, e.g. 2024-06-01T14:00:00
        #[arg(long)]
        check_in: String,
        /// Check-out datetime, e.g. 2024-06-05T12:00:00
        #[arg(long)]
        check_out: String,
        #[arg(long, default_value = "2")]
        guests: String,
        /// Book on behalf of this user (admin; defaults to yourself)
        #[arg(long)]
        user_id: Option<i32>,
        #[arg(long)]
        special_requests: Option<String>,
    },
    /// Register arrival (admin)
    CheckIn { id: i32 },
    /// Register departure (admin)
    CheckOut { id: i32 },
    /// Cancel a booking (admin, or the booking's owner)
    Cancel { id: i32 },
    /// Delete a booking record (admin)
    Delete { id: i32 },
}

pub async fn booking(action: BookingAction) -> Result<(), AppError> {
    let mut console = open_console().await?;

    // Lifecycle guards consult the cached booking, so load first.
    console.load_all().await?;

    let result = match action {
        BookingAction::Create {
            hotel_id,
            room_id,
            check_in,
            check_out,
            guests,
            user_id,
            special_requests,
        } => {
            let mut form = Form::with_fields("booking-form", &BOOKING_FIELDS);
            let user_id = user_id.or_else(|| {
                console
                    .current_user()
                    .map(|u| u.id.as_i32())
            });
            if let Some(user_id) = user_id {
                form.set("user_id", &user_id.to_string());
            }
            form.set("hotel_id", &hotel_id.to_string());
            form.set("room_id", &room_id.to_string());
            form.set("check_in_date", &check_in);
            form.set("check_out_date", &check_out);
            form.set("number_of_guests", &guests);
            set_opt(&mut form, "special_requests", special_requests.as_deref());
            console.save_booking(None, &form).await
        }
        BookingAction::CheckIn { id } => console.check_in(BookingId::new(id)).await,
        BookingAction::CheckOut { id } => console.check_out(BookingId::new(id)).await,
        BookingAction::Cancel { id } => console.cancel_booking(BookingId::new(id)).await,
        BookingAction::Delete { id } => console.delete_booking(BookingId::new(id)).await,
    };

    print_notices(&mut console);
    result?;
    println!("{}", console.show_tab(Tab::Bookings));
    Ok(())
}
