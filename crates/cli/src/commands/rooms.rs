//! Room management and availability search commands.

use clap::{Args, Subcommand};

use hotelier_console::forms::{self, Form};
use hotelier_console::models::RoomSearch;
use hotelier_console::views::{Tab, render_search};
use hotelier_console::{AppError, Console};
use hotelier_core::{RoomId, RoomStatus};

use super::hotels::set_opt;
use super::{open_console, print_notices};

/// Field set of the room form.
const ROOM_FIELDS: [&str; 9] = [
    "hotel_id",
    "room_number",
    "floor",
    "room_type",
    "price_per_night",
    "capacity",
    "status",
    "description",
    "amenities",
];

#[derive(Subcommand)]
pub enum RoomAction {
    /// Create a room (admin)
    Create {
        #[arg(long)]
        hotel_id: i32,
        #[arg(long)]
        room_number: String,
        #[arg(long)]
        floor: String,
        #[arg(long)]
        room_type: String,
        #[arg(long)]
        price_per_night: String,
        #[arg(long)]
        capacity: String,
        #[arg(long, default_value = "available")]
        status: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amenities: Option<String>,
    },
    /// Update a room; unset options keep their current value (admin)
    Update {
        id: i32,
        #[arg(long)]
        room_number: Option<String>,
        #[arg(long)]
        floor: Option<String>,
        #[arg(long)]
        room_type: Option<String>,
        #[arg(long)]
        price_per_night: Option<String>,
        #[arg(long)]
        capacity: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amenities: Option<String>,
    },
    /// Change a room's status (admin)
    Status {
        id: i32,
        /// available, occupied, maintenance or cleaning
        status: String,
    },
    /// Delete a room (admin)
    Delete { id: i32 },
}

/// Query options for the availability search.
#[derive(Args)]
pub struct SearchArgs {
    #[arg(long)]
    pub city: Option<String>,
    /// Check-in datetime, e.g. 2024-06-01T14:00:00
    #[arg(long)]
    pub check_in: Option<String>,
    /// Check-out datetime, e.g. 2024-06-05T12:00:00
    #[arg(long)]
    pub check_out: Option<String>,
    #[arg(long)]
    pub guests: Option<i32>,
}

pub async fn room(action: RoomAction) -> Result<(), AppError> {
    let mut console = open_console().await?;
    console.load_all().await?;

    let result = match action {
        RoomAction::Create {
            hotel_id,
            room_number,
            floor,
            room_type,
            price_per_night,
            capacity,
            status,
            description,
            amenities,
        } => {
            let mut form = Form::with_fields("room-form", &ROOM_FIELDS);
            form.set("hotel_id", &hotel_id.to_string());
            form.set("room_number", &room_number);
            form.set("floor", &floor);
            form.set("room_type", &room_type);
            form.set("price_per_night", &price_per_night);
            form.set("capacity", &capacity);
            form.set("status", &status);
            set_opt(&mut form, "description", description.as_deref());
            set_opt(&mut form, "amenities", amenities.as_deref());
            console.save_room(None, &form).await
        }
        RoomAction::Update {
            id,
            room_number,
            floor,
            room_type,
            price_per_night,
            capacity,
            description,
            amenities,
        } => {
            let id = RoomId::new(id);
            let mut form = edit_form(&console, id)?;
            set_opt(&mut form, "room_number", room_number.as_deref());
            set_opt(&mut form, "floor", floor.as_deref());
            set_opt(&mut form, "room_type", room_type.as_deref());
            set_opt(&mut form, "price_per_night", price_per_night.as_deref());
            set_opt(&mut form, "capacity", capacity.as_deref());
            set_opt(&mut form, "description", description.as_deref());
            set_opt(&mut form, "amenities", amenities.as_deref());
            console.save_room(Some(id), &form).await
        }
        RoomAction::Status { id, status } => {
            let status: RoomStatus = status.parse().map_err(AppError::InvalidInput)?;
            console.update_room_status(RoomId::new(id), status).await
        }
        RoomAction::Delete { id } => console.delete_room(RoomId::new(id)).await,
    };

    print_notices(&mut console);
    result?;
    println!("{}", console.show_tab(Tab::Rooms));
    Ok(())
}

/// Search available rooms and render the results.
pub async fn search(args: &SearchArgs) -> Result<(), AppError> {
    let search = RoomSearch {
        city: args.city.clone(),
        check_in: args.check_in.clone(),
        check_out: args.check_out.clone(),
        guests: args.guests,
    };

    let mut console = open_console().await?;
    let result = console.search_rooms(&search).await;
    print_notices(&mut console);

    println!("{}", render_search(&result?));
    Ok(())
}

fn edit_form(console: &Console, id: RoomId) -> Result<Form, AppError> {
    let entity = console
        .cache()
        .room(id)
        .ok_or_else(|| AppError::NotFound(format!("комната #{id}")))?;
    let value = serde_json::to_value(entity).map_err(hotelier_console::api::ApiError::from)?;

    let mut form = Form::with_fields("room-form", &ROOM_FIELDS);
    forms::set_values(&mut form, &value);
    Ok(form)
}
