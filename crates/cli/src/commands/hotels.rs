//! Hotel management commands.

use clap::Subcommand;

use hotelier_console::forms::{self, Form};
use hotelier_console::views::Tab;
use hotelier_console::{AppError, Console};
use hotelier_core::HotelId;

use super::{open_console, print_notices};

/// Field set of the hotel form.
const HOTEL_FIELDS: [&str; 6] = ["name", "description", "address", "city", "country", "rating"];

#[derive(Subcommand)]
pub enum HotelAction {
    /// Create a hotel (admin)
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        country: String,
        #[arg(long)]
        rating: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a hotel; unset options keep their current value (admin)
    Update {
        id: i32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        rating: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a hotel (admin)
    Delete { id: i32 },
}

pub async fn hotel(action: HotelAction) -> Result<(), AppError> {
    let mut console = open_console().await?;
    console.load_all().await?;

    let result = match action {
        HotelAction::Create {
            name,
            address,
            city,
            country,
            rating,
            description,
        } => {
            let mut form = Form::with_fields("hotel-form", &HOTEL_FIELDS);
            form.set("name", &name);
            form.set("address", &address);
            form.set("city", &city);
            form.set("country", &country);
            set_opt(&mut form, "rating", rating.as_deref());
            set_opt(&mut form, "description", description.as_deref());
            console.save_hotel(None, &form).await
        }
        HotelAction::Update {
            id,
            name,
            address,
            city,
            country,
            rating,
            description,
        } => {
            let id = HotelId::new(id);
            let mut form = edit_form(&console, id)?;
            set_opt(&mut form, "name", name.as_deref());
            set_opt(&mut form, "address", address.as_deref());
            set_opt(&mut form, "city", city.as_deref());
            set_opt(&mut form, "country", country.as_deref());
            set_opt(&mut form, "rating", rating.as_deref());
            set_opt(&mut form, "description", description.as_deref());
            console.save_hotel(Some(id), &form).await
        }
        HotelAction::Delete { id } => console.delete_hotel(HotelId::new(id)).await,
    };

    print_notices(&mut console);
    result?;
    println!("{}", console.show_tab(Tab::Hotels));
    Ok(())
}

/// Build the edit form pre-populated from the cached entity, like the edit
/// dialog does.
fn edit_form(console: &Console, id: HotelId) -> Result<Form, AppError> {
    let entity = console
        .cache()
        .hotel(id)
        .ok_or_else(|| AppError::NotFound(format!("отель #{id}")))?;
    let value = serde_json::to_value(entity).map_err(hotelier_console::api::ApiError::from)?;

    let mut form = Form::with_fields("hotel-form", &HOTEL_FIELDS);
    forms::set_values(&mut form, &value);
    Ok(form)
}

pub(crate) fn set_opt(form: &mut Form, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        form.set(name, value);
    }
}
