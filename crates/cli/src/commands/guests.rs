//! Guest account commands.

use clap::Subcommand;

use hotelier_console::forms::{self, Form};
use hotelier_console::views::Tab;
use hotelier_console::{AppError, Console};
use hotelier_core::UserId;

use super::hotels::set_opt;
use super::{open_console, print_notices};

/// Field set of the guest form.
const GUEST_FIELDS: [&str; 5] = ["first_name", "last_name", "email", "phone", "role"];

#[derive(Subcommand)]
pub enum GuestAction {
    /// Create a guest account (admin)
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        phone: Option<String>,
        /// admin or user
        #[arg(long, default_value = "user")]
        role: String,
    },
    /// Update a profile; unset options keep their current value
    Update {
        id: i32,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete an account (admin, or your own - which logs you out)
    Delete { id: i32 },
    /// Show a guest's bookings
    Bookings { id: i32 },
}

pub async fn guest(action: GuestAction) -> Result<(), AppError> {
    let mut console = open_console().await?;
    console.load_all().await?;

    let result = match action {
        GuestAction::Create {
            email,
            first_name,
            last_name,
            phone,
            role,
        } => {
            let mut form = Form::with_fields("guest-form", &GUEST_FIELDS);
            form.set("email", &email);
            form.set("first_name", &first_name);
            form.set("last_name", &last_name);
            form.set("role", &role);
            set_opt(&mut form, "phone", phone.as_deref());
            console.save_guest(None, &form).await
        }
        GuestAction::Update {
            id,
            email,
            first_name,
            last_name,
            phone,
        } => {
            let id = UserId::new(id);
            let mut form = edit_form(&console, id)?;
            set_opt(&mut form, "email", email.as_deref());
            set_opt(&mut form, "first_name", first_name.as_deref());
            set_opt(&mut form, "last_name", last_name.as_deref());
            set_opt(&mut form, "phone", phone.as_deref());
            console.save_guest(Some(id), &form).await
        }
        GuestAction::Delete { id } => console.delete_guest(UserId::new(id)).await,
        GuestAction::Bookings { id } => {
            let rendered = console.render_guest_bookings(UserId::new(id))?;
            print_notices(&mut console);
            println!("{rendered}");
            return Ok(());
        }
    };

    print_notices(&mut console);
    result?;
    // A self-delete terminates the session; there is nothing left to render.
    if console.is_authenticated() {
        println!("{}", console.show_tab(Tab::Guests));
    }
    Ok(())
}

fn edit_form(console: &Console, id: UserId) -> Result<Form, AppError> {
    let entity = console
        .cache()
        .user(id)
        .ok_or_else(|| AppError::NotFound(format!("пользователь #{id}")))?;
    let value = serde_json::to_value(entity).map_err(hotelier_console::api::ApiError::from)?;

    let mut form = Form::with_fields("guest-form", &GUEST_FIELDS);
    forms::set_values(&mut form, &value);
    Ok(form)
}
