//! Login, registration and logout.

use hotelier_console::AppError;
use hotelier_console::forms::Form;

use super::{open_console, print_notices};

/// Log in, persist the session, and render the initial view.
pub async fn login(email: &str, password: &str) -> Result<(), AppError> {
    let mut console = open_console().await?;
    let result = console.login(email, password).await;
    print_notices(&mut console);
    result?;
    println!("{}", console.render());
    Ok(())
}

/// Register a new guest account and enter the authenticated view.
pub async fn register(
    email: &str,
    first_name: &str,
    last_name: &str,
    phone: Option<&str>,
) -> Result<(), AppError> {
    let mut form = Form::with_fields(
        "register-form",
        &["email", "first_name", "last_name", "phone"],
    );
    form.set("email", email);
    form.set("first_name", first_name);
    form.set("last_name", last_name);
    if let Some(phone) = phone {
        form.set("phone", phone);
    }

    let mut console = open_console().await?;
    let result = console.register(&form).await;
    print_notices(&mut console);
    result?;
    println!("{}", console.render());
    Ok(())
}

/// Log out and clear the persisted session.
pub async fn logout() -> Result<(), AppError> {
    let mut console = open_console().await?;
    let result = console.logout().await;
    print_notices(&mut console);
    result
}
