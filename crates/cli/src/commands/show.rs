//! Tab rendering.

use hotelier_console::AppError;
use hotelier_console::views::Tab;

use super::{open_console, print_notices};

/// Load all collections and render the requested tab.
pub async fn show(tab: &str) -> Result<(), AppError> {
    let tab: Tab = tab.parse().map_err(AppError::InvalidInput)?;

    let mut console = open_console().await?;
    let result = console.load_all().await;
    print_notices(&mut console);
    result?;

    println!("{}", console.show_tab(tab));
    Ok(())
}
