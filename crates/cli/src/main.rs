//! Hotelier CLI - command-line front end for the booking console.
//!
//! # Usage
//!
//! ```bash
//! # Log in (persists the session for later commands)
//! hotelier login -e admin@hotels.com -p secret
//!
//! # Render a tab
//! hotelier show hotels
//! hotelier show bookings
//!
//! # Manage inventory (admin)
//! hotelier hotel create --name "Гранд Отель" --address "ул. Ленина, 1" \
//!     --city Москва --country Россия
//! hotelier room status 12 occupied
//!
//! # Booking lifecycle
//! hotelier booking create --hotel-id 3 --room-id 12 \
//!     --check-in 2024-06-01T14:00:00 --check-out 2024-06-05T12:00:00 --guests 2
//! hotelier booking check-in 42
//! hotelier booking cancel 42
//!
//! # Search for available rooms
//! hotelier search --city Москва --guests 2
//! ```
//!
//! # Environment Variables
//!
//! - `HOTELIER_API_URL` - Backend base URL (default: `http://127.0.0.1:8000/api/v1`)
//! - `HOTELIER_SESSION_FILE` - Session file path (default: `.hotelier/session.json`)

#![cfg_attr(not(test), forbid(unsafe_code))]
// Rendered views are the program's output; they go to stdout directly,
// failure notices to stderr.
#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{BookingAction, GuestAction, HotelAction, RoomAction, SearchArgs};

#[derive(Parser)]
#[command(name = "hotelier")]
#[command(author, version, about = "Booking console for the Hotelier backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Register a new guest account
    Register {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// First name
        #[arg(short, long)]
        first_name: String,

        /// Last name
        #[arg(short, long)]
        last_name: String,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,
    },
    /// Log out and clear the persisted session
    Logout,
    /// Render a tab (hotels, rooms, bookings, guests)
    Show {
        /// Tab name
        tab: String,
    },
    /// Search available rooms
    Search(SearchArgs),
    /// Manage hotels
    Hotel {
        #[command(subcommand)]
        action: HotelAction,
    },
    /// Manage rooms
    Room {
        #[command(subcommand)]
        action: RoomAction,
    },
    /// Manage bookings
    Booking {
        #[command(subcommand)]
        action: BookingAction,
    },
    /// Manage guest accounts
    Guest {
        #[command(subcommand)]
        action: GuestAction,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Login { email, password } => commands::login(&email, &password).await?,
        Commands::Register {
            email,
            first_name,
            last_name,
            phone,
        } => commands::register(&email, &first_name, &last_name, phone.as_deref()).await?,
        Commands::Logout => commands::logout().await?,
        Commands::Show { tab } => commands::show(&tab).await?,
        Commands::Search(args) => commands::search(&args).await?,
        Commands::Hotel { action } => commands::hotel(action).await?,
        Commands::Room { action } => commands::room(action).await?,
        Commands::Booking { action } => commands::booking(action).await?,
        Commands::Guest { action } => commands::guest(action).await?,
    }
    Ok(())
}
