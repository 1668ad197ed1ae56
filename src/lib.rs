// Hotel Reservation System - Core Library
// Exposes the registry and its records for the CLI menu, the API server and tests

pub mod cli;
pub mod entities;
pub mod error;
pub mod hotel;
pub mod logging;
pub mod seed;
pub mod session;
pub mod settings;

// Re-export commonly used types
pub use cli::SettingsArgs;
pub use entities::{Account, Booking, Room};
pub use error::{HotelError, HotelResult};
pub use hotel::HotelRegistry;
pub use logging::init_logging;
pub use seed::{default_rooms, load_rooms_csv};
pub use session::Session;
pub use settings::Settings;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build a registry from the configured seed source
pub fn registry_from_settings(settings: &Settings) -> anyhow::Result<HotelRegistry> {
    let rooms = match &settings.seed.rooms_csv {
        Some(path) => load_rooms_csv(path)?,
        None => default_rooms(),
    };
    Ok(HotelRegistry::with_rooms(rooms))
}
