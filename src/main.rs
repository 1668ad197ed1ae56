mod menu;

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::info;

// Use library instead of local modules
use hotel_reservation::{init_logging, registry_from_settings, SettingsArgs, VERSION};

#[derive(Debug, Parser)]
#[command(name = "hotel-reservation", version, about = "Interactive hotel reservation menu")]
struct Cli {
    #[command(flatten)]
    settings: SettingsArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = cli.settings.load()?;
    init_logging(&settings.logging.filter)?;
    info!(version = VERSION, seed = ?settings.seed.rooms_csv, "starting hotel reservation menu");

    let mut hotel = registry_from_settings(&settings)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::Menu::new(&mut hotel, stdin.lock(), stdout.lock()).run()?;

    info!(bookings = hotel.bookings().len(), "menu closed");
    Ok(())
}
