// Seed data for the room collection
//
// The built-in seed is the three reference rooms. A CSV file with header
// `room_number,room_type,price,available` can replace it; `available` may be
// left empty and defaults to true.

use crate::entities::Room;
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::debug;

/// Rooms 101 Single $100, 102 Double $150, 103 Suite $250, all available
pub fn default_rooms() -> Vec<Room> {
    vec![
        Room::new(101, "Single", 100.0),
        Room::new(102, "Double", 150.0),
        Room::new(103, "Suite", 250.0),
    ]
}

/// Load rooms from a CSV file, keeping file order
pub fn load_rooms_csv(path: &Path) -> Result<Vec<Room>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open room seed file {:?}", path))?;

    let mut rooms = Vec::new();
    for (i, result) in rdr.deserialize::<SeedRow>().enumerate() {
        // +2: one for the header, one for 1-based numbering
        let line = i + 2;
        let row = result.with_context(|| format!("Invalid room on line {} of {:?}", line, path))?;
        if !row.price.is_finite() || row.price < 0.0 {
            bail!(
                "Invalid price {} for room {} on line {} of {:?}",
                row.price,
                row.room_number,
                line,
                path
            );
        }
        rooms.push(row.into());
    }

    debug!(count = rooms.len(), path = ?path, "loaded room seed file");
    Ok(rooms)
}

#[derive(Debug, serde::Deserialize)]
struct SeedRow {
    room_number: u32,
    room_type: String,
    price: f64,
    available: Option<bool>,
}

impl From<SeedRow> for Room {
    fn from(row: SeedRow) -> Self {
        Room {
            room_number: row.room_number,
            room_type: row.room_type,
            price: row.price,
            available: row.available.unwrap_or(true),
        }
    }
}
