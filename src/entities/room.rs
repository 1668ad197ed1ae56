// 🛏️ Room Entity - a rentable unit
//
// The availability flag is the single source of truth for bookability.
// It starts out as supplied by the seed data and is only ever flipped to
// false by a successful reservation (there is no cancellation).

use serde::Serialize;
use std::fmt;

// ============================================================================
// ROOM ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    /// Room number, used as the lookup key by bookings
    pub room_number: u32,

    /// Free-form type label ("Single", "Double", "Suite", ...)
    pub room_type: String,

    /// Nightly price
    pub price: f64,

    /// Whether the room can still be reserved
    pub available: bool,
}

impl Room {
    /// Create a new room, initially available
    pub fn new(room_number: u32, room_type: impl Into<String>, price: f64) -> Self {
        Room {
            room_number,
            room_type: room_type.into(),
            price,
            available: true,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub(crate) fn mark_reserved(&mut self) {
        self.available = false;
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room Number: {}, Type: {}, Available: {}, Price: ${:?}",
            self.room_number, self.room_type, self.available, self.price
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
