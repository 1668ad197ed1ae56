// 📅 Booking Entity - an immutable reservation record
//
// A booking links a username to a room by room number (a lookup key, never a
// reference into the room collection) plus a check-in/check-out pair.
// Dates are stored as given: check-out before check-in is accepted.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

// ============================================================================
// BOOKING ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    /// Stable booking reference
    pub id: Uuid,

    /// Username of the account that was signed in when the booking was made
    pub customer: String,

    /// Room number of the reserved room
    pub room_number: u32,

    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Booking {
    pub fn new(
        customer: impl Into<String>,
        room_number: u32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Booking {
            id: Uuid::new_v4(),
            customer: customer.into(),
            room_number,
            check_in,
            check_out,
        }
    }

    pub fn is_for(&self, username: &str) -> bool {
        self.customer == username
    }

    /// Signed number of nights. Negative when the dates are reversed.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation for {}: Room {} from {} to {}",
            self.customer, self.room_number, self.check_in, self.check_out
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
