use thiserror::Error;

/// Failures reported by `HotelRegistry` operations.
///
/// Display strings are the messages shown to the guest.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelError {
    #[error("Username already exists.")]
    DuplicateUsername,

    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("Please sign in to make a reservation.")]
    NotSignedIn,

    /// Covers both an unknown room number and a room that is already booked.
    #[error("Room not available.")]
    UnitUnavailable,
}

pub type HotelResult<T> = Result<T, HotelError>;
