// Entity Models
//
// Three passive records owned by the HotelRegistry:
// - Account: registered username/password pair
// - Room: rentable unit with a single availability flag
// - Booking: immutable link between a username, a room number and two dates

pub mod account;
pub mod booking;
pub mod room;

pub use account::Account;
pub use booking::Booking;
pub use room::Room;
