// 🏨 Hotel Registry - the coordinator
//
// Owns the rooms, the bookings, the username → account map and the current
// session. Every mutation goes through here. Lookups are linear scans in
// insertion order; duplicate room numbers are accepted and the first match
// wins.

use crate::entities::{Account, Booking, Room};
use crate::error::{HotelError, HotelResult};
use crate::session::Session;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, info, warn};

// ============================================================================
// HOTEL REGISTRY
// ============================================================================

#[derive(Debug, Default)]
pub struct HotelRegistry {
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
    accounts: HashMap<String, Account>,
    session: Session,
}

impl HotelRegistry {
    /// Create an empty registry with no rooms
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the given rooms, in order
    pub fn with_rooms(rooms: impl IntoIterator<Item = Room>) -> Self {
        let mut registry = Self::new();
        for room in rooms {
            registry.add_room(room);
        }
        registry
    }

    pub fn add_room(&mut self, room: Room) {
        debug!(room_number = room.room_number, room_type = %room.room_type, "adding room");
        self.rooms.push(room);
    }

    // ========================================================================
    // ACCOUNTS & SESSION
    // ========================================================================

    pub fn register(&mut self, username: &str, password: &str) -> HotelResult<()> {
        if self.accounts.contains_key(username) {
            warn!(username, "registration rejected: username taken");
            return Err(HotelError::DuplicateUsername);
        }

        self.accounts
            .insert(username.to_string(), Account::new(username, password));
        info!(username, "account registered");
        Ok(())
    }

    /// Authenticate and make `username` the current session.
    ///
    /// A failed attempt leaves any existing session in place.
    pub fn sign_in(&mut self, username: &str, password: &str) -> HotelResult<()> {
        match self.accounts.get(username) {
            Some(account) if account.password_matches(password) => {
                self.session = Session::Authenticated(account.username().to_string());
                info!(username, "signed in");
                Ok(())
            }
            _ => {
                warn!(username, "sign-in rejected");
                Err(HotelError::InvalidCredentials)
            }
        }
    }

    pub fn sign_out(&mut self) {
        if let Some(username) = self.session.username() {
            info!(username, "signed out");
        }
        self.session = Session::Anonymous;
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_user(&self) -> Option<&str> {
        self.session.username()
    }

    // ========================================================================
    // ROOMS & RESERVATIONS
    // ========================================================================

    /// Available rooms in insertion order. Call again to restart.
    pub fn list_available(&self) -> impl Iterator<Item = &Room> + Clone + '_ {
        self.rooms.iter().filter(|room| room.is_available())
    }

    /// All rooms in insertion order, booked or not
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// First room with the given number
    pub fn find_room(&self, room_number: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.room_number == room_number)
    }

    /// Reserve a room for the signed-in guest.
    ///
    /// The booking is appended and the room flipped to unavailable together;
    /// on any error neither happens. Dates are not validated.
    pub fn reserve(
        &mut self,
        room_number: u32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> HotelResult<Booking> {
        let username = match self.session.username() {
            Some(username) => username.to_string(),
            None => {
                warn!(room_number, "reservation rejected: not signed in");
                return Err(HotelError::NotSignedIn);
            }
        };

        let room = match self
            .rooms
            .iter_mut()
            .find(|room| room.room_number == room_number)
        {
            Some(room) if room.is_available() => room,
            _ => {
                warn!(room_number, username = %username, "reservation rejected: room not available");
                return Err(HotelError::UnitUnavailable);
            }
        };

        let booking = Booking::new(username, room_number, check_in, check_out);
        room.mark_reserved();
        self.bookings.push(booking.clone());

        info!(
            booking_id = %booking.id,
            username = %booking.customer,
            room_number,
            %check_in,
            %check_out,
            "reservation made"
        );
        Ok(booking)
    }

    /// Bookings made by the signed-in guest, in insertion order
    pub fn my_reservations(&self) -> HotelResult<impl Iterator<Item = &Booking> + Clone + '_> {
        let username = self.session.username().ok_or(HotelError::NotSignedIn)?;
        Ok(self
            .bookings
            .iter()
            .filter(move |booking| booking.is_for(username)))
    }

    /// Every booking made so far, in insertion order
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_rooms;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn seeded() -> HotelRegistry {
        HotelRegistry::with_rooms(default_rooms())
    }

    fn available_numbers(registry: &HotelRegistry) -> Vec<u32> {
        registry.list_available().map(|r| r.room_number).collect()
    }

    #[test]
    fn test_new_registry_is_empty_and_anonymous() {
        let registry = HotelRegistry::new();

        assert!(registry.rooms().is_empty());
        assert!(registry.bookings().is_empty());
        assert_eq!(registry.account_count(), 0);
        assert!(!registry.is_signed_in());
        assert_eq!(registry.session(), &Session::Anonymous);
    }

    #[test]
    fn test_register_duplicate_username() {
        let mut registry = seeded();

        assert!(registry.register("alice", "pw").is_ok());
        assert_eq!(
            registry.register("alice", "other"),
            Err(HotelError::DuplicateUsername)
        );
        assert_eq!(registry.account_count(), 1);

        // Original password still works, the second one never took effect
        assert!(registry.sign_in("alice", "other").is_err());
        assert!(registry.sign_in("alice", "pw").is_ok());
    }

    #[test]
    fn test_sign_in_unknown_user() {
        let mut registry = seeded();

        assert_eq!(
            registry.sign_in("ghost", "pw"),
            Err(HotelError::InvalidCredentials)
        );
        assert!(!registry.is_signed_in());
    }

    #[test]
    fn test_sign_in_wrong_password() {
        let mut registry = seeded();
        registry.register("alice", "pw").unwrap();

        assert_eq!(
            registry.sign_in("alice", "nope"),
            Err(HotelError::InvalidCredentials)
        );
        assert!(!registry.is_signed_in());
    }

    #[test]
    fn test_sign_in_then_sign_out() {
        let mut registry = seeded();
        registry.register("alice", "pw").unwrap();

        registry.sign_in("alice", "pw").unwrap();
        assert!(registry.is_signed_in());
        assert_eq!(registry.current_user(), Some("alice"));

        registry.sign_out();
        assert!(!registry.is_signed_in());
        assert_eq!(registry.current_user(), None);
    }

    #[test]
    fn test_sign_out_when_anonymous() {
        let mut registry = seeded();
        registry.sign_out();

        assert!(!registry.is_signed_in());
    }

    #[test]
    fn test_last_sign_in_wins() {
        let mut registry = seeded();
        registry.register("alice", "pw").unwrap();
        registry.register("bob", "pw2").unwrap();

        registry.sign_in("alice", "pw").unwrap();
        registry.sign_in("bob", "pw2").unwrap();

        assert_eq!(registry.current_user(), Some("bob"));
    }

    #[test]
    fn test_failed_sign_in_keeps_existing_session() {
        let mut registry = seeded();
        registry.register("alice", "pw").unwrap();
        registry.register("bob", "pw2").unwrap();
        registry.sign_in("alice", "pw").unwrap();

        assert!(registry.sign_in("bob", "wrong").is_err());
        assert!(registry.sign_in("ghost", "pw").is_err());

        assert_eq!(registry.current_user(), Some("alice"));
    }

    #[test]
    fn test_reserve_requires_session() {
        let mut registry = seeded();

        let result = registry.reserve(101, date("2024-01-01"), date("2024-01-02"));

        assert_eq!(result, Err(HotelError::NotSignedIn));
        assert!(registry.bookings().is_empty());
        assert_eq!(available_numbers(&registry), vec![101, 102, 103]);
    }

    #[test]
    fn test_reserve_requires_session_even_for_unknown_room() {
        let mut registry = seeded();

        let result = registry.reserve(999, date("2024-01-01"), date("2024-01-02"));

        assert_eq!(result, Err(HotelError::NotSignedIn));
    }

    #[test]
    fn test_reserve_flips_availability() {
        let mut registry = seeded();
        registry.register("alice", "pw").unwrap();
        registry.sign_in("alice", "pw").unwrap();

        let booking = registry
            .reserve(101, date("2024-01-01"), date("2024-01-02"))
            .unwrap();

        assert_eq!(booking.customer, "alice");
        assert_eq!(booking.room_number, 101);
        assert!(!registry.find_room(101).unwrap().is_available());
        assert_eq!(available_numbers(&registry), vec![102, 103]);
        assert_eq!(registry.bookings().len(), 1);
    }

    #[test]
    fn test_reserve_same_room_twice_fails_for_any_user() {
        let mut registry = seeded();
        registry.register("alice", "pw").unwrap();
        registry.register("bob", "pw2").unwrap();
        registry.sign_in("alice", "pw").unwrap();
        registry
            .reserve(101, date("2024-01-01"), date("2024-01-02"))
            .unwrap();

        assert_eq!(
            registry.reserve(101, date("2024-02-01"), date("2024-02-02")),
            Err(HotelError::UnitUnavailable)
        );

        registry.sign_in("bob", "pw2").unwrap();
        assert_eq!(
            registry.reserve(101, date("2024-03-01"), date("2024-03-02")),
            Err(HotelError::UnitUnavailable)
        );
        assert_eq!(registry.bookings().len(), 1);
    }

    #[test]
    fn test_reserve_unknown_room() {
        let mut registry = seeded();
        registry.register("alice", "pw").unwrap();
        registry.sign_in("alice", "pw").unwrap();

        assert_eq!(
            registry.reserve(999, date("2024-01-01"), date("2024-01-02")),
            Err(HotelError::UnitUnavailable)
        );
        assert!(registry.bookings().is_empty());
    }

    #[test]
    fn test_reserve_accepts_reversed_dates() {
        let mut registry = seeded();
        registry.register("alice", "pw").unwrap();
        registry.sign_in("alice", "pw").unwrap();

        let booking = registry
            .reserve(103, date("2024-01-10"), date("2024-01-01"))
            .unwrap();

        assert_eq!(booking.check_in, date("2024-01-10"));
        assert_eq!(booking.check_out, date("2024-01-01"));
    }

    #[test]
    fn test_duplicate_room_numbers_first_match_wins() {
        let mut registry = HotelRegistry::new();
        registry.add_room(Room::new(201, "Single", 80.0));
        registry.add_room(Room::new(201, "Suite", 300.0));
        registry.register("alice", "pw").unwrap();
        registry.sign_in("alice", "pw").unwrap();

        assert_eq!(registry.find_room(201).unwrap().room_type, "Single");

        registry
            .reserve(201, date("2024-01-01"), date("2024-01-02"))
            .unwrap();

        // First 201 is taken; the lookup still stops there
        assert_eq!(
            registry.reserve(201, date("2024-01-01"), date("2024-01-02")),
            Err(HotelError::UnitUnavailable)
        );
        let left: Vec<&str> = registry
            .list_available()
            .map(|r| r.room_type.as_str())
            .collect();
        assert_eq!(left, vec!["Suite"]);
    }

    #[test]
    fn test_my_reservations_requires_session() {
        let registry = seeded();

        assert!(matches!(
            registry.my_reservations(),
            Err(HotelError::NotSignedIn)
        ));
    }

    #[test]
    fn test_my_reservations_isolated_per_user() {
        let mut registry = seeded();
        registry.register("alice", "pw").unwrap();
        registry.register("bob", "pw2").unwrap();

        registry.sign_in("alice", "pw").unwrap();
        registry
            .reserve(101, date("2024-01-01"), date("2024-01-02"))
            .unwrap();

        registry.sign_in("bob", "pw2").unwrap();
        registry
            .reserve(102, date("2024-01-01"), date("2024-01-02"))
            .unwrap();

        let bob: Vec<u32> = registry
            .my_reservations()
            .unwrap()
            .map(|b| b.room_number)
            .collect();
        assert_eq!(bob, vec![102]);

        registry.sign_in("alice", "pw").unwrap();
        let alice: Vec<&Booking> = registry.my_reservations().unwrap().collect();
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].room_number, 101);
        assert!(alice.iter().all(|b| b.customer == "alice"));
    }

    #[test]
    fn test_listings_are_restartable() {
        let mut registry = seeded();
        registry.register("alice", "pw").unwrap();
        registry.sign_in("alice", "pw").unwrap();
        registry
            .reserve(101, date("2024-01-01"), date("2024-01-02"))
            .unwrap();

        let rooms = registry.list_available();
        assert_eq!(rooms.clone().count(), 2);
        assert_eq!(rooms.count(), 2);

        let mine = registry.my_reservations().unwrap();
        assert_eq!(mine.clone().count(), 1);
        assert_eq!(mine.count(), 1);
    }

    #[test]
    fn test_independent_registries() {
        let mut first = seeded();
        let second = seeded();
        first.register("alice", "pw").unwrap();
        first.sign_in("alice", "pw").unwrap();

        assert!(first.is_signed_in());
        assert!(!second.is_signed_in());
        assert_eq!(second.account_count(), 0);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut registry = seeded();

        registry.register("alice", "pw").unwrap();
        registry.sign_in("alice", "pw").unwrap();

        let booking = registry
            .reserve(102, date("2024-01-01"), date("2024-01-03"))
            .unwrap();
        assert_eq!(booking.customer, "alice");
        assert_eq!(booking.room_number, 102);
        assert_eq!(booking.check_in, date("2024-01-01"));
        assert_eq!(booking.check_out, date("2024-01-03"));

        assert_eq!(available_numbers(&registry), vec![101, 103]);

        let mine: Vec<&Booking> = registry.my_reservations().unwrap().collect();
        assert_eq!(mine, vec![&booking]);
    }
}
