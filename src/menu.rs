use anyhow::{Context, Result};
use chrono::NaiveDate;
use hotel_reservation::{HotelError, HotelRegistry};
use std::io::{BufRead, Write};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Register,
    SignIn,
    ListRooms,
    Reserve,
    MyReservations,
    SignOut,
    Exit,
}

impl Choice {
    pub const ALL: [Choice; 7] = [
        Choice::Register,
        Choice::SignIn,
        Choice::ListRooms,
        Choice::Reserve,
        Choice::MyReservations,
        Choice::SignOut,
        Choice::Exit,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::Register),
            "2" => Some(Choice::SignIn),
            "3" => Some(Choice::ListRooms),
            "4" => Some(Choice::Reserve),
            "5" => Some(Choice::MyReservations),
            "6" => Some(Choice::SignOut),
            "7" => Some(Choice::Exit),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Choice::Register => 1,
            Choice::SignIn => 2,
            Choice::ListRooms => 3,
            Choice::Reserve => 4,
            Choice::MyReservations => 5,
            Choice::SignOut => 6,
            Choice::Exit => 7,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Choice::Register => "Register",
            Choice::SignIn => "Sign in",
            Choice::ListRooms => "List available rooms",
            Choice::Reserve => "Make a reservation",
            Choice::MyReservations => "View my reservations",
            Choice::SignOut => "Sign out",
            Choice::Exit => "Exit",
        }
    }
}

/// Text menu over any line-oriented input and output.
///
/// End of input is treated like choosing Exit.
pub struct Menu<'a, R, W> {
    hotel: &'a mut HotelRegistry,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(hotel: &'a mut HotelRegistry, input: R, output: W) -> Self {
        Self {
            hotel,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => break,
            };

            let choice = match Choice::parse(&line) {
                Some(choice) => choice,
                None => {
                    writeln!(self.output, "Invalid choice.")?;
                    continue;
                }
            };

            if choice == Choice::Exit {
                writeln!(self.output, "Exiting system.")?;
                return Ok(());
            }
            if !self.handle(choice)? {
                break;
            }
        }

        writeln!(self.output)?;
        writeln!(self.output, "Exiting system.")?;
        Ok(())
    }

    /// Returns false when input ran out mid-prompt
    fn handle(&mut self, choice: Choice) -> Result<bool> {
        match choice {
            Choice::Register => {
                let (username, password) = match self.credentials()? {
                    Some(creds) => creds,
                    None => return Ok(false),
                };
                match self.hotel.register(&username, &password) {
                    Ok(()) => writeln!(self.output, "User registered successfully.")?,
                    Err(e) => writeln!(self.output, "{}", e)?,
                }
            }
            Choice::SignIn => {
                let (username, password) = match self.credentials()? {
                    Some(creds) => creds,
                    None => return Ok(false),
                };
                match self.hotel.sign_in(&username, &password) {
                    Ok(()) => writeln!(self.output, "Welcome, {}", username)?,
                    Err(e) => writeln!(self.output, "{}", e)?,
                }
            }
            Choice::ListRooms => {
                for room in self.hotel.list_available() {
                    writeln!(self.output, "{}", room)?;
                }
            }
            Choice::Reserve => return self.reserve(),
            Choice::MyReservations => match self.hotel.my_reservations() {
                Ok(bookings) => {
                    let mut any = false;
                    for booking in bookings {
                        writeln!(self.output, "{}", booking)?;
                        any = true;
                    }
                    if !any {
                        writeln!(self.output, "No reservations found.")?;
                    }
                }
                Err(HotelError::NotSignedIn) => {
                    writeln!(self.output, "Please sign in to view your reservations.")?
                }
                Err(e) => writeln!(self.output, "{}", e)?,
            },
            Choice::SignOut => {
                self.hotel.sign_out();
                writeln!(self.output, "You have been signed out.")?;
            }
            Choice::Exit => {}
        }
        Ok(true)
    }

    fn reserve(&mut self) -> Result<bool> {
        if !self.hotel.is_signed_in() {
            writeln!(self.output, "Please sign in first.")?;
            return Ok(true);
        }

        let raw_room = match self.prompt("Enter room number: ")? {
            Some(s) => s,
            None => return Ok(false),
        };
        let room_number: u32 = match raw_room.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(self.output, "Invalid room number.")?;
                return Ok(true);
            }
        };

        let check_in = match self.prompt_date("Enter check-in date (yyyy-mm-dd): ")? {
            Some(Some(date)) => date,
            Some(None) => return Ok(true),
            None => return Ok(false),
        };
        let check_out = match self.prompt_date("Enter check-out date (yyyy-mm-dd): ")? {
            Some(Some(date)) => date,
            Some(None) => return Ok(true),
            None => return Ok(false),
        };

        match self.hotel.reserve(room_number, check_in, check_out) {
            Ok(booking) => writeln!(self.output, "Reservation made successfully: {}", booking)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(true)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Hotel Reservation System")?;
        for choice in Choice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.title())?;
        }
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn credentials(&mut self) -> Result<Option<(String, String)>> {
        let username = match self.prompt("Enter username: ")? {
            Some(s) => s,
            None => return Ok(None),
        };
        let password = match self.prompt("Enter password: ")? {
            Some(s) => s,
            None => return Ok(None),
        };
        Ok(Some((username, password)))
    }

    /// Outer None: input ended. Inner None: the date did not parse.
    fn prompt_date(&mut self, label: &str) -> Result<Option<Option<NaiveDate>>> {
        let raw = match self.prompt(label)? {
            Some(s) => s,
            None => return Ok(None),
        };
        match parse_date(&raw) {
            Some(date) => Ok(Some(Some(date))),
            None => {
                writeln!(self.output, "Invalid date: {}", raw.trim())?;
                Ok(Some(None))
            }
        }
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}
