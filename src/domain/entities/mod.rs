//! Core domain entities representing the parking lot data model.
//!
//! Entities are plain data structures; the decisions made about them live in
//! [`crate::application::services`].
//!
//! # Entity Types
//!
//! - [`ParkingType`] - Vehicle category (`CAR` or `BIKE`)
//! - [`ParkingSpot`] - A physical spot with a fixed category
//! - [`Ticket`] - One vehicle stay, open until the vehicle exits
//!
//! `NewTicket` is the creation input for a ticket. `EntryReceipt` and
//! `ExitReceipt` are what a successful entry or exit hands back to the caller.

pub mod parking_spot;
pub mod parking_type;
pub mod ticket;

pub use parking_spot::ParkingSpot;
pub use parking_type::ParkingType;
pub use ticket::{EntryReceipt, ExitReceipt, NewTicket, Ticket};
