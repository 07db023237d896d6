//! Ticket entity recording one vehicle stay.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use super::ParkingSpot;

/// A stay in the lot, from entry to exit.
///
/// A ticket is open while `out_time` is `None`. Closing it sets `out_time`
/// and `price` in place; tickets are never deleted.
#[derive(Debug, Clone, Serialize)]
pub struct Ticket {
    pub id: i64,
    pub parking_spot: ParkingSpot,
    pub vehicle_reg_number: String,
    pub price: f64,
    pub in_time: DateTime<Utc>,
    pub out_time: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Creates a new Ticket instance.
    pub fn new(
        id: i64,
        parking_spot: ParkingSpot,
        vehicle_reg_number: String,
        price: f64,
        in_time: DateTime<Utc>,
        out_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            parking_spot,
            vehicle_reg_number,
            price,
            in_time,
            out_time,
        }
    }

    /// Returns true while the vehicle is still parked.
    pub fn is_open(&self) -> bool {
        self.out_time.is_none()
    }

    /// Length of the stay, or `None` for an open ticket.
    pub fn duration(&self) -> Option<TimeDelta> {
        self.out_time.map(|out| out - self.in_time)
    }
}

/// Input data for opening a ticket.
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub parking_spot: ParkingSpot,
    pub vehicle_reg_number: String,
    pub in_time: DateTime<Utc>,
}

/// Result of a successful vehicle entry.
///
/// `recurring_user` is computed when the ticket opens. It is informational
/// only; the discount is decided again when the vehicle exits.
#[derive(Debug, Clone)]
pub struct EntryReceipt {
    pub ticket: Ticket,
    pub recurring_user: bool,
}

/// Result of a vehicle exit.
///
/// The ticket is closed and priced in the store. `spot_released` is false
/// when the spot could not be marked free afterwards and still shows as taken.
#[derive(Debug, Clone)]
pub struct ExitReceipt {
    pub ticket: Ticket,
    pub spot_released: bool,
}
