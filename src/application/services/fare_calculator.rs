//! Fare calculation for completed stays.

use chrono::TimeDelta;
use serde_json::json;

use crate::domain::entities::{ParkingType, Ticket};
use crate::error::AppError;

/// Stays up to and including this many minutes are free.
pub const FREE_PARKING_MINUTES: i64 = 30;

/// Price multiplier applied to recurring users (5% off).
pub const RECURRING_USER_DISCOUNT: f64 = 0.95;

const MILLIS_PER_HOUR: f64 = 60.0 * 60.0 * 1000.0;

/// Hourly rates per vehicle category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareRates {
    pub car_per_hour: f64,
    pub bike_per_hour: f64,
}

impl FareRates {
    pub fn rate_for(&self, parking_type: ParkingType) -> f64 {
        match parking_type {
            ParkingType::Car => self.car_per_hour,
            ParkingType::Bike => self.bike_per_hour,
        }
    }
}

impl Default for FareRates {
    fn default() -> Self {
        Self {
            car_per_hour: 1.5,
            bike_per_hour: 1.0,
        }
    }
}

/// Prices a closed ticket.
///
/// Pure apart from writing `ticket.price`.
#[derive(Debug, Clone, Default)]
pub struct FareCalculator {
    rates: FareRates,
}

impl FareCalculator {
    /// Creates a calculator using the given hourly rates.
    pub fn new(rates: FareRates) -> Self {
        Self { rates }
    }

    /// Computes the fare without the recurring-user discount.
    ///
    /// # Errors
    ///
    /// See [`Self::calculate_fare_with_discount`].
    pub fn calculate_fare(&self, ticket: &mut Ticket) -> Result<(), AppError> {
        self.calculate_fare_with_discount(ticket, false)
    }

    /// Computes the fare of a closed ticket and stores it in `ticket.price`.
    ///
    /// # Pricing
    ///
    /// 1. Stays of [`FREE_PARKING_MINUTES`] or less cost `0.0`, discount or not
    /// 2. Otherwise `hours * rate`, with fractional hours
    /// 3. With `discount`, the result is multiplied by [`RECURRING_USER_DISCOUNT`]
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the exit time is missing or earlier
    /// than the entry time. The ticket is left untouched.
    pub fn calculate_fare_with_discount(
        &self,
        ticket: &mut Ticket,
        discount: bool,
    ) -> Result<(), AppError> {
        let Some(duration) = ticket.duration() else {
            return Err(AppError::bad_request(
                "Out time provided is incorrect: missing",
                json!({ "ticket_id": ticket.id }),
            ));
        };

        if duration < TimeDelta::zero() {
            return Err(AppError::bad_request(
                "Out time provided is incorrect: earlier than in time",
                json!({
                    "ticket_id": ticket.id,
                    "in_time": ticket.in_time.to_rfc3339(),
                    "out_time": ticket.out_time.map(|t| t.to_rfc3339()),
                }),
            ));
        }

        if duration <= TimeDelta::minutes(FREE_PARKING_MINUTES) {
            ticket.price = 0.0;
            return Ok(());
        }

        let hours = duration.num_milliseconds() as f64 / MILLIS_PER_HOUR;
        let mut price = hours * self.rates.rate_for(ticket.parking_spot.parking_type);

        if discount {
            price *= RECURRING_USER_DISCOUNT;
        }

        ticket.price = price;
        Ok(())
    }
}
