//! Application layer services implementing the parking lot logic.
//!
//! Services consume repository traits and expose the operations the console
//! and admin front ends call.
//!
//! # Available Services
//!
//! - [`services::fare_calculator::FareCalculator`] - Pricing of completed stays
//! - [`services::spot_allocator::SpotAllocator`] - Spot lookup and availability
//! - [`services::parking_service::ParkingService`] - Vehicle entry and exit orchestration

pub mod services;
