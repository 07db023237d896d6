//! Business logic services for the application layer.

pub mod fare_calculator;
pub mod parking_service;
pub mod spot_allocator;

pub use fare_calculator::{FareCalculator, FareRates};
pub use parking_service::ParkingService;
pub use spot_allocator::SpotAllocator;
