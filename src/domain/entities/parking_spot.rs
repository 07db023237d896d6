//! Parking spot entity.

use serde::Serialize;

use super::ParkingType;

/// A physical parking location.
///
/// The category is fixed at creation; only `available` changes, and only
/// through [`crate::application::services::SpotAllocator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkingSpot {
    pub id: i32,
    pub parking_type: ParkingType,
    pub available: bool,
}

impl ParkingSpot {
    /// Creates a new ParkingSpot instance.
    pub fn new(id: i32, parking_type: ParkingType, available: bool) -> Self {
        Self {
            id,
            parking_type,
            available,
        }
    }
}
