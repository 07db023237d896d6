//! Repository trait for parking spot data access.

use crate::domain::entities::{ParkingSpot, ParkingType};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for parking spots.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSpotRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_spot.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpotRepository: Send + Sync {
    /// Finds the lowest-numbered available spot of the given category.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(id))` if a spot is free
    /// - `Ok(None)` if every spot of that category is taken
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_available_spot(&self, parking_type: ParkingType)
    -> Result<Option<i32>, AppError>;

    /// Sets the availability flag of a spot.
    ///
    /// The write only applies when the flag actually changes, so marking an
    /// already-taken spot as taken affects zero rows. Returns the number of
    /// rows affected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn update_availability(&self, id: i32, available: bool) -> Result<u64, AppError>;

    /// Lists every spot ordered by number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCategory`] if a stored category is unknown.
    /// Returns [`AppError::Database`] on database errors.
    async fn list_spots(&self) -> Result<Vec<ParkingSpot>, AppError>;
}
