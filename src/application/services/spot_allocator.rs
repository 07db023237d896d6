//! Spot lookup and availability toggling.

use std::sync::Arc;

use crate::domain::entities::{ParkingSpot, ParkingType};
use crate::domain::repositories::SpotRepository;
use crate::error::AppError;

/// Chooses free spots and flips their availability.
///
/// The availability write is a conditional update in the store: it only
/// applies when the flag actually changes, so two callers racing for the same
/// spot cannot both succeed. The loser sees `Ok(false)`.
pub struct SpotAllocator<S: SpotRepository> {
    repository: Arc<S>,
}

impl<S: SpotRepository> SpotAllocator<S> {
    /// Creates a new spot allocator.
    pub fn new(repository: Arc<S>) -> Self {
        Self { repository }
    }

    /// Finds the next free spot of a category.
    ///
    /// `Ok(None)` means the category is full; that is an ordinary outcome.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] when the store query fails.
    pub async fn find_available_spot(
        &self,
        parking_type: ParkingType,
    ) -> Result<Option<ParkingSpot>, AppError> {
        let spot = self
            .repository
            .find_available_spot(parking_type)
            .await?
            .filter(|id| *id > 0)
            .map(|id| ParkingSpot::new(id, parking_type, true));

        Ok(spot)
    }

    /// Marks a spot as taken. Returns `Ok(true)` iff exactly one row changed.
    pub async fn allocate(&self, spot: &ParkingSpot) -> Result<bool, AppError> {
        self.set_availability(spot, false).await
    }

    /// Marks a spot as free again. Returns `Ok(true)` iff exactly one row changed.
    pub async fn release(&self, spot: &ParkingSpot) -> Result<bool, AppError> {
        self.set_availability(spot, true).await
    }

    async fn set_availability(&self, spot: &ParkingSpot, available: bool) -> Result<bool, AppError> {
        let rows = self
            .repository
            .update_availability(spot.id, available)
            .await?;

        if rows != 1 {
            tracing::warn!(
                spot_id = spot.id,
                available,
                rows,
                "spot availability update did not apply"
            );
        }

        Ok(rows == 1)
    }
}
