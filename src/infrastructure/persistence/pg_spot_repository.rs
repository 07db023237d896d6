//! PostgreSQL implementation of spot repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ParkingSpot, ParkingType};
use crate::domain::repositories::SpotRepository;
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct SpotRow {
    parking_number: i32,
    parking_type: String,
    available: bool,
}

impl TryFrom<SpotRow> for ParkingSpot {
    type Error = AppError;

    fn try_from(row: SpotRow) -> Result<Self, Self::Error> {
        Ok(ParkingSpot::new(
            row.parking_number,
            row.parking_type.parse::<ParkingType>()?,
            row.available,
        ))
    }
}

/// PostgreSQL repository for parking spots.
pub struct PgSpotRepository {
    pool: Arc<PgPool>,
}

impl PgSpotRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpotRepository for PgSpotRepository {
    async fn find_available_spot(
        &self,
        parking_type: ParkingType,
    ) -> Result<Option<i32>, AppError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT parking_number
            FROM parking
            WHERE available = TRUE AND type = $1
            ORDER BY parking_number
            LIMIT 1
            "#,
        )
        .bind(parking_type.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn update_availability(&self, id: i32, available: bool) -> Result<u64, AppError> {
        // Conditional on the current value: a second allocation of the same
        // spot affects zero rows.
        let result = sqlx::query(
            r#"
            UPDATE parking
            SET available = $1
            WHERE parking_number = $2
              AND available <> $1
            "#,
        )
        .bind(available)
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn list_spots(&self) -> Result<Vec<ParkingSpot>, AppError> {
        let rows = sqlx::query_as::<_, SpotRow>(
            r#"
            SELECT parking_number, type AS parking_type, available
            FROM parking
            ORDER BY parking_number
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(ParkingSpot::try_from).collect()
    }
}
