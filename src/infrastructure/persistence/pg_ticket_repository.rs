//! PostgreSQL implementation of ticket repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewTicket, ParkingSpot, ParkingType, Ticket};
use crate::domain::repositories::TicketRepository;
use crate::error::AppError;
use crate::utils::db_error::is_open_ticket_violation;

/// Ticket joined with its spot.
#[derive(Debug, sqlx::FromRow)]
struct TicketRow {
    id: i64,
    parking_number: i32,
    parking_type: String,
    available: bool,
    vehicle_reg_number: String,
    price: f64,
    in_time: DateTime<Utc>,
    out_time: Option<DateTime<Utc>>,
}

impl TryFrom<TicketRow> for Ticket {
    type Error = AppError;

    fn try_from(row: TicketRow) -> Result<Self, Self::Error> {
        let spot = ParkingSpot::new(
            row.parking_number,
            row.parking_type.parse::<ParkingType>()?,
            row.available,
        );

        Ok(Ticket::new(
            row.id,
            spot,
            row.vehicle_reg_number,
            row.price,
            row.in_time,
            row.out_time,
        ))
    }
}

/// PostgreSQL repository for tickets.
///
/// One open ticket per registration is enforced by a partial unique index.
pub struct PgTicketRepository {
    pool: Arc<PgPool>,
}

impl PgTicketRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for PgTicketRepository {
    async fn get_open_ticket(&self, vehicle_reg_number: &str) -> Result<Option<Ticket>, AppError> {
        let row = sqlx::query_as::<_, TicketRow>(
            r#"
            SELECT t.id, t.parking_number, p.type AS parking_type, p.available,
                   t.vehicle_reg_number, t.price, t.in_time, t.out_time
            FROM ticket t
            JOIN parking p ON p.parking_number = t.parking_number
            WHERE t.vehicle_reg_number = $1 AND t.out_time IS NULL
            ORDER BY t.in_time DESC
            LIMIT 1
            "#,
        )
        .bind(vehicle_reg_number)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Ticket::try_from).transpose()
    }

    async fn count_completed_tickets(&self, vehicle_reg_number: &str) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM ticket WHERE vehicle_reg_number = $1 AND out_time IS NOT NULL",
        )
        .bind(vehicle_reg_number)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn save_ticket(&self, new_ticket: NewTicket) -> Result<Ticket, AppError> {
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO ticket (parking_number, vehicle_reg_number, price, in_time, out_time)
            VALUES ($1, $2, 0, $3, NULL)
            RETURNING id
            "#,
        )
        .bind(new_ticket.parking_spot.id)
        .bind(&new_ticket.vehicle_reg_number)
        .bind(new_ticket.in_time)
        .fetch_one(self.pool.as_ref())
        .await;

        let id = match result {
            Ok(id) => id,
            Err(e) if is_open_ticket_violation(&e) => {
                return Err(AppError::conflict(
                    "Vehicle already has an open ticket",
                    json!({ "vehicle_reg_number": new_ticket.vehicle_reg_number }),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Ticket::new(
            id,
            new_ticket.parking_spot,
            new_ticket.vehicle_reg_number,
            0.0,
            new_ticket.in_time,
            None,
        ))
    }

    async fn update_ticket(&self, ticket: &Ticket) -> Result<bool, AppError> {
        let Some(out_time) = ticket.out_time else {
            return Err(AppError::bad_request(
                "Cannot close a ticket without an out time",
                json!({ "ticket_id": ticket.id }),
            ));
        };

        let result = sqlx::query(
            r#"
            UPDATE ticket
            SET price = $1, out_time = $2
            WHERE id = $3 AND out_time IS NULL
            "#,
        )
        .bind(ticket.price)
        .bind(out_time)
        .bind(ticket.id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn list_tickets_for(&self, vehicle_reg_number: &str) -> Result<Vec<Ticket>, AppError> {
        let rows = sqlx::query_as::<_, TicketRow>(
            r#"
            SELECT t.id, t.parking_number, p.type AS parking_type, p.available,
                   t.vehicle_reg_number, t.price, t.in_time, t.out_time
            FROM ticket t
            JOIN parking p ON p.parking_number = t.parking_number
            WHERE t.vehicle_reg_number = $1
            ORDER BY t.in_time DESC, t.id DESC
            "#,
        )
        .bind(vehicle_reg_number)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Ticket::try_from).collect()
    }
}
