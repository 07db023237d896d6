#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use parking_system::application::services::{FareCalculator, FareRates, ParkingService};
use parking_system::infrastructure::persistence::{PgSpotRepository, PgTicketRepository};
use sqlx::PgPool;
use std::sync::Arc;

/// Spot numbers seeded by the initial migration.
pub const FIRST_CAR_SPOT: i32 = 1;
pub const FIRST_BIKE_SPOT: i32 = 4;

pub async fn is_spot_available(pool: &PgPool, parking_number: i32) -> bool {
    sqlx::query_scalar("SELECT available FROM parking WHERE parking_number = $1")
        .bind(parking_number)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn set_spot_available(pool: &PgPool, parking_number: i32, available: bool) {
    sqlx::query("UPDATE parking SET available = $1 WHERE parking_number = $2")
        .bind(available)
        .bind(parking_number)
        .execute(pool)
        .await
        .unwrap();
}

/// Marks every spot of a category as taken.
pub async fn fill_spots(pool: &PgPool, parking_type: &str) {
    sqlx::query("UPDATE parking SET available = FALSE WHERE type = $1")
        .bind(parking_type)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_closed_ticket(
    pool: &PgPool,
    parking_number: i32,
    reg_number: &str,
    price: f64,
    in_time: DateTime<Utc>,
    out_time: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO ticket (parking_number, vehicle_reg_number, price, in_time, out_time)
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(parking_number)
    .bind(reg_number)
    .bind(price)
    .bind(in_time)
    .bind(out_time)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Opens a ticket that started `minutes_ago` and takes its spot.
pub async fn create_open_ticket(
    pool: &PgPool,
    parking_number: i32,
    reg_number: &str,
    minutes_ago: i64,
) -> i64 {
    set_spot_available(pool, parking_number, false).await;

    sqlx::query_scalar(
        "INSERT INTO ticket (parking_number, vehicle_reg_number, in_time)
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(parking_number)
    .bind(reg_number)
    .bind(Utc::now() - Duration::minutes(minutes_ago))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_tickets(pool: &PgPool, reg_number: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM ticket WHERE vehicle_reg_number = $1")
        .bind(reg_number)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_parking_service(pool: PgPool) -> ParkingService<PgSpotRepository, PgTicketRepository> {
    let pool = Arc::new(pool);

    ParkingService::new(
        Arc::new(PgSpotRepository::new(pool.clone())),
        Arc::new(PgTicketRepository::new(pool)),
        FareCalculator::new(FareRates::default()),
    )
}
