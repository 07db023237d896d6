//! Console application initialization and runtime setup.
//!
//! Wires the database pool, repositories and services, then hands control to
//! the interactive shell.

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{FareCalculator, ParkingService};
use crate::cli::{DialoguerInput, LineInputReader, ParkingShell};
use crate::config::Config;
use crate::infrastructure::database;
use crate::infrastructure::persistence::{PgSpotRepository, PgTicketRepository};

/// Runs the parking console with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Spot and ticket repositories
/// - Parking service and console shell
///
/// Prompts through `dialoguer` on a terminal, otherwise reads answers line by
/// line from stdin.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Reading from stdin fails
pub async fn run(config: Config) -> Result<()> {
    let pool = Arc::new(database::connect_and_migrate(&config).await?);

    let spot_repository = Arc::new(PgSpotRepository::new(pool.clone()));
    let ticket_repository = Arc::new(PgTicketRepository::new(pool));
    let service = ParkingService::new(
        spot_repository,
        ticket_repository,
        FareCalculator::new(config.fare_rates()),
    );

    if std::io::stdin().is_terminal() {
        ParkingShell::new(service, DialoguerInput::new()).run().await
    } else {
        let input = LineInputReader::new(std::io::stdin().lock());
        ParkingShell::new(service, input).run().await
    }
}
