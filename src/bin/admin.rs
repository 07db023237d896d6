//! CLI administration tool for the parking system.
//!
//! Inspects spots, ticket history and the database without going through the
//! attendant console.
//!
//! # Usage
//!
//! ```bash
//! # Show every spot and whether it is free
//! cargo run --bin admin -- spots
//!
//! # Ticket history of a vehicle
//! cargo run --bin admin -- tickets AB-123
//! cargo run --bin admin -- tickets AB-123 --json
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same as the console, see `parking_system::config`.

use parking_system::application::services::parking_service::normalize_reg_number;
use parking_system::config;
use parking_system::domain::entities::ParkingType;
use parking_system::domain::repositories::{SpotRepository, TicketRepository};
use parking_system::infrastructure::database;
use parking_system::infrastructure::persistence::{PgSpotRepository, PgTicketRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the parking system.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// List parking spots and their availability
    Spots,

    /// Show the ticket history of a vehicle
    Tickets {
        /// Vehicle registration number
        reg_number: String,

        /// Print tickets as JSON
        #[arg(long)]
        json: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Db {
            action: DbAction::Migrate,
        } => {
            database::connect_and_migrate(&config).await?;
            println!("{}", "✅ Migrations applied".green().bold());
        }
        command => {
            let pool = database::connect(&config)
                .await
                .context("Failed to connect to database")?;

            match command {
                Commands::Spots => list_spots(&pool).await?,
                Commands::Tickets { reg_number, json } => {
                    list_tickets(&pool, &reg_number, json).await?
                }
                Commands::Db { .. } => check_db(&pool).await?,
            }
        }
    }

    Ok(())
}

/// Lists every spot with its category and status.
///
/// # Output Format
///
/// ```text
/// 🅿️  Parking Spots
///
///   #    Type   Status
///   ──────────────────────
///   1    CAR    FREE
///   2    CAR    TAKEN
/// ```
async fn list_spots(pool: &PgPool) -> Result<()> {
    println!("{}", "🅿️  Parking Spots".bright_blue().bold());
    println!();

    let repo = PgSpotRepository::new(Arc::new(pool.clone()));
    let spots = repo
        .list_spots()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list spots: {}", e))?;

    if spots.is_empty() {
        println!("{}", "  No spots configured".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<6} {}",
        "#".bright_white().bold(),
        "Type".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(22).bright_black());

    for spot in &spots {
        let status = if spot.available {
            "FREE".green()
        } else {
            "TAKEN".red()
        };

        println!(
            "  {:<4} {:<6} {}",
            spot.id.to_string().bright_black(),
            spot.parking_type.as_str().cyan(),
            status
        );
    }

    println!();
    for parking_type in [ParkingType::Car, ParkingType::Bike] {
        let free = spots
            .iter()
            .filter(|s| s.parking_type == parking_type && s.available)
            .count();
        let total = spots
            .iter()
            .filter(|s| s.parking_type == parking_type)
            .count();
        println!(
            "  {:<5} {} / {} free",
            parking_type.as_str(),
            free.to_string().bright_green().bold(),
            total
        );
    }
    println!();

    Ok(())
}

/// Prints the tickets of one vehicle, most recent first.
async fn list_tickets(pool: &PgPool, reg_number: &str, as_json: bool) -> Result<()> {
    let reg_number = normalize_reg_number(reg_number)?;

    let repo = PgTicketRepository::new(Arc::new(pool.clone()));
    let tickets = repo
        .list_tickets_for(&reg_number)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tickets: {}", e))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&tickets)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "🎫 Tickets for".bright_blue().bold(),
        reg_number.cyan().bold()
    );
    println!();

    if tickets.is_empty() {
        println!("{}", "  No tickets found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<5} {:<17} {:<17} {}",
        "ID".bright_white().bold(),
        "Spot".bright_white().bold(),
        "In".bright_white().bold(),
        "Out".bright_white().bold(),
        "Price".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for ticket in &tickets {
        let out = match ticket.out_time {
            Some(t) => t.format("%Y-%m-%d %H:%M").to_string().normal(),
            None => "PARKED".green(),
        };

        println!(
            "  {:<6} {:<5} {:<17} {:<17} {:.2}",
            ticket.id.to_string().bright_black(),
            ticket.parking_spot.id,
            ticket.in_time.format("%Y-%m-%d %H:%M").to_string(),
            out,
            ticket.price
        );
    }

    let completed = tickets.iter().filter(|t| !t.is_open()).count();
    println!();
    println!(
        "  Completed stays: {}",
        completed.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Checks database connectivity.
async fn check_db(pool: &PgPool) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue());

    sqlx::query("SELECT 1").fetch_one(pool).await?;

    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(pool)
        .await?;

    println!("{}", "✅ Database connection OK".green().bold());
    println!("  PostgreSQL: {}", version.bright_white());

    Ok(())
}
