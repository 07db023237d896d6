//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! prepared statements.
//!
//! # Repositories
//!
//! - [`PgSpotRepository`] - Spot lookup and availability updates
//! - [`PgTicketRepository`] - Ticket persistence and history

pub mod pg_spot_repository;
pub mod pg_ticket_repository;

pub use pg_spot_repository::PgSpotRepository;
pub use pg_ticket_repository::PgTicketRepository;
