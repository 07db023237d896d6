//! Repository trait definitions for the domain layer.
//!
//! These traits are the narrow contracts the parking core has with its stores.
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`SpotRepository`] - Spot lookup and availability updates
//! - [`TicketRepository`] - Ticket persistence and history
//!
//! Empty results are `Ok(None)` / `Ok(false)`; only store failures are `Err`.

pub mod spot_repository;
pub mod ticket_repository;

pub use spot_repository::SpotRepository;
pub use ticket_repository::TicketRepository;

#[cfg(test)]
pub use spot_repository::MockSpotRepository;
#[cfg(test)]
pub use ticket_repository::MockTicketRepository;
