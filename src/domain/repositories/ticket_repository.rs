//! Repository trait for ticket data access.

use crate::domain::entities::{NewTicket, Ticket};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for tickets.
///
/// Tickets are inserted open and later closed in place; nothing is deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTicketRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_ticket.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Finds the open ticket (no exit time) for a registration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCategory`] if the spot category is unknown.
    /// Returns [`AppError::Database`] on database errors.
    async fn get_open_ticket(&self, vehicle_reg_number: &str) -> Result<Option<Ticket>, AppError>;

    /// Counts completed stays (tickets with an exit time) for a registration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn count_completed_tickets(&self, vehicle_reg_number: &str) -> Result<i64, AppError>;

    /// Persists a new open ticket and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the vehicle already has an open ticket.
    /// Returns [`AppError::Database`] on database errors.
    async fn save_ticket(&self, new_ticket: NewTicket) -> Result<Ticket, AppError>;

    /// Writes the exit time and price of an open ticket.
    ///
    /// Returns `Ok(true)` if exactly one open ticket was closed, `Ok(false)`
    /// if the ticket does not exist or was already closed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `ticket.out_time` is not set.
    /// Returns [`AppError::Database`] on database errors.
    async fn update_ticket(&self, ticket: &Ticket) -> Result<bool, AppError>;

    /// Lists every ticket of a registration, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn list_tickets_for(&self, vehicle_reg_number: &str) -> Result<Vec<Ticket>, AppError>;
}
