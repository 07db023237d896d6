//! Domain layer containing the parking lot entities and store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Spots, tickets and vehicle categories
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation;
//! the lifecycle decisions are in [`crate::application::services`].

pub mod entities;
pub mod repositories;
