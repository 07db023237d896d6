//! Helpers shared across layers.
//!
//! - [`db_error`] - Classification of SQLx database errors

pub mod db_error;
