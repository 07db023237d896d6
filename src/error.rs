//! Application error type shared by every layer.
//!
//! Each variant carries a human-readable message and a JSON payload with
//! structured details, so callers can both print and log failures.

use serde_json::{Value, json};

use crate::utils::db_error::is_unique_violation;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad selection, blank registration, missing or inconsistent exit time.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// A vehicle category outside `CAR` / `BIKE` reached the domain model.
    #[error("{message}")]
    InvalidCategory { message: String, details: Value },

    /// No free spot for the requested category.
    #[error("{message}")]
    NoAvailability { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// A store write completed but changed no rows.
    #[error("{message}")]
    NotApplied { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// The store could not be reached or the query failed.
    #[error("{message}")]
    Database { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_category(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidCategory {
            message: message.into(),
            details,
        }
    }
    pub fn no_availability(message: impl Into<String>, details: Value) -> Self {
        Self::NoAvailability {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn not_applied(message: impl Into<String>, details: Value) -> Self {
        Self::NotApplied {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn database(message: impl Into<String>, details: Value) -> Self {
        Self::Database {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code, used as a metrics label and in logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::InvalidCategory { .. } => "invalid_category",
            AppError::NoAvailability { .. } => "no_availability",
            AppError::NotFound { .. } => "not_found",
            AppError::NotApplied { .. } => "not_applied",
            AppError::Conflict { .. } => "conflict",
            AppError::Database { .. } => "database_error",
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::InvalidCategory { details, .. }
            | AppError::NoAvailability { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::NotApplied { details, .. }
            | AppError::Conflict { details, .. }
            | AppError::Database { details, .. } => details,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation(&e) {
            let constraint = e
                .as_database_error()
                .and_then(|db| db.constraint())
                .map(str::to_owned);
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": constraint }),
            );
        }

        tracing::error!(error = %e, "database error");
        AppError::database("Database error", json!({ "reason": e.to_string() }))
    }
}
