//! Unified error type for the data access layer.
//!
//! The variants follow the fault taxonomy callers must be able to tell
//! apart: malformed input, a missing row, a malformed row, and a failing
//! store. Nothing in the DAO layer catches and hides any of them.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for Northwind data access.
#[derive(Error, Debug)]
pub enum NorthwindError {
    /// Malformed input to a DAO call. Raised before any store access.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A find-by-identity call matched no row.
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// A row violates the required-column invariant.
    #[error("Row mapping error: {0}")]
    Mapping(String),

    /// The store or its transport failed; carried through untouched.
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    /// A statement exceeded its deadline.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Schema migration failed during bootstrap.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl NorthwindError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Mapping(_) => "MAPPING_ERROR",
            #[cfg(feature = "sqlx")]
            Self::Database(_) => "DATABASE_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Migration(_) => "MIGRATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a mapping error.
    #[must_use]
    pub fn mapping<T: Into<String>>(message: T) -> Self {
        Self::Mapping(message.into())
    }

    /// Returns true for malformed-input faults.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true for missing-row faults.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for NorthwindError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { index, source } => {
                Self::Mapping(format!("column {index} could not be decoded: {source}"))
            }
            sqlx::Error::ColumnNotFound(column) => {
                Self::Mapping(format!("column {column} missing from result set"))
            }
            sqlx::Error::ColumnIndexOutOfBounds { index, len } => Self::Mapping(format!(
                "column index {index} out of bounds for a row of {len} columns"
            )),
            sqlx::Error::Decode(source) => Self::Mapping(format!("row could not be decoded: {source}")),
            other => Self::Database(other),
        }
    }
}
