//! Result type aliases for Northwind.

use crate::NorthwindError;

/// A specialized `Result` type for Northwind data access operations.
pub type NorthwindResult<T> = Result<T, NorthwindError>;
