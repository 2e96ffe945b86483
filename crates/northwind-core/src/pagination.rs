//! Offset/limit pagination for list operations.

use crate::{NorthwindError, NorthwindResult};
use serde::Serialize;

/// A validated request for one page of rows ordered by identity.
///
/// No total count travels with a page. A caller that needs to know whether
/// more rows exist asks for the [`next`](Self::next) page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    offset: i64,
    limit: i64,
}

impl PageRequest {
    /// Creates a page request.
    ///
    /// # Errors
    ///
    /// Returns [`NorthwindError::Validation`] when `offset < 0` or `limit < 1`.
    pub fn new(offset: i64, limit: i64) -> NorthwindResult<Self> {
        if offset < 0 {
            return Err(NorthwindError::validation(format!(
                "offset: must be greater than or equal to zero, got {offset}"
            )));
        }
        if limit < 1 {
            return Err(NorthwindError::validation(format!(
                "limit: must be greater than zero, got {limit}"
            )));
        }
        Ok(Self { offset, limit })
    }

    /// Number of rows to skip.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.offset
    }

    /// Maximum number of rows to return.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.limit
    }

    /// The page immediately following this one, with the same limit.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.limit),
            limit: self.limit,
        }
    }
}
