//! Per-statement deadline for DAO round trips.

use northwind_core::{NorthwindError, NorthwindResult};
use std::future::Future;
use std::time::Duration;

/// Runs a store operation under an optional deadline.
///
/// With `None` the operation is awaited without a bound. An elapsed deadline
/// drops the in-flight future and yields [`NorthwindError::Timeout`].
pub async fn with_deadline<Fut, T>(
    deadline: Option<Duration>,
    operation: &str,
    fut: Fut,
) -> NorthwindResult<T>
where
    Fut: Future<Output = NorthwindResult<T>>,
{
    match deadline {
        Some(duration) => tokio::time::timeout(duration, fut).await.map_err(|_| {
            NorthwindError::Timeout(format!("{operation} timed out after {duration:?}"))
        })?,
        None => fut.await,
    }
}
