//! Argument checks applied by every DAO backend before touching the store.

use northwind_core::{NorthwindError, NorthwindResult};

/// Rejects identities that are zero or negative.
pub fn ensure_positive_id(field: &str, id: i32) -> NorthwindResult<()> {
    if id <= 0 {
        return Err(NorthwindError::validation(format!(
            "{field}: must be greater than zero, got {id}"
        )));
    }
    Ok(())
}

/// Rejects an empty key collection.
pub fn ensure_not_empty<T>(field: &str, keys: &[T]) -> NorthwindResult<()> {
    if keys.is_empty() {
        return Err(NorthwindError::validation(format!(
            "{field}: must contain at least one value"
        )));
    }
    Ok(())
}

/// Rejects a record that already carries an identity.
///
/// Identities are assigned by the store on insert, never by the caller.
pub fn ensure_unsaved(id: Option<i32>) -> NorthwindResult<()> {
    match id {
        None => Ok(()),
        Some(id) => Err(NorthwindError::validation(format!(
            "id: must not be set before insert, got {id}"
        ))),
    }
}

/// Returns the identity of a stored record.
pub fn ensure_saved(id: Option<i32>) -> NorthwindResult<i32> {
    let id = id.ok_or_else(|| NorthwindError::validation("id: is required for update"))?;
    ensure_positive_id("id", id)?;
    Ok(id)
}
