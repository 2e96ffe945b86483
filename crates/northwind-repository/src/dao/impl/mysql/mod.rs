//! MySQL DAO implementations.

mod category_dao_impl;
mod category_picture_dao_impl;
mod employee_dao_impl;
mod product_dao_impl;
mod statement;

pub use category_dao_impl::MySqlProductCategoryDaoImpl;
pub use category_picture_dao_impl::MySqlProductCategoryPictureDaoImpl;
pub use employee_dao_impl::MySqlEmployeeDaoImpl;
pub use product_dao_impl::MySqlProductDaoImpl;

use northwind_core::{NorthwindError, NorthwindResult};

/// Unwraps a NOT NULL column, reporting a NULL as a row mapping fault.
fn required<T>(value: Option<T>, column: &str, table: &str) -> NorthwindResult<T> {
    value.ok_or_else(|| {
        NorthwindError::mapping(format!("{table}.{column} is NULL in a stored row"))
    })
}

/// Converts the connection's `LAST_INSERT_ID()` into a record identity.
fn inserted_id(last_insert_id: u64, table: &str) -> NorthwindResult<i32> {
    i32::try_from(last_insert_id).map_err(|_| {
        NorthwindError::mapping(format!(
            "{table} identity {last_insert_id} does not fit a 32-bit identity"
        ))
    })
}
