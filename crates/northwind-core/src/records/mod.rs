//! Transfer records moved between the DAOs and their callers.
//!
//! Records carry no behavior beyond construction and validation. Every
//! nullable column is an `Option`; an absent value is never stood in for by
//! zero or an empty string. `id` is `None` until the store assigns one.

mod category;
mod employee;
mod product;

pub use category::ProductCategoryRecord;
pub use employee::EmployeeRecord;
pub use product::ProductRecord;
