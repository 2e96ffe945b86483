//! EmployeeDao trait.

use async_trait::async_trait;
use northwind_core::{EmployeeRecord, NorthwindResult, PageRequest};
use shaku::Interface;

/// Employee data access object.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
#[async_trait]
pub trait EmployeeDao: Interface + Send + Sync {
    /// Stores a new employee and returns the assigned identity.
    async fn insert(&self, employee: &EmployeeRecord) -> NorthwindResult<i32>;

    /// Finds an employee by identity.
    async fn find(&self, id: i32) -> NorthwindResult<EmployeeRecord>;

    /// Overwrites the stored employee. Returns `false` when no row matched.
    async fn update(&self, employee: &EmployeeRecord) -> NorthwindResult<bool>;

    /// Deletes an employee. Returns `false` when no row matched.
    async fn delete(&self, id: i32) -> NorthwindResult<bool>;

    /// Returns one page of employees ordered by identity.
    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<EmployeeRecord>>;

    /// Returns the employees whose last name is in `last_names`.
    async fn select_by_last_names(&self, last_names: &[String]) -> NorthwindResult<Vec<EmployeeRecord>>;
}
