//! Employee management service.

use async_trait::async_trait;
use northwind_core::{EmployeeRecord, NorthwindResult, PageRequest};
use northwind_repository::{DaoFactory, EmployeeDao};
use std::sync::Arc;
use tracing::debug;

/// Forwards every [`EmployeeDao`] call to the DAO chosen by the factory.
#[derive(Clone)]
pub struct EmployeeManagementService {
    dao: Arc<dyn EmployeeDao>,
}

impl EmployeeManagementService {
    #[must_use]
    pub fn new(factory: &dyn DaoFactory) -> Self {
        Self::with_dao(factory.employee_dao())
    }

    #[must_use]
    pub fn with_dao(dao: Arc<dyn EmployeeDao>) -> Self {
        Self { dao }
    }
}

#[async_trait]
impl EmployeeDao for EmployeeManagementService {
    async fn insert(&self, employee: &EmployeeRecord) -> NorthwindResult<i32> {
        debug!("Creating employee: {}", employee.last_name);
        self.dao.insert(employee).await
    }

    async fn find(&self, id: i32) -> NorthwindResult<EmployeeRecord> {
        debug!("Getting employee: {}", id);
        self.dao.find(id).await
    }

    async fn update(&self, employee: &EmployeeRecord) -> NorthwindResult<bool> {
        debug!("Updating employee: {:?}", employee.id);
        self.dao.update(employee).await
    }

    async fn delete(&self, id: i32) -> NorthwindResult<bool> {
        debug!("Destroying employee: {}", id);
        self.dao.delete(id).await
    }

    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<EmployeeRecord>> {
        debug!("Listing employees, offset: {}, limit: {}", page.offset(), page.limit());
        self.dao.select_page(page).await
    }

    async fn select_by_last_names(&self, last_names: &[String]) -> NorthwindResult<Vec<EmployeeRecord>> {
        debug!("Looking up employees by last names: {:?}", last_names);
        self.dao.select_by_last_names(last_names).await
    }
}

impl std::fmt::Debug for EmployeeManagementService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeManagementService").finish_non_exhaustive()
    }
}
