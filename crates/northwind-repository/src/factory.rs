//! DAO factory: resolves the concrete DAO for each entity.

use crate::{
    DatabasePoolInterface, EmployeeDao, MySqlEmployeeDaoImpl, MySqlProductCategoryDaoImpl,
    MySqlProductCategoryPictureDaoImpl, MySqlProductDaoImpl, ProductCategoryDao,
    ProductCategoryPictureDao, ProductDao,
};
use shaku::{Component, Interface};
use std::sync::Arc;

/// Hands out one DAO per logical entity.
///
/// Callers depend on this trait and the DAO traits only, never on a
/// concrete backend.
pub trait DaoFactory: Interface + Send + Sync {
    fn product_dao(&self) -> Arc<dyn ProductDao>;

    fn employee_dao(&self) -> Arc<dyn EmployeeDao>;

    fn category_dao(&self) -> Arc<dyn ProductCategoryDao>;

    fn category_picture_dao(&self) -> Arc<dyn ProductCategoryPictureDao>;
}

/// Factory for the MySQL backend.
///
/// Every call builds a fresh DAO over the shared pool; nothing is cached.
#[derive(Component, Clone)]
#[shaku(interface = DaoFactory)]
pub struct MySqlDaoFactory {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlDaoFactory {
    /// Creates a factory over an existing pool.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

impl DaoFactory for MySqlDaoFactory {
    fn product_dao(&self) -> Arc<dyn ProductDao> {
        Arc::new(MySqlProductDaoImpl::new(Arc::clone(&self.pool)))
    }

    fn employee_dao(&self) -> Arc<dyn EmployeeDao> {
        Arc::new(MySqlEmployeeDaoImpl::new(Arc::clone(&self.pool)))
    }

    fn category_dao(&self) -> Arc<dyn ProductCategoryDao> {
        Arc::new(MySqlProductCategoryDaoImpl::new(Arc::clone(&self.pool)))
    }

    fn category_picture_dao(&self) -> Arc<dyn ProductCategoryPictureDao> {
        Arc::new(MySqlProductCategoryPictureDaoImpl::new(Arc::clone(&self.pool)))
    }
}

impl std::fmt::Debug for MySqlDaoFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlDaoFactory").finish_non_exhaustive()
    }
}
