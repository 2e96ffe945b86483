//! Bundle of the management services.

use crate::{
    EmployeeManagementService, ProductCategoryManagementService,
    ProductCategoryPictureManagementService, ProductManagementService,
};
use northwind_repository::DaoFactory;
use std::sync::Arc;

/// One management service per entity, all resolved from the same factory.
#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    pub products: Arc<ProductManagementService>,
    pub employees: Arc<EmployeeManagementService>,
    pub categories: Arc<ProductCategoryManagementService>,
    pub category_pictures: Arc<ProductCategoryPictureManagementService>,
}

impl ServiceRegistry {
    #[must_use]
    pub fn new(factory: &dyn DaoFactory) -> Self {
        Self {
            products: Arc::new(ProductManagementService::new(factory)),
            employees: Arc::new(EmployeeManagementService::new(factory)),
            categories: Arc::new(ProductCategoryManagementService::new(factory)),
            category_pictures: Arc::new(ProductCategoryPictureManagementService::new(factory)),
        }
    }
}
