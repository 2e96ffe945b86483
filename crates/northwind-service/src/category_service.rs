//! Product category management service.

use async_trait::async_trait;
use northwind_core::{NorthwindResult, PageRequest, ProductCategoryRecord};
use northwind_repository::{DaoFactory, ProductCategoryDao};
use std::sync::Arc;
use tracing::debug;

/// Forwards every [`ProductCategoryDao`] call to the DAO chosen by the factory.
#[derive(Clone)]
pub struct ProductCategoryManagementService {
    dao: Arc<dyn ProductCategoryDao>,
}

impl ProductCategoryManagementService {
    #[must_use]
    pub fn new(factory: &dyn DaoFactory) -> Self {
        Self::with_dao(factory.category_dao())
    }

    #[must_use]
    pub fn with_dao(dao: Arc<dyn ProductCategoryDao>) -> Self {
        Self { dao }
    }
}

#[async_trait]
impl ProductCategoryDao for ProductCategoryManagementService {
    async fn insert(&self, category: &ProductCategoryRecord) -> NorthwindResult<i32> {
        debug!("Creating category: {}", category.name);
        self.dao.insert(category).await
    }

    async fn find(&self, id: i32) -> NorthwindResult<ProductCategoryRecord> {
        debug!("Getting category: {}", id);
        self.dao.find(id).await
    }

    async fn update(&self, category: &ProductCategoryRecord) -> NorthwindResult<bool> {
        debug!("Updating category: {:?}", category.id);
        self.dao.update(category).await
    }

    async fn delete(&self, id: i32) -> NorthwindResult<bool> {
        debug!("Destroying category: {}", id);
        self.dao.delete(id).await
    }

    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<ProductCategoryRecord>> {
        debug!("Listing categories, offset: {}, limit: {}", page.offset(), page.limit());
        self.dao.select_page(page).await
    }

    async fn select_by_names(&self, names: &[String]) -> NorthwindResult<Vec<ProductCategoryRecord>> {
        debug!("Looking up categories by names: {:?}", names);
        self.dao.select_by_names(names).await
    }
}

impl std::fmt::Debug for ProductCategoryManagementService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductCategoryManagementService").finish_non_exhaustive()
    }
}
