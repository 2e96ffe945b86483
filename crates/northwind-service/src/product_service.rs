//! Product management service.

use async_trait::async_trait;
use northwind_core::{NorthwindResult, PageRequest, ProductRecord};
use northwind_repository::{DaoFactory, ProductDao};
use std::sync::Arc;
use tracing::debug;

/// Forwards every [`ProductDao`] call to the DAO chosen by the factory.
///
/// Adds nothing but a trace event: arguments, results and faults pass
/// through unchanged.
#[derive(Clone)]
pub struct ProductManagementService {
    dao: Arc<dyn ProductDao>,
}

impl ProductManagementService {
    /// Creates the service over the factory's product DAO.
    #[must_use]
    pub fn new(factory: &dyn DaoFactory) -> Self {
        Self::with_dao(factory.product_dao())
    }

    /// Creates the service over an already resolved DAO.
    #[must_use]
    pub fn with_dao(dao: Arc<dyn ProductDao>) -> Self {
        Self { dao }
    }
}

#[async_trait]
impl ProductDao for ProductManagementService {
    async fn insert(&self, product: &ProductRecord) -> NorthwindResult<i32> {
        debug!("Creating product: {}", product.name);
        self.dao.insert(product).await
    }

    async fn find(&self, id: i32) -> NorthwindResult<ProductRecord> {
        debug!("Getting product: {}", id);
        self.dao.find(id).await
    }

    async fn update(&self, product: &ProductRecord) -> NorthwindResult<bool> {
        debug!("Updating product: {:?}", product.id);
        self.dao.update(product).await
    }

    async fn delete(&self, id: i32) -> NorthwindResult<bool> {
        debug!("Destroying product: {}", id);
        self.dao.delete(id).await
    }

    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<ProductRecord>> {
        debug!("Listing products, offset: {}, limit: {}", page.offset(), page.limit());
        self.dao.select_page(page).await
    }

    async fn select_by_names(&self, names: &[String]) -> NorthwindResult<Vec<ProductRecord>> {
        debug!("Looking up products by names: {:?}", names);
        self.dao.select_by_names(names).await
    }

    async fn select_by_categories(&self, category_ids: &[i32]) -> NorthwindResult<Vec<ProductRecord>> {
        debug!("Looking up products by categories: {:?}", category_ids);
        self.dao.select_by_categories(category_ids).await
    }
}

impl std::fmt::Debug for ProductManagementService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductManagementService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use northwind_core::NorthwindError;
    use northwind_repository::MockProductDao;

    #[tokio::test]
    async fn test_find_is_forwarded() {
        let mut dao = MockProductDao::new();
        dao.expect_find().with(eq(7)).times(1).returning(|id| {
            Ok(ProductRecord {
                id: Some(id),
                ..ProductRecord::new("Uncle Bob's Organic Dried Pears")
            })
        });

        let service = ProductManagementService::with_dao(Arc::new(dao));
        let product = service.find(7).await.unwrap();
        assert_eq!(product.id, Some(7));
    }

    #[tokio::test]
    async fn test_faults_pass_through_unchanged() {
        let mut dao = MockProductDao::new();
        dao.expect_find()
            .returning(|id| Err(NorthwindError::not_found("Product", id)));
        dao.expect_delete()
            .returning(|_| Err(NorthwindError::validation("id: must be greater than zero, got 0")));

        let service = ProductManagementService::with_dao(Arc::new(dao));
        assert!(service.find(3).await.unwrap_err().is_not_found());
        assert!(service.delete(0).await.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn test_false_result_is_not_an_error() {
        let mut dao = MockProductDao::new();
        dao.expect_update().times(1).returning(|_| Ok(false));

        let service = ProductManagementService::with_dao(Arc::new(dao));
        let ghost = ProductRecord {
            id: Some(99),
            ..ProductRecord::new("Chai")
        };
        assert!(!service.update(&ghost).await.unwrap());
    }

    #[tokio::test]
    async fn test_key_sets_are_forwarded_as_given() {
        let mut dao = MockProductDao::new();
        dao.expect_select_by_categories()
            .withf(|ids| ids.len() == 2 && ids[0] == 1 && ids[1] == 8)
            .times(1)
            .returning(|_| Ok(Vec::new()));
        dao.expect_select_by_names()
            .withf(|names| names.len() == 1 && names[0] == "Chai")
            .times(1)
            .returning(|_| Ok(vec![ProductRecord::new("Chai")]));

        let service = ProductManagementService::with_dao(Arc::new(dao));
        assert!(service.select_by_categories(&[1, 8]).await.unwrap().is_empty());
        assert_eq!(
            service.select_by_names(&["Chai".to_string()]).await.unwrap().len(),
            1
        );
    }
}
