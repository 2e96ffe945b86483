//! Category picture management service.

use async_trait::async_trait;
use northwind_core::NorthwindResult;
use northwind_repository::{DaoFactory, ProductCategoryPictureDao};
use std::sync::Arc;
use tracing::debug;

/// Forwards every [`ProductCategoryPictureDao`] call to the DAO chosen by the factory.
#[derive(Clone)]
pub struct ProductCategoryPictureManagementService {
    dao: Arc<dyn ProductCategoryPictureDao>,
}

impl ProductCategoryPictureManagementService {
    #[must_use]
    pub fn new(factory: &dyn DaoFactory) -> Self {
        Self::with_dao(factory.category_picture_dao())
    }

    #[must_use]
    pub fn with_dao(dao: Arc<dyn ProductCategoryPictureDao>) -> Self {
        Self { dao }
    }
}

#[async_trait]
impl ProductCategoryPictureDao for ProductCategoryPictureManagementService {
    async fn find_picture(&self, category_id: i32) -> NorthwindResult<Option<Vec<u8>>> {
        debug!("Getting picture of category: {}", category_id);
        self.dao.find_picture(category_id).await
    }

    async fn update_picture(&self, category_id: i32, picture: &[u8]) -> NorthwindResult<bool> {
        debug!("Updating picture of category: {}", category_id);
        self.dao.update_picture(category_id, picture).await
    }

    async fn delete_picture(&self, category_id: i32) -> NorthwindResult<bool> {
        debug!("Destroying picture of category: {}", category_id);
        self.dao.delete_picture(category_id).await
    }
}

impl std::fmt::Debug for ProductCategoryPictureManagementService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductCategoryPictureManagementService").finish_non_exhaustive()
    }
}
