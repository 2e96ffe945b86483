//! ProductCategoryDao trait.

use async_trait::async_trait;
use northwind_core::{NorthwindResult, PageRequest, ProductCategoryRecord};
use shaku::Interface;

/// Product category data access object.
///
/// The category picture is not part of the record; see
/// [`ProductCategoryPictureDao`](crate::ProductCategoryPictureDao).
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
#[async_trait]
pub trait ProductCategoryDao: Interface + Send + Sync {
    async fn insert(&self, category: &ProductCategoryRecord) -> NorthwindResult<i32>;

    async fn find(&self, id: i32) -> NorthwindResult<ProductCategoryRecord>;

    async fn update(&self, category: &ProductCategoryRecord) -> NorthwindResult<bool>;

    async fn delete(&self, id: i32) -> NorthwindResult<bool>;

    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<ProductCategoryRecord>>;

    /// Returns the categories whose name is in `names`.
    async fn select_by_names(&self, names: &[String]) -> NorthwindResult<Vec<ProductCategoryRecord>>;
}
