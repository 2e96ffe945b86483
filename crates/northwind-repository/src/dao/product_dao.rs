//! ProductDao trait: product data access abstraction.

use async_trait::async_trait;
use northwind_core::{NorthwindResult, PageRequest, ProductRecord};
use shaku::Interface;

/// Product data access object.
///
/// Every method validates its arguments before any store access. Update and
/// delete report a missing row as `Ok(false)`; `find` reports it as
/// [`NotFound`](northwind_core::NorthwindError::NotFound).
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
#[async_trait]
pub trait ProductDao: Interface + Send + Sync {
    /// Stores a new product and returns the identity assigned by the store.
    ///
    /// The record must not carry an identity.
    async fn insert(&self, product: &ProductRecord) -> NorthwindResult<i32>;

    /// Finds a product by identity.
    async fn find(&self, id: i32) -> NorthwindResult<ProductRecord>;

    /// Overwrites every non-key column of the product with the record's identity.
    async fn update(&self, product: &ProductRecord) -> NorthwindResult<bool>;

    /// Deletes a product. Returns `true` if a row was removed.
    async fn delete(&self, id: i32) -> NorthwindResult<bool>;

    /// Returns one page of products ordered by identity.
    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<ProductRecord>>;

    /// Returns the products whose name is in `names`.
    async fn select_by_names(&self, names: &[String]) -> NorthwindResult<Vec<ProductRecord>>;

    /// Returns the products belonging to any of the given categories.
    async fn select_by_categories(&self, category_ids: &[i32]) -> NorthwindResult<Vec<ProductRecord>>;
}
