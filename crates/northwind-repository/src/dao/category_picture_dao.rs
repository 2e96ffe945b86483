//! ProductCategoryPictureDao trait: the category picture column.
//!
//! The picture lives on the category row but has its own lifecycle. It can
//! be replaced or cleared without touching the rest of the row, and clearing
//! it never removes the category.

use async_trait::async_trait;
use northwind_core::NorthwindResult;
use shaku::Interface;

/// Category picture data access object.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
#[async_trait]
pub trait ProductCategoryPictureDao: Interface + Send + Sync {
    /// Returns the picture of a category.
    ///
    /// `Ok(None)` means the category exists without a picture; a missing
    /// category is [`NotFound`](northwind_core::NorthwindError::NotFound).
    async fn find_picture(&self, category_id: i32) -> NorthwindResult<Option<Vec<u8>>>;

    /// Replaces the picture of a category. Returns `false` when the category does not exist.
    async fn update_picture(&self, category_id: i32, picture: &[u8]) -> NorthwindResult<bool>;

    /// Clears the picture of a category. Returns `false` when the category does not exist.
    async fn delete_picture(&self, category_id: i32) -> NorthwindResult<bool>;
}
