//! MySQL implementation of [`ProductCategoryPictureDao`].

use crate::dao::guard::ensure_positive_id;
use crate::timeout::with_deadline;
use crate::{DatabasePoolInterface, ProductCategoryPictureDao};
use async_trait::async_trait;
use northwind_core::{NorthwindError, NorthwindResult};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// MySQL category picture DAO over `Categories.Picture`.
#[derive(Component, Clone)]
#[shaku(interface = ProductCategoryPictureDao)]
pub struct MySqlProductCategoryPictureDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlProductCategoryPictureDaoImpl {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductCategoryPictureDao for MySqlProductCategoryPictureDaoImpl {
    async fn find_picture(&self, category_id: i32) -> NorthwindResult<Option<Vec<u8>>> {
        ensure_positive_id("category_id", category_id)?;
        debug!("Finding picture of category: {}", category_id);

        // Outer Option is the row, inner Option is the column.
        let picture = with_deadline(self.pool.statement_timeout(), "find category picture", async {
            let picture = sqlx::query_scalar::<_, Option<Vec<u8>>>(
                "SELECT Picture FROM Categories WHERE CategoryID = ?",
            )
            .bind(category_id)
            .fetch_optional(self.pool.inner())
            .await?;
            Ok::<_, NorthwindError>(picture)
        })
        .await?;

        picture.ok_or_else(|| NorthwindError::not_found("ProductCategory", category_id))
    }

    async fn update_picture(&self, category_id: i32, picture: &[u8]) -> NorthwindResult<bool> {
        ensure_positive_id("category_id", category_id)?;
        debug!("Updating picture of category: {} ({} bytes)", category_id, picture.len());

        with_deadline(self.pool.statement_timeout(), "update category picture", async {
            let result = sqlx::query("UPDATE Categories SET Picture = ? WHERE CategoryID = ?")
                .bind(picture)
                .bind(category_id)
                .execute(self.pool.inner())
                .await?;

            Ok::<_, NorthwindError>(result.rows_affected() == 1)
        })
        .await
    }

    async fn delete_picture(&self, category_id: i32) -> NorthwindResult<bool> {
        ensure_positive_id("category_id", category_id)?;
        debug!("Clearing picture of category: {}", category_id);

        with_deadline(self.pool.statement_timeout(), "delete category picture", async {
            let result = sqlx::query("UPDATE Categories SET Picture = NULL WHERE CategoryID = ?")
                .bind(category_id)
                .execute(self.pool.inner())
                .await?;

            Ok::<_, NorthwindError>(result.rows_affected() == 1)
        })
        .await
    }
}

impl std::fmt::Debug for MySqlProductCategoryPictureDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlProductCategoryPictureDaoImpl").finish_non_exhaustive()
    }
}
