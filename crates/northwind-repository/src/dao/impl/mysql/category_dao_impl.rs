//! MySQL implementation of [`ProductCategoryDao`].

use super::{inserted_id, required, statement};
use crate::dao::guard::{ensure_not_empty, ensure_positive_id, ensure_saved, ensure_unsaved};
use crate::timeout::with_deadline;
use crate::{DatabasePoolInterface, ProductCategoryDao};
use async_trait::async_trait;
use northwind_core::{NorthwindError, NorthwindResult, PageRequest, ProductCategoryRecord, ValidateExt};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const SELECT_CATEGORIES: &str = r#"
    SELECT c.CategoryID AS id, c.CategoryName AS name, c.Description AS description
    FROM Categories AS c"#;

/// MySQL product category DAO. Never reads or writes the picture column.
#[derive(Component, Clone)]
#[shaku(interface = ProductCategoryDao)]
pub struct MySqlProductCategoryDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlProductCategoryDaoImpl {
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: Option<i32>,
    name: Option<String>,
    description: Option<String>,
}

impl TryFrom<CategoryRow> for ProductCategoryRecord {
    type Error = NorthwindError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(ProductCategoryRecord {
            id: Some(required(row.id, "CategoryID", "Categories")?),
            name: required(row.name, "CategoryName", "Categories")?,
            description: row.description,
        })
    }
}

#[async_trait]
impl ProductCategoryDao for MySqlProductCategoryDaoImpl {
    async fn insert(&self, category: &ProductCategoryRecord) -> NorthwindResult<i32> {
        ensure_unsaved(category.id)?;
        category.validate_record()?;
        debug!("Inserting category: {}", category.name);

        with_deadline(self.pool.statement_timeout(), "insert category", async {
            let result = sqlx::query("INSERT INTO Categories (CategoryName, Description) VALUES (?, ?)")
                .bind(&category.name)
                .bind(&category.description)
                .execute(self.pool.inner())
                .await?;

            inserted_id(result.last_insert_id(), "Categories")
        })
        .await
    }

    async fn find(&self, id: i32) -> NorthwindResult<ProductCategoryRecord> {
        ensure_positive_id("id", id)?;
        debug!("Finding category by id: {}", id);

        let row = with_deadline(self.pool.statement_timeout(), "find category", async {
            let row = statement::select_by_id(SELECT_CATEGORIES, "c.CategoryID", id)
                .build_query_as::<CategoryRow>()
                .fetch_optional(self.pool.inner())
                .await?;
            Ok::<_, NorthwindError>(row)
        })
        .await?;

        row.map(ProductCategoryRecord::try_from)
            .transpose()?
            .ok_or_else(|| NorthwindError::not_found("ProductCategory", id))
    }

    async fn update(&self, category: &ProductCategoryRecord) -> NorthwindResult<bool> {
        let id = ensure_saved(category.id)?;
        category.validate_record()?;
        debug!("Updating category: {}", id);

        with_deadline(self.pool.statement_timeout(), "update category", async {
            let result = sqlx::query(
                "UPDATE Categories SET CategoryName = ?, Description = ? WHERE CategoryID = ?",
            )
            .bind(&category.name)
            .bind(&category.description)
            .bind(id)
            .execute(self.pool.inner())
            .await?;

            Ok::<_, NorthwindError>(result.rows_affected() == 1)
        })
        .await
    }

    async fn delete(&self, id: i32) -> NorthwindResult<bool> {
        ensure_positive_id("id", id)?;
        debug!("Deleting category: {}", id);

        with_deadline(self.pool.statement_timeout(), "delete category", async {
            let result = sqlx::query("DELETE FROM Categories WHERE CategoryID = ?")
                .bind(id)
                .execute(self.pool.inner())
                .await?;

            Ok::<_, NorthwindError>(result.rows_affected() == 1)
        })
        .await
    }

    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<ProductCategoryRecord>> {
        debug!("Selecting categories, offset: {}, limit: {}", page.offset(), page.limit());

        let rows = with_deadline(self.pool.statement_timeout(), "select categories", async {
            let rows = statement::select_page(SELECT_CATEGORIES, "c.CategoryID", page)
                .build_query_as::<CategoryRow>()
                .fetch_all(self.pool.inner())
                .await?;
            Ok::<_, NorthwindError>(rows)
        })
        .await?;

        rows.into_iter().map(ProductCategoryRecord::try_from).collect()
    }

    async fn select_by_names(&self, names: &[String]) -> NorthwindResult<Vec<ProductCategoryRecord>> {
        ensure_not_empty("names", names)?;
        debug!("Selecting categories by names: {:?}", names);

        let rows = with_deadline(self.pool.statement_timeout(), "select categories by name", async {
            let mut query = statement::select_where_in(
                SELECT_CATEGORIES,
                "c.CategoryName",
                names,
                "ORDER BY c.CategoryID",
            );
            let rows = query
                .build_query_as::<CategoryRow>()
                .fetch_all(self.pool.inner())
                .await?;
            Ok::<_, NorthwindError>(rows)
        })
        .await?;

        rows.into_iter().map(ProductCategoryRecord::try_from).collect()
    }
}

impl std::fmt::Debug for MySqlProductCategoryDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlProductCategoryDaoImpl").finish_non_exhaustive()
    }
}
