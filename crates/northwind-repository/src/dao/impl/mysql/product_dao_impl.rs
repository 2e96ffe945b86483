//! MySQL implementation of [`ProductDao`].

use super::{inserted_id, required, statement};
use crate::dao::guard::{ensure_not_empty, ensure_positive_id, ensure_saved, ensure_unsaved};
use crate::timeout::with_deadline;
use crate::{DatabasePoolInterface, ProductDao};
use async_trait::async_trait;
use northwind_core::{NorthwindError, NorthwindResult, PageRequest, ProductRecord, ValidateExt};
use rust_decimal::Decimal;
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const SELECT_PRODUCTS: &str = r#"
    SELECT p.ProductID AS id, p.ProductName AS name, p.SupplierID AS supplier_id,
           p.CategoryID AS category_id, p.QuantityPerUnit AS quantity_per_unit,
           p.UnitPrice AS unit_price, p.UnitsInStock AS units_in_stock,
           p.UnitsOnOrder AS units_on_order, p.ReorderLevel AS reorder_level,
           p.Discontinued AS discontinued
    FROM Products AS p"#;

/// MySQL product DAO.
#[derive(Component, Clone)]
#[shaku(interface = ProductDao)]
pub struct MySqlProductDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlProductDaoImpl {
    /// Creates a new MySQL product DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a product.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: Option<i32>,
    name: Option<String>,
    supplier_id: Option<i32>,
    category_id: Option<i32>,
    quantity_per_unit: Option<String>,
    unit_price: Option<Decimal>,
    units_in_stock: Option<i16>,
    units_on_order: Option<i16>,
    reorder_level: Option<i16>,
    discontinued: Option<bool>,
}

impl TryFrom<ProductRow> for ProductRecord {
    type Error = NorthwindError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(ProductRecord {
            id: Some(required(row.id, "ProductID", "Products")?),
            name: required(row.name, "ProductName", "Products")?,
            supplier_id: row.supplier_id,
            category_id: row.category_id,
            quantity_per_unit: row.quantity_per_unit,
            unit_price: row.unit_price,
            units_in_stock: row.units_in_stock,
            units_on_order: row.units_on_order,
            reorder_level: row.reorder_level,
            discontinued: required(row.discontinued, "Discontinued", "Products")?,
        })
    }
}

fn into_records(rows: Vec<ProductRow>) -> NorthwindResult<Vec<ProductRecord>> {
    rows.into_iter().map(ProductRecord::try_from).collect()
}

#[async_trait]
impl ProductDao for MySqlProductDaoImpl {
    async fn insert(&self, product: &ProductRecord) -> NorthwindResult<i32> {
        ensure_unsaved(product.id)?;
        product.validate_record()?;
        debug!("Inserting product: {}", product.name);

        with_deadline(self.pool.statement_timeout(), "insert product", async {
            let result = sqlx::query(
                r#"
                INSERT INTO Products (ProductName, SupplierID, CategoryID, QuantityPerUnit,
                                      UnitPrice, UnitsInStock, UnitsOnOrder, ReorderLevel,
                                      Discontinued)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&product.name)
            .bind(product.supplier_id)
            .bind(product.category_id)
            .bind(&product.quantity_per_unit)
            .bind(product.unit_price)
            .bind(product.units_in_stock)
            .bind(product.units_on_order)
            .bind(product.reorder_level)
            .bind(product.discontinued)
            .execute(self.pool.inner())
            .await?;

            inserted_id(result.last_insert_id(), "Products")
        })
        .await
    }

    async fn find(&self, id: i32) -> NorthwindResult<ProductRecord> {
        ensure_positive_id("id", id)?;
        debug!("Finding product by id: {}", id);

        let row = with_deadline(self.pool.statement_timeout(), "find product", async {
            let row = statement::select_by_id(SELECT_PRODUCTS, "p.ProductID", id)
                .build_query_as::<ProductRow>()
                .fetch_optional(self.pool.inner())
                .await?;
            Ok::<_, NorthwindError>(row)
        })
        .await?;

        row.map(ProductRecord::try_from)
            .transpose()?
            .ok_or_else(|| NorthwindError::not_found("Product", id))
    }

    async fn update(&self, product: &ProductRecord) -> NorthwindResult<bool> {
        let id = ensure_saved(product.id)?;
        product.validate_record()?;
        debug!("Updating product: {}", id);

        with_deadline(self.pool.statement_timeout(), "update product", async {
            let result = sqlx::query(
                r#"
                UPDATE Products
                SET ProductName = ?, SupplierID = ?, CategoryID = ?, QuantityPerUnit = ?,
                    UnitPrice = ?, UnitsInStock = ?, UnitsOnOrder = ?, ReorderLevel = ?,
                    Discontinued = ?
                WHERE ProductID = ?
                "#,
            )
            .bind(&product.name)
            .bind(product.supplier_id)
            .bind(product.category_id)
            .bind(&product.quantity_per_unit)
            .bind(product.unit_price)
            .bind(product.units_in_stock)
            .bind(product.units_on_order)
            .bind(product.reorder_level)
            .bind(product.discontinued)
            .bind(id)
            .execute(self.pool.inner())
            .await?;

            Ok::<_, NorthwindError>(result.rows_affected() == 1)
        })
        .await
    }

    async fn delete(&self, id: i32) -> NorthwindResult<bool> {
        ensure_positive_id("id", id)?;
        debug!("Deleting product: {}", id);

        with_deadline(self.pool.statement_timeout(), "delete product", async {
            let result = sqlx::query("DELETE FROM Products WHERE ProductID = ?")
                .bind(id)
                .execute(self.pool.inner())
                .await?;

            Ok::<_, NorthwindError>(result.rows_affected() == 1)
        })
        .await
    }

    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<ProductRecord>> {
        debug!("Selecting products, offset: {}, limit: {}", page.offset(), page.limit());

        let rows = with_deadline(self.pool.statement_timeout(), "select products", async {
            let rows = statement::select_page(SELECT_PRODUCTS, "p.ProductID", page)
                .build_query_as::<ProductRow>()
                .fetch_all(self.pool.inner())
                .await?;
            Ok::<_, NorthwindError>(rows)
        })
        .await?;

        into_records(rows)
    }

    async fn select_by_names(&self, names: &[String]) -> NorthwindResult<Vec<ProductRecord>> {
        ensure_not_empty("names", names)?;
        debug!("Selecting products by {} names", names.len());

        let rows = with_deadline(self.pool.statement_timeout(), "select products by name", async {
            let mut query = statement::select_where_in(
                SELECT_PRODUCTS,
                "p.ProductName",
                names,
                "ORDER BY p.ProductID",
            );
            let rows = query
                .build_query_as::<ProductRow>()
                .fetch_all(self.pool.inner())
                .await?;
            Ok::<_, NorthwindError>(rows)
        })
        .await?;

        into_records(rows)
    }

    async fn select_by_categories(&self, category_ids: &[i32]) -> NorthwindResult<Vec<ProductRecord>> {
        ensure_not_empty("category_ids", category_ids)?;
        for id in category_ids {
            ensure_positive_id("category_ids", *id)?;
        }
        debug!("Selecting products by categories: {:?}", category_ids);

        let rows = with_deadline(self.pool.statement_timeout(), "select products by category", async {
            let mut query = statement::select_where_in(
                SELECT_PRODUCTS,
                "p.CategoryID",
                category_ids,
                "ORDER BY p.ProductID",
            );
            let rows = query
                .build_query_as::<ProductRow>()
                .fetch_all(self.pool.inner())
                .await?;
            Ok::<_, NorthwindError>(rows)
        })
        .await?;

        into_records(rows)
    }
}

impl std::fmt::Debug for MySqlProductDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlProductDaoImpl").finish_non_exhaustive()
    }
}
