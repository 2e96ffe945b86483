//! In-memory DAO backend for tests.
//!
//! Each DAO honours the same contract as its MySQL counterpart: the same
//! argument guards, auto-increment identities, `NotFound` on a missing
//! `find`, and `false` on an update or delete that matched nothing. State
//! lives in an [`InMemoryStore`] owned by whoever builds the factory, so
//! separate tests never share rows.

use crate::dao::guard::{ensure_not_empty, ensure_positive_id, ensure_saved, ensure_unsaved};
use crate::{DaoFactory, EmployeeDao, ProductCategoryDao, ProductCategoryPictureDao, ProductDao};
use async_trait::async_trait;
use northwind_core::{
    EmployeeRecord, NorthwindError, NorthwindResult, PageRequest, ProductCategoryRecord,
    ProductRecord, ValidateExt,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Name match under the case-insensitive collation of the name columns.
fn name_in(name: &str, keys: &[String]) -> bool {
    let folded = name.to_lowercase();
    keys.iter().any(|key| key.to_lowercase() == folded)
}

/// Rows of one table plus its auto-increment counter.
#[derive(Debug)]
struct Table<R> {
    rows: BTreeMap<i32, R>,
    last_id: i32,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<R: Clone> Table<R> {
    fn next_id(&mut self, table: &str) -> NorthwindResult<i32> {
        self.last_id = self.last_id.checked_add(1).ok_or_else(|| {
            NorthwindError::mapping(format!("{table} identity overflowed a 32-bit identity"))
        })?;
        Ok(self.last_id)
    }

    fn page(&self, page: PageRequest) -> Vec<R> {
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        self.rows.values().skip(offset).take(limit).cloned().collect()
    }
}

#[derive(Debug, Clone)]
struct StoredCategory {
    record: ProductCategoryRecord,
    picture: Option<Vec<u8>>,
}

/// Shared state behind the in-memory DAOs.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    products: Mutex<Table<ProductRecord>>,
    employees: Mutex<Table<EmployeeRecord>>,
    categories: Mutex<Table<StoredCategory>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Factory handing out in-memory DAOs over one store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDaoFactory {
    store: Arc<InMemoryStore>,
}

impl InMemoryDaoFactory {
    /// Creates a factory over a fresh, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory over an existing store.
    #[must_use]
    pub fn with_store(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> Arc<InMemoryStore> {
        Arc::clone(&self.store)
    }
}

impl DaoFactory for InMemoryDaoFactory {
    fn product_dao(&self) -> Arc<dyn ProductDao> {
        Arc::new(InMemoryProductDao { store: self.store() })
    }

    fn employee_dao(&self) -> Arc<dyn EmployeeDao> {
        Arc::new(InMemoryEmployeeDao { store: self.store() })
    }

    fn category_dao(&self) -> Arc<dyn ProductCategoryDao> {
        Arc::new(InMemoryProductCategoryDao { store: self.store() })
    }

    fn category_picture_dao(&self) -> Arc<dyn ProductCategoryPictureDao> {
        Arc::new(InMemoryProductCategoryPictureDao { store: self.store() })
    }
}

/// In-memory [`ProductDao`].
#[derive(Debug, Clone)]
pub struct InMemoryProductDao {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl ProductDao for InMemoryProductDao {
    async fn insert(&self, product: &ProductRecord) -> NorthwindResult<i32> {
        ensure_unsaved(product.id)?;
        product.validate_record()?;

        let mut table = self.store.products.lock().await;
        let id = table.next_id("Products")?;
        table.rows.insert(
            id,
            ProductRecord {
                id: Some(id),
                ..product.clone()
            },
        );
        Ok(id)
    }

    async fn find(&self, id: i32) -> NorthwindResult<ProductRecord> {
        ensure_positive_id("id", id)?;
        self.store
            .products
            .lock()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| NorthwindError::not_found("Product", id))
    }

    async fn update(&self, product: &ProductRecord) -> NorthwindResult<bool> {
        let id = ensure_saved(product.id)?;
        product.validate_record()?;

        let mut table = self.store.products.lock().await;
        Ok(match table.rows.get_mut(&id) {
            Some(row) => {
                *row = product.clone();
                true
            }
            None => false,
        })
    }

    async fn delete(&self, id: i32) -> NorthwindResult<bool> {
        ensure_positive_id("id", id)?;
        Ok(self.store.products.lock().await.rows.remove(&id).is_some())
    }

    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<ProductRecord>> {
        Ok(self.store.products.lock().await.page(page))
    }

    async fn select_by_names(&self, names: &[String]) -> NorthwindResult<Vec<ProductRecord>> {
        ensure_not_empty("names", names)?;
        let table = self.store.products.lock().await;
        Ok(table
            .rows
            .values()
            .filter(|product| name_in(&product.name, names))
            .cloned()
            .collect())
    }

    async fn select_by_categories(&self, category_ids: &[i32]) -> NorthwindResult<Vec<ProductRecord>> {
        ensure_not_empty("category_ids", category_ids)?;
        for id in category_ids {
            ensure_positive_id("category_ids", *id)?;
        }
        let table = self.store.products.lock().await;
        Ok(table
            .rows
            .values()
            .filter(|product| {
                product
                    .category_id
                    .is_some_and(|category_id| category_ids.contains(&category_id))
            })
            .cloned()
            .collect())
    }
}

/// In-memory [`EmployeeDao`].
#[derive(Debug, Clone)]
pub struct InMemoryEmployeeDao {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl EmployeeDao for InMemoryEmployeeDao {
    async fn insert(&self, employee: &EmployeeRecord) -> NorthwindResult<i32> {
        ensure_unsaved(employee.id)?;
        employee.validate_record()?;

        let mut table = self.store.employees.lock().await;
        let id = table.next_id("Employees")?;
        table.rows.insert(
            id,
            EmployeeRecord {
                id: Some(id),
                ..employee.clone()
            },
        );
        Ok(id)
    }

    async fn find(&self, id: i32) -> NorthwindResult<EmployeeRecord> {
        ensure_positive_id("id", id)?;
        self.store
            .employees
            .lock()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| NorthwindError::not_found("Employee", id))
    }

    async fn update(&self, employee: &EmployeeRecord) -> NorthwindResult<bool> {
        let id = ensure_saved(employee.id)?;
        employee.validate_record()?;

        let mut table = self.store.employees.lock().await;
        Ok(match table.rows.get_mut(&id) {
            Some(row) => {
                *row = employee.clone();
                true
            }
            None => false,
        })
    }

    async fn delete(&self, id: i32) -> NorthwindResult<bool> {
        ensure_positive_id("id", id)?;
        Ok(self.store.employees.lock().await.rows.remove(&id).is_some())
    }

    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<EmployeeRecord>> {
        Ok(self.store.employees.lock().await.page(page))
    }

    async fn select_by_last_names(&self, last_names: &[String]) -> NorthwindResult<Vec<EmployeeRecord>> {
        ensure_not_empty("last_names", last_names)?;
        let table = self.store.employees.lock().await;
        Ok(table
            .rows
            .values()
            .filter(|employee| name_in(&employee.last_name, last_names))
            .cloned()
            .collect())
    }
}

/// In-memory [`ProductCategoryDao`].
#[derive(Debug, Clone)]
pub struct InMemoryProductCategoryDao {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl ProductCategoryDao for InMemoryProductCategoryDao {
    async fn insert(&self, category: &ProductCategoryRecord) -> NorthwindResult<i32> {
        ensure_unsaved(category.id)?;
        category.validate_record()?;

        let mut table = self.store.categories.lock().await;
        let id = table.next_id("Categories")?;
        let record = ProductCategoryRecord {
            id: Some(id),
            ..category.clone()
        };
        table.rows.insert(id, StoredCategory { record, picture: None });
        Ok(id)
    }

    async fn find(&self, id: i32) -> NorthwindResult<ProductCategoryRecord> {
        ensure_positive_id("id", id)?;
        self.store
            .categories
            .lock()
            .await
            .rows
            .get(&id)
            .map(|stored| stored.record.clone())
            .ok_or_else(|| NorthwindError::not_found("ProductCategory", id))
    }

    async fn update(&self, category: &ProductCategoryRecord) -> NorthwindResult<bool> {
        let id = ensure_saved(category.id)?;
        category.validate_record()?;

        let mut table = self.store.categories.lock().await;
        Ok(match table.rows.get_mut(&id) {
            Some(stored) => {
                stored.record = category.clone();
                true
            }
            None => false,
        })
    }

    async fn delete(&self, id: i32) -> NorthwindResult<bool> {
        ensure_positive_id("id", id)?;
        Ok(self.store.categories.lock().await.rows.remove(&id).is_some())
    }

    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<ProductCategoryRecord>> {
        let table = self.store.categories.lock().await;
        Ok(table.page(page).into_iter().map(|stored| stored.record).collect())
    }

    async fn select_by_names(&self, names: &[String]) -> NorthwindResult<Vec<ProductCategoryRecord>> {
        ensure_not_empty("names", names)?;
        let table = self.store.categories.lock().await;
        Ok(table
            .rows
            .values()
            .filter(|stored| name_in(&stored.record.name, names))
            .map(|stored| stored.record.clone())
            .collect())
    }
}

/// In-memory [`ProductCategoryPictureDao`].
#[derive(Debug, Clone)]
pub struct InMemoryProductCategoryPictureDao {
    store: Arc<InMemoryStore>,
}

#[async_trait]
impl ProductCategoryPictureDao for InMemoryProductCategoryPictureDao {
    async fn find_picture(&self, category_id: i32) -> NorthwindResult<Option<Vec<u8>>> {
        ensure_positive_id("category_id", category_id)?;
        self.store
            .categories
            .lock()
            .await
            .rows
            .get(&category_id)
            .map(|stored| stored.picture.clone())
            .ok_or_else(|| NorthwindError::not_found("ProductCategory", category_id))
    }

    async fn update_picture(&self, category_id: i32, picture: &[u8]) -> NorthwindResult<bool> {
        ensure_positive_id("category_id", category_id)?;
        let mut table = self.store.categories.lock().await;
        Ok(match table.rows.get_mut(&category_id) {
            Some(stored) => {
                stored.picture = Some(picture.to_vec());
                true
            }
            None => false,
        })
    }

    async fn delete_picture(&self, category_id: i32) -> NorthwindResult<bool> {
        ensure_positive_id("category_id", category_id)?;
        let mut table = self.store.categories.lock().await;
        Ok(match table.rows.get_mut(&category_id) {
            Some(stored) => {
                stored.picture = None;
                true
            }
            None => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn chai() -> ProductRecord {
        ProductRecord {
            unit_price: Some(Decimal::from_str("18.00").unwrap()),
            ..ProductRecord::new("Chai")
        }
    }

    #[tokio::test]
    async fn test_insert_then_find_returns_input_with_identity() {
        let dao = InMemoryDaoFactory::new().product_dao();
        let product = ProductRecord {
            supplier_id: Some(1),
            category_id: Some(1),
            quantity_per_unit: Some("10 boxes x 20 bags".to_string()),
            units_in_stock: Some(39),
            units_on_order: Some(0),
            reorder_level: None,
            ..chai()
        };

        let id = dao.insert(&product).await.unwrap();
        let found = dao.find(id).await.unwrap();

        assert_eq!(
            found,
            ProductRecord {
                id: Some(id),
                ..product
            }
        );
    }

    #[tokio::test]
    async fn test_identities_auto_increment_per_table() {
        let factory = InMemoryDaoFactory::new();
        assert_eq!(factory.product_dao().insert(&chai()).await.unwrap(), 1);
        assert_eq!(
            factory.product_dao().insert(&ProductRecord::new("Chang")).await.unwrap(),
            2
        );
        assert_eq!(
            factory
                .category_dao()
                .insert(&ProductCategoryRecord::new("Beverages"))
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_non_positive_identity_is_validation_fault() {
        let factory = InMemoryDaoFactory::new();
        for id in [0, -1, i32::MIN] {
            assert!(factory.product_dao().find(id).await.unwrap_err().is_validation());
            assert!(factory.employee_dao().delete(id).await.unwrap_err().is_validation());
            assert!(factory.category_dao().find(id).await.unwrap_err().is_validation());
            assert!(factory
                .category_picture_dao()
                .delete_picture(id)
                .await
                .unwrap_err()
                .is_validation());
        }
    }

    #[tokio::test]
    async fn test_update_of_missing_row_is_false_and_creates_nothing() {
        let dao = InMemoryDaoFactory::new().product_dao();
        let ghost = ProductRecord {
            id: Some(42),
            ..chai()
        };

        assert!(!dao.update(&ghost).await.unwrap());
        assert!(dao.find(42).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let dao = InMemoryDaoFactory::new().employee_dao();
        let id = dao.insert(&EmployeeRecord::new("Nancy", "Davolio")).await.unwrap();

        assert!(dao.delete(id).await.unwrap());
        assert!(!dao.delete(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_pages_concatenate_to_full_ordered_set() {
        let dao = InMemoryDaoFactory::new().product_dao();
        for name in ["Chai", "Chang", "Aniseed Syrup", "Ikura", "Konbu", "Tofu", "Pavlova"] {
            dao.insert(&ProductRecord::new(name)).await.unwrap();
        }

        let mut collected = Vec::new();
        let mut page = PageRequest::new(0, 3).unwrap();
        loop {
            let rows = dao.select_page(page).await.unwrap();
            if rows.is_empty() {
                break;
            }
            assert!(rows.len() <= 3);
            collected.extend(rows);
            page = page.next();
        }

        let ids: Vec<i32> = collected.iter().filter_map(|p| p.id).collect();
        assert_eq!(ids, (1..=7).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_select_by_keys() {
        let factory = InMemoryDaoFactory::new();
        let products = factory.product_dao();
        products.insert(&chai()).await.unwrap();

        assert!(products.select_by_names(&[]).await.unwrap_err().is_validation());

        let names = vec!["Chai".to_string(), "Nonexistent".to_string()];
        let found = products.select_by_names(&names).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Chai");
    }

    #[tokio::test]
    async fn test_name_lookups_ignore_case() {
        let factory = InMemoryDaoFactory::new();
        factory.product_dao().insert(&chai()).await.unwrap();
        factory
            .category_dao()
            .insert(&ProductCategoryRecord::new("Beverages"))
            .await
            .unwrap();
        factory
            .employee_dao()
            .insert(&EmployeeRecord::new("Nancy", "Davolio"))
            .await
            .unwrap();

        let products = factory
            .product_dao()
            .select_by_names(&["CHAI".to_string()])
            .await
            .unwrap();
        assert_eq!(products[0].name, "Chai");

        let categories = factory
            .category_dao()
            .select_by_names(&["beverages".to_string()])
            .await
            .unwrap();
        assert_eq!(categories.len(), 1);

        let employees = factory
            .employee_dao()
            .select_by_last_names(&["davolio".to_string()])
            .await
            .unwrap();
        assert_eq!(employees.len(), 1);
    }

    #[tokio::test]
    async fn test_fractional_hire_date_is_rejected_before_insert() {
        let dao = InMemoryDaoFactory::new().employee_dao();
        let employee = EmployeeRecord {
            hire_date: chrono::NaiveDate::from_ymd_opt(1992, 5, 1)
                .and_then(|d| d.and_hms_milli_opt(9, 0, 0, 750)),
            ..EmployeeRecord::new("Nancy", "Davolio")
        };
        assert!(dao.insert(&employee).await.unwrap_err().is_validation());
        assert!(dao.find(1).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_select_by_categories() {
        let dao = InMemoryDaoFactory::new().product_dao();
        for (name, category) in [("Chai", Some(1)), ("Ikura", Some(8)), ("Loose", None)] {
            let product = ProductRecord {
                category_id: category,
                ..ProductRecord::new(name)
            };
            dao.insert(&product).await.unwrap();
        }

        let found = dao.select_by_categories(&[8, 99]).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ikura");
        assert!(dao.select_by_categories(&[]).await.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn test_employee_lookup_by_last_name() {
        let dao = InMemoryDaoFactory::new().employee_dao();
        dao.insert(&EmployeeRecord::new("Nancy", "Davolio")).await.unwrap();
        dao.insert(&EmployeeRecord::new("Andrew", "Fuller")).await.unwrap();

        let found = dao
            .select_by_last_names(&["Fuller".to_string(), "Nancy".to_string()])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].first_name, "Andrew");
    }

    #[tokio::test]
    async fn test_chai_scenario() {
        let dao = InMemoryDaoFactory::new().product_dao();

        let id = dao.insert(&chai()).await.unwrap();
        assert_eq!(id, 1);

        let mut found = dao.find(1).await.unwrap();
        assert_eq!(found.name, "Chai");
        assert_eq!(found.unit_price, Some(Decimal::from_str("18.00").unwrap()));
        assert!(!found.discontinued);

        found.unit_price = Some(Decimal::from_str("20.00").unwrap());
        assert!(dao.update(&found).await.unwrap());
        assert_eq!(
            dao.find(1).await.unwrap().unit_price,
            Some(Decimal::from_str("20.00").unwrap())
        );

        assert!(dao.delete(1).await.unwrap());
        let err = dao.find(1).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains('1'));
    }

    #[tokio::test]
    async fn test_picture_lifecycle() {
        let factory = InMemoryDaoFactory::new();
        let categories = factory.category_dao();
        let pictures = factory.category_picture_dao();

        let id = categories.insert(&ProductCategoryRecord::new("Beverages")).await.unwrap();
        assert_eq!(pictures.find_picture(id).await.unwrap(), None);

        assert!(pictures.update_picture(id, &[0x89, 0x50, 0x4E, 0x47]).await.unwrap());
        assert_eq!(
            pictures.find_picture(id).await.unwrap(),
            Some(vec![0x89, 0x50, 0x4E, 0x47])
        );

        assert!(pictures.delete_picture(id).await.unwrap());
        assert_eq!(pictures.find_picture(id).await.unwrap(), None);
        assert_eq!(categories.find(id).await.unwrap().name, "Beverages");

        assert!(pictures.find_picture(999).await.unwrap_err().is_not_found());
        assert!(!pictures.update_picture(999, &[1]).await.unwrap());
        assert!(!pictures.delete_picture(999).await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_picture_is_not_absent() {
        let factory = InMemoryDaoFactory::new();
        let id = factory
            .category_dao()
            .insert(&ProductCategoryRecord::new("Produce"))
            .await
            .unwrap();
        let pictures = factory.category_picture_dao();

        assert!(pictures.update_picture(id, &[]).await.unwrap());
        assert_eq!(pictures.find_picture(id).await.unwrap(), Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_category_update_keeps_picture() {
        let factory = InMemoryDaoFactory::new();
        let id = factory
            .category_dao()
            .insert(&ProductCategoryRecord::new("Seafood"))
            .await
            .unwrap();
        factory.category_picture_dao().update_picture(id, &[7]).await.unwrap();

        let renamed = ProductCategoryRecord {
            id: Some(id),
            name: "Fish".to_string(),
            description: Some("Seaweed and fish".to_string()),
        };
        assert!(factory.category_dao().update(&renamed).await.unwrap());
        assert_eq!(
            factory.category_picture_dao().find_picture(id).await.unwrap(),
            Some(vec![7])
        );
    }

    #[tokio::test]
    async fn test_separate_factories_do_not_share_rows() {
        let first = InMemoryDaoFactory::new();
        let second = InMemoryDaoFactory::new();
        first.product_dao().insert(&chai()).await.unwrap();

        assert!(second.product_dao().find(1).await.unwrap_err().is_not_found());

        let shared = InMemoryDaoFactory::with_store(first.store());
        assert_eq!(shared.product_dao().find(1).await.unwrap().name, "Chai");
    }
}
