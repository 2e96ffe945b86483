//! End-to-end behaviour of the management services over the in-memory backend.

use northwind_core::{EmployeeRecord, PageRequest, ProductCategoryRecord, ProductRecord};
use northwind_repository::testing::InMemoryDaoFactory;
use northwind_repository::{EmployeeDao, ProductCategoryDao, ProductCategoryPictureDao, ProductDao};
use northwind_service::ServiceRegistry;
use rust_decimal::Decimal;
use std::str::FromStr;

fn registry() -> ServiceRegistry {
    ServiceRegistry::new(&InMemoryDaoFactory::new())
}

#[tokio::test]
async fn test_chai_scenario_through_service() {
    let services = registry();
    let chai = ProductRecord {
        unit_price: Some(Decimal::from_str("18.00").unwrap()),
        ..ProductRecord::new("Chai")
    };

    let id = services.products.insert(&chai).await.unwrap();
    assert_eq!(id, 1);

    let mut found = services.products.find(id).await.unwrap();
    assert_eq!(found, ProductRecord { id: Some(1), ..chai });

    found.unit_price = Some(Decimal::from_str("20.00").unwrap());
    assert!(services.products.update(&found).await.unwrap());
    assert_eq!(
        services.products.find(id).await.unwrap().unit_price,
        Some(Decimal::from_str("20.00").unwrap())
    );

    assert!(services.products.delete(id).await.unwrap());
    assert!(services.products.find(id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_services_share_the_factory_store() {
    let services = registry();

    let category = services
        .categories
        .insert(&ProductCategoryRecord::new("Condiments"))
        .await
        .unwrap();
    assert!(services
        .category_pictures
        .update_picture(category, &[1, 2, 3])
        .await
        .unwrap());
    assert_eq!(
        services.category_pictures.find_picture(category).await.unwrap(),
        Some(vec![1, 2, 3])
    );

    assert!(services.category_pictures.find_picture(999).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_validation_faults_surface_from_services() {
    let services = registry();

    assert!(services.employees.find(0).await.unwrap_err().is_validation());
    assert!(services
        .employees
        .select_by_last_names(&[])
        .await
        .unwrap_err()
        .is_validation());
    assert!(PageRequest::new(-1, 10).is_err());

    let id = services
        .employees
        .insert(&EmployeeRecord::new("Janet", "Leverling"))
        .await
        .unwrap();
    let page = services
        .employees
        .select_page(PageRequest::new(0, 10).unwrap())
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, Some(id));
}
