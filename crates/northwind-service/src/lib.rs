//! # Northwind Service
//!
//! Management services that resolve a DAO from a [`DaoFactory`] and forward
//! every call to it. Upstream code depends on the DAO traits only, whatever
//! backend the factory selects.
//!
//! [`DaoFactory`]: northwind_repository::DaoFactory

pub mod category_picture_service;
pub mod category_service;
pub mod employee_service;
pub mod product_service;
pub mod registry;

pub use category_picture_service::ProductCategoryPictureManagementService;
pub use category_service::ProductCategoryManagementService;
pub use employee_service::EmployeeManagementService;
pub use product_service::ProductManagementService;
pub use registry::ServiceRegistry;
