//! DAO (Data Access Object) layer.
//!
//! One contract per entity. Each implementation talks to a single data
//! source; callers obtain implementations through a [`DaoFactory`] and never
//! construct them directly.
//!
//! Hierarchy:
//! ```text
//! Management service → DAO (interface + impl) → MySQL
//! ```
//!
//! [`DaoFactory`]: crate::DaoFactory

pub mod category_dao;
pub mod category_picture_dao;
pub mod employee_dao;
pub mod guard;
pub mod product_dao;

pub mod r#impl;

pub use category_dao::ProductCategoryDao;
pub use category_picture_dao::ProductCategoryPictureDao;
pub use employee_dao::EmployeeDao;
pub use r#impl::{
    MySqlEmployeeDaoImpl, MySqlProductCategoryDaoImpl, MySqlProductCategoryPictureDaoImpl,
    MySqlProductDaoImpl,
};
pub use product_dao::ProductDao;

#[cfg(any(test, feature = "test-support"))]
pub use category_dao::MockProductCategoryDao;
#[cfg(any(test, feature = "test-support"))]
pub use category_picture_dao::MockProductCategoryPictureDao;
#[cfg(any(test, feature = "test-support"))]
pub use employee_dao::MockEmployeeDao;
#[cfg(any(test, feature = "test-support"))]
pub use product_dao::MockProductDao;
