//! # Northwind Repository
//!
//! Data access objects over the Northwind relational store:
//!
//! ```text
//! Caller
//!   ↓  Arc<dyn ProductDao>        (DAO contract)
//! DaoFactory                      (selects the backend)
//!   ↓
//! MySqlProductDaoImpl             (DAO impl, MySQL via SQLx)
//!   ↓
//! MySQL
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   pool.rs                            ← DatabasePool
//!   timeout.rs                         ← per-statement deadline
//!   factory.rs                         ← DaoFactory, MySqlDaoFactory
//!   testing.rs                         ← InMemoryDaoFactory (tests only)
//!   dao/
//!     guard.rs                         ← argument checks shared by all backends
//!     product_dao.rs                   ← ProductDao trait
//!     employee_dao.rs                  ← EmployeeDao trait
//!     category_dao.rs                  ← ProductCategoryDao trait
//!     category_picture_dao.rs          ← ProductCategoryPictureDao trait
//!     impl/
//!       mysql/
//!         statement.rs                 ← bound IN-clause builder
//!         product_dao_impl.rs          ← MySqlProductDaoImpl
//!         …
//! ```

pub mod dao;
pub mod factory;
pub mod pool;
pub mod timeout;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use dao::*;
pub use factory::*;
pub use pool::*;
