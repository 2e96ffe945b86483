//! # Northwind Core
//!
//! Core types, transfer records, and error definitions shared by every
//! layer of the Northwind data access workspace.

pub mod error;
pub mod pagination;
pub mod records;
pub mod result;
pub mod telemetry;
pub mod validation;

pub use error::*;
pub use pagination::*;
pub use records::*;
pub use result::*;
pub use validation::*;
