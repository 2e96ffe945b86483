//! # Northwind App
//!
//! Wires the data access layer together: configuration, the connection
//! pool, the DAO factory and the management services.

pub mod di;
pub mod startup;
