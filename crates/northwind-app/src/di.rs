//! Dependency injection module using Shaku.
//!
//! `DataAccessModule` holds the connection pool, one MySQL DAO per entity,
//! and the factory that hands those DAOs out.

use northwind_config::DatabaseConfig;
use northwind_core::NorthwindResult;
use northwind_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, MySqlDaoFactory,
    MySqlEmployeeDaoImpl, MySqlProductCategoryDaoImpl, MySqlProductCategoryPictureDaoImpl,
    MySqlProductDaoImpl,
};
use shaku::module;
use std::sync::Arc;

module! {
    pub DataAccessModule {
        components = [
            DatabasePool,
            MySqlDaoFactory,
            MySqlProductDaoImpl,
            MySqlEmployeeDaoImpl,
            MySqlProductCategoryDaoImpl,
            MySqlProductCategoryPictureDaoImpl,
        ],
        providers = [],
    }
}

/// Connects to the store and builds the data access module around the pool.
pub async fn build_data_access_module(config: &DatabaseConfig) -> NorthwindResult<Arc<DataAccessModule>> {
    let pool = DatabasePool::connect(config).await?;
    Ok(data_access_module(&pool))
}

/// Builds the data access module around an existing pool.
#[must_use]
pub fn data_access_module(pool: &DatabasePool) -> Arc<DataAccessModule> {
    let module = DataAccessModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: pool.inner().clone(),
            statement_timeout: pool.statement_timeout(),
        })
        .build();

    Arc::new(module)
}
