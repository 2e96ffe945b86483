//! Startup sequence of the bootstrap binary.

use crate::di::build_data_access_module;
use northwind_config::AppConfig;
use northwind_core::{NorthwindResult, PageRequest};
use northwind_repository::{DaoFactory, DatabasePoolInterface, ProductCategoryDao};
use northwind_service::ServiceRegistry;
use shaku::HasComponent;
use std::sync::Arc;
use tracing::info;

/// Connects, optionally migrates, checks the store and builds the services.
///
/// The pool is closed before returning, whether or not a later step failed.
pub async fn run(config: AppConfig) -> NorthwindResult<()> {
    info!("Environment: {}", config.app.environment);

    let module = build_data_access_module(&config.database).await?;
    let pool: Arc<dyn DatabasePoolInterface> = module.resolve();

    let result = prepare(&config, &module, pool.as_ref()).await;
    pool.close().await;
    result
}

async fn prepare(
    config: &AppConfig,
    module: &crate::di::DataAccessModule,
    pool: &dyn DatabasePoolInterface,
) -> NorthwindResult<()> {
    if config.database.run_migrations {
        pool.run_migrations().await?;
    }
    pool.health_check().await?;
    info!("Database health check passed");

    let factory: Arc<dyn DaoFactory> = module.resolve();
    let services = ServiceRegistry::new(factory.as_ref());

    let categories = services
        .categories
        .select_page(PageRequest::new(0, 1)?)
        .await?;
    info!(
        "Data access layer ready, first category page holds {} row(s)",
        categories.len()
    );

    Ok(())
}
