use std::sync::Arc;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::factory::{create_metadata_lookup, create_publisher};

pub(crate) async fn create_catalog_service(config: &Configuration) -> LibraryResult<Arc<dyn CatalogService>> {
    let book_repo = factory::create_book_repository(config).await;
    let lookup = create_metadata_lookup(config)?;
    let publisher = create_publisher();
    Ok(Arc::new(CatalogServiceImpl::new(book_repo, lookup, publisher)))
}
