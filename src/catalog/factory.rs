use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub async fn create_catalog_service(config: &Configuration) -> LibraryResult<Box<dyn CatalogService>> {
    let book_repo = factory::create_book_repository(config).await?;
    Ok(Box::new(CatalogServiceImpl::new(config, book_repo)))
}
