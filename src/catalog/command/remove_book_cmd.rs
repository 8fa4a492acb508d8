use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for RemoveBookCommandResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        if self.catalog_service.find_book_by_isbn(req.isbn.as_str()).await?.is_none() {
            return Err(CommandError::NotFound {
                message: format!("book with isbn {} was not found", req.isbn),
            });
        }
        self.catalog_service.remove_book(req.isbn.as_str()).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use rust_decimal::Decimal;
    use crate::books::dto::BookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn new_service() -> Arc<dyn CatalogService> {
        let config = Configuration::new("unused.xml").with_store(RepositoryStore::Memory);
        Arc::from(factory::create_catalog_service(&config).await.expect("should create service"))
    }

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let svc = new_service().await;
        let add_cmd = AddBookCommand::new(svc.clone());
        let remove_cmd = RemoveBookCommand::new(svc.clone());

        let book = BookDto::new("0132350882", "Clean Code", "cs", "Robert C. Martin", 2008, Decimal::new(3799, 2));
        let _ = add_cmd.execute(AddBookCommandRequest::new(book.clone()))
            .await.expect("should add book");
        let _ = remove_cmd.execute(RemoveBookCommandRequest::new(book.isbn.to_string())).await.expect("should remove book");
        assert!(svc.find_book_by_isbn(book.isbn.as_str()).await.expect("should not fail").is_none());
    }

    #[tokio::test]
    async fn test_should_not_remove_missing_book() {
        let remove_cmd = RemoveBookCommand::new(new_service().await);
        let res = remove_cmd.execute(RemoveBookCommandRequest::new("0132350883".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
