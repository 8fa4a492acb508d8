use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// isbn addresses the book to update and must equal book.isbn, which is never changed
#[derive(Debug)]
pub struct UpdateBookCommandRequest {
    pub isbn: String,
    pub book: BookDto,
}

impl UpdateBookCommandRequest {
    pub fn new(isbn: &str, book: BookDto) -> Self {
        Self {
            isbn: isbn.to_string(),
            book,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        if req.isbn != req.book.isbn {
            return Err(CommandError::Validation {
                message: "isbn in the path does not match the isbn in the body".to_string(),
                reason_code: Some("isbn".to_string()),
            });
        }
        req.book.validate()?;
        if self.catalog_service.find_book_by_isbn(req.isbn.as_str()).await?.is_none() {
            return Err(CommandError::NotFound {
                message: format!("book with isbn {} was not found", req.isbn),
            });
        }
        self.catalog_service.update_book(&req.book).await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use rust_decimal::Decimal;
    use crate::books::dto::BookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Arc<dyn CatalogService>> = AsyncOnce::new(async {
                let config = Configuration::new("unused.xml").with_store(RepositoryStore::Memory);
                Arc::from(factory::create_catalog_service(&config).await.expect("should create service"))
            });
    }

    fn test_book(isbn: &str) -> BookDto {
        BookDto::new(isbn, "Refactoring", "cs", "Martin Fowler", 1999, Decimal::new(4750, 2))
    }

    #[tokio::test]
    async fn test_should_run_update_book() {
        let svc = SUT_SVC.get().await.clone();
        let add_cmd = AddBookCommand::new(svc.clone());
        let update_cmd = UpdateBookCommand::new(svc);

        let mut book = test_book("0201485672");
        let _ = add_cmd.execute(AddBookCommandRequest::new(book.clone())).await.expect("should add book");
        book.author = "Martin Fowler, Kent Beck".to_string();
        let res = update_cmd.execute(UpdateBookCommandRequest::new("0201485672", book.clone()))
            .await.expect("should update book");
        assert_eq!(book, res.book);
    }

    #[tokio::test]
    async fn test_should_reject_isbn_mismatch() {
        let update_cmd = UpdateBookCommand::new(SUT_SVC.get().await.clone());
        let res = update_cmd.execute(UpdateBookCommandRequest::new("0201485673", test_book("0201485674"))).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_not_update_missing_book() {
        let update_cmd = UpdateBookCommand::new(SUT_SVC.get().await.clone());
        let res = update_cmd.execute(UpdateBookCommandRequest::new("0201485675", test_book("0201485675"))).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
