pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// update_book and remove_book do not check that the isbn exists; callers that need
// a not-found answer look the book up first.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn find_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>>;
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, isbn: &str) -> LibraryResult<()>;
    async fn generate_report(&self) -> LibraryResult<String>;
}
