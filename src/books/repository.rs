pub mod xml_book_repository;
pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    async fn count(&self) -> LibraryResult<usize> {
        self.find_all().await.map(|books| books.len())
    }
}
