use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// Keeps books in insertion order behind a single mutex; nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Mutex<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<BookEntity>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.lock().await.clone())
    }

    async fn get(&self, id: &str) -> LibraryResult<Option<BookEntity>> {
        Ok(self.books.lock().await.iter().find(|b| b.id() == id).cloned())
    }

    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.lock().await;
        if books.iter().any(|b| b.id() == entity.id()) {
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {} already exists", entity.isbn).as_str()));
        }
        books.push(entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.lock().await;
        match books.iter_mut().find(|b| b.id() == entity.id()) {
            Some(book) => {
                book.title = entity.title.to_string();
                book.category = entity.category.to_string();
                book.authors = entity.authors.clone();
                book.year = entity.year;
                book.price = entity.price;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut books = self.books.lock().await;
        match books.iter().position(|b| b.id() == id) {
            Some(position) => {
                books.remove(position);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    fn test_book(isbn: &str) -> BookEntity {
        BookEntity::new(isbn, "Learning XML", "web", &["Erik T. Ray"], 2003, Decimal::new(3995, 2))
    }

    #[tokio::test]
    async fn test_should_create_get_books() {
        let repo = MemoryBookRepository::new();
        let book = test_book("0596004206");
        assert_eq!(1, repo.create(&book).await.expect("should create book"));
        let loaded = repo.get("0596004206").await.expect("should get").expect("should find book");
        assert_eq!(book, loaded);
        assert!(matches!(repo.create(&book).await, Err(LibraryError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_update_and_delete_books() {
        let repo = MemoryBookRepository::with_books(vec![test_book("0596004206")]);
        let mut book = test_book("0596004206");
        book.authors = vec![];
        assert_eq!(1, repo.update(&book).await.expect("should update book"));
        assert_eq!(0, repo.update(&test_book("1111111111")).await.expect("should not fail"));
        assert!(repo.get("0596004206").await.expect("should get").expect("should find book").authors.is_empty());

        assert_eq!(0, repo.delete("1111111111").await.expect("should not fail"));
        assert_eq!(1, repo.delete("0596004206").await.expect("should delete book"));
        assert_eq!(0, repo.count().await.expect("should count"));
    }
}
