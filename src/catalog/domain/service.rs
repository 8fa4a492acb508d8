use async_trait::async_trait;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::report::render_report;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn find_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>> {
        self.book_repository.get(isbn).await.map(|b| b.as_ref().map(BookDto::from))
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.create(&BookEntity::from(book)).await?;
        info!(isbn = book.isbn.as_str(), "book added to catalog");
        Ok(book.clone())
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let updated = self.book_repository.update(&BookEntity::from(book)).await?;
        info!(isbn = book.isbn.as_str(), updated, "book update applied");
        Ok(book.clone())
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        let removed = self.book_repository.delete(isbn).await?;
        info!(isbn, removed, "book removal applied");
        Ok(())
    }

    async fn generate_report(&self) -> LibraryResult<String> {
        let books = self.find_books().await?;
        Ok(render_report(&books))
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use rust_decimal::Decimal;
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::core::repository::RepositoryStore;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Box<dyn CatalogService>> = AsyncOnce::new(async {
                let config = Configuration::new("unused.xml").with_store(RepositoryStore::Memory);
                factory::create_catalog_service(&config).await.expect("should create service")
            });
    }

    fn new_service(books: Vec<BookEntity>) -> CatalogServiceImpl {
        CatalogServiceImpl::new(&Configuration::new("unused.xml"), Box::new(MemoryBookRepository::with_books(books)))
    }

    fn test_book(isbn: &str) -> BookDto {
        BookDto::new(isbn, "test book", "testing", "John Doe, Jane Smith", 2020, Decimal::new(999, 2))
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = SUT_SVC.get().await;

        let book = test_book("1000000001");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        let loaded = catalog_svc.find_book_by_isbn(book.isbn.as_str()).await
            .expect("should find book").expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_book() {
        let catalog_svc = SUT_SVC.get().await;

        let book = test_book("1000000002");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");
        let res = catalog_svc.add_book(&book).await;
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let catalog_svc = SUT_SVC.get().await;

        let mut book = test_book("1000000003");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        book.title = "new title".to_string();
        book.author = "Someone Else".to_string();
        let _ = catalog_svc.update_book(&book).await.expect("should update book");

        let loaded = catalog_svc.find_book_by_isbn(book.isbn.as_str()).await
            .expect("should find book").expect("should return book");
        assert_eq!("new title", loaded.title.as_str());
        assert_eq!("Someone Else", loaded.author.as_str());
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let catalog_svc = SUT_SVC.get().await;

        let book = test_book("1000000004");
        let _ = catalog_svc.add_book(&book).await.expect("should add book");
        let _ = catalog_svc.remove_book(book.isbn.as_str()).await.expect("should remove book");

        let loaded = catalog_svc.find_book_by_isbn(book.isbn.as_str()).await.expect("should not fail");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_should_format_author_string() {
        let svc = new_service(vec![
            BookEntity::new("123", "Unit Testing Masterclass", "", &["John Doe", "Jane Smith"], 0, Decimal::ZERO)]);
        let books = svc.find_books().await.expect("should list books");
        assert_eq!(1, books.len());
        assert_eq!("John Doe, Jane Smith", books[0].author.as_str());
    }

    #[tokio::test]
    async fn test_should_return_none_for_missing_book() {
        let svc = new_service(vec![]);
        assert!(svc.find_book_by_isbn("99999").await.expect("should not fail").is_none());
    }

    #[tokio::test]
    async fn test_should_not_create_on_missing_update_or_remove() {
        let svc = new_service(vec![]);
        let _ = svc.update_book(&test_book("2000000001")).await.expect("should not fail");
        let _ = svc.remove_book("2000000002").await.expect("should not fail");
        assert!(svc.find_books().await.expect("should list books").is_empty());
    }

    #[tokio::test]
    async fn test_should_generate_report() {
        let svc = new_service(vec![]);
        let html = svc.generate_report().await.expect("should render report");
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<th>title</th>"));
        assert!(html.contains("<th>author</th>"));
        assert!(html.contains("<th>price</th>"));

        let _ = svc.add_book(&BookDto::new("3000000001", "T", "C", "A", 2020, Decimal::new(999, 2)))
            .await.expect("should add book");
        let html = svc.generate_report().await.expect("should render report");
        assert!(html.contains("<td>T</td>\n                <td>A</td>\n                <td>C</td>\n                <td>2020</td>\n                <td>9.99</td>"));
    }
}
