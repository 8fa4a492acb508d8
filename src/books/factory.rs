use tracing::info;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::books::repository::xml_book_repository::XmlBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;

pub async fn create_book_repository(config: &Configuration) -> LibraryResult<Box<dyn BookRepository>> {
    info!(store = %config.store, "creating book repository");
    match config.store {
        RepositoryStore::Xml => {
            let repo = XmlBookRepository::new(config.xml_file_path.as_str()).await?;
            Ok(Box::new(repo))
        }
        RepositoryStore::Memory => {
            Ok(Box::new(MemoryBookRepository::new()))
        }
    }
}
