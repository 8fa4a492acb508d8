use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::core::library::LibraryResult;

// Every operation of an implementation is atomic with respect to every other
// operation on the same instance.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // returns every entity in storage order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;

    // get an entity, None when the key is absent
    async fn get(&self, id: &str) -> LibraryResult<Option<Entity>>;

    // create an entity, DuplicateKey when the key already exists
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity, returns 0 without error when the key is absent
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // delete an entity, returns 0 without error when the key is absent
    async fn delete(&self, id: &str) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RepositoryStore {
    Xml,
    Memory,
}

impl From<String> for RepositoryStore {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "memory" => RepositoryStore::Memory,
            _ => RepositoryStore::Xml,
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::Xml => write!(f, "xml"),
            RepositoryStore::Memory => write!(f, "memory"),
        }
    }
}
