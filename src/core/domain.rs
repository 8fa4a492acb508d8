use std::env;
use crate::core::repository::RepositoryStore;

pub const DEFAULT_XML_FILE_PATH: &str = "Data/bookstore.xml";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the bookstore catalog
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub xml_file_path: String,
    pub store: RepositoryStore,
    pub listen_addr: String,
    pub lambda: bool,
}

impl Configuration {
    pub fn new(xml_file_path: &str) -> Self {
        Configuration {
            xml_file_path: xml_file_path.to_string(),
            store: RepositoryStore::Xml,
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            lambda: false,
        }
    }

    pub fn from_env() -> Self {
        let xml_file_path = env::var("BOOKSTORE_XML_FILE_PATH")
            .unwrap_or_else(|_| DEFAULT_XML_FILE_PATH.to_string());
        let mut config = Configuration::new(xml_file_path.as_str());
        if let Ok(store) = env::var("BOOKSTORE_STORE") {
            config.store = RepositoryStore::from(store);
        }
        if let Ok(addr) = env::var("BOOKSTORE_LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        config.lambda = env::var("BOOKSTORE_LAMBDA")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);
        config
    }

    pub fn with_store(mut self, store: RepositoryStore) -> Self {
        self.store = store;
        self
    }
}
