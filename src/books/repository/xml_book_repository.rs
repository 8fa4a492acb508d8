use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};
use xmltree::{Element, XMLNode};

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::xml::{child_elements, child_position, element_text, is_element_named, parse_decimal_child, parse_document, parse_number_child, parse_string_attribute, parse_string_child, set_child_text, text_element, write_document};

const ROOT_ELEMENT: &str = "bookstore";
const BOOK_ELEMENT: &str = "book";
const AUTHOR_ELEMENT: &str = "author";
const TITLE_LANG: &str = "en";

/// Stores the whole catalog as one XML document on disk.
///
/// Every operation loads the document, works on it and, for mutations, rewrites the
/// complete file while holding the instance's mutex, so no two operations on the same
/// repository ever touch the file at once. A write interrupted half way may leave the
/// file corrupted; nothing here recovers from that.
#[derive(Debug)]
pub struct XmlBookRepository {
    file_path: PathBuf,
    lock: Mutex<()>,
}

impl XmlBookRepository {
    /// Opens the document at `file_path`, creating an empty catalog (and its parent
    /// directories) when the file does not exist yet.
    pub async fn new<P: AsRef<Path>>(file_path: P) -> LibraryResult<Self> {
        let repo = Self {
            file_path: file_path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        };
        repo.ensure_file_exists().await?;
        Ok(repo)
    }

    pub fn file_path(&self) -> &Path {
        self.file_path.as_path()
    }

    async fn ensure_file_exists(&self) -> LibraryResult<()> {
        if fs::try_exists(&self.file_path).await? {
            return Ok(());
        }
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        info!(path = %self.file_path.display(), "creating empty book catalog");
        self.save(&Element::new(ROOT_ELEMENT)).await
    }

    async fn load(&self) -> LibraryResult<Element> {
        let bytes = fs::read(&self.file_path).await?;
        parse_document(&bytes).map_err(|err| LibraryError::storage(
            format!("catalog {} is unreadable: {}", self.file_path.display(), err).as_str(), None))
    }

    async fn save(&self, root: &Element) -> LibraryResult<()> {
        let bytes = write_document(root)?;
        fs::write(&self.file_path, bytes).await.map_err(LibraryError::from)
    }
}

#[async_trait]
impl Repository<BookEntity> for XmlBookRepository {
    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let _guard = self.lock.lock().await;
        let root = self.load().await?;
        Ok(child_elements(&root, BOOK_ELEMENT).map(map_to_book).collect())
    }

    async fn get(&self, id: &str) -> LibraryResult<Option<BookEntity>> {
        let _guard = self.lock.lock().await;
        let root = self.load().await?;
        let found = child_elements(&root, BOOK_ELEMENT)
            .find(|e| has_isbn(e, id))
            .map(map_to_book);
        Ok(found)
    }

    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let _guard = self.lock.lock().await;
        let mut root = self.load().await?;
        if find_book_position(&root, entity.isbn.as_str()).is_some() {
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {} already exists", entity.isbn).as_str()));
        }
        root.children.push(XMLNode::Element(build_book_element(entity)));
        self.save(&root).await?;
        debug!(isbn = entity.isbn.as_str(), "book appended to catalog");
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let _guard = self.lock.lock().await;
        let mut root = self.load().await?;
        let position = match find_book_position(&root, entity.isbn.as_str()) {
            Some(position) => position,
            None => return Ok(0),
        };
        if let Some(XMLNode::Element(element)) = root.children.get_mut(position) {
            apply_update(element, entity);
        }
        self.save(&root).await?;
        debug!(isbn = entity.isbn.as_str(), "book rewritten in catalog");
        Ok(1)
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let _guard = self.lock.lock().await;
        let mut root = self.load().await?;
        let position = match find_book_position(&root, id) {
            Some(position) => position,
            None => return Ok(0),
        };
        root.children.remove(position);
        self.save(&root).await?;
        debug!(isbn = id, "book removed from catalog");
        Ok(1)
    }
}

#[async_trait]
impl BookRepository for XmlBookRepository {}

fn has_isbn(element: &Element, isbn: &str) -> bool {
    parse_string_child("isbn", element).as_deref() == Some(isbn)
}

// index into root.children of the first book carrying the isbn
fn find_book_position(root: &Element, isbn: &str) -> Option<usize> {
    root.children.iter().position(|node| match node {
        XMLNode::Element(e) => e.name == BOOK_ELEMENT && has_isbn(e, isbn),
        _ => false,
    })
}

fn map_to_book(element: &Element) -> BookEntity {
    BookEntity {
        isbn: parse_string_child("isbn", element).unwrap_or_default(),
        title: parse_string_child("title", element).unwrap_or_default(),
        category: parse_string_attribute("category", element).unwrap_or_default(),
        authors: child_elements(element, AUTHOR_ELEMENT).map(element_text).collect(),
        year: parse_number_child("year", element),
        price: parse_decimal_child("price", element),
    }
}

fn title_element(title: &str) -> Element {
    let mut element = text_element("title", title);
    element.attributes.insert("lang".to_string(), TITLE_LANG.to_string());
    element
}

fn build_book_element(book: &BookEntity) -> Element {
    let mut element = Element::new(BOOK_ELEMENT);
    element.attributes.insert("category".to_string(), book.category.to_string());
    element.children.push(XMLNode::Element(text_element("isbn", book.isbn.as_str())));
    element.children.push(XMLNode::Element(title_element(book.title.as_str())));
    element.children.push(XMLNode::Element(text_element("year", book.year.to_string().as_str())));
    element.children.push(XMLNode::Element(text_element("price", book.price.to_string().as_str())));
    for author in &book.authors {
        element.children.push(XMLNode::Element(text_element(AUTHOR_ELEMENT, author.as_str())));
    }
    element
}

// New authors take the place of the old ones. A book without authors gets them
// right before its year; a missing year has been appended by then.
fn apply_update(element: &mut Element, book: &BookEntity) {
    element.attributes.insert("category".to_string(), book.category.to_string());
    if element.get_child("title").is_none() {
        element.children.push(XMLNode::Element(title_element("")));
    }
    set_child_text(element, "title", book.title.as_str());
    set_child_text(element, "year", book.year.to_string().as_str());
    set_child_text(element, "price", book.price.to_string().as_str());

    let first_author = child_position(element, AUTHOR_ELEMENT);
    element.children.retain(|node| !is_element_named(node, AUTHOR_ELEMENT));
    let insert_at = first_author
        .or_else(|| child_position(element, "year"))
        .unwrap_or(element.children.len());
    for (offset, author) in book.authors.iter().enumerate() {
        element.children.insert(insert_at + offset,
                                XMLNode::Element(text_element(AUTHOR_ELEMENT, author.as_str())));
    }
}
