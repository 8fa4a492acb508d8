use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;

pub const AUTHOR_SEPARATOR: &str = ", ";

// Commas inside a single author's name are not escaped, so such a name is split
// into several authors on the way back in. The transport format accepts that loss.
pub fn join_authors(authors: &[String]) -> String {
    if authors.is_empty() {
        String::new()
    } else {
        authors.join(AUTHOR_SEPARATOR)
    }
}

// Empty segments between consecutive commas are kept as empty authors; only a
// blank input maps to no authors at all.
pub fn split_authors(author: &str) -> Vec<String> {
    if author.trim().is_empty() {
        vec![]
    } else {
        author.split(',').map(|a| a.trim().to_string()).collect()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            category: other.category.to_string(),
            author: join_authors(&other.authors),
            year: other.year,
            price: other.price,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            category: other.category.to_string(),
            authors: split_authors(other.author.as_str()),
            year: other.year,
            price: other.price,
        }
    }
}
