use rust_decimal::Decimal;
use crate::core::domain::Identifiable;

// BookEntity is the persisted catalog record; isbn is its only identity and
// authors keep their document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub category: String,
    pub authors: Vec<String>,
    pub year: i32,
    pub price: Decimal,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, category: &str, authors: &[&str], year: i32, price: Decimal) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            year,
            price,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}
