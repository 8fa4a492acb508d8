use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

pub const MIN_ISBN_LEN: usize = 10;
pub const MAX_ISBN_LEN: usize = 13;
pub const MIN_YEAR: i32 = 1000;
pub const MAX_YEAR: i32 = 2100;
pub const MAX_PRICE: i64 = 10000;

// BookDto is the transport shape of a book where all authors are folded into
// a single comma separated `author` field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub category: String,
    pub author: String,
    pub year: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, category: &str, author: &str, year: i32, price: Decimal) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            author: author.to_string(),
            year,
            price,
        }
    }

    /// Checks the field constraints of the transport boundary and reports the first
    /// violation. The repositories accept any values, so callers outside the HTTP
    /// surface decide for themselves whether to validate.
    pub fn validate(&self) -> LibraryResult<()> {
        if self.isbn.trim().is_empty() {
            return Err(LibraryError::validation("isbn is required", Some("isbn".to_string())));
        }
        let isbn_len = self.isbn.chars().count();
        if !(MIN_ISBN_LEN..=MAX_ISBN_LEN).contains(&isbn_len) {
            return Err(LibraryError::validation(
                format!("isbn must be between {} and {} characters but was {}",
                        MIN_ISBN_LEN, MAX_ISBN_LEN, isbn_len).as_str(), Some("isbn".to_string())));
        }
        if self.title.trim().is_empty() {
            return Err(LibraryError::validation("title is required", Some("title".to_string())));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(LibraryError::validation(
                format!("year must be between {} and {} but was {}", MIN_YEAR, MAX_YEAR, self.year).as_str(),
                Some("year".to_string())));
        }
        if self.price < Decimal::ZERO || self.price > Decimal::from(MAX_PRICE) {
            return Err(LibraryError::validation(
                format!("price must be between 0 and {} but was {}", MAX_PRICE, self.price).as_str(),
                Some("price".to_string())));
        }
        Ok(())
    }
}
