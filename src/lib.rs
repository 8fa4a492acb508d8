//! Book catalog web API backed by a single XML document.
//!
//! Requests flow from the axum controller through one command per operation into the
//! catalog service, which maps transport books onto stored records and delegates to a
//! [`books::repository::BookRepository`].

pub mod books;
pub mod catalog;
pub mod core;
pub mod utils;
