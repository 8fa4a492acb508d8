use axum::{
    body::HttpBody,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, Json},
    routing::get,
    BoxError, Router,
};
use serde_json::Value;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::book_report_cmd::{BookReportCommand, BookReportCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub const BOOKS_PATH: &str = "/api/books";

/// Builds the catalog router; generic over the body so it serves both hyper and
/// lambda requests.
pub fn app<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    Router::new()
        .route(BOOKS_PATH, get(list_books).post(add_book))
        .route("/api/books/report", get(book_report))
        .route("/api/books/:isbn",
               get(find_book_by_isbn).put(update_book).delete(remove_book))
        .with_state(state)
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(state.catalog).execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { isbn };
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<AddBookCommandResponse>), ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    let location = format!("{}/{}", BOOKS_PATH, res.book.isbn);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(res)))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    json: Json<Value>) -> Result<StatusCode, ServerError> {
    let book: BookDto = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = UpdateBookCommandRequest::new(isbn.as_str(), book);
    let _ = UpdateBookCommand::new(state.catalog).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<StatusCode, ServerError> {
    let req = RemoveBookCommandRequest { isbn };
    let _ = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn book_report(
    State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    let res = BookReportCommand::new(state.catalog).execute(BookReportCommandRequest::default()).await?;
    Ok(Html(res.html))
}
