use std::sync::Arc;
use axum::http::StatusCode;
use tracing::error;
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogService>) -> AppState {
        AppState {
            catalog,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Storage { .. } => {
                error!(error = ?err, "catalog storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::DuplicateKey { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}
