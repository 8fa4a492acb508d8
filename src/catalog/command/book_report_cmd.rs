use std::sync::Arc;
use async_trait::async_trait;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct BookReportCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl BookReportCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct BookReportCommandRequest {}

#[derive(Debug)]
pub struct BookReportCommandResponse {
    pub html: String,
}

#[async_trait]
impl Command<BookReportCommandRequest, BookReportCommandResponse> for BookReportCommand {
    async fn execute(&self, _req: BookReportCommandRequest) -> Result<BookReportCommandResponse, CommandError> {
        self.catalog_service.generate_report().await
            .map_err(CommandError::from).map(|html| BookReportCommandResponse { html })
    }
}
