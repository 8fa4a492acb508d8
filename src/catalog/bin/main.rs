use std::net::SocketAddr;
use std::sync::Arc;
use lambda_http::{run, Error};
use tracing::info;
use bookstore::catalog::controller::app;
use bookstore::catalog::factory;
use bookstore::core::controller::AppState;
use bookstore::core::domain::Configuration;
use bookstore::utils::logs::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env();
    let catalog = factory::create_catalog_service(&config).await?;
    let state = AppState::new(Arc::from(catalog));
    info!(store = %config.store, path = config.xml_file_path.as_str(), "catalog service ready");

    if config.lambda {
        run(app(state)).await
    } else {
        let addr: SocketAddr = config.listen_addr.parse()?;
        info!(%addr, "catalog listening");
        axum::Server::bind(&addr)
            .serve(app(state).into_make_service())
            .await?;
        Ok(())
    }
}
