include!("../../lib.rs");
use std::net::SocketAddr;
use lambda_http::{run, Error};
use tracing::info;
use crate::catalog::controller::routes;
use crate::catalog::factory::create_catalog_service;
use crate::core::controller::AppState;
use crate::core::domain::{Configuration, Runtime};
use crate::utils::logging::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env();
    setup_tracing(&config);
    config.report_warnings();

    let catalog = create_catalog_service(&config).await?;
    let state = AppState::new(catalog);

    match config.runtime {
        Runtime::Lambda => run(routes::<lambda_http::Body>(state)).await,
        Runtime::Local => {
            let app: axum::Router = routes(state);
            let addr: SocketAddr = config.bind_addr.parse()?;
            info!("serving {} on http://{}", config.library_file, addr);
            axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await?;
            Ok(())
        }
    }
}
