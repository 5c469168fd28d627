//! Dairycart JSON API Server

use std::process::ExitCode;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use dairycart_app::context::AppContext;

use crate::{
    config::ServerConfig,
    observability::{HttpMetrics, MetricsExporter, RequestLogging, init_subscriber},
    router::app_router,
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod attributes;
mod config;
mod discounts;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod products;
mod progenitors;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Dairycart JSON API Server entry point
#[tokio::main]
pub async fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(config_error) => {
            #[expect(
                clippy::print_stderr,
                reason = "logging not initialized yet, must use eprintln for config errors"
            )]
            {
                eprintln!("Configuration error: {config_error}");
            }

            return ExitCode::FAILURE;
        }
    };

    if let Err(init_error) = init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "the subscriber failed to install, so nothing else can report it"
        )]
        {
            eprintln!("failed to initialize logging: {init_error}");
        }

        return ExitCode::FAILURE;
    }

    let metrics = match HttpMetrics::new() {
        Ok(metrics) => metrics,
        Err(metrics_error) => {
            error!("failed to register metrics: {metrics_error}");

            return ExitCode::FAILURE;
        }
    };

    let app = match AppContext::from_settings(&config.database.settings()).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            return ExitCode::FAILURE;
        }
    };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(RequestLogging::new(
            metrics.clone(),
            config.observability.slow_request_threshold(),
        ))
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(MetricsExporter::new(metrics)))
        .push(app_router());

    let doc = OpenApi::new("Dairycart API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;

    ExitCode::SUCCESS
}
