use std::process;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{compression::CompressionLayer, limit::RequestBodyLimitLayer};
use tracing_subscriber::{fmt::{writer::BoxMakeWriter, Layer}, layer::SubscriberExt, EnvFilter, Registry};

use api::{PayPointApi, PayPointClient};
use config::Config;
use routes::auth::AuthService;
use store::MemberBoards;

mod api;
mod config;
mod models;
mod routes;
mod store;
mod views;

#[cfg(test)]
mod test_utils;

#[tokio::main]
async fn main() {

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {}", err);
            process::exit(1);
        }
    };

    // add tracing layer
    let file_appender = tracing_appender::rolling::never(".", &config.log_file);
    let (file_writer, _file_guard) = tracing_appender::non_blocking(file_appender);
    let (stdout_writer, _stdout_guard) = tracing_appender::non_blocking(std::io::stdout());

    // json into the log file, plain text on stdout
    let file_layer = Layer::new().json().with_writer(BoxMakeWriter::new(move || file_writer.clone()));
    let stdout_layer = Layer::new().with_writer(BoxMakeWriter::new(move || stdout_writer.clone()));

    let subscriber = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(file_layer)
        .with(stdout_layer);

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Unable to set global subscriber: {}", err);
        process::exit(1);
    }

    let client = match PayPointClient::new(&config.api_base_url, &config.api_key, config.request_timeout) {
        Ok(client) => {
            tracing::info!("PayPoint API client ready for {}", config.api_base_url);
            client
        }
        Err(err) => {
            tracing::error!("Failed to create API client: {}", err);
            process::exit(1);
        }
    };

    let listener = match TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => {
            match listener.local_addr() {
                Ok(addr) => tracing::info!("Listening on port: {}", addr.port()),
                Err(err) => tracing::warn!("Listening on unknown address: {}", err),
            }
            listener
        }
        Err(err) => {
            tracing::error!("Failed to bind to port: {}", err);
            process::exit(1);
        }
    };

    let router = match process_begin(Arc::new(client), &config) {
        Ok(router) => {
            tracing::info!("Routes constructed successfully");
            router
        }
        Err(err) => {
            tracing::error!("Failed to construct routes: {}", err);
            process::exit(1);
        }
    };

    //start the http service
    let http_service = axum::serve(listener, router);
    if let Err(err) = http_service.await {
        tracing::error!("Failed to start server: {}", err);
        process::exit(1);
    }
}

fn process_begin(api: Arc<dyn PayPointApi>, config: &Config) -> Result<Router, String> {
    if config.request_body_limit == 0 {
        return Err("REQUEST_BODY_LIMIT must be greater than zero".to_string());
    }

    let head_route = Router::new();

    let service = Arc::new(AuthService::new(api, config.estate_name.clone(), config.cookie_secure));
    let boards = Arc::new(MemberBoards::new(config.member_view_idle));

    let auth_routes = routes::auth::auth_routes(service.clone(), boards.clone());
    let dashboard_routes = routes::dashboard::dashboard_routes(service.clone());
    let member_routes = routes::members::member_routes(service.clone(), boards.clone());
    let tx_routes = routes::tx::tx_routes(service.clone())
        .route_layer(CompressionLayer::new().gzip(true));
    let report_routes = routes::reports::report_routes();

    let router = head_route
        .merge(auth_routes)
        .merge(dashboard_routes)
        .merge(member_routes)
        .merge(tx_routes)
        .merge(report_routes)
        .layer(RequestBodyLimitLayer::new(config.request_body_limit));

    Ok(router)
}
