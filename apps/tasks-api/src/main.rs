//! Tasks API - task-tracking REST server

use axum_helpers::errors::handlers::not_found;
use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_tasks::{SqliteTaskRepository, TaskService};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod api;
mod config;
mod openapi;
mod seed;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        path = %config.sqlite.path().display(),
        "Connecting to SQLite database"
    );

    let pool = database::sqlite::connect_from_config(&config.sqlite).await?;
    domain_tasks::sqlite::init_schema(&pool).await?;

    if config.seed_data {
        seed::run(&pool).await;
    }

    let repository = SqliteTaskRepository::new(pool.clone());
    let service = TaskService::new(repository);

    let app = api::routes(service)
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(TimeoutLayer::new(config.server.request_timeout()));

    info!(
        "Starting {} v{} on {}",
        config.app.name,
        config.app.version,
        config.server.address()
    );

    create_app(app, &config.server).await?;

    database::sqlite::close(&pool).await;
    info!("Tasks API shutdown complete");
    Ok(())
}
