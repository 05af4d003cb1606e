//! Crewplan service entrypoint
//!
//! Wires configuration, the PostgreSQL pool, repositories and the HTTP
//! routers together, then serves the API.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crewplan::adapters::http::{
    capacity_router, iteration_router, team_router, CapacityAppState, IterationAppState,
    TeamAppState,
};
use crewplan::adapters::postgres::{
    PostgresAvailabilityRepository, PostgresCapacityRepository, PostgresIterationRepository,
    PostgresTeamRepository,
};
use crewplan::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let team_repository = Arc::new(PostgresTeamRepository::new(pool.clone()));
    let iteration_repository = Arc::new(PostgresIterationRepository::new(pool.clone()));
    let availability_repository = Arc::new(PostgresAvailabilityRepository::new(pool.clone()));
    let capacity_repository = Arc::new(PostgresCapacityRepository::new(pool));

    let team_state = TeamAppState::new(team_repository.clone());
    let iteration_state = IterationAppState::new(team_repository.clone(), iteration_repository.clone());
    let capacity_state = CapacityAppState::new(
        team_repository,
        iteration_repository,
        availability_repository,
        capacity_repository,
        config.capacity.mode_weights(),
    );

    let cors = if config.server.cors_origins_list().is_empty() {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        let origins = config
            .server
            .cors_origins_list()
            .iter()
            .filter_map(|o| o.parse::<http::HeaderValue>().ok())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins).allow_methods(Any).allow_headers(Any)
    };

    let app = Router::new()
        .merge(team_router().with_state(team_state))
        .merge(iteration_router().with_state(iteration_state))
        .merge(capacity_router().with_state(capacity_state))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "Crewplan listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
