//! # pizzeriad — pizzeria daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file + env overrides)
//! - Initialize tracing
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use pizzeria_adapter_http_axum::state::AppState;
use pizzeria_adapter_storage_sqlite_sqlx::{
    Config as DbConfig, SqlitePizzaRepository, SqliteRestaurantPizzaRepository,
    SqliteRestaurantRepository,
};
use pizzeria_app::services::pizza_service::PizzaService;
use pizzeria_app::services::restaurant_pizza_service::RestaurantPizzaService;
use pizzeria_app::services::restaurant_service::RestaurantService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let restaurant_repo = SqliteRestaurantRepository::new(pool.clone());
    let pizza_repo = SqlitePizzaRepository::new(pool.clone());
    let offering_repo = SqliteRestaurantPizzaRepository::new(pool.clone());
    let offering_repo_for_details = SqliteRestaurantPizzaRepository::new(pool);

    // Services
    let restaurant_service = RestaurantService::new(restaurant_repo, offering_repo_for_details);
    let pizza_service = PizzaService::new(pizza_repo);
    let restaurant_pizza_service = RestaurantPizzaService::new(offering_repo);

    // HTTP
    let state = AppState::new(restaurant_service, pizza_service, restaurant_pizza_service);
    let app = pizzeria_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, database_url = config.database_url(), "pizzeriad starting");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
