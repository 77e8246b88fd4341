//! Sustainable Farming Advisor - Backend Server
//!
//! Accepts a farmer's profile, runs it through the profile/market analysis
//! pipeline and returns a ranked crop recommendation, persisting the farmer
//! and the recommendation in one transaction.

use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::{FarmerHistory, MarketHistory};

mod config;
mod datasets;
mod db;
mod error;
mod handlers;
mod models;
mod routes;
mod services;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::SqlitePool,
    pub config: Arc<Config>,
    pub farmer_history: Arc<FarmerHistory>,
    pub market_history: Arc<MarketHistory>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "farm_advisor_server=debug,tower_http=debug,sqlx=warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Sustainable Farming Advisor Server");
    tracing::info!("Environment: {}", config.environment);

    // Load the read-only reference datasets once; they are shared immutably
    // across all requests
    let farmer_history = Arc::new(datasets::load_farmer_history(
        &config.datasets.farmer_history,
    )?);
    let market_history = Arc::new(datasets::load_market_history(
        &config.datasets.market_history,
    )?);
    tracing::info!(
        "Loaded reference datasets: {} farmer-history rows, {} market-history rows",
        farmer_history.len(),
        market_history.len()
    );

    // Create database connection pool and schema
    tracing::info!("Connecting to database at {}", config.database.path);
    let db_pool = db::init_database(
        std::path::Path::new(&config.database.path),
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;

    // Seed the crops reference table so recommendations can resolve crop ids
    let mut crop_names = farmer_history.crop_names();
    crop_names.extend(market_history.crop_names());
    db::seed_crops(&db_pool, &crop_names).await?;

    tracing::info!("Database ready");

    // Create application state
    let state = AppState {
        db: db_pool,
        config: Arc::new(config.clone()),
        farmer_history,
        market_history,
    };

    // Start server
    let addr: SocketAddr = state.config.server.bind_addr()?;

    // Build application
    let app = create_app(state);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .merge(routes::app_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Sustainable Farming Advisor API v1.0"
}
