//! LiftCheck Server - Forklift Pre-Operation Checklist System

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use liftcheck_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("liftcheck_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting LiftCheck Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.checklist.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Operator surface
        .route("/badge/check", post(api::badge::check_badge))
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment/default", get(api::equipment::get_default_equipment))
        .route("/equipment/:id/questions", get(api::equipment::list_unit_questions))
        .route("/submissions", post(api::submissions::submit_checklist))
        // Submissions (admin review)
        .route("/submissions", get(api::submissions::list_submissions))
        .route("/submissions/:id/responses", get(api::submissions::list_submission_responses))
        .route("/submissions/:id", delete(api::submissions::delete_submission))
        .route("/responses/:id/notes", put(api::submissions::update_response_notes))
        // Notifications
        .route("/notifications", get(api::notifications::list_notifications))
        .route("/notifications/:id/read", post(api::notifications::mark_notification_read))
        .route("/notifications/:id/maintenance", post(api::notifications::open_maintenance_from_notification))
        // Equipment administration
        .route("/equipment", post(api::equipment::create_equipment))
        .route("/equipment/:id/default", put(api::equipment::set_default_equipment))
        .route("/equipment/:id", delete(api::equipment::delete_equipment))
        // Questions
        .route("/questions", get(api::questions::list_questions))
        .route("/questions", post(api::questions::create_question))
        .route("/questions/:id", put(api::questions::update_question))
        .route("/questions/:id/active", put(api::questions::set_question_active))
        .route("/equipment/:id/assignments", get(api::questions::list_assignments))
        .route("/equipment/:id/assignments/:question_id", put(api::questions::assign_question))
        .route("/equipment/:id/assignments/:question_id", delete(api::questions::unassign_question))
        // Drivers
        .route("/drivers", get(api::drivers::list_drivers))
        .route("/drivers", post(api::drivers::create_driver))
        .route("/drivers/:id", put(api::drivers::update_driver))
        .route("/drivers/:id", delete(api::drivers::delete_driver))
        // Maintenance
        .route("/maintenance", get(api::maintenance::list_maintenance))
        .route("/maintenance", post(api::maintenance::create_maintenance))
        .route("/maintenance/:id", put(api::maintenance::update_maintenance))
        .route("/maintenance/:id", delete(api::maintenance::delete_maintenance))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
