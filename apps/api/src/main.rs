//! Nairavest API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod auth;
mod dto;
mod error;
mod handlers;
mod middleware;
mod seed;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::middleware::from_fn;
use axum::routing::{get, post};
use nairavest_application::{
    AttemptCounterStore, InvestmentPackageService, LoginThrottleService, StateService,
};
use nairavest_core::AppError;
use nairavest_infrastructure::{
    InMemoryAttemptCounterStore, PostgresCredentialVerifier, PostgresPackageRepository,
    PostgresStateRepository, RedisAttemptCounterStore, TracingLockoutObserver,
};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;
use tracing::info;

use crate::api_config::{ApiConfig, init_tracing};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .map_err(|error| AppError::Internal(format!("failed to connect to database: {error}")))?;

    sqlx::migrate!("../../crates/infrastructure/migrations")
        .run(&pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to run migrations: {error}")))?;

    if config.migrate_only {
        info!("database migrations applied successfully");
        return Ok(());
    }

    if config.seed_only {
        return seed::run(&pool).await;
    }

    let session_store = PostgresStore::new(pool.clone())
        .with_table_name("tower_sessions")
        .map_err(|error| {
            AppError::Validation(format!("invalid session table name configuration: {error}"))
        })?;
    session_store.migrate().await.map_err(|error| {
        AppError::Internal(format!("failed to initialize session store: {error}"))
    })?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.cookie_secure)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(30)));

    // Attempt counters live in redis when a fleet shares them, in process
    // memory otherwise.
    let counter_store: Arc<dyn AttemptCounterStore> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str()).map_err(|error| {
                AppError::Validation(format!("invalid REDIS_URL: {error}"))
            })?;
            Arc::new(RedisAttemptCounterStore::new(client, "login_throttle"))
        }
        None => Arc::new(InMemoryAttemptCounterStore::new()),
    };

    let credential_verifier = Arc::new(PostgresCredentialVerifier::new(pool.clone())?);
    let lockout_observer = Arc::new(TracingLockoutObserver::new());
    let login_throttle_service = LoginThrottleService::new(
        counter_store,
        credential_verifier,
        lockout_observer,
        config.login_throttle.clone(),
    );

    let rule = login_throttle_service.rule();
    info!(
        max_attempts = rule.max_attempts,
        window_seconds = rule.window_seconds,
        "login throttle configured"
    );

    let package_repository = Arc::new(PostgresPackageRepository::new(pool.clone()));
    let package_service = InvestmentPackageService::new(package_repository);

    let state_repository = Arc::new(PostgresStateRepository::new(pool.clone()));
    let state_service = StateService::new(state_repository);

    let app_state = AppState {
        login_throttle_service,
        package_service,
        state_service,
        frontend_url: config.frontend_url.clone(),
    };

    let protected_routes = Router::new()
        .route("/auth/me", get(auth::me_handler))
        .route_layer(from_fn(middleware::require_auth));

    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(&config.frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    let app = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/auth/logout", post(auth::logout_handler))
        .route(
            "/api/packages",
            get(handlers::packages::list_packages_handler),
        )
        .route(
            "/api/packages/{id}",
            get(handlers::packages::get_package_handler),
        )
        .route("/api/states", get(handlers::states::list_states_handler))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(session_layer)
        .with_state(app_state);

    let address = config.socket_address()?;

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "nairavest-api listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
