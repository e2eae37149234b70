//! Ironrail API server binary.
//!
//! Loads configuration from the environment, connects to MongoDB, applies
//! predefined-account seeding if configured, and serves the JSON API.

#![cfg_attr(not(test), forbid(unsafe_code))]

use ironrail_api::config::ApiConfig;
use ironrail_api::state::AppState;
use ironrail_api::{app, db, seed};

use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ApiConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = ApiConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ironrail_api=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    // Connect to MongoDB (the driver manages its own pool)
    let database = db::connect(&config.database_url, &config.database_name)
        .await
        .expect("Failed to connect to database");
    tracing::info!(database = %config.database_name, "Database handle created");

    // The unique users.email index backs the one-record-per-email invariant
    db::ensure_indexes(&database)
        .await
        .expect("Failed to create indexes");

    // Build application state
    let state = AppState::new(config.clone(), database)
        .expect("Failed to initialize application state");

    // Apply predefined accounts; idempotent, so every start is safe
    if let Some(path) = &config.seed_file {
        let seeds = seed::load_from_path(std::path::Path::new(path))
            .await
            .expect("Failed to load seed file");
        let outcome = state
            .auth()
            .seed_if_absent(&seeds)
            .await
            .expect("Failed to seed predefined accounts");
        tracing::info!(
            inserted = outcome.inserted,
            skipped = outcome.skipped,
            "Predefined accounts applied"
        );
    }

    // Build router
    let app = app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
