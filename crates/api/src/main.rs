use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chitrashala_api::config::ServerConfig;
use chitrashala_api::router::build_app_router;
use chitrashala_api::state::AppState;
use chitrashala_api::uploads::FileStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Configuration loaded");

    // Database: connect, ping, migrate. Any failure here aborts startup.
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL is required");
    let pool = chitrashala_db::create_pool(&database_url)
        .await
        .expect("Could not open a database connection");
    chitrashala_db::health_check(&pool)
        .await
        .expect("Database did not answer the startup ping");
    chitrashala_db::run_migrations(&pool)
        .await
        .expect("Migrations did not apply cleanly");
    tracing::info!("Database ready, migrations applied");

    let uploads = FileStore::new(config.uploads_dir.clone());
    uploads
        .ensure_root()
        .await
        .expect("Failed to create uploads directory");
    tracing::info!(dir = %config.uploads_dir.display(), "Upload storage ready");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        uploads,
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST is not a valid IP address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Could not bind the listen address");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server exited with an error");

    tracing::info!("Shutdown complete");
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "chitrashala_api=debug,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolve when the process is asked to stop.
///
/// Listens for SIGINT (Ctrl-C) everywhere and SIGTERM on Unix, so both an
/// interactive stop and a process manager's stop drain cleanly.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Could not install the Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Could not install the SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("SIGINT received, draining"),
        () = terminate => tracing::info!("SIGTERM received, draining"),
    }
}
