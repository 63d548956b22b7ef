use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::Config;
use crate::routes;
use crate::state::AppState;

/// All pages, form endpoints and the health check.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::home_page))
        .route(
            "/onboarding",
            get(routes::onboarding_page).post(routes::onboarding_submit),
        )
        .route("/resources", get(routes::resources_page))
        .route("/matching", get(routes::matching_page))
        .route("/map", get(routes::map_page))
        .route("/green-points", get(routes::green_points_page))
        .route("/ideas", get(routes::ideas_page))
        .route("/services", get(routes::services_page))
        .route("/stories", get(routes::stories_page))
        .route("/profile", get(routes::profile_page))
        .route("/profile/theme", post(routes::toggle_theme))
        .route("/profile/logout", post(routes::log_out))
        .route("/profile/deactivate", post(routes::deactivate))
        .route("/language", post(routes::switch_language))
        .route("/health", get(routes::health))
        .fallback(routes::not_found_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl+C or SIGTERM.
pub async fn run(config: Config) -> Result<()> {
    let address = config.addr();
    let state = AppState::new(config);

    info!("Binding to {address}");
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
