//! REST API for tasks and todos.
//!
//! # Overview
//! Serves two identical collections, `/api/tasks` and `/api/todos`, each
//! backed by its own [`ItemStore`]. Requests are validated field by field
//! before any store call; failures come back as `{"errors": [...]}` with
//! status 400.
//!
//! # Design
//! - [`app`] builds a router over fresh in-memory stores; [`router`] accepts
//!   any [`AppState`], which is how tests and other backends plug in.
//! - [`serve`] runs until the given shutdown future completes.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError};
pub use error::AppError;
pub use state::AppState;
pub use store::{InMemoryStore, ItemStore, StoreError};

pub fn router(state: AppState) -> Router {
    routes::item_routes(&state).layer(TraceLayer::new_for_http())
}

pub fn app() -> Router {
    router(AppState::in_memory())
}

/// Serve [`app`] on `listener` until the process is stopped.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, AppState::in_memory(), std::future::pending()).await
}

pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Completes on Ctrl+C, or on SIGTERM where available.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
