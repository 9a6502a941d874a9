//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API under `/api` and, when a client bundle
//! directory is configured, serves it as the fallback so deep links into
//! the single-page client resolve to its `index.html`.

pub mod admin;
pub mod auth;
pub mod error;
pub mod users;

use std::path::Path;

use axum::Router;
use axum::http::{HeaderValue, StatusCode};
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    let Some(origin) = origin else {
        return cors.allow_origin(Any);
    };
    match HeaderValue::from_str(origin) {
        Ok(value) => cors.allow_origin(value),
        Err(e) => {
            tracing::warn!(%origin, error = %e, "invalid CORS_ALLOW_ORIGIN, allowing any origin");
            cors.allow_origin(Any)
        }
    }
}

/// JSON API routes.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/user/{id}", get(users::get_user))
        .route("/api/admin/users", get(admin::list_users))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Static client bundle; unknown paths get `index.html` so client-side
/// routing can take over.
fn client_bundle(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(dir.join("index.html")))
}

/// Full application router.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let mut router = api_routes(state);
    if let Some(dir) = &config.static_dir {
        tracing::info!(dir = %dir.display(), "serving client bundle");
        router = router.fallback_service(client_bundle(dir));
    }

    router
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(cors_layer(config.cors_origin.as_deref()))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
