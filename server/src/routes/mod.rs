//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! JSON endpoints live under `/api`. Every other path is answered from the
//! prebuilt UI bundle: existing files are served as-is, anything else gets the
//! UI entry document so client-side navigation survives a reload. Any path
//! starting with `/api` that no API route claims is a JSON 404, including
//! `/api/` and siblings such as `/apiary`.

pub mod api;

use axum::Router;
use axum::body::Body;
use axum::extract::{OriginalUri, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use contract::API_PREFIX;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router: API routes + SPA fallback.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest(API_PREFIX, api_routes())
        .fallback(spa_fallback)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Routes mounted under `/api`.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(api::health))
        .route("/info", get(api::info))
        .fallback(api::not_found)
}

/// Whether `path` belongs to the API namespace.
pub(crate) fn is_api_path(path: &str) -> bool {
    path.starts_with(API_PREFIX)
}

/// Serve from the UI bundle, or the entry document for unknown files.
async fn spa_fallback(State(state): State<AppState>, req: Request) -> Response {
    if is_api_path(req.uri().path()) {
        let uri = req.uri().clone();
        return api::not_found(OriginalUri(uri)).await.into_response();
    }

    // Unknown files fall back to index.html with a 200, not a 404.
    let mut spa = ServeDir::new(&state.config.dist_dir).fallback(ServeFile::new(state.config.index_html()));
    match spa.try_call(req).await {
        Ok(resp) => resp.map(Body::new),
        Err(e) => {
            tracing::error!(error = %e, "static file lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
