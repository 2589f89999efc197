//! HTTP API
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /` | Liveness message |
//! | `GET /models` | Advertised model catalog |
//! | `POST /ask` | Compare one prompt across models |

pub mod error;
pub mod handlers;
pub mod request;

pub use error::ApiError;
pub use request::{AskForm, AskRequest, RequestError};

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use boxai_application::CompareModelsUseCase;
use boxai_domain::{RunMode, ServerConfig};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared state for every handler
pub struct AppState {
    pub use_case: Arc<CompareModelsUseCase>,
    pub mode: RunMode,
}

/// Build the application router with CORS, tracing and panic recovery
pub fn router(use_case: Arc<CompareModelsUseCase>, server: &ServerConfig) -> Router {
    let mode = server.mode;
    let state = Arc::new(AppState { use_case, mode });

    Router::new()
        .route("/", get(handlers::health))
        .route("/models", get(handlers::list_models))
        .route("/ask", post(handlers::ask))
        .with_state(state)
        .layer(CatchPanicLayer::custom(move |panic: Box<dyn Any + Send + 'static>| {
            panic_response(panic, mode)
        }))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(server))
}

fn panic_response(panic: Box<dyn Any + Send + 'static>, mode: RunMode) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::internal(detail, mode).into_response()
}

/// CORS policy: the configured allow-list, or any origin in development
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = if server.mode.is_development() {
        AllowOrigin::mirror_request()
    } else {
        let parsed: Vec<HeaderValue> = server
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
}
