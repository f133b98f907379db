//! HTTP route handlers.
//!
//! Routes are organized by content type, with per-route Cache-Control
//! headers. The horoscope endpoint is randomized per request and marked
//! `no-store`; the landing page and favicon stub are effectively immutable.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod health;
pub mod home;
pub mod horoscope;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_API, CACHE_CONTROL_STATIC};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Horoscope API - randomized per request, never cached
    let api_routes = Router::new()
        .route("/get_horoscope", post(horoscope::get_horoscope))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_API),
        ));

    // Landing page and favicon stub - static content, long cache
    let static_routes = Router::new()
        .route("/", get(home::index))
        .route("/favicon.ico", get(home::favicon))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(api_routes)
        .merge(static_routes)
        .merge(health_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
