//! Router assembly for the lab API.
//!
//! Route layout:
//!
//! - `GET /` and `GET /health` (banner and liveness)
//! - `/api/people/...` and `/api/projects/...` (see [`routes::api_routes`])
//!
//! `main.rs` and every integration test build the app through
//! [`build_app_router`], so they share one middleware stack.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Request id header, set on the way in and echoed on the response.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Methods the admin frontend uses against the API.
const CORS_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

/// `Authorization` carries the editor token on mutations.
const CORS_HEADERS: [HeaderName; 2] = [CONTENT_TYPE, AUTHORIZATION];

const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// Build the lab API [`Router`] over `state`.
///
/// Layers, outermost first: CORS, request id assignment, tracing, request id
/// echo on the response, timeout, panic recovery.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let timeout = Duration::from_secs(config.request_timeout_secs);

    let middleware = ServiceBuilder::new()
        .layer(build_cors_layer(config))
        .map_response(axum::response::IntoResponse::into_response)
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(CatchPanicLayer::new());

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(middleware)
        .with_state(state)
}

/// CORS for the configured frontend origins.
///
/// Panics at startup on an origin that is not a valid header value.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config.cors_origins.iter().map(|o| parse_origin(o)).collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(CORS_METHODS)
        .allow_headers(CORS_HEADERS)
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}

fn parse_origin(origin: &str) -> HeaderValue {
    origin
        .parse()
        .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
}
