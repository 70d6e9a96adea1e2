//! Route definitions for the SocietyHub HTTP API.
//!
//! All REST routes are organized by domain and mounted under `/api`; the
//! WebSocket live feed is mounted at `/ws`. The router receives
//! `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, patch, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(alert_routes())
        .merge(notification_routes())
        .merge(visitor_routes())
        .merge(health_routes());

    let ws_routes = Router::new().route("/ws", get(handlers::ws::ws_upgrade));

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .merge(ws_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Alert submission and review endpoints
fn alert_routes() -> Router<AppState> {
    Router::new()
        .route("/alerts", post(handlers::alert::create_alert))
        .route("/alerts", get(handlers::alert::list_alerts))
        .route("/alerts/{id}", get(handlers::alert::get_alert))
        .route("/alerts/{id}", patch(handlers::alert::transition_alert))
}

/// Visitor notification feed endpoints
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications/visitor",
            post(handlers::notification::create_visitor_notification),
        )
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
}

/// Visitor log endpoints
fn visitor_routes() -> Router<AppState> {
    Router::new().route("/visitors", get(handlers::visitor::list_visitors))
}

/// Health check endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(
        cors_config.max_age_seconds,
    ))
}
