//! # societyhub-api
//!
//! HTTP API layer for SocietyHub built on Axum.
//!
//! Provides the REST endpoints for alerts, visitor notifications, and the
//! visitor log, the WebSocket upgrade for the live feed, request logging,
//! and DTOs.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
