//! Route modules for the pricer server
//!
//! This module contains endpoint group-specific routers:
//! - valuation: closed-form and lattice option valuation
//! - payoff: single-leg profit/loss at expiry
//! - strategies: named and custom multi-leg strategies
//! - health: Health check and monitoring endpoints

pub mod health;
pub mod payoff;
pub mod strategies;
pub mod valuation;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let state = AppState::new(config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health::routes())
        .merge(valuation::routes())
        .merge(payoff::routes())
        .merge(strategies::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
