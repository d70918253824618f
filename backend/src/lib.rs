//! # Goal Tracker Backend
//!
//! Web application server for a personal goal tracker: users register, log
//! in, create date-bounded goals, and mark daily completion; a dashboard
//! shows streaks and progress statistics.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! IO Layer (REST API, axum handlers)
//!     v
//! Domain Layer (goal and auth services, stats, calendar)
//!     v
//! Storage Layer (SQLite repositories)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize and configure the application state
//! - Set up the REST API router with CORS configuration
//! - Coordinate between domain logic and data persistence

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::Method,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::domain::{AuthService, GoalService};
use crate::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub goal_service: GoalService,
}

/// Initialize the backend with all required services
pub async fn initialize_backend() -> Result<AppState> {
    info!("Setting up database");
    let db_conn = DbConnection::init().await?;

    info!("Setting up domain services");
    let app_state = AppState {
        auth_service: AuthService::new(db_conn.clone()),
        goal_service: GoalService::new(db_conn),
    };

    Ok(app_state)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow a browser frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/auth", io::rest::auth_apis::router())
        .nest(
            "/goals",
            io::rest::goal_apis::router().merge(io::rest::calendar_apis::router()),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
