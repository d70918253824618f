//! # REST API for Authentication
//!
//! Endpoints for account registration and login. Both return a bearer token
//! the client sends on every `/api/goals` request.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use tracing::{error, info};

use shared::{AuthResponse, ErrorResponse, LoginRequest, RegisterRequest};

use crate::io::rest::mappers::UserMapper;
use crate::AppState;

/// Create a router for authentication APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new account
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> impl IntoResponse {
    info!("POST /api/auth/register - email: {}", request.email);

    match state
        .auth_service
        .register(&request.email, &request.name, &request.password)
        .await
    {
        Ok((user, token)) => {
            let response = AuthResponse {
                token,
                user: UserMapper::to_dto(user),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to register: {}", e);
            let status = if e.to_string().contains("already exists")
                || e.to_string().contains("Missing required fields")
            {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(ErrorResponse { error: e.to_string() })).into_response()
        }
    }
}

/// Log in with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    info!("POST /api/auth/login - email: {}", request.email);

    match state.auth_service.login(&request.email, &request.password).await {
        Ok((user, token)) => {
            let response = AuthResponse {
                token,
                user: UserMapper::to_dto(user),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to log in: {}", e);
            let status = if e.to_string().contains("Invalid credentials") {
                StatusCode::UNAUTHORIZED
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(ErrorResponse { error: e.to_string() })).into_response()
        }
    }
}
