//! # REST API Interface Layer
//!
//! Provides HTTP REST endpoints for the goal tracker application.
//! This layer handles:
//! - HTTP request/response serialization and deserialization
//! - Bearer token resolution for every goal endpoint
//! - Error translation from domain to HTTP status codes
//!
//! ## Design Principles
//!
//! - **Domain Separation**: pure translation layer without business logic
//! - **Error Transparency**: clear error messages for debugging
//! - **Explicit Identity**: the authenticated owner id is resolved once per
//!   request and passed down as a value

pub mod auth_apis;
pub mod calendar_apis;
pub mod goal_apis;
pub mod mappers;

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use tracing::warn;

use shared::ErrorResponse;

use crate::AppState;

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Resolve the request's bearer token to a user id, or produce the 401
/// response to return as-is.
pub(crate) async fn authenticated_user(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<String, Response> {
    let token = match bearer_token(headers) {
        Some(token) => token,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse { error: "Unauthorized".to_string() }),
            )
                .into_response())
        }
    };

    match state.auth_service.authenticate(token).await {
        Ok(user_id) => Ok(user_id),
        Err(e) => {
            warn!("Rejected bearer token: {}", e);
            Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse { error: "Invalid token".to_string() }),
            )
                .into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde::de::DeserializeOwned;
    use serde::Serialize;
    use tower::ServiceExt;

    use shared::{
        AuthResponse, CalendarMonth, CreateGoalRequest, CreateGoalResponse, GoalDetailResponse,
        GoalListResponse, RegisterRequest, ToggleCompletionRequest, ToggleCompletionResponse,
    };

    use crate::domain::{AuthService, GoalService};
    use crate::storage::DbConnection;
    use crate::{create_router, AppState};

    async fn test_app() -> Router {
        let db = DbConnection::init_test().await.expect("Failed to init test DB");
        let app_state = AppState {
            auth_service: AuthService::new(db.clone()),
            goal_service: GoalService::new(db),
        };
        create_router(app_state)
    }

    fn request<T: Serialize>(method: &str, uri: &str, token: Option<&str>, body: Option<&T>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn read_json<T: DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).expect("Failed to parse response body")
    }

    async fn register(app: &Router, email: &str) -> String {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/auth/register",
                None,
                Some(&RegisterRequest {
                    email: email.to_string(),
                    name: "Test User".to_string(),
                    password: "secret123".to_string(),
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let auth: AuthResponse = read_json(response).await;
        auth.token
    }

    #[tokio::test]
    async fn test_goal_lifecycle_over_http() {
        let app = test_app().await;
        let token = register(&app, "flow@example.com").await;

        // Create
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/goals",
                Some(&token),
                Some(&CreateGoalRequest {
                    name: "Read daily".to_string(),
                    start_date: "2025-06-01".to_string(),
                    end_date: "2025-06-30".to_string(),
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: CreateGoalResponse = read_json(response).await;
        let goal_id = created.goal.id.clone();

        // Toggle a completion
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                &format!("/api/goals/{}/completion", goal_id),
                Some(&token),
                Some(&ToggleCompletionRequest { date: "2025-06-05".to_string() }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let toggled: ToggleCompletionResponse = read_json(response).await;
        assert!(toggled.completed);
        assert_eq!(toggled.goal.completed_dates, vec!["2025-06-05".to_string()]);

        // Detail with stats
        let response = app
            .clone()
            .oneshot(request::<()>(
                "GET",
                &format!("/api/goals/{}", goal_id),
                Some(&token),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let detail: GoalDetailResponse = read_json(response).await;
        assert_eq!(detail.stats.total_days, 30);
        assert_eq!(detail.stats.completed_days, 1);

        // Dashboard list
        let response = app
            .clone()
            .oneshot(request::<()>("GET", "/api/goals", Some(&token), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let list: GoalListResponse = read_json(response).await;
        assert_eq!(list.goals.len(), 1);
        assert_eq!(list.goals[0].progress.completed_days, 1);

        // Calendar grid
        let response = app
            .clone()
            .oneshot(request::<()>(
                "GET",
                &format!("/api/goals/{}/calendar?year=2025&month=6", goal_id),
                Some(&token),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let grid: CalendarMonth = read_json(response).await;
        assert_eq!(grid.first_day_of_week, 0);
        assert_eq!(grid.days.len(), 30);
        assert!(grid.days.iter().find(|d| d.day == 5).unwrap().is_completed);

        // Delete
        let response = app
            .clone()
            .oneshot(request::<()>(
                "DELETE",
                &format!("/api/goals/{}", goal_id),
                Some(&token),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(request::<()>(
                "GET",
                &format!("/api/goals/{}", goal_id),
                Some(&token),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_goals_require_bearer_token() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(request::<()>("GET", "/api/goals", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .clone()
            .oneshot(request::<()>("GET", "/api/goals", Some("garbage"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_goal_rejects_reversed_range() {
        let app = test_app().await;
        let token = register(&app, "range@example.com").await;

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/goals",
                Some(&token),
                Some(&CreateGoalRequest {
                    name: "Backwards".to_string(),
                    start_date: "2025-06-30".to_string(),
                    end_date: "2025-06-01".to_string(),
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_goals_are_owner_scoped() {
        let app = test_app().await;
        let token_a = register(&app, "owner-a@example.com").await;
        let token_b = register(&app, "owner-b@example.com").await;

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/goals",
                Some(&token_a),
                Some(&CreateGoalRequest {
                    name: "Private goal".to_string(),
                    start_date: "2025-06-01".to_string(),
                    end_date: "2025-06-30".to_string(),
                }),
            ))
            .await
            .unwrap();
        let created: CreateGoalResponse = read_json(response).await;

        // Another user sees Not Found, not someone else's goal
        let response = app
            .clone()
            .oneshot(request::<()>(
                "GET",
                &format!("/api/goals/{}", created.goal.id),
                Some(&token_b),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_calendar_rejects_invalid_month() {
        let app = test_app().await;
        let token = register(&app, "cal@example.com").await;

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/goals",
                Some(&token),
                Some(&CreateGoalRequest {
                    name: "Calendar goal".to_string(),
                    start_date: "2025-06-01".to_string(),
                    end_date: "2025-06-30".to_string(),
                }),
            ))
            .await
            .unwrap();
        let created: CreateGoalResponse = read_json(response).await;

        let response = app
            .clone()
            .oneshot(request::<()>(
                "GET",
                &format!("/api/goals/{}/calendar?year=2025&month=13", created.goal.id),
                Some(&token),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let app = test_app().await;
        register(&app, "login@example.com").await;

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/auth/login",
                None,
                Some(&shared::LoginRequest {
                    email: "login@example.com".to_string(),
                    password: "wrong".to_string(),
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
