//! # REST API for Calendar Views
//!
//! Serves the month grid view model for a goal. Month navigation is a pure
//! client concern; any month of any year can be requested at any time.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::{error, info};

use shared::ErrorResponse;

use crate::domain::calendar::build_month_grid;
use crate::domain::dates::today_local;
use crate::io::rest::authenticated_user;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: i32,
    pub month: u32,
}

/// Create a router for calendar related APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/:id/calendar", get(get_goal_calendar))
}

/// Get the month grid for a goal
pub async fn get_goal_calendar(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<CalendarQuery>,
) -> impl IntoResponse {
    info!("GET /api/goals/{}/calendar - {}/{}", id, query.month, query.year);

    let user_id = match authenticated_user(&state, &headers).await {
        Ok(id) => id,
        Err(response) => return response,
    };

    if query.month < 1 || query.month > 12 {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Invalid month: {}. Must be between 1 and 12", query.month),
            }),
        )
            .into_response();
    }

    match state.goal_service.get_goal(&user_id, &id).await {
        Ok(Some(goal)) => {
            let grid = build_month_grid(&goal, query.year, query.month, today_local());
            (StatusCode::OK, Json(grid)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse { error: "Goal not found".to_string() }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to load calendar for goal {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: "Error retrieving calendar".to_string() }),
            )
                .into_response()
        }
    }
}
