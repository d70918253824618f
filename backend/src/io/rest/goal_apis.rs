//! # REST API for Goal Management
//!
//! Endpoints for creating, retrieving, updating, and deleting goals, plus
//! the daily completion toggle. Every handler resolves the bearer token to
//! an owner id first; goals are only ever read or written for that owner.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::{error, info};

use shared::{
    CreateGoalRequest, CreateGoalResponse, DeleteGoalResponse, ErrorResponse, GoalDetailResponse,
    GoalListResponse, GoalSummary, ToggleCompletionRequest, ToggleCompletionResponse,
    UpdateGoalRequest, UpdateGoalResponse,
};

use crate::domain::dates::today_local;
use crate::domain::stats::{compute_progress, compute_stats};
use crate::io::rest::authenticated_user;
use crate::io::rest::mappers::GoalMapper;
use crate::AppState;

/// Create a router for goal related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_goals).post(create_goal))
        .route("/:id", get(get_goal).put(update_goal).delete(delete_goal))
        .route("/:id/completion", post(toggle_completion))
}

/// HTTP status for a goal service error
fn goal_error_status(message: &str) -> StatusCode {
    if message.contains("Goal not found") {
        StatusCode::NOT_FOUND
    } else if message.contains("cannot be empty")
        || message.contains("cannot exceed")
        || message.contains("Invalid date")
        || message.contains("Start date cannot be after end date")
    {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// List the owner's goals with dashboard progress, newest first
pub async fn list_goals(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    info!("GET /api/goals");

    let user_id = match authenticated_user(&state, &headers).await {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.goal_service.list_goals(&user_id).await {
        Ok(goals) => {
            let today = today_local();
            let summaries: Vec<GoalSummary> = goals
                .into_iter()
                .map(|goal| GoalSummary {
                    progress: compute_progress(&goal, today),
                    goal: GoalMapper::to_dto(goal),
                })
                .collect();
            (StatusCode::OK, Json(GoalListResponse { goals: summaries })).into_response()
        }
        Err(e) => {
            error!("Failed to list goals: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: "Error retrieving goals".to_string() }),
            )
                .into_response()
        }
    }
}

/// Create a new goal
pub async fn create_goal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateGoalRequest>,
) -> impl IntoResponse {
    info!("POST /api/goals - name: {}", request.name);

    let user_id = match authenticated_user(&state, &headers).await {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.goal_service.create_goal(&user_id, request).await {
        Ok(goal) => {
            let response = CreateGoalResponse {
                goal: GoalMapper::to_dto(goal),
                success_message: "Goal created successfully".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to create goal: {}", e);
            (
                goal_error_status(&e.to_string()),
                Json(ErrorResponse { error: e.to_string() }),
            )
                .into_response()
        }
    }
}

/// Get a single goal with its statistics
pub async fn get_goal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/goals/{}", id);

    let user_id = match authenticated_user(&state, &headers).await {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.goal_service.get_goal(&user_id, &id).await {
        Ok(Some(goal)) => {
            let response = GoalDetailResponse {
                stats: compute_stats(&goal, today_local()),
                goal: GoalMapper::to_dto(goal),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse { error: "Goal not found".to_string() }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to get goal {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: "Error retrieving goal".to_string() }),
            )
                .into_response()
        }
    }
}

/// Replace a goal's name and date range
pub async fn update_goal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(request): Json<UpdateGoalRequest>,
) -> impl IntoResponse {
    info!("PUT /api/goals/{}", id);

    let user_id = match authenticated_user(&state, &headers).await {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.goal_service.update_goal(&user_id, &id, request).await {
        Ok(goal) => {
            let response = UpdateGoalResponse {
                goal: GoalMapper::to_dto(goal),
                success_message: "Goal updated successfully".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to update goal {}: {}", id, e);
            (
                goal_error_status(&e.to_string()),
                Json(ErrorResponse { error: e.to_string() }),
            )
                .into_response()
        }
    }
}

/// Delete a goal
pub async fn delete_goal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/goals/{}", id);

    let user_id = match authenticated_user(&state, &headers).await {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.goal_service.delete_goal(&user_id, &id).await {
        Ok(true) => (
            StatusCode::OK,
            Json(DeleteGoalResponse {
                success_message: "Goal deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse { error: "Goal not found".to_string() }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to delete goal {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error: "Error deleting goal".to_string() }),
            )
                .into_response()
        }
    }
}

/// Toggle one day's completion for a goal
pub async fn toggle_completion(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(request): Json<ToggleCompletionRequest>,
) -> impl IntoResponse {
    info!("POST /api/goals/{}/completion - date: {}", id, request.date);

    let user_id = match authenticated_user(&state, &headers).await {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .goal_service
        .toggle_completion(&user_id, &id, &request.date)
        .await
    {
        Ok((goal, completed)) => {
            let message = if completed {
                "Day marked complete"
            } else {
                "Day unmarked"
            };
            let response = ToggleCompletionResponse {
                goal: GoalMapper::to_dto(goal),
                completed,
                success_message: message.to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to toggle completion on goal {}: {}", id, e);
            (
                goal_error_status(&e.to_string()),
                Json(ErrorResponse { error: e.to_string() }),
            )
                .into_response()
        }
    }
}
