//! Goal service domain logic for the goal tracker.
//!
//! This module contains the core business logic for goal management:
//! CRUD operations over a user's goals and the daily completion toggle.
//!
//! ## Business Rules
//!
//! - Goal names: 1-256 characters after trimming
//! - Date range is inclusive and must satisfy start <= end
//! - Editing a goal replaces name and range but preserves completions,
//!   even ones that fall outside the new range
//! - A completion toggle adds or removes exactly one day key per call;
//!   toggling the same day twice restores the original state
//! - Every operation is scoped to the owning user

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, Utc};
use tracing::info;

use shared::{CreateGoalRequest, UpdateGoalRequest};

use crate::domain::dates::parse_date_key;
use crate::domain::models::{Goal, GoalValidationError};
use crate::storage::sqlite::DbConnection;
use crate::storage::{GoalRepository, GoalStorage};

/// Service for managing goals and their completions
#[derive(Clone)]
pub struct GoalService {
    goal_repository: GoalRepository,
}

impl GoalService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            goal_repository: GoalRepository::new(db),
        }
    }

    /// Create a new goal with an empty completion set
    pub async fn create_goal(&self, user_id: &str, request: CreateGoalRequest) -> Result<Goal> {
        let name = validate_name(&request.name)?;
        let (start_date, end_date) = validate_range(&request.start_date, &request.end_date)?;

        let now = Utc::now().to_rfc3339();
        let goal = Goal {
            id: Goal::generate_id(),
            user_id: user_id.to_string(),
            name,
            start_date,
            end_date,
            completed_dates: Default::default(),
            created_at: now.clone(),
            updated_at: now,
        };

        self.goal_repository.store_goal(&goal).await?;

        info!("Created goal {} for user {}", goal.id, user_id);
        Ok(goal)
    }

    /// List a user's goals, newest first
    pub async fn list_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repository.list_goals(user_id).await
    }

    /// Get a single goal for its owner
    pub async fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Option<Goal>> {
        self.goal_repository.get_goal(goal_id, user_id).await
    }

    /// Replace a goal's name and date range, preserving its completions
    pub async fn update_goal(
        &self,
        user_id: &str,
        goal_id: &str,
        request: UpdateGoalRequest,
    ) -> Result<Goal> {
        let name = validate_name(&request.name)?;
        let (start_date, end_date) = validate_range(&request.start_date, &request.end_date)?;

        let mut goal = self
            .goal_repository
            .get_goal(goal_id, user_id)
            .await?
            .ok_or_else(|| anyhow!("Goal not found"))?;

        goal.name = name;
        goal.start_date = start_date;
        goal.end_date = end_date;
        goal.updated_at = Utc::now().to_rfc3339();

        self.goal_repository.update_goal(&goal).await?;

        info!("Updated goal {} for user {}", goal.id, user_id);
        Ok(goal)
    }

    /// Delete a goal. Returns false when the owner has no such goal.
    pub async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<bool> {
        let deleted = self.goal_repository.delete_goal(goal_id, user_id).await?;
        if deleted {
            info!("Deleted goal {} for user {}", goal_id, user_id);
        }
        Ok(deleted)
    }

    /// Toggle one day's completion: present is removed, absent is added.
    /// Returns the updated goal and whether the day is now marked done.
    pub async fn toggle_completion(
        &self,
        user_id: &str,
        goal_id: &str,
        date: &str,
    ) -> Result<(Goal, bool)> {
        if parse_date_key(date).is_none() {
            return Err(GoalValidationError::InvalidDate(date.to_string()).into());
        }

        let mut goal = self
            .goal_repository
            .get_goal(goal_id, user_id)
            .await?
            .ok_or_else(|| anyhow!("Goal not found"))?;

        let completed = if goal.completed_dates.remove(date) {
            false
        } else {
            goal.completed_dates.insert(date.to_string());
            true
        };

        goal.updated_at = Utc::now().to_rfc3339();
        self.goal_repository.update_goal(&goal).await?;

        info!(
            "Toggled {} on goal {} for user {} (completed: {})",
            date, goal.id, user_id, completed
        );
        Ok((goal, completed))
    }
}

fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(GoalValidationError::EmptyName.into());
    }
    if name.len() > 256 {
        return Err(GoalValidationError::NameTooLong.into());
    }
    Ok(name.to_string())
}

fn validate_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate)> {
    let start_date = parse_date_key(start)
        .ok_or_else(|| GoalValidationError::InvalidDate(start.to_string()))?;
    let end_date =
        parse_date_key(end).ok_or_else(|| GoalValidationError::InvalidDate(end.to_string()))?;

    if start_date > end_date {
        return Err(GoalValidationError::StartAfterEnd.into());
    }

    Ok((start_date, end_date))
}
