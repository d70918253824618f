use serde::{Deserialize, Serialize};

/// Goal ID in format: "goal::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    /// ID of the user this goal belongs to
    pub user_id: String,
    /// Name of the goal (max 256 characters)
    pub name: String,
    /// First day of the goal range (YYYY-MM-DD, inclusive)
    pub start_date: String,
    /// Last day of the goal range (YYYY-MM-DD, inclusive)
    pub end_date: String,
    /// Days marked done, as YYYY-MM-DD keys (sorted, no duplicates)
    pub completed_dates: Vec<String>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Last update timestamp (RFC 3339)
    pub updated_at: String,
}

/// Statistics for a single goal, computed against a reference "today"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalStats {
    /// Number of days marked done (all recorded completions)
    pub completed_days: u32,
    /// Inclusive day count from start to end of the goal range
    pub total_days: u32,
    /// Days that should have been completed by now but were not
    pub missed_days: u32,
    /// Consecutive completed days ending at today
    pub streak: u32,
    /// Whole days remaining until the end date (0 at and after it)
    pub days_left: u32,
}

/// Dashboard progress summary for a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub total_days: u32,
    pub completed_days: u32,
    /// Rounded percentage of total days completed
    pub progress_percentage: u32,
    /// Whether today falls within the goal range
    pub is_active: bool,
}

/// A goal together with its dashboard progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSummary {
    pub goal: Goal,
    pub progress: GoalProgress,
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalendarDayType {
    /// Empty padding day before the start of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// Represents a single cell in the month grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Day of month (0 for padding cells)
    pub day: u32,
    /// Day key (YYYY-MM-DD), absent for padding cells
    pub date: Option<String>,
    /// Whether the day falls within the goal range
    pub in_range: bool,
    /// Whether the day is marked done for the goal
    pub is_completed: bool,
    pub is_today: bool,
    /// Whether the day can be toggled (in range, not in the future)
    pub can_toggle: bool,
    pub day_type: CalendarDayType,
}

/// A month grid view model for a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    /// Day-of-week index of the 1st of the month (0 = Sunday)
    pub first_day_of_week: u32,
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user (never carries the password hash)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Response for both register and login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGoalRequest {
    pub name: String,
    /// First day of the goal range (YYYY-MM-DD)
    pub start_date: String,
    /// Last day of the goal range (YYYY-MM-DD)
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGoalResponse {
    pub goal: Goal,
    pub success_message: String,
}

/// Full replacement of name and date range; completions are preserved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateGoalRequest {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateGoalResponse {
    pub goal: Goal,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteGoalResponse {
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalListResponse {
    pub goals: Vec<GoalSummary>,
}

/// Goal detail payload: the goal plus its statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalDetailResponse {
    pub goal: Goal,
    pub stats: GoalStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleCompletionRequest {
    /// Day key to toggle (YYYY-MM-DD)
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleCompletionResponse {
    pub goal: Goal,
    /// Whether the date is marked done after the toggle
    pub completed: bool,
    pub success_message: String,
}

/// Error payload returned by every API endpoint on failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
