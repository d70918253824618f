use chrono::NaiveDate;
use std::collections::BTreeSet;

/// A named commitment tracked over an inclusive date range.
///
/// `completed_dates` holds canonical day keys with set semantics, so a day
/// is either marked done or it is not. Keys outside the current range may
/// persist (edits that narrow the range keep history) but never count toward
/// range-bounded statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub completed_dates: BTreeSet<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Goal {
    pub fn generate_id() -> String {
        format!("goal::{}", uuid::Uuid::new_v4())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GoalValidationError {
    #[error("Goal name cannot be empty")]
    EmptyName,
    #[error("Goal name cannot exceed 256 characters")]
    NameTooLong,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Start date cannot be after end date")]
    StartAfterEnd,
}
