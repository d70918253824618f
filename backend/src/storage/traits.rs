//! # Storage Traits
//!
//! Storage abstraction traits that let the domain layer work against any
//! backend. The shipped implementation is SQLite, but nothing in the domain
//! services depends on that.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{Goal, User};

/// Trait defining the interface for user storage operations
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Store a new user
    async fn store_user(&self, user: &User) -> Result<()>;

    /// Retrieve a user by ID
    async fn get_user(&self, user_id: &str) -> Result<Option<User>>;

    /// Retrieve a user by email address
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// Trait defining the interface for goal storage operations
///
/// Every read and write is scoped to an owner: a goal belonging to another
/// user is indistinguishable from a goal that does not exist.
#[async_trait]
pub trait GoalStorage: Send + Sync {
    /// Store a new goal
    async fn store_goal(&self, goal: &Goal) -> Result<()>;

    /// Retrieve a specific goal for an owner
    async fn get_goal(&self, goal_id: &str, user_id: &str) -> Result<Option<Goal>>;

    /// List an owner's goals, newest first
    async fn list_goals(&self, user_id: &str) -> Result<Vec<Goal>>;

    /// Update an existing goal (name, range, completions, timestamps)
    async fn update_goal(&self, goal: &Goal) -> Result<()>;

    /// Delete a goal for an owner
    /// Returns true if the goal was found and deleted, false otherwise
    async fn delete_goal(&self, goal_id: &str, user_id: &str) -> Result<bool>;
}
