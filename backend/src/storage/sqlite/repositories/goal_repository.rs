use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::Row;
use std::collections::BTreeSet;

use crate::domain::dates::{date_key, parse_date_key};
use crate::domain::models::Goal;
use crate::storage::sqlite::db::DbConnection;
use crate::storage::traits::GoalStorage;

/// Repository for goal operations.
///
/// Dates are persisted as canonical day keys and the completion set as a
/// JSON array column, so records stay readable with plain sqlite tooling.
#[derive(Clone)]
pub struct GoalRepository {
    db: DbConnection,
}

impl GoalRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_goal(row: &sqlx::sqlite::SqliteRow) -> Result<Goal> {
        let start_raw: String = row.get("start_date");
        let end_raw: String = row.get("end_date");
        let completed_raw: String = row.get("completed_dates");

        let start_date = parse_date_key(&start_raw)
            .ok_or_else(|| anyhow!("Corrupt start_date in goals table: {}", start_raw))?;
        let end_date = parse_date_key(&end_raw)
            .ok_or_else(|| anyhow!("Corrupt end_date in goals table: {}", end_raw))?;
        let completed_dates: BTreeSet<String> = serde_json::from_str(&completed_raw)?;

        Ok(Goal {
            id: row.get("id"),
            user_id: row.get("user_id"),
            name: row.get("name"),
            start_date,
            end_date,
            completed_dates,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }

    fn completed_dates_json(goal: &Goal) -> Result<String> {
        Ok(serde_json::to_string(&goal.completed_dates)?)
    }
}

#[async_trait]
impl GoalStorage for GoalRepository {
    async fn store_goal(&self, goal: &Goal) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO goals (id, user_id, name, start_date, end_date, completed_dates, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&goal.id)
        .bind(&goal.user_id)
        .bind(&goal.name)
        .bind(date_key(goal.start_date))
        .bind(date_key(goal.end_date))
        .bind(Self::completed_dates_json(goal)?)
        .bind(&goal.created_at)
        .bind(&goal.updated_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_goal(&self, goal_id: &str, user_id: &str) -> Result<Option<Goal>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, name, start_date, end_date, completed_dates, created_at, updated_at
            FROM goals
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(goal_id)
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(Self::row_to_goal(&r)?)),
            None => Ok(None),
        }
    }

    async fn list_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, name, start_date, end_date, completed_dates, created_at, updated_at
            FROM goals
            WHERE user_id = ?
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_goal).collect()
    }

    async fn update_goal(&self, goal: &Goal) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE goals
            SET name = ?, start_date = ?, end_date = ?, completed_dates = ?, updated_at = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(&goal.name)
        .bind(date_key(goal.start_date))
        .bind(date_key(goal.end_date))
        .bind(Self::completed_dates_json(goal)?)
        .bind(&goal.updated_at)
        .bind(&goal.id)
        .bind(&goal.user_id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn delete_goal(&self, goal_id: &str, user_id: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM goals WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(goal_id)
        .bind(user_id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
