//! # SQLite Storage Module
//!
//! SQLite-based storage implementation backing the goal tracker.
//!
//! ## Components
//!
//! - **db.rs** - database connection management and schema setup
//! - **repositories/** - repository implementations of the storage traits

pub mod db;
pub mod repositories;

pub use db::DbConnection;
pub use repositories::{GoalRepository, UserRepository};
