//! # Storage Module
//!
//! Data persistence for the goal tracker.
//!
//! The domain layer talks to the traits in `traits.rs`; the SQLite
//! implementation under `sqlite/` is the only backend shipped, but nothing
//! above this layer knows that.

pub mod sqlite;
pub mod traits;

pub use sqlite::{DbConnection, GoalRepository, UserRepository};
pub use traits::{GoalStorage, UserStorage};
