//! # Domain Module
//!
//! Contains all business logic for the goal tracker.
//!
//! This module encapsulates the core rules, entities, and services that
//! define how goals are modeled, completed, and summarized. It operates
//! independently of the HTTP layer and of any storage mechanism.
//!
//! ## Module Organization
//!
//! - **dates**: canonical day keys and date arithmetic
//! - **stats**: streak, missed-day, and progress computations
//! - **calendar**: month grid view model generation
//! - **goal_service**: goal CRUD and the daily completion toggle
//! - **auth_service**: registration, login, and token verification
//! - **models**: domain entities (separate from the wire DTOs)
//!
//! ## Core Concepts
//!
//! - **Goal**: a named commitment over an inclusive date range
//! - **Completion**: a calendar day marked done, stored as a day key
//! - **Streak**: consecutive completed days ending at today
//!
//! The stats and calendar computations are pure functions over their
//! arguments; a caller supplies the goal and a reference "today", which
//! keeps them callable concurrently from any number of requests.

pub mod auth_service;
pub mod calendar;
pub mod dates;
pub mod goal_service;
pub mod models;
pub mod stats;

pub use auth_service::AuthService;
pub use goal_service::GoalService;
