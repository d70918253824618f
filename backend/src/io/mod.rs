//! # IO Module
//!
//! Interface layer that exposes backend functionality over HTTP.

pub mod rest;
