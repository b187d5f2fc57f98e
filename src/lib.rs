//! ProductMind dashboard library
//!
//! This module exports the core components for testing and integration.

pub mod agents;
pub mod app;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod logging;
pub mod mcp;
pub mod store;
pub mod tools;
pub mod types;
