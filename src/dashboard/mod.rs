//! Web dashboard HTTP server module.
//!
//! This module provides an HTTP server for the web dashboard UI. It is the
//! default front end, started by the `serve` subcommand.

mod server;
pub mod templates;

pub use server::{DashboardServer, build_router, start_server};
