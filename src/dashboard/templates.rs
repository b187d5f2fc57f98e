//! HTML templates for the web dashboard.
//!
//! Templates are embedded at compile time using `include_str!`.

/// The single-page dashboard with its four tabs.
pub const INDEX_TEMPLATE: &str = include_str!("templates/index.html");
