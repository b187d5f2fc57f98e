//! Configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default port for the web dashboard.
pub const DEFAULT_UI_PORT: u16 = 7860;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub tickets: TicketConfig,

    #[serde(default)]
    pub tasks: TaskConfig,
}

/// Web dashboard listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind (default: 127.0.0.1).
    #[serde(default = "default_host")]
    pub host: String,

    /// Port for the web dashboard (default: 7860).
    #[serde(default = "default_ui_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_ui_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_ui_port() -> u16 {
    DEFAULT_UI_PORT
}

/// Agent response generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Simulated latency before each agent responds (default: 1000).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Fixed seed for reproducible output. Entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            seed: None,
        }
    }
}

impl GenerationConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn default_delay_ms() -> u64 {
    1_000
}

/// Simulated issue-tracker settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketConfig {
    /// Ticket key prefix, e.g. `PROJ` in `PROJ-100`.
    #[serde(default = "default_ticket_prefix")]
    pub prefix: String,

    /// Number assigned to the first ticket (default: 100).
    #[serde(default = "default_ticket_start")]
    pub start: u64,

    /// Base URL the ticket key is appended to.
    #[serde(default = "default_url_base")]
    pub url_base: String,

    /// Allow a task that already has a ticket to be linked to a new one.
    #[serde(default)]
    pub allow_relink: bool,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            prefix: default_ticket_prefix(),
            start: default_ticket_start(),
            url_base: default_url_base(),
            allow_relink: false,
        }
    }
}

fn default_ticket_prefix() -> String {
    "PROJ".to_string()
}

fn default_ticket_start() -> u64 {
    100
}

fn default_url_base() -> String {
    "https://your-domain.atlassian.net/browse/".to_string()
}

/// Task list settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Id assigned to the first task (default: 1).
    #[serde(default = "default_task_start_id")]
    pub start_id: u64,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            start_id: default_task_start_id(),
        }
    }
}

fn default_task_start_id() -> u64 {
    1
}
