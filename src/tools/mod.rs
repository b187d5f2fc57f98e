//! Tool registry: name-based dispatch with call history.
//!
//! Handlers are registered under a string name and invoked with string
//! arguments. Every successful call is appended to an in-memory history
//! that lives for the lifetime of the process.

use crate::error::ToolResult;
use crate::types::{RegistryStats, ToolArgs, ToolCallRecord};
use async_trait::async_trait;
use chrono::Local;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Declared parameter of a tool, used when listing tools to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolParam {
    pub name: String,
    pub description: String,
}

impl ToolParam {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Name, description and parameters of a registered tool.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub params: Vec<ToolParam>,
}

/// A callable reachable through the registry.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, args: &ToolArgs) -> ToolResult<String>;

    fn description(&self) -> String {
        String::new()
    }

    fn params(&self) -> Vec<ToolParam> {
        Vec::new()
    }
}

/// Adapter turning an async closure into a [`ToolHandler`].
pub struct FnTool<F> {
    description: String,
    f: F,
}

impl<F> FnTool<F> {
    pub fn new(description: impl Into<String>, f: F) -> Self {
        Self {
            description: description.into(),
            f,
        }
    }
}

#[async_trait]
impl<F, Fut> ToolHandler for FnTool<F>
where
    F: Fn(ToolArgs) -> Fut + Send + Sync,
    Fut: Future<Output = ToolResult<String>> + Send,
{
    async fn call(&self, args: &ToolArgs) -> ToolResult<String> {
        (self.f)(args.clone()).await
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

/// Message returned for names with no registered handler.
pub fn not_found_message(name: &str) -> String {
    format!("Tool {} not found", name)
}

/// Registry of named tools plus their call history.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn ToolHandler>>,
    history: Mutex<Vec<ToolCallRecord>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, replacing any previous handler.
    pub fn register(&mut self, name: impl Into<String>, handler: impl ToolHandler + 'static) {
        let name = name.into();
        if self.tools.insert(name.clone(), Arc::new(handler)).is_some() {
            debug!(tool = %name, "Replaced existing tool handler");
        } else {
            debug!(tool = %name, "Registered tool");
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Dispatch a call by name.
    ///
    /// Unknown names yield [`not_found_message`] without recording history.
    /// Handler errors are returned as-is and are not recorded either.
    pub async fn invoke(&self, name: &str, args: ToolArgs) -> ToolResult<String> {
        let Some(handler) = self.tools.get(name).cloned() else {
            debug!(tool = %name, "Call to unknown tool");
            return Ok(not_found_message(name));
        };

        let output = handler.call(&args).await?;

        let record = ToolCallRecord {
            tool_name: name.to_string(),
            input: args,
            output: output.clone(),
            timestamp: Local::now().format("%H:%M:%S").to_string(),
        };
        self.lock_history().push(record);

        Ok(output)
    }

    pub fn stats(&self) -> RegistryStats {
        let history = self.lock_history();
        RegistryStats {
            call_count: history.len(),
            tool_count: self.tools.len(),
            last_call: history
                .last()
                .map(|r| r.timestamp.clone())
                .unwrap_or_else(|| "None".to_string()),
        }
    }

    /// Snapshot of every recorded call, oldest first.
    pub fn history(&self) -> Vec<ToolCallRecord> {
        self.lock_history().clone()
    }

    /// Registered tool names in sorted order.
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tool_names()
            .into_iter()
            .filter_map(|name| {
                let handler = self.tools.get(&name)?;
                Some(ToolDescriptor {
                    description: handler.description(),
                    params: handler.params(),
                    name,
                })
            })
            .collect()
    }

    // History is append-only, so a poisoned lock still holds consistent data.
    fn lock_history(&self) -> std::sync::MutexGuard<'_, Vec<ToolCallRecord>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Build a [`ToolArgs`] map from key/value pairs.
pub fn args<I, K, V>(pairs: I) -> ToolArgs
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
