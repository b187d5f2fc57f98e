//! Application facade tying the tool registry, agents and record store
//! together.
//!
//! One `ProductMind` is built at startup and shared by reference with every
//! front end (web dashboard, MCP server). Each public async/sync method maps
//! to one user action.

use crate::agents::{
    ANALYZE_TASK_TOOL, AgentInfo, RESEARCH_TOOL, ROADMAP_TOOL, agent_roster, from_seed,
    register_agents,
};
use crate::config::Config;
use crate::error::{ToolError, ToolResult};
use crate::format::{format_status, format_task_created, format_ticket_created};
use crate::store::RecordStore;
use crate::tools::{ToolRegistry, args};
use crate::types::{Priority, Task, TaskStatus, Ticket, TicketRequest, ToolCallRecord};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

pub struct ProductMind {
    registry: ToolRegistry,
    store: Mutex<RecordStore>,
    agents: Vec<AgentInfo>,
}

impl ProductMind {
    /// Build the registry with the three agent tools and an empty store.
    pub fn new(config: &Config) -> Self {
        let mut registry = ToolRegistry::new();
        register_agents(
            &mut registry,
            config.generation.delay(),
            from_seed(config.generation.seed),
        );
        let store = RecordStore::new(&config.tasks, config.tickets.clone());
        Self::with_parts(registry, store)
    }

    /// Assemble from pre-built parts, e.g. a registry with a fixed random
    /// source.
    pub fn with_parts(registry: ToolRegistry, store: RecordStore) -> Self {
        Self {
            registry,
            store: Mutex::new(store),
            agents: agent_roster(),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn agents(&self) -> &[AgentInfo] {
        &self.agents
    }

    pub async fn generate_roadmap(&self, product: &str) -> ToolResult<String> {
        let product = required(product, "product name")?;
        info!(tool = ROADMAP_TOOL, product, "Dispatching roadmap request");
        self.registry
            .invoke(ROADMAP_TOOL, args([("topic", product)]))
            .await
    }

    pub async fn generate_research(&self, topic: &str) -> ToolResult<String> {
        let topic = required(topic, "research topic")?;
        info!(tool = RESEARCH_TOOL, topic, "Dispatching research request");
        self.registry
            .invoke(RESEARCH_TOOL, args([("topic", topic)]))
            .await
    }

    /// Analyze and record a new task, returning the confirmation text.
    ///
    /// A failed analysis is reported inside the confirmation; the task is
    /// still created.
    pub async fn add_task(&self, title: &str, priority: &str, status: &str) -> ToolResult<String> {
        let title = required(title, "task title")?;
        let priority: Priority = priority.parse()?;
        let status: TaskStatus = status.parse()?;

        info!(tool = ANALYZE_TASK_TOOL, title, "Dispatching task analysis");
        let analysis = match self
            .registry
            .invoke(ANALYZE_TASK_TOOL, args([("task", title)]))
            .await
        {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!(error = %e, "Task analysis failed");
                format!("❌ Error analyzing task: {}", e)
            }
        };

        let mut store = self.lock_store();
        let task = store.add_task(title, priority, status)?;
        Ok(format_task_created(task, &analysis))
    }

    /// Sync a task to a fabricated ticket. `task_id` is the raw form input.
    pub fn create_ticket(&self, task_id: &str, request: TicketRequest) -> ToolResult<String> {
        let task_id = required(task_id, "task ID")?;
        let task_id: i64 = task_id.parse().map_err(|_| {
            ToolError::invalid_value("task_id", "Please enter a valid task ID (number)")
        })?;
        // Negative ids parse but can never match a task.
        let task_id = u64::try_from(task_id).map_err(|_| ToolError::task_not_found(task_id))?;

        let mut store = self.lock_store();
        let ticket = store.create_ticket(task_id, request)?;
        Ok(format_ticket_created(ticket))
    }

    /// Registry and store summary for the dashboard tab.
    pub fn status(&self) -> String {
        let stats = self.registry.stats();
        let tool_names = self.registry.tool_names();
        let store = self.lock_store();
        format_status(
            &stats,
            &self.agents,
            &tool_names,
            store.task_count(),
            store.ticket_count(),
        )
    }

    pub fn tasks_display(&self) -> String {
        self.lock_store().render()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.lock_store().tasks().to_vec()
    }

    pub fn tickets(&self) -> Vec<Ticket> {
        self.lock_store().tickets().to_vec()
    }

    pub fn history(&self) -> Vec<ToolCallRecord> {
        self.registry.history()
    }

    // Records are append-only, so a poisoned lock still holds consistent data.
    fn lock_store(&self) -> MutexGuard<'_, RecordStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Trim `value`, rejecting it when nothing is left.
fn required<'a>(value: &'a str, field: &str) -> ToolResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(ToolError::missing_field(field))
    } else {
        Ok(value)
    }
}
