//! In-memory task and ticket records.
//!
//! Tasks and tickets are append-only for the lifetime of the process. Ids
//! come from monotonic counters and are never reused; a rejected call never
//! advances a counter.

use crate::config::{TaskConfig, TicketConfig};
use crate::error::{ToolError, ToolResult};
use crate::format::format_tasks_markdown;
use crate::types::{Priority, TICKET_STATUS, Task, TaskStatus, Ticket, TicketRequest};
use chrono::Local;
use tracing::{info, warn};

/// Append-only store of tasks and the tickets synced from them.
#[derive(Debug)]
pub struct RecordStore {
    tasks: Vec<Task>,
    tickets: Vec<Ticket>,
    next_task_id: u64,
    next_ticket_number: u64,
    ticket_config: TicketConfig,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(&TaskConfig::default(), TicketConfig::default())
    }
}

impl RecordStore {
    pub fn new(task_config: &TaskConfig, ticket_config: TicketConfig) -> Self {
        Self {
            tasks: Vec::new(),
            tickets: Vec::new(),
            next_task_id: task_config.start_id,
            next_ticket_number: ticket_config.start,
            ticket_config,
        }
    }

    /// Append a task. A blank title is rejected without consuming an id.
    pub fn add_task(
        &mut self,
        title: &str,
        priority: Priority,
        status: TaskStatus,
    ) -> ToolResult<&Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ToolError::missing_field("task title"));
        }
        let following_id = self
            .next_task_id
            .checked_add(1)
            .ok_or_else(|| ToolError::internal("Task ids exhausted"))?;

        let task = Task {
            id: self.next_task_id,
            title: title.to_string(),
            priority,
            status,
            created_at: Local::now(),
            jira_id: None,
            jira_url: None,
        };
        self.next_task_id = following_id;

        info!(task_id = task.id, priority = %priority, status = %status, "Task created");
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Fabricate a ticket for `task_id` and link it back onto the task.
    ///
    /// Fails with `TaskNotFound` for unknown ids. A task that already carries
    /// a ticket is rejected with `AlreadyExists` unless relinking is enabled,
    /// in which case a new ticket is created and the task's link is replaced.
    pub fn create_ticket(&mut self, task_id: u64, request: TicketRequest) -> ToolResult<&Ticket> {
        let allow_relink = self.ticket_config.allow_relink;
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| ToolError::task_not_found(task_id))?;

        if let Some(existing) = task.jira_id.as_deref() {
            if !allow_relink {
                return Err(ToolError::already_linked(task_id, existing));
            }
            warn!(task_id, previous = existing, "Relinking task to a new ticket");
        }

        let following_number = self
            .next_ticket_number
            .checked_add(1)
            .ok_or_else(|| ToolError::internal("Ticket numbers exhausted"))?;
        let id = format!("{}-{}", self.ticket_config.prefix, self.next_ticket_number);
        let url = format!("{}{}", self.ticket_config.url_base, id);

        let ticket = Ticket {
            id: id.clone(),
            task_id,
            title: task.title.clone(),
            priority: task.priority,
            project: request.project,
            assignee: request.assignee,
            epic: request.epic,
            story_points: request.story_points,
            status: TICKET_STATUS.to_string(),
            created_at: Local::now(),
            url: url.clone(),
        };

        task.jira_id = Some(id);
        task.jira_url = Some(url);
        self.next_ticket_number = following_number;

        info!(task_id, ticket_id = %ticket.id, "Ticket created");
        self.tickets.push(ticket);
        Ok(&self.tickets[self.tickets.len() - 1])
    }

    pub fn get_task(&self, task_id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tickets in creation order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn ticket_count(&self) -> usize {
        self.tickets.len()
    }

    /// Id the next successful `add_task` will assign.
    pub fn next_task_id(&self) -> u64 {
        self.next_task_id
    }

    /// Number the next ticket will carry.
    pub fn next_ticket_number(&self) -> u64 {
        self.next_ticket_number
    }

    /// Human-readable listing of every task, in insertion order.
    pub fn render(&self) -> String {
        format_tasks_markdown(&self.tasks)
    }
}
