//! Text formatting for dashboard output.

use crate::agents::AgentInfo;
use crate::types::{Priority, RegistryStats, Task, TaskStatus, Ticket};

/// Shown in place of the task list before any task exists.
pub const NO_TASKS_MESSAGE: &str = "No tasks created yet. Add your first task above!";

fn priority_emoji(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "🔴",
        Priority::Medium => "🟡",
        Priority::Low => "🟢",
    }
}

fn status_emoji(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Done => "✅",
        TaskStatus::Progress => "🔄",
        TaskStatus::Todo => "📋",
    }
}

/// Format the task list as markdown, in the order given.
pub fn format_tasks_markdown(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return NO_TASKS_MESSAGE.to_string();
    }

    let mut md = String::from("📋 **CURRENT TASKS:**\n\n");
    for task in tasks {
        md.push_str(&format!(
            "**{}.** {} **{}**\n",
            task.id,
            status_emoji(task.status),
            task.title
        ));
        md.push_str(&format!(
            "   {} Priority: {}\n",
            priority_emoji(task.priority),
            task.priority.as_str().to_uppercase()
        ));
        md.push_str(&format!(
            "   📅 Created: {}\n",
            task.created_at.format("%Y-%m-%d %H:%M")
        ));
        md.push_str(&format!(
            "   🏷️ Status: {}",
            task.status.as_str().to_uppercase()
        ));
        if let Some(ref jira_id) = task.jira_id {
            md.push_str(&format!("\n   🔗 **Jira:** {}", jira_id));
        }
        md.push_str("\n\n---\n");
    }

    md
}

/// Confirmation shown after a task is added, including the agent's analysis.
pub fn format_task_created(task: &Task, analysis: &str) -> String {
    format!(
        "✅ **Task Created Successfully!**

**Task ID:** {}
**Title:** {}
**Priority:** {}
**Status:** {}

🤖 **AI Analysis:**
{}
",
        task.id,
        task.title,
        task.priority.as_str().to_uppercase(),
        task.status.as_str().to_uppercase(),
        analysis
    )
}

/// Confirmation shown after a ticket is fabricated.
pub fn format_ticket_created(ticket: &Ticket) -> String {
    format!(
        "🎉 **Jira Ticket Created Successfully!**

**Jira ID:** {}
**Title:** {}
**Project:** {}
**Assignee:** {}
**Epic:** {}
**Story Points:** {}
**Status:** {}

🔗 **Jira URL:** {}

✅ Task has been successfully linked to Jira!",
        ticket.id,
        ticket.title,
        ticket.project,
        ticket.assignee,
        ticket.epic,
        ticket.story_points,
        ticket.status,
        ticket.url
    )
}

/// Server status block for the dashboard tab.
pub fn format_status(
    stats: &RegistryStats,
    agents: &[AgentInfo],
    tool_names: &[String],
    task_count: usize,
    ticket_count: usize,
) -> String {
    let mut out = String::from("🔗 MCP SERVER STATUS:\n\n");
    out.push_str("✅ Server: Active\n");
    out.push_str(&format!("🛠️ Tools Available: {}\n", stats.tool_count));
    out.push_str(&format!("📊 Total API Calls: {}\n", stats.call_count));
    out.push_str(&format!("⏰ Last Call: {}\n", stats.last_call));

    out.push_str("\n🤖 REGISTERED AGENTS:\n");
    for agent in agents {
        out.push_str(&format!("• {} ({})\n", agent.name, agent.role));
    }

    out.push_str("\n🔧 AVAILABLE TOOLS:\n");
    for name in tool_names {
        out.push_str(&format!("• {}\n", name));
    }

    out.push_str("\n📋 TASK MANAGEMENT:\n");
    out.push_str(&format!("• Total Tasks: {}\n", task_count));
    out.push_str(&format!("• Jira Tickets: {}\n", ticket_count));
    out.push_str("• Integration: Active\n");

    out.push_str("\n💡 All systems operational and ready for use!");
    out
}
