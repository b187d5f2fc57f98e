//! Integration tests for the registry, record store and application facade.
//!
//! Agents run with zero delay and a fixed random sequence so output is
//! deterministic.

use productmind::agents::{FixedSequence, register_agents, shared};
use productmind::app::ProductMind;
use productmind::config::{TaskConfig, TicketConfig};
use productmind::error::ErrorCode;
use productmind::store::RecordStore;
use productmind::tools::{ToolRegistry, args};
use productmind::types::{Priority, TaskStatus, TicketRequest, ToolArgs};
use std::time::Duration;

/// Helper to create an application with deterministic agents.
fn setup_app(sequence: Vec<u64>) -> ProductMind {
    let mut registry = ToolRegistry::new();
    register_agents(&mut registry, Duration::ZERO, shared(FixedSequence::new(sequence)));
    ProductMind::with_parts(registry, RecordStore::default())
}

fn ticket_request(project: &str) -> TicketRequest {
    TicketRequest {
        project: project.to_string(),
        assignee: "Unassigned".to_string(),
        epic: "Epic-X".to_string(),
        story_points: "5".to_string(),
    }
}

mod scenario_tests {
    use super::*;

    #[test]
    fn task_then_ticket_links_both_ways() {
        let mut store = RecordStore::default();

        let task = store
            .add_task("Write spec", Priority::High, TaskStatus::Todo)
            .expect("Failed to add task")
            .clone();
        assert_eq!(task.id, 1);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(task.jira_id.is_none());

        let ticket = store
            .create_ticket(1, ticket_request("PM"))
            .expect("Failed to create ticket")
            .clone();
        assert_eq!(ticket.id, "PROJ-100");
        assert_eq!(ticket.title, "Write spec");
        assert_eq!(ticket.project, "PM");
        assert_eq!(ticket.task_id, 1);

        assert_eq!(
            store.get_task(1).and_then(|t| t.jira_id.clone()),
            Some("PROJ-100".to_string())
        );
    }

    #[test]
    fn ticket_for_missing_task_on_empty_store() {
        let mut store = RecordStore::default();
        let err = store.create_ticket(999, ticket_request("PM")).unwrap_err();
        assert_eq!(err.code, ErrorCode::TaskNotFound);
        assert_eq!(store.ticket_count(), 0);
    }

    #[test]
    fn ticket_number_is_pre_call_counter() {
        let mut store = RecordStore::default();
        for i in 0..3 {
            store
                .add_task(&format!("t{i}"), Priority::Medium, TaskStatus::Todo)
                .unwrap();
        }
        for task_id in 1..=3 {
            let before = store.next_ticket_number();
            let ticket = store.create_ticket(task_id, ticket_request("DEV")).unwrap();
            assert_eq!(ticket.id, format!("PROJ-{before}"));
            assert_eq!(store.next_ticket_number(), before + 1);
        }
    }

    #[test]
    fn rejected_titles_do_not_skip_ids() {
        let mut store = RecordStore::default();
        store.add_task("first", Priority::Low, TaskStatus::Todo).unwrap();
        assert!(store.add_task("   ", Priority::Low, TaskStatus::Todo).is_err());
        let second = store.add_task("second", Priority::Low, TaskStatus::Todo).unwrap();
        assert_eq!(second.id, 2);
    }

    #[test]
    fn render_follows_insertion_order() {
        let mut store = RecordStore::new(&TaskConfig::default(), TicketConfig::default());
        store.add_task("Alpha", Priority::High, TaskStatus::Todo).unwrap();
        store.add_task("Beta", Priority::Low, TaskStatus::Done).unwrap();
        store.create_ticket(2, ticket_request("PM")).unwrap();

        let rendered = store.render();
        let alpha = rendered.find("Alpha").unwrap();
        let beta = rendered.find("Beta").unwrap();
        assert!(alpha < beta);
        assert!(rendered.contains("🔗 **Jira:** PROJ-100"));
        assert_eq!(rendered, store.render());
    }
}

mod registry_tests {
    use super::*;

    #[tokio::test]
    async fn unknown_tool_returns_sentinel() {
        let app = setup_app(vec![]);
        let out = app
            .registry()
            .invoke("summon_dragon", ToolArgs::new())
            .await
            .unwrap();
        assert_eq!(out, "Tool summon_dragon not found");
        assert!(app.history().is_empty());
    }

    #[tokio::test]
    async fn each_call_appends_one_record() {
        let app = setup_app(vec![3, 1, 0, 2]);
        let call_args = args([("topic", "AI SaaS Tools")]);
        let out = app
            .registry()
            .invoke("generate_research", call_args.clone())
            .await
            .unwrap();

        let history = app.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].input, call_args);
        assert_eq!(history[0].output, out);
        assert!(out.contains("User Interest Level: 68%"));
        assert!(out.contains("Competition Score: 7/10"));
        assert!(out.contains("Total Market Size: $1.2B"));
        assert!(out.contains("Annual Growth Rate: 25%"));
    }
}

mod app_tests {
    use super::*;

    #[tokio::test]
    async fn full_task_flow_through_the_facade() {
        let app = setup_app(vec![1, 3]);

        let created = app.add_task("Implement login", "medium", "progress").await.unwrap();
        assert!(created.contains("**Status:** PROGRESS"));
        assert!(created.contains("PRIORITY ASSESSMENT: Medium"));
        assert!(created.contains("EFFORT ESTIMATE: 8 story points"));

        let ticket = app
            .create_ticket("1", ticket_request("PRODUCTMIND (PM)"))
            .unwrap();
        assert!(ticket.contains("**Jira ID:** PROJ-100"));
        assert!(ticket.contains("**Project:** PRODUCTMIND (PM)"));
        assert!(ticket.contains("https://your-domain.atlassian.net/browse/PROJ-100"));

        let dup = app.create_ticket("1", ticket_request("PM")).unwrap_err();
        assert_eq!(dup.code, ErrorCode::AlreadyExists);

        let status = app.status();
        assert!(status.contains("Total API Calls: 1"));
        assert!(status.contains("Total Tasks: 1"));
        assert!(status.contains("Jira Tickets: 1"));

        assert!(app.tasks_display().contains("**1.** 🔄 **Implement login**"));
        assert_eq!(app.tickets().len(), 1);
    }
}
