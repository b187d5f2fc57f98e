//! HTTP server implementation for the web dashboard.
//!
//! This module provides the axum-based HTTP server that serves the dashboard
//! page, the htmx fragment endpoints behind each button, and a small JSON API.

use axum::{
    Router,
    extract::{Form, State},
    response::{Html, IntoResponse, Json},
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::templates;
use crate::app::ProductMind;
use crate::config::ServerConfig;
use crate::error::ToolResult;
use crate::types::{Task, Ticket, TicketRequest, ToolCallRecord};

/// Dashboard server state shared across handlers.
#[derive(Clone)]
pub struct DashboardServer {
    app: Arc<ProductMind>,
}

impl DashboardServer {
    pub fn new(app: Arc<ProductMind>) -> Self {
        Self { app }
    }

    pub fn app(&self) -> &ProductMind {
        &self.app
    }
}

/// Health check response.
#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Escape text for inclusion in HTML.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap generated text in a preformatted block.
fn text_block(id: Option<&str>, text: &str) -> String {
    match id {
        Some(id) => format!(
            r#"<pre id="{}" class="output">{}</pre>"#,
            id,
            html_escape(text)
        ),
        None => format!(r#"<pre class="output">{}</pre>"#, html_escape(text)),
    }
}

/// Render an action result, turning errors into the user-facing message.
fn action_output(result: ToolResult<String>) -> String {
    match result {
        Ok(text) => text_block(None, &text),
        Err(e) => {
            info!(code = ?e.code, error = %e, "Dashboard action rejected");
            format!(
                r#"<pre class="output error-message">{}</pre>"#,
                html_escape(&e.to_user_message())
            )
        }
    }
}

/// Root endpoint - serves the dashboard page.
async fn root() -> Html<&'static str> {
    Html(templates::INDEX_TEMPLATE)
}

#[derive(Debug, serde::Deserialize)]
struct RoadmapForm {
    #[serde(default)]
    product: String,
}

async fn api_roadmap(
    State(state): State<DashboardServer>,
    Form(form): Form<RoadmapForm>,
) -> Html<String> {
    Html(action_output(state.app().generate_roadmap(&form.product).await))
}

#[derive(Debug, serde::Deserialize)]
struct ResearchForm {
    #[serde(default)]
    topic: String,
}

async fn api_research(
    State(state): State<DashboardServer>,
    Form(form): Form<ResearchForm>,
) -> Html<String> {
    Html(action_output(state.app().generate_research(&form.topic).await))
}

#[derive(Debug, serde::Deserialize)]
struct AddTaskForm {
    #[serde(default)]
    title: String,
    #[serde(default = "default_priority")]
    priority: String,
    #[serde(default = "default_status")]
    status: String,
}

fn default_priority() -> String {
    "medium".to_string()
}

fn default_status() -> String {
    "todo".to_string()
}

/// Add a task. Returns the confirmation plus an out-of-band swap of the list.
async fn api_add_task(
    State(state): State<DashboardServer>,
    Form(form): Form<AddTaskForm>,
) -> Html<String> {
    let result = state
        .app()
        .add_task(&form.title, &form.priority, &form.status)
        .await;
    let mut html = action_output(result);
    html.push_str(&format!(
        r#"<div id="tasks-list" hx-swap-oob="true">{}</div>"#,
        text_block(None, &state.app().tasks_display())
    ));
    Html(html)
}

#[derive(Debug, serde::Deserialize)]
struct TicketForm {
    #[serde(default)]
    task_id: String,
    #[serde(default)]
    project: String,
    #[serde(default)]
    assignee: String,
    #[serde(default)]
    epic: String,
    #[serde(default)]
    story_points: String,
}

async fn api_create_ticket(
    State(state): State<DashboardServer>,
    Form(form): Form<TicketForm>,
) -> Html<String> {
    let request = TicketRequest {
        project: form.project,
        assignee: form.assignee,
        epic: form.epic,
        story_points: form.story_points,
    };
    Html(action_output(state.app().create_ticket(&form.task_id, request)))
}

/// Task list fragment for the refresh button.
async fn api_tasks_list(State(state): State<DashboardServer>) -> Html<String> {
    Html(text_block(None, &state.app().tasks_display()))
}

/// Registry status fragment for the refresh button.
async fn api_status(State(state): State<DashboardServer>) -> Html<String> {
    Html(text_block(None, &state.app().status()))
}

async fn api_tasks_json(State(state): State<DashboardServer>) -> Json<Vec<Task>> {
    Json(state.app().tasks())
}

async fn api_tickets_json(State(state): State<DashboardServer>) -> Json<Vec<Ticket>> {
    Json(state.app().tickets())
}

async fn api_history_json(State(state): State<DashboardServer>) -> Json<Vec<ToolCallRecord>> {
    Json(state.app().history())
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with all routes.
pub fn build_router(state: DashboardServer) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Page routes
        .route("/", get(root))
        // htmx fragment routes
        .route("/api/roadmap", post(api_roadmap))
        .route("/api/research", post(api_research))
        .route("/api/tasks", get(api_tasks_json).post(api_add_task))
        .route("/api/tasks/list", get(api_tasks_list))
        .route("/api/tickets", get(api_tickets_json).post(api_create_ticket))
        .route("/api/status", get(api_status))
        // JSON routes
        .route("/api/history", get(api_history_json))
        .route("/api/health", get(health))
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the dashboard and serve it in the background.
///
/// Returns a sender that triggers graceful shutdown, the bound address, and
/// the task driving the server.
pub async fn start_server(
    app: Arc<ProductMind>,
    config: &ServerConfig,
) -> anyhow::Result<(oneshot::Sender<()>, SocketAddr, tokio::task::JoinHandle<()>)> {
    let router = build_router(DashboardServer::new(app));

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    let bound_addr = listener.local_addr()?;

    info!("Dashboard server listening on http://{}", bound_addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("Dashboard server shutting down");
            })
            .await
        {
            tracing::error!("Dashboard server error: {}", e);
        }
    });

    Ok((shutdown_tx, bound_addr, handle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy",
            version: "0.1.0",
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("0.1.0"));
    }

    #[test]
    fn generated_text_is_escaped() {
        let html = action_output(Ok("<script>alert('x')</script> & more".to_string()));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn errors_render_as_user_messages() {
        let html = action_output(Err(ToolError::missing_field("product name")));
        assert!(html.contains("error-message"));
        assert!(html.contains("❌ Please enter a product name"));
    }
}
