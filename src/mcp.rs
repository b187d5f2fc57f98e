//! MCP front end.
//!
//! Exposes the application's tool registry over the Model Context Protocol on
//! stdio. Tool calls go through the same `ToolRegistry::invoke` path as the
//! dashboard, so they show up in the call history and status counters.

use crate::app::ProductMind;
use crate::tools::{ToolDescriptor, ToolRegistry};
use crate::types::ToolArgs;
use rmcp::{
    ErrorData, RoleServer, ServerHandler, ServiceExt,
    model::{
        CallToolRequestParams, CallToolResult, Content, InitializeResult, JsonObject,
        ListToolsResult, PaginatedRequestParams, ServerCapabilities, Tool,
    },
    service::RequestContext,
    transport::io::stdio,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info, warn};

const INSTRUCTIONS: &str = "\
ProductMind mock agents. generate_roadmap(topic) and generate_research(topic) return \
illustrative reports; analyze_task(task) returns a priority and effort estimate.";

/// MCP server handler backed by the shared application.
#[derive(Clone)]
pub struct McpServer {
    app: Arc<ProductMind>,
}

impl McpServer {
    pub fn new(app: Arc<ProductMind>) -> Self {
        Self { app }
    }
}

/// Build a tool definition whose parameters are all optional strings.
fn make_tool(descriptor: &ToolDescriptor) -> Tool {
    let properties: JsonObject = descriptor
        .params
        .iter()
        .map(|p| {
            (
                p.name.clone(),
                json!({ "type": "string", "description": p.description }),
            )
        })
        .collect();

    let input_schema = JsonObject::from_iter([
        ("type".to_string(), json!("object")),
        ("properties".to_string(), Value::Object(properties)),
    ]);

    Tool::new(
        descriptor.name.clone(),
        descriptor.description.clone(),
        input_schema,
    )
}

/// MCP tool definitions for everything in the registry.
pub fn tool_definitions(registry: &ToolRegistry) -> Vec<Tool> {
    registry.descriptors().iter().map(make_tool).collect()
}

/// Flatten MCP arguments into string arguments. Non-string values keep their
/// JSON text; nulls are dropped.
pub fn to_tool_args(arguments: Option<JsonObject>) -> ToolArgs {
    arguments
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key, s)),
            other => Some((key, other.to_string())),
        })
        .collect()
}

fn text_result(text: String, is_error: bool) -> CallToolResult {
    CallToolResult {
        content: vec![Content::text(text)],
        is_error: is_error.then_some(true),
        meta: None,
        structured_content: None,
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: Default::default(),
            server_info: rmcp::model::Implementation {
                name: "productmind".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            capabilities: ServerCapabilities {
                tools: Some(rmcp::model::ToolsCapability::default()),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: tool_definitions(self.app.registry()),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        let args = to_tool_args(request.arguments);
        Ok(dispatch(self.app.registry(), &request.name, args).await)
    }
}

/// Run one tool call through the registry and shape the MCP result.
///
/// Unknown tools and handler failures are both reported with `is_error`;
/// failures carry the serialized `ToolError`.
pub async fn dispatch(registry: &ToolRegistry, name: &str, args: ToolArgs) -> CallToolResult {
    let start = std::time::Instant::now();
    let known = registry.contains(name);

    match registry.invoke(name, args).await {
        Ok(output) => {
            debug!(
                tool = %name,
                duration_ms = start.elapsed().as_millis() as u64,
                "Tool call succeeded"
            );
            text_result(output, !known)
        }
        Err(e) => {
            warn!(
                tool = %name,
                error_code = ?e.code,
                error_message = %e.message,
                duration_ms = start.elapsed().as_millis() as u64,
                "Tool call failed"
            );
            let error_json = serde_json::to_string(&e)
                .unwrap_or_else(|_| json!({ "error": e.to_string() }).to_string());
            text_result(error_json, true)
        }
    }
}

/// Serve MCP on stdin/stdout until the client disconnects.
pub async fn serve_stdio(app: Arc<ProductMind>) -> anyhow::Result<()> {
    info!("Starting MCP server on stdio");
    let service = McpServer::new(app).serve(stdio()).await?;
    service.waiting().await?;
    info!("MCP client disconnected");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{FixedSequence, register_agents, shared};
    use crate::error::ToolError;
    use crate::tools::{FnTool, args};
    use std::time::Duration;

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        register_agents(&mut registry, Duration::ZERO, shared(FixedSequence::new(vec![])));
        registry
    }

    #[test]
    fn lists_every_registered_tool_with_its_parameter() {
        let tools = tool_definitions(&registry());
        let names: Vec<String> = tools.iter().map(|t| t.name.to_string()).collect();
        assert_eq!(names, vec!["analyze_task", "generate_research", "generate_roadmap"]);

        let schema = serde_json::to_value(tools[0].input_schema.as_ref()).unwrap();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["task"]["type"], "string");
    }

    #[test]
    fn arguments_flatten_to_strings() {
        let mut obj = JsonObject::new();
        obj.insert("topic".to_string(), json!("Fintech"));
        obj.insert("count".to_string(), json!(3));
        obj.insert("skip".to_string(), Value::Null);

        let args = to_tool_args(Some(obj));
        assert_eq!(args.get("topic").map(String::as_str), Some("Fintech"));
        assert_eq!(args.get("count").map(String::as_str), Some("3"));
        assert!(!args.contains_key("skip"));
        assert!(to_tool_args(None).is_empty());
    }

    fn result_text(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).unwrap();
        value["content"][0]["text"].as_str().unwrap_or_default().to_string()
    }

    #[tokio::test]
    async fn known_tool_is_not_flagged() {
        let result = dispatch(&registry(), "generate_roadmap", args([("topic", "Chat App")])).await;
        assert_eq!(result.is_error, None);
        assert!(result_text(&result).contains("PRODUCT ROADMAP: Chat App"));
    }

    #[tokio::test]
    async fn unknown_tool_is_flagged_with_sentinel() {
        let registry = registry();
        let result = dispatch(&registry, "summon_dragon", ToolArgs::new()).await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), "Tool summon_dragon not found");
        assert!(registry.history().is_empty());
    }

    #[tokio::test]
    async fn handler_failure_returns_error_json() {
        let mut registry = ToolRegistry::new();
        registry.register(
            "broken",
            FnTool::new("Always fails", |_args: ToolArgs| async {
                Err::<String, _>(ToolError::internal("generator offline"))
            }),
        );

        let result = dispatch(&registry, "broken", ToolArgs::new()).await;
        assert_eq!(result.is_error, Some(true));
        let text = result_text(&result);
        assert!(text.contains("INTERNAL_ERROR"));
        assert!(text.contains("generator offline"));
    }
}
