//! Mock AI agents.
//!
//! Each agent turns a prompt into a canned, agent-styled text block. The
//! research and task-analysis agents fill some fields from a small set of
//! choices drawn from a [`RandomSource`], so output is illustrative filler and
//! not reproducible unless the source is seeded.

mod random;
mod templates;

pub use random::{FixedSequence, RandomSource, SharedRandom, from_seed, shared};

use crate::error::ToolResult;
use crate::tools::{ToolHandler, ToolParam, ToolRegistry};
use crate::types::ToolArgs;
use async_trait::async_trait;
use std::sync::PoisonError;
use std::time::Duration;
use tracing::debug;

pub const ROADMAP_TOOL: &str = "generate_roadmap";
pub const RESEARCH_TOOL: &str = "generate_research";
pub const ANALYZE_TASK_TOOL: &str = "analyze_task";

/// Produces a formatted response for a prompt.
pub trait ResponseGenerator: Send + Sync {
    /// Display name, e.g. `RoadmapMaster`.
    fn name(&self) -> &'static str;

    /// Short role description shown on the dashboard.
    fn role(&self) -> &'static str;

    fn generate(&self, prompt: &str, random: &mut dyn RandomSource) -> String;
}

/// Product roadmap agent. Output is fully determined by the prompt.
pub struct RoadmapAgent;

impl ResponseGenerator for RoadmapAgent {
    fn name(&self) -> &'static str {
        "RoadmapMaster"
    }

    fn role(&self) -> &'static str {
        "Product Strategist"
    }

    fn generate(&self, product: &str, _random: &mut dyn RandomSource) -> String {
        templates::roadmap(product)
    }
}

/// Market research agent.
pub struct ResearchAgent;

pub const MARKET_SIZES: [&str; 5] = ["$1.2B", "$2.8B", "$5.1B", "$3.4B", "$1.9B"];
pub const GROWTH_RATES: [&str; 5] = ["12%", "18%", "25%", "15%", "22%"];

/// Figures drawn for one research report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchFigures {
    pub user_interest: u32,
    pub competition_score: u32,
    pub market_size: &'static str,
    pub growth_rate: &'static str,
}

impl ResearchFigures {
    pub fn draw(random: &mut dyn RandomSource) -> Self {
        let user_interest = random.between(65, 85);
        let competition_score = random.between(6, 9);
        let market_size = MARKET_SIZES[random.below(MARKET_SIZES.len())];
        let growth_rate = GROWTH_RATES[random.below(GROWTH_RATES.len())];
        Self {
            user_interest,
            competition_score,
            market_size,
            growth_rate,
        }
    }
}

impl ResponseGenerator for ResearchAgent {
    fn name(&self) -> &'static str {
        "ResearchAnalyst"
    }

    fn role(&self) -> &'static str {
        "Market Intelligence"
    }

    fn generate(&self, topic: &str, random: &mut dyn RandomSource) -> String {
        templates::research(topic, &ResearchFigures::draw(random))
    }
}

/// Task analysis agent.
pub struct TaskAgent;

pub const ASSESSED_PRIORITIES: [&str; 3] = ["High", "Medium", "Low"];
pub const EFFORT_POINTS: [&str; 5] = ["2", "3", "5", "8", "13"];

impl ResponseGenerator for TaskAgent {
    fn name(&self) -> &'static str {
        "TaskAnalyst"
    }

    fn role(&self) -> &'static str {
        "Task Management Specialist"
    }

    fn generate(&self, task_title: &str, random: &mut dyn RandomSource) -> String {
        let priority = ASSESSED_PRIORITIES[random.below(ASSESSED_PRIORITIES.len())];
        let effort = EFFORT_POINTS[random.below(EFFORT_POINTS.len())];
        templates::task_analysis(task_title, priority, effort)
    }
}

/// Name and role of a registered agent, for status displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentInfo {
    pub name: &'static str,
    pub role: &'static str,
}

/// Exposes a [`ResponseGenerator`] as a registry tool.
///
/// The prompt is read from `input_key`, falling back to `fallback` when the
/// argument is absent. The tool sleeps for `delay` before generating to
/// simulate inference latency.
pub struct AgentTool<G> {
    generator: G,
    input_key: &'static str,
    fallback: &'static str,
    description: &'static str,
    delay: Duration,
    random: SharedRandom,
}

impl<G: ResponseGenerator> AgentTool<G> {
    pub fn new(
        generator: G,
        input_key: &'static str,
        fallback: &'static str,
        description: &'static str,
        delay: Duration,
        random: SharedRandom,
    ) -> Self {
        Self {
            generator,
            input_key,
            fallback,
            description,
            delay,
            random,
        }
    }
}

#[async_trait]
impl<G: ResponseGenerator> ToolHandler for AgentTool<G> {
    async fn call(&self, args: &ToolArgs) -> ToolResult<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let prompt = args
            .get(self.input_key)
            .map(String::as_str)
            .unwrap_or(self.fallback);
        debug!(agent = self.generator.name(), prompt, "Generating response");

        let mut random = self.random.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.generator.generate(prompt, &mut **random))
    }

    fn description(&self) -> String {
        self.description.to_string()
    }

    fn params(&self) -> Vec<ToolParam> {
        vec![ToolParam::new(self.input_key, format!("Prompt text (default: {})", self.fallback))]
    }
}

/// The agents registered by [`register_agents`], in display order.
pub fn agent_roster() -> Vec<AgentInfo> {
    let info = |g: &dyn ResponseGenerator| AgentInfo {
        name: g.name(),
        role: g.role(),
    };
    vec![info(&RoadmapAgent), info(&ResearchAgent), info(&TaskAgent)]
}

/// Register the three agent tools on `registry`, sharing one random source.
pub fn register_agents(registry: &mut ToolRegistry, delay: Duration, random: SharedRandom) {
    registry.register(
        ROADMAP_TOOL,
        AgentTool::new(
            RoadmapAgent,
            "topic",
            "Unknown Product",
            "Generate a quarterly product roadmap for a product name.",
            delay,
            random.clone(),
        ),
    );
    registry.register(
        RESEARCH_TOOL,
        AgentTool::new(
            ResearchAgent,
            "topic",
            "Unknown Market",
            "Generate a market research analysis for a topic.",
            delay,
            random.clone(),
        ),
    );
    registry.register(
        ANALYZE_TASK_TOOL,
        AgentTool::new(
            TaskAgent,
            "task",
            "Unknown Task",
            "Assess priority and effort for a task title.",
            delay,
            random,
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::args;

    fn fixed(values: &[u64]) -> SharedRandom {
        shared(FixedSequence::new(values.to_vec()))
    }

    #[test]
    fn roadmap_mentions_product_and_quarters() {
        let text = RoadmapAgent.generate("Chatbot", &mut FixedSequence::new(vec![]));
        assert!(text.starts_with("🗺️ PRODUCT ROADMAP: Chatbot"));
        for quarter in ["Q1 - FOUNDATION", "Q2 - DEVELOPMENT", "Q3 - LAUNCH", "Q4 - GROWTH"] {
            assert!(text.contains(quarter), "missing {quarter}");
        }
    }

    #[test]
    fn research_figures_follow_the_draw_order() {
        // interest, competition, market size index, growth index
        let mut random = FixedSequence::new(vec![0, 3, 2, 4]);
        let figures = ResearchFigures::draw(&mut random);
        assert_eq!(
            figures,
            ResearchFigures {
                user_interest: 65,
                competition_score: 9,
                market_size: "$5.1B",
                growth_rate: "22%",
            }
        );

        let text = ResearchAgent.generate("Food Delivery", &mut FixedSequence::new(vec![20, 0, 0, 0]));
        assert!(text.contains("MARKET RESEARCH ANALYSIS: Food Delivery"));
        assert!(text.contains("User Interest Level: 85%"));
        assert!(text.contains("Competition Score: 6/10"));
        assert!(text.contains("Total Market Size: $1.2B"));
        assert!(text.contains("Annual Growth Rate: 12%"));
    }

    #[test]
    fn task_analysis_uses_drawn_priority_and_effort() {
        let text = TaskAgent.generate("Login page", &mut FixedSequence::new(vec![2, 4]));
        assert!(text.contains("TASK ANALYSIS: Login page"));
        assert!(text.contains("PRIORITY ASSESSMENT: Low"));
        assert!(text.contains("EFFORT ESTIMATE: 13 story points"));
    }

    #[tokio::test]
    async fn agent_tool_reads_prompt_or_falls_back() {
        let tool = AgentTool::new(
            TaskAgent,
            "task",
            "Unknown Task",
            "",
            Duration::ZERO,
            fixed(&[0, 0]),
        );

        let named = tool.call(&args([("task", "Ship it")])).await.unwrap();
        assert!(named.contains("TASK ANALYSIS: Ship it"));

        let unnamed = tool.call(&ToolArgs::new()).await.unwrap();
        assert!(unnamed.contains("TASK ANALYSIS: Unknown Task"));
    }

    #[tokio::test]
    async fn register_agents_adds_three_tools() {
        let mut registry = ToolRegistry::new();
        register_agents(&mut registry, Duration::ZERO, fixed(&[1]));
        assert_eq!(
            registry.tool_names(),
            vec![ANALYZE_TASK_TOOL, RESEARCH_TOOL, ROADMAP_TOOL]
        );

        let out = registry
            .invoke(ROADMAP_TOOL, args([("topic", "Mobile App")]))
            .await
            .unwrap();
        assert!(out.contains("Mobile App"));
        assert_eq!(registry.history().len(), 1);
    }

    #[test]
    fn roster_lists_agents_in_display_order() {
        let names: Vec<_> = agent_roster().into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["RoadmapMaster", "ResearchAnalyst", "TaskAnalyst"]);
    }
}
