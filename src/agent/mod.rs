//! Agent definition - identity, prompt, language, and callback tools.
//!
//! The agent itself is declarative: a name, instructional prompt sections,
//! one spoken-language/voice pairing, and a registry of zero-argument tools
//! the hosting framework dispatches on the agent's behalf. No dialogue or
//! state handling lives here.

mod prompt;
pub mod tools;

pub use prompt::PromptSection;

use crate::config::Config;
use tools::{GetHelp, GetStatus, GetTime, ToolRegistry, ToolResult};

/// A spoken language the agent supports, with its synthesis voice.
#[derive(Debug, Clone)]
pub struct Language {
    pub name: String,
    pub code: String,
    pub voice: String,
}

/// The configured production agent.
pub struct Agent {
    name: String,
    sections: Vec<PromptSection>,
    language: Language,
    tools: ToolRegistry,
}

impl Agent {
    /// Build the agent from configuration.
    pub fn from_config(config: &Config) -> Self {
        let sections = vec![
            PromptSection::text("Role", &config.agent_role),
            PromptSection::bullets(
                "Guidelines",
                &[
                    "Keep responses concise",
                    "Be helpful and professional",
                    "Escalate if needed",
                ],
            ),
        ];

        let language = Language {
            name: "English".to_string(),
            code: "en-US".to_string(),
            voice: "rime.spore".to_string(),
        };

        let mut tools = ToolRegistry::new();
        tools.register(Box::new(GetStatus));
        tools.register(Box::new(GetTime));
        tools.register(Box::new(GetHelp::new(&config.support_email)));

        let agent = Self {
            name: config.agent_name.clone(),
            sections,
            language,
            tools,
        };
        tracing::info!(
            "Agent initialized: {} ({} tools)",
            agent.name(),
            agent.tools.len()
        );
        agent
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Render the prompt sections into the agent's operating instructions.
    pub fn instructions(&self) -> String {
        prompt::render(&self.sections)
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Dispatch a named tool call, as the hosting framework would.
    ///
    /// Returns `None` if no tool with that name is registered.
    pub async fn call_tool(&self, name: &str) -> Option<ToolResult> {
        let tool = self.tools.get(name)?;
        Some(tool.call().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_agent_is_named_production_agent() {
        let agent = Agent::from_config(&Config::default());
        assert_eq!(agent.name(), "production-agent");
    }

    #[test]
    fn instructions_carry_role_and_guidelines() {
        let agent = Agent::from_config(&Config::default());
        let instructions = agent.instructions();
        assert!(instructions.contains("## Role"));
        assert!(instructions.contains("You are a helpful production assistant."));
        assert!(instructions.contains("## Guidelines"));
        assert!(instructions.contains("- Keep responses concise"));
        assert!(instructions.contains("- Escalate if needed"));
    }

    #[test]
    fn language_pairing_is_english_with_voice() {
        let agent = Agent::from_config(&Config::default());
        assert_eq!(agent.language().code, "en-US");
        assert_eq!(agent.language().voice, "rime.spore");
    }

    #[test]
    fn tools_are_registered_in_order_with_descriptions() {
        let agent = Agent::from_config(&Config::default());
        assert!(!agent.tools().is_empty());
        let registered: Vec<(&str, &str)> = agent
            .tools()
            .list()
            .map(|t| (t.name(), t.description()))
            .collect();
        assert_eq!(
            registered,
            vec![
                ("get_status", "Get system status"),
                ("get_time", "Get current time"),
                ("get_help", "Get help or support information"),
            ]
        );
    }

    #[tokio::test]
    async fn unknown_tool_dispatch_returns_none() {
        let agent = Agent::from_config(&Config::default());
        assert!(agent.call_tool("get_weather").await.is_none());
    }

    #[tokio::test]
    async fn status_tool_is_dispatchable_by_name() {
        let agent = Agent::from_config(&Config::default());
        let result = agent.call_tool("get_status").await.unwrap();
        assert_eq!(result.message, "All systems operational.");
    }
}
