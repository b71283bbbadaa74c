//! Callback tools dispatched by the hosting framework.
//!
//! Each tool is a named, zero-argument handler returning a single text
//! payload. Handlers perform only formatting and configuration lookups; any
//! fault propagates to the framework's own dispatch error handling.

use async_trait::async_trait;
use serde::Serialize;

/// The text payload a tool hands back to the framework's dispatcher.
///
/// Constructed fresh on every invocation; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub message: String,
}

impl ToolResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A zero-argument callback tool.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    async fn call(&self) -> ToolResult;
}

/// Explicit registry of tools handed to the framework's registration call.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.push(tool);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .map(|t| t.as_ref())
    }

    /// Registered tools in registration order.
    pub fn list(&self) -> impl Iterator<Item = &dyn Tool> {
        self.tools.iter().map(|t| t.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Report overall system status.
pub struct GetStatus;

#[async_trait]
impl Tool for GetStatus {
    fn name(&self) -> &str {
        "get_status"
    }

    fn description(&self) -> &str {
        "Get system status"
    }

    async fn call(&self) -> ToolResult {
        tracing::info!("Status check requested");
        ToolResult::new("All systems operational.")
    }
}

/// Report the current local time on a 12-hour clock.
pub struct GetTime;

#[async_trait]
impl Tool for GetTime {
    fn name(&self) -> &str {
        "get_time"
    }

    fn description(&self) -> &str {
        "Get current time"
    }

    async fn call(&self) -> ToolResult {
        let now = chrono::Local::now().format("%I:%M %p");
        ToolResult::new(format!("The current time is {}.", now))
    }
}

/// Point the caller at the configured support contact.
pub struct GetHelp {
    support_email: String,
}

impl GetHelp {
    pub fn new(support_email: &str) -> Self {
        Self {
            support_email: support_email.to_string(),
        }
    }
}

#[async_trait]
impl Tool for GetHelp {
    fn name(&self) -> &str {
        "get_help"
    }

    fn description(&self) -> &str {
        "Get help or support information"
    }

    async fn call(&self) -> ToolResult {
        ToolResult::new(format!(
            "For additional help, contact {}.",
            self.support_email
        ))
    }
}
