//! Extraction tools
//!
//! Each tool takes typed JSON parameters (with a generated JSON schema) and returns a
//! [`ToolResult`]. Tools are looked up by name through a [`ToolRegistry`], which is
//! what the MCP server and other dynamic callers dispatch through.

pub mod courses;
pub mod extract;
pub mod facilities;
pub mod project;

pub use courses::{ListCoursesParams, ListCoursesTool};
pub use extract::{ExtractElementsParams, ExtractElementsTool};
pub use facilities::{ExtractFacilitiesParams, ExtractFacilitiesTool};
pub use project::{ProjectHtmlParams, ProjectHtmlTool};

use crate::error::{ExtractError, Result};
use crate::facility::Catalog;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shared state handed to every tool invocation
pub struct ToolContext<'a> {
    /// Course catalog used to resolve course ids
    pub catalog: &'a Catalog,
}

impl<'a> ToolContext<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
}

/// Outcome of a tool invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    /// Successful result carrying data
    pub fn success_with(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed result with a message
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// A named operation with typed parameters
pub trait Tool: Send + Sync {
    type Params: DeserializeOwned + JsonSchema;

    /// Name used for registry lookup
    fn name(&self) -> &str;

    /// JSON schema of the parameters
    fn parameters_schema(&self) -> Value {
        serde_json::to_value(schemars::schema_for!(Self::Params)).unwrap_or(Value::Null)
    }

    fn execute_typed(
        &self,
        params: Self::Params,
        context: &mut ToolContext,
    ) -> Result<ToolResult>;

    /// Decode raw JSON parameters and execute
    fn execute(&self, params: Value, context: &mut ToolContext) -> Result<ToolResult> {
        let params = serde_json::from_value(params).map_err(|e| ExtractError::InvalidParams {
            tool: Tool::name(self).to_string(),
            reason: e.to_string(),
        })?;
        self.execute_typed(params, context)
    }
}

/// Object-safe view of a [`Tool`], used by the registry
trait DynTool: Send + Sync {
    fn parameters_schema(&self) -> Value;
    fn execute(&self, params: Value, context: &mut ToolContext) -> Result<ToolResult>;
}

impl<T: Tool> DynTool for T {
    fn parameters_schema(&self) -> Value {
        Tool::parameters_schema(self)
    }

    fn execute(&self, params: Value, context: &mut ToolContext) -> Result<ToolResult> {
        Tool::execute(self, params, context)
    }
}

/// Tools indexed by name, in registration order
#[derive(Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, Box<dyn DynTool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in tool
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ProjectHtmlTool);
        registry.register(ExtractElementsTool);
        registry.register(ExtractFacilitiesTool);
        registry.register(ListCoursesTool);
        registry
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = Tool::name(&tool).to_string();
        self.tools.insert(name, Box::new(tool));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Registered tool names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(String::as_str)
    }

    /// Parameter schema of a registered tool
    pub fn schema(&self, name: &str) -> Option<Value> {
        self.tools.get(name).map(|tool| tool.parameters_schema())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute a tool by name with raw JSON parameters
    pub fn execute(
        &self,
        name: &str,
        params: Value,
        context: &mut ToolContext,
    ) -> Result<ToolResult> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ExtractError::UnknownTool(name.to_string()))?;

        log::debug!("Executing tool '{}'", name);
        tool.execute(params, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_defaults() {
        let registry = ToolRegistry::with_defaults();

        let names: Vec<_> = registry.names().collect();
        assert_eq!(
            names,
            vec!["project_html", "extract_elements", "extract_facilities", "list_courses"]
        );
        assert_eq!(registry.len(), 4);
        assert!(registry.contains("extract_elements"));
        assert!(registry.schema("project_html").is_some_and(|s| s.is_object()));
    }

    #[test]
    fn test_unknown_tool() {
        let registry = ToolRegistry::with_defaults();
        let catalog = Catalog::builtin();
        let mut context = ToolContext::new(&catalog);

        let result = registry.execute("screenshot", json!({}), &mut context);
        assert!(matches!(result, Err(ExtractError::UnknownTool(name)) if name == "screenshot"));
    }

    #[test]
    fn test_invalid_params() {
        let registry = ToolRegistry::with_defaults();
        let catalog = Catalog::builtin();
        let mut context = ToolContext::new(&catalog);

        let result = registry.execute("project_html", json!({"markup": 1}), &mut context);
        assert!(matches!(
            result,
            Err(ExtractError::InvalidParams { tool, .. }) if tool == "project_html"
        ));
    }

    #[test]
    fn test_tool_result_constructors() {
        assert_eq!(ToolResult::success_with(json!(1)).data, Some(json!(1)));

        let failed = ToolResult::failure("boom");
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("boom"));
    }
}
