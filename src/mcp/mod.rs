//! MCP (Model Context Protocol) server implementation for facility extraction
//!
//! This module provides rmcp-compatible tools by wrapping the tool registry.

pub mod handler;
pub use handler::FacilityServer;

use crate::tools::{
    ExtractElementsParams, ExtractFacilitiesParams, ListCoursesParams, ProjectHtmlParams,
    ToolContext, ToolResult as InternalToolResult,
};
use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    tool, tool_router,
};

/// Convert internal ToolResult to MCP CallToolResult
fn convert_result(result: InternalToolResult) -> Result<CallToolResult, McpError> {
    if result.success {
        let text = if let Some(data) = result.data {
            serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string())
        } else {
            "Success".to_string()
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    } else {
        let error_msg = result.error.unwrap_or_else(|| "Unknown error".to_string());
        Err(McpError::invalid_params(error_msg, None))
    }
}

impl FacilityServer {
    fn run_tool<P: serde::Serialize>(
        &self,
        name: &str,
        params: P,
    ) -> Result<CallToolResult, McpError> {
        let tool_params = serde_json::to_value(params)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let mut context = ToolContext::new(self.catalog());

        let result = self
            .tool_registry()
            .execute(name, tool_params, &mut context)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        convert_result(result)
    }
}

#[tool_router]
impl FacilityServer {
    /// Project an HTML fragment into a JSON node tree
    #[tool(
        description = "Convert an HTML fragment into an ordered JSON tree of element and text nodes"
    )]
    fn project_html(
        &self,
        params: Parameters<ProjectHtmlParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_tool("project_html", params.0)
    }

    /// Extract elements matching tag/attribute selectors
    #[tool(
        description = "Return every element of an HTML fragment matching any of the given tag/attribute selectors, in document order"
    )]
    fn extract_elements(
        &self,
        params: Parameters<ExtractElementsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_tool("extract_elements", params.0)
    }

    /// Structure a scrape API response for a course
    #[tool(
        description = "Project each facility of a scrape API response and extract its configured elements"
    )]
    fn extract_facilities(
        &self,
        params: Parameters<ExtractFacilitiesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_tool("extract_facilities", params.0)
    }

    /// List catalog courses
    #[tool(description = "List known golf courses grouped by state")]
    fn list_courses(
        &self,
        params: Parameters<ListCoursesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_tool("list_courses", params.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    /// JSON payload of the first text content of a tool result
    fn payload(result: &CallToolResult) -> Value {
        let json = serde_json::to_value(result).unwrap();
        let text = json["content"][0]["text"].as_str().unwrap();
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn test_convert_success() {
        let data = serde_json::json!({"count": 1});
        let result = convert_result(InternalToolResult::success_with(data.clone())).unwrap();
        assert_eq!(payload(&result), data);
    }

    #[test]
    fn test_convert_failure() {
        let result = convert_result(InternalToolResult::failure("no facilities"));
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_elements_with_empty_selectors() {
        let server = FacilityServer::new();
        let params = ExtractElementsParams {
            html: "<div><p>x</p></div>".to_string(),
            selectors: Vec::new(),
            facility_id: None,
        };

        let result = server.extract_elements(Parameters(params)).unwrap();
        let data = payload(&result);
        assert_eq!(data["elements"], serde_json::json!([]));
        assert_eq!(data["count"], 0);
    }

    #[test]
    fn test_list_courses_unknown_state_is_error() {
        let server = FacilityServer::new();
        let params = ListCoursesParams {
            state: Some("ZZ".to_string()),
        };

        let result = server.list_courses(Parameters(params));
        assert!(result.is_err());
    }

    #[test]
    fn test_list_courses() {
        let server = FacilityServer::new();
        let result = server
            .list_courses(Parameters(ListCoursesParams::default()))
            .unwrap();
        assert_eq!(payload(&result)["states"][0]["code"], "NY");
    }
}
