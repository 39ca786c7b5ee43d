use crate::dom::HtmlForest;
use crate::error::Result;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the project_html tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProjectHtmlParams {
    /// HTML fragment (body contents)
    pub html: String,
}

/// Tool converting an HTML fragment to its JSON node tree
#[derive(Default)]
pub struct ProjectHtmlTool;

impl Tool for ProjectHtmlTool {
    type Params = ProjectHtmlParams;

    fn name(&self) -> &str {
        "project_html"
    }

    fn execute_typed(
        &self,
        params: ProjectHtmlParams,
        _context: &mut ToolContext,
    ) -> Result<ToolResult> {
        let forest = HtmlForest::parse(&params.html);

        Ok(ToolResult::success_with(serde_json::json!({
            "nodes": forest,
            "count": forest.len(),
            "elements": forest.count_elements()
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::Catalog;

    #[test]
    fn test_project_html_tool_metadata() {
        let tool = ProjectHtmlTool;
        assert_eq!(tool.name(), "project_html");
        assert!(tool.parameters_schema().is_object());
    }

    #[test]
    fn test_project_html_params() {
        let params: ProjectHtmlParams =
            serde_json::from_value(serde_json::json!({"html": "<p>x</p>"})).unwrap();
        assert_eq!(params.html, "<p>x</p>");
    }

    #[test]
    fn test_project_empty_html() {
        let catalog = Catalog::builtin();
        let mut context = ToolContext::new(&catalog);

        let result = ProjectHtmlTool
            .execute_typed(ProjectHtmlParams { html: "  ".to_string() }, &mut context)
            .unwrap();

        assert!(result.success);
        let data = result.data.unwrap();
        assert_eq!(data["nodes"], serde_json::json!([]));
        assert_eq!(data["count"], 0);
    }

    #[cfg(feature = "html-parser")]
    #[test]
    fn test_project_html() {
        let catalog = Catalog::builtin();
        let mut context = ToolContext::new(&catalog);

        let result = ProjectHtmlTool
            .execute_typed(
                ProjectHtmlParams {
                    html: "<div>  <span>X</span>  </div>".to_string(),
                },
                &mut context,
            )
            .unwrap();

        let data = result.data.unwrap();
        assert_eq!(
            data["nodes"],
            serde_json::json!([{"type": "div", "children": [{"type": "span", "text": "X"}]}])
        );
        assert_eq!(data["elements"], 2);
    }
}
