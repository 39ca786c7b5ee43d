use crate::dom::{HtmlForest, NodeSelector};
use crate::error::Result;
use crate::facility::facility_selectors;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the extract_elements tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractElementsParams {
    /// HTML fragment to search
    pub html: String,

    /// Selectors; an element matching any of them is returned
    pub selectors: Vec<NodeSelector>,

    /// Treat selectors as templates and bind them to this facility id first
    #[serde(default)]
    pub facility_id: Option<String>,
}

/// Tool returning the elements of an HTML fragment that match a selector list
#[derive(Default)]
pub struct ExtractElementsTool;

impl Tool for ExtractElementsTool {
    type Params = ExtractElementsParams;

    fn name(&self) -> &str {
        "extract_elements"
    }

    fn execute_typed(
        &self,
        params: ExtractElementsParams,
        _context: &mut ToolContext,
    ) -> Result<ToolResult> {
        let selectors = match &params.facility_id {
            Some(id) => facility_selectors(&params.selectors, id),
            None => params.selectors,
        };

        let forest = HtmlForest::parse(&params.html);
        let matched = forest.extract(&selectors);

        Ok(ToolResult::success_with(serde_json::json!({
            "elements": matched,
            "count": matched.len(),
            "selectors": selectors
        })))
    }
}
