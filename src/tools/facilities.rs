use crate::error::Result;
use crate::facility::{ScrapeResponse, structure_facilities};
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the extract_facilities tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractFacilitiesParams {
    /// Catalog id of the course the response belongs to
    pub course_id: String,

    /// Scrape API response body, `{"courses": [...]}`
    pub response: serde_json::Value,
}

/// Tool structuring a scrape API response for a catalog course
#[derive(Default)]
pub struct ExtractFacilitiesTool;

impl Tool for ExtractFacilitiesTool {
    type Params = ExtractFacilitiesParams;

    fn name(&self) -> &str {
        "extract_facilities"
    }

    fn execute_typed(
        &self,
        params: ExtractFacilitiesParams,
        context: &mut ToolContext,
    ) -> Result<ToolResult> {
        let course = context.catalog.require_course(&params.course_id)?;
        let response = ScrapeResponse::from_value(params.response);
        let facilities = structure_facilities(&response.courses, course);

        Ok(ToolResult::success_with(serde_json::json!({
            "course": course.id,
            "count": facilities.len(),
            "facilities": facilities
        })))
    }
}
