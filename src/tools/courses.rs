use crate::error::Result;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the list_courses tool
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListCoursesParams {
    /// Only list courses in this state (two-letter code)
    #[serde(default)]
    pub state: Option<String>,
}

/// Tool listing catalog courses grouped by state
#[derive(Default)]
pub struct ListCoursesTool;

impl Tool for ListCoursesTool {
    type Params = ListCoursesParams;

    fn name(&self) -> &str {
        "list_courses"
    }

    fn execute_typed(
        &self,
        params: ListCoursesParams,
        context: &mut ToolContext,
    ) -> Result<ToolResult> {
        let catalog = context.catalog;

        if let Some(wanted) = params.state.as_deref() {
            if catalog.state(wanted).is_none() && catalog.courses_in_state(wanted).is_empty() {
                return Ok(ToolResult::failure(format!("Unknown state: {}", wanted)));
            }
        }

        let states: Vec<serde_json::Value> = catalog
            .courses_by_state()
            .into_iter()
            .filter(|(code, _)| {
                params
                    .state
                    .as_deref()
                    .is_none_or(|wanted| code.eq_ignore_ascii_case(wanted))
            })
            .map(|(code, courses)| {
                serde_json::json!({
                    "code": code,
                    "name": catalog.state(code).map(|s| s.name.as_str()),
                    "courses": courses
                })
            })
            .collect();

        Ok(ToolResult::success_with(serde_json::json!({ "states": states })))
    }
}
