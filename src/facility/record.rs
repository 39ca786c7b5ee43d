use crate::error::{ExtractError, Result};
use crate::facility::catalog::Course;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One facility as returned by the scrape API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FacilityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Facility card markup cut out of the booking page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_html: Option<String>,
}

impl FacilityRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    /// Builder method: set name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder method: set URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Builder method: set raw HTML
    pub fn with_raw_html(mut self, html: impl Into<String>) -> Self {
        self.raw_html = Some(html.into());
        self
    }
}

/// Body of a scrape API response: `{"courses": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScrapeResponse {
    pub courses: Vec<FacilityRecord>,
}

impl ScrapeResponse {
    /// Parse a response body
    ///
    /// Invalid JSON is an error. A missing or non-array `courses` field yields
    /// no facilities; records that are not objects are skipped with a debug log.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| ExtractError::InvalidResponse(e.to_string()))?;
        Ok(Self::from_value(value))
    }

    /// Interpret an already parsed response body
    pub fn from_value(value: serde_json::Value) -> Self {
        let serde_json::Value::Object(mut body) = value else {
            log::debug!("Scrape response is not an object, treating as empty");
            return Self::default();
        };

        let Some(serde_json::Value::Array(entries)) = body.remove("courses") else {
            log::debug!("Scrape response has no courses array, treating as empty");
            return Self::default();
        };

        let courses = entries
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::debug!("Skipping malformed facility record {}: {}", i, e);
                    None
                }
            })
            .collect();

        Self { courses }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Request body the scrape API expects for a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
    pub selector: String,
}

impl ScrapeRequest {
    /// Build the request for a course; no card selector means an empty string
    pub fn for_course(course: &Course) -> Self {
        Self {
            url: course.url.clone(),
            selector: course.selector.clone().unwrap_or_default(),
        }
    }
}
