use crate::dom::NodeSelector;
use crate::error::{ExtractError, Result};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A bookable golf course and how to scrape its facilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Stable identifier (e.g., "bethpage")
    pub id: String,

    /// Display name
    pub name: String,

    /// Booking page URL handed to the scrape API
    pub url: String,

    /// Two-letter state code
    pub state: String,

    /// Whether the booking page lists several facilities
    #[serde(default)]
    pub has_multiple_facilities: bool,

    /// CSS selector the scrape API uses to cut facility cards out of the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// Selector templates applied to every facility's projected HTML
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_selectors: Option<Vec<NodeSelector>>,
}

impl Course {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            state: state.into(),
            has_multiple_facilities: false,
            selector: None,
            data_selectors: None,
        }
    }

    /// Builder method: mark as listing several facilities
    pub fn with_multiple_facilities(mut self, multiple: bool) -> Self {
        self.has_multiple_facilities = multiple;
        self
    }

    /// Builder method: set the facility card selector
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Builder method: set the per-facility selector templates
    pub fn with_data_selectors(mut self, selectors: Vec<NodeSelector>) -> Self {
        self.data_selectors = Some(selectors);
        self
    }

    /// Selector templates, empty when none are configured
    pub fn data_selectors(&self) -> &[NodeSelector] {
        self.data_selectors.as_deref().unwrap_or_default()
    }
}

/// A US state that has courses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UsState {
    pub code: String,
    pub name: String,
}

impl UsState {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// The set of known states and courses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    states: Vec<UsState>,
    courses: Vec<Course>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Build a catalog, rejecting duplicate course ids
    pub fn new(states: Vec<UsState>, courses: Vec<Course>) -> Result<Self> {
        let mut seen = HashSet::new();
        for course in &courses {
            if !seen.insert(course.id.to_lowercase()) {
                return Err(ExtractError::Catalog(format!(
                    "duplicate course id '{}'",
                    course.id
                )));
            }
        }
        Ok(Self { states, courses })
    }

    /// The courses shipped with the application
    pub fn builtin() -> Self {
        let states = vec![UsState::new("NY", "New York")];
        let courses = vec![
            Course::new(
                "bethpage",
                "Bethpage State Park Golf Courses",
                "https://foreupsoftware.com/index.php/booking/19765/2431#teetimes",
                "NY",
            ),
            Course::new(
                "nyc",
                "Golf NYC Courses",
                "https://golf-nyc.book.teeitup.com/search",
                "NY",
            )
            .with_multiple_facilities(true)
            .with_selector("[data-testid^='facility-card-']")
            .with_data_selectors(vec![
                NodeSelector::attribute("data-testid", "-name"),
                NodeSelector::attribute("data-testid", "-address"),
            ]),
            Course::new(
                "marine_park",
                "Marine Park Golf Course",
                "https://marineparkridepp.ezlinksgolf.com/index.html#/search",
                "NY",
            )
            .with_multiple_facilities(true),
        ];

        Self { states, courses }
    }

    /// Parse a catalog from JSON: `{"states": [...], "courses": [...]}`
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Catalog = serde_json::from_str(json)
            .map_err(|e| ExtractError::Catalog(format!("failed to parse catalog JSON: {}", e)))?;
        Self::new(raw.states, raw.courses)
    }

    /// Load a catalog from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        log::info!(
            "Loaded {} courses in {} states from {}",
            catalog.courses.len(),
            catalog.states.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn states(&self) -> &[UsState] {
        &self.states
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Find a course by id (case-insensitive)
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id.eq_ignore_ascii_case(id))
    }

    /// Find a course by id, failing when unknown
    pub fn require_course(&self, id: &str) -> Result<&Course> {
        self.course(id)
            .ok_or_else(|| ExtractError::CourseNotFound(id.to_string()))
    }

    /// Find a state by code (case-insensitive)
    pub fn state(&self, code: &str) -> Option<&UsState> {
        self.states.iter().find(|s| s.code.eq_ignore_ascii_case(code))
    }

    /// Courses located in a state, in catalog order
    pub fn courses_in_state(&self, code: &str) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| c.state.eq_ignore_ascii_case(code))
            .collect()
    }

    /// Courses grouped by state code, groups in order of first appearance
    pub fn courses_by_state(&self) -> IndexMap<&str, Vec<&Course>> {
        let mut grouped: IndexMap<&str, Vec<&Course>> = IndexMap::new();
        for course in &self.courses {
            grouped.entry(course.state.as_str()).or_default().push(course);
        }
        grouped
    }
}
