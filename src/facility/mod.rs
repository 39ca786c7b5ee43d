//! Golf course facilities
//!
//! Course catalog, scrape API payloads, per-facility selector templates, and the
//! pipeline that projects each facility's HTML and extracts its elements.

pub mod catalog;
pub mod pipeline;
pub mod record;
pub mod template;

pub use catalog::{Catalog, Course, UsState};
pub use pipeline::{Facility, structure_facilities, structure_facility};
pub use record::{FacilityRecord, ScrapeRequest, ScrapeResponse};
pub use template::{TEMPLATE_ATTRIBUTE, facility_selectors, facility_short_id};

use crate::error::Result;

/// Parse a scrape API response body and structure it for a catalog course
pub fn extract_facilities(
    catalog: &Catalog,
    course_id: &str,
    response_json: &str,
) -> Result<Vec<Facility>> {
    let course = catalog.require_course(course_id)?;
    let response = ScrapeResponse::from_json(response_json)?;
    Ok(structure_facilities(&response.courses, course))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;

    #[test]
    fn test_extract_facilities_unknown_course() {
        let result = extract_facilities(&Catalog::builtin(), "augusta", r#"{"courses": []}"#);
        assert!(matches!(result, Err(ExtractError::CourseNotFound(_))));
    }

    #[test]
    fn test_extract_facilities_empty_response() {
        let facilities = extract_facilities(&Catalog::builtin(), "nyc", "{}").unwrap();
        assert!(facilities.is_empty());
    }
}
