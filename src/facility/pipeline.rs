use crate::dom::{HtmlForest, HtmlNode};
use crate::facility::catalog::Course;
use crate::facility::record::FacilityRecord;
use crate::facility::template::{facility_selectors, facility_short_id};
use serde::{Deserialize, Serialize};

/// A facility with its HTML projected and, when configured, its elements picked out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    /// Short identifier (last segment of the raw id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Projected `raw_html`, absent when the record had none or it was empty
    #[serde(rename = "htmlJson", skip_serializing_if = "Option::is_none")]
    pub html: Option<HtmlForest>,

    /// Elements matched by the course's selector templates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<HtmlNode>>,
}

impl Facility {
    /// Name to show for the facility at `index` in its listing
    pub fn display_name(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Facility {}", index + 1))
    }

    /// Matched elements, empty when none were extracted
    pub fn elements(&self) -> &[HtmlNode] {
        self.elements.as_deref().unwrap_or_default()
    }
}

/// Project one record and extract its elements with the course's templates
pub fn structure_facility(record: &FacilityRecord, course: &Course) -> Facility {
    let id = record
        .id
        .as_deref()
        .map(|raw| facility_short_id(raw).to_string());
    let html = record
        .raw_html
        .as_deref()
        .filter(|raw| !raw.is_empty())
        .map(HtmlForest::parse);

    let elements = match (&id, course.data_selectors.as_deref()) {
        (Some(id), Some(templates)) => {
            let selectors = facility_selectors(templates, id);
            Some(
                html.as_ref()
                    .map(|forest| forest.extract_owned(&selectors))
                    .unwrap_or_default(),
            )
        }
        (None, Some(_)) => {
            log::debug!(
                "Facility {:?} of course '{}' has no id, skipping element extraction",
                record.name,
                course.id
            );
            None
        }
        (_, None) => None,
    };

    Facility {
        id,
        name: record.name.clone(),
        url: record.url.clone(),
        html,
        elements,
    }
}

/// Structure every record of a scrape response for a course
pub fn structure_facilities(records: &[FacilityRecord], course: &Course) -> Vec<Facility> {
    let facilities: Vec<Facility> = records
        .iter()
        .map(|record| structure_facility(record, course))
        .collect();

    log::debug!(
        "Structured {} facilities for course '{}' ({} elements)",
        facilities.len(),
        course.id,
        facilities.iter().map(|f| f.elements().len()).sum::<usize>()
    );

    facilities
}
