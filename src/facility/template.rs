//! Per-facility selector derivation
//!
//! Course configuration stores selector templates whose `data-testid` value is only
//! a suffix (e.g. `"-name"`). Before matching, each template is bound to one facility
//! by prefixing `facility-{id}`, producing `facility-42-name`.

use crate::dom::NodeSelector;

/// Attribute whose value is a template suffix rather than a literal
pub const TEMPLATE_ATTRIBUTE: &str = "data-testid";

/// Short facility identifier: the last `-`-separated segment of the raw id
///
/// `"facility-card-42"` becomes `"42"`; an id without dashes is kept as is.
pub fn facility_short_id(raw_id: &str) -> &str {
    raw_id.rsplit('-').next().unwrap_or(raw_id)
}

/// Expected attribute value for a facility and template suffix
pub fn interpolate(facility_id: &str, suffix: &str) -> String {
    format!("facility-{}{}", facility_id, suffix)
}

/// Bind selector templates to one facility
///
/// Every template carrying the reserved attribute gets its value interpolated;
/// all other fields, and templates without the attribute, are copied unchanged.
pub fn facility_selectors(templates: &[NodeSelector], facility_id: &str) -> Vec<NodeSelector> {
    templates
        .iter()
        .map(|template| bind(template, facility_id))
        .collect()
}

fn bind(template: &NodeSelector, facility_id: &str) -> NodeSelector {
    let mut selector = template.clone();
    if let Some(value) = selector
        .attributes
        .as_mut()
        .and_then(|attrs| attrs.get_mut(TEMPLATE_ATTRIBUTE))
    {
        *value = interpolate(facility_id, value);
    }
    selector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facility_short_id() {
        assert_eq!(facility_short_id("facility-card-42"), "42");
        assert_eq!(facility_short_id("42"), "42");
        assert_eq!(facility_short_id("card-"), "");
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(interpolate("42", "-name"), "facility-42-name");
        assert_eq!(interpolate("7", ""), "facility-7");
    }

    #[test]
    fn test_facility_selectors() {
        let templates = vec![
            NodeSelector::attribute(TEMPLATE_ATTRIBUTE, "-name"),
            NodeSelector::tag("p")
                .with_attribute(TEMPLATE_ATTRIBUTE, "-address")
                .with_attribute("role", "note"),
        ];

        let bound = facility_selectors(&templates, "42");

        assert_eq!(bound[0], NodeSelector::attribute("data-testid", "facility-42-name"));
        assert_eq!(bound[1].tag.as_deref(), Some("p"));
        let attrs = bound[1].attributes.as_ref().unwrap();
        assert_eq!(attrs["data-testid"], "facility-42-address");
        assert_eq!(attrs["role"], "note");

        // templates are left untouched
        assert_eq!(templates[0], NodeSelector::attribute(TEMPLATE_ATTRIBUTE, "-name"));
    }

    #[test]
    fn test_templates_without_reserved_attribute_pass_through() {
        let templates = vec![NodeSelector::tag("h4"), NodeSelector::attribute("class", "name")];
        assert_eq!(facility_selectors(&templates, "42"), templates);
    }

    #[test]
    fn test_empty_templates() {
        assert!(facility_selectors(&[], "42").is_empty());
    }
}
