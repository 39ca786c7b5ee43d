//! HTML projection and selector matching
//!
//! This module turns HTML fragments into plain node trees and picks elements out of
//! them. It includes:
//! - HtmlNode / HtmlElement: the projected node model
//! - project: HTML string to forest of nodes
//! - NodeSelector / extract: tag and attribute matching over a forest
//! - HtmlForest: a projected fragment with convenience queries

pub mod node;
pub mod projector;
pub mod selector;
pub mod tree;

pub use node::{HtmlElement, HtmlNode};
pub use projector::{MAX_DEPTH, parser_available, project};
pub use selector::{NodeSelector, extract, matches_any};
pub use tree::HtmlForest;

/// Project an HTML fragment and keep only the nodes matching any selector
pub fn project_and_extract(html: &str, selectors: &[NodeSelector]) -> Vec<HtmlNode> {
    HtmlForest::parse(html).extract_owned(selectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_node_export() {
        let element = HtmlElement::new("div");
        assert_eq!(element.tag, "div");
    }

    #[test]
    fn test_selector_export() {
        let selector = NodeSelector::new();
        assert!(selector.tag.is_none());
        assert!(selector.attributes.is_none());
    }

    #[cfg(feature = "html-parser")]
    #[test]
    fn test_project_and_extract() {
        let html = r#"<div data-testid="facility-42-name">Course A</div><p>other</p>"#;
        let selectors = [NodeSelector::attribute("data-testid", "facility-42-name")];

        let matched = project_and_extract(html, &selectors);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].text_content(), "Course A");
    }

    #[cfg(not(feature = "html-parser"))]
    #[test]
    fn test_projection_without_parser_is_empty() {
        assert!(project("<div>x</div>").is_empty());
        assert!(!parser_available());
    }
}
