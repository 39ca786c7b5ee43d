use crate::dom::node::{HtmlElement, HtmlNode};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Declarative predicate picking elements out of a projected forest
///
/// Fields combine with AND; a list of selectors combines with OR.
/// A selector with neither field matches every element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NodeSelector {
    /// Tag name, compared case-insensitively
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Attribute values that must all be present and exactly equal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<IndexMap<String, String>>,
}

impl NodeSelector {
    /// Create a selector that matches every element
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selector matching a tag name
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::new().with_tag(tag)
    }

    /// Create a selector matching a single attribute value
    pub fn attribute(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with_attribute(name, value)
    }

    /// Builder method: set tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Builder method: require an attribute value
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Check a single element against this selector
    pub fn matches_element(&self, element: &HtmlElement) -> bool {
        if let Some(tag) = &self.tag {
            if !element.is_tag(tag) {
                return false;
            }
        }

        self.attributes.iter().flatten().all(|(name, expected)| {
            element.get_attribute(name) == Some(expected.as_str())
        })
    }

    /// Check a node against this selector; text nodes never match
    pub fn matches(&self, node: &HtmlNode) -> bool {
        node.as_element()
            .is_some_and(|element| self.matches_element(element))
    }
}

/// Whether the node matches at least one selector in the list
pub fn matches_any(node: &HtmlNode, selectors: &[NodeSelector]) -> bool {
    selectors.iter().any(|selector| selector.matches(node))
}

/// Collect every element in the forest matching any of the selectors
///
/// Results come back in pre-order document order: a node is emitted before its
/// descendants, and descendants of a matched node are still considered.
/// An empty selector list matches nothing.
pub fn extract<'a>(forest: &'a [HtmlNode], selectors: &[NodeSelector]) -> Vec<&'a HtmlNode> {
    let mut matched = Vec::new();
    if selectors.is_empty() {
        return matched;
    }

    for node in forest {
        collect_matches(node, selectors, &mut matched);
    }
    matched
}

fn collect_matches<'a>(
    node: &'a HtmlNode,
    selectors: &[NodeSelector],
    matched: &mut Vec<&'a HtmlNode>,
) {
    let HtmlNode::Element(element) = node else {
        return;
    };

    if matches_any(node, selectors) {
        matched.push(node);
    }

    for child in element.children() {
        collect_matches(child, selectors, matched);
    }
}
