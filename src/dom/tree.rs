use crate::dom::node::HtmlNode;
use crate::dom::projector;
use crate::dom::selector::{self, NodeSelector};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// An ordered forest of projected nodes, as found in a fragment's body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HtmlForest {
    /// Top-level nodes in document order
    pub nodes: Vec<HtmlNode>,
}

impl HtmlForest {
    /// Wrap already projected nodes
    pub fn new(nodes: Vec<HtmlNode>) -> Self {
        Self { nodes }
    }

    /// Parse and project an HTML fragment
    pub fn parse(html: &str) -> Self {
        Self::new(projector::project(html))
    }

    /// Nodes matching any of the selectors, in document order
    pub fn extract(&self, selectors: &[NodeSelector]) -> Vec<&HtmlNode> {
        selector::extract(&self.nodes, selectors)
    }

    /// Owned copies of the nodes matching any of the selectors
    pub fn extract_owned(&self, selectors: &[NodeSelector]) -> Vec<HtmlNode> {
        self.extract(selectors).into_iter().cloned().collect()
    }

    /// Number of top-level nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HtmlNode> {
        self.nodes.iter()
    }

    /// Count element nodes at every depth
    pub fn count_elements(&self) -> usize {
        self.nodes.iter().map(Self::count_elements_recursive).sum()
    }

    fn count_elements_recursive(node: &HtmlNode) -> usize {
        match node {
            HtmlNode::Text(_) => 0,
            HtmlNode::Element(element) => {
                1 + element
                    .children()
                    .iter()
                    .map(Self::count_elements_recursive)
                    .sum::<usize>()
            }
        }
    }

    /// Render every top-level node back to markup
    pub fn to_markup(&self) -> String {
        self.nodes.iter().map(HtmlNode::to_markup).collect()
    }

    /// Convert the forest to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.nodes)?)
    }
}

impl From<Vec<HtmlNode>> for HtmlForest {
    fn from(nodes: Vec<HtmlNode>) -> Self {
        Self::new(nodes)
    }
}

impl IntoIterator for HtmlForest {
    type Item = HtmlNode;
    type IntoIter = std::vec::IntoIter<HtmlNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::HtmlElement;

    fn create_test_forest() -> HtmlForest {
        let mut header = HtmlElement::new("header");
        header.add_child(HtmlElement::new("h1").with_text("Golf NYC").into());

        let mut main = HtmlElement::new("main");
        main.add_child(
            HtmlElement::new("a")
                .with_attribute("href", "/book")
                .with_text("Book")
                .into(),
        );
        main.add_child(HtmlNode::Text("Open daily".to_string()));

        HtmlForest::new(vec![header.into(), main.into(), HtmlNode::Text("end".to_string())])
    }

    #[test]
    fn test_forest_creation() {
        let forest = create_test_forest();
        assert_eq!(forest.len(), 3);
        assert!(!forest.is_empty());
        assert!(HtmlForest::default().is_empty());
    }

    #[test]
    fn test_count_elements() {
        // header, h1, main, a
        assert_eq!(create_test_forest().count_elements(), 4);
    }

    #[test]
    fn test_extract_owned() {
        let forest = create_test_forest();
        let links = forest.extract_owned(&[NodeSelector::tag("a")]);

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text_content(), "Book");
    }

    #[test]
    fn test_to_json() {
        let json = create_test_forest().to_json().unwrap();

        assert!(json.contains("\"type\": \"header\""));
        assert!(json.contains("\"href\": \"/book\""));
        assert!(json.contains("Open daily"));
        assert!(!json.contains("\"children\": []"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let forest = create_test_forest();
        let json = serde_json::to_value(&forest).unwrap();
        assert!(json.is_array());

        let back: HtmlForest = serde_json::from_value(json).unwrap();
        assert_eq!(back, forest);
    }

    #[test]
    fn test_to_markup() {
        let markup = create_test_forest().to_markup();
        assert_eq!(
            markup,
            "<header><h1>Golf NYC</h1></header><main><a href=\"/book\">Book</a>Open daily</main>end"
        );
    }

    #[cfg(feature = "html-parser")]
    #[test]
    fn test_parse() {
        let forest = HtmlForest::parse("<ul><li>One</li><li>Two</li></ul>");
        assert_eq!(forest.count_elements(), 3);
        assert_eq!(forest.extract(&[NodeSelector::tag("li")]).len(), 2);
    }
}
