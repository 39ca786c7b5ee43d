use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Elements that never carry children or a closing tag
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// A projected HTML node: either an element or a piece of trimmed text
///
/// Serialized in the shape the facility renderer consumes:
/// `{"type": "div", "attributes": {...}, "children": [...], "text": "..."}`
/// for elements and `{"type": "text", "text": "..."}` for text.
/// Absent fields are omitted rather than written as empty containers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "WireNode")]
pub enum HtmlNode {
    Element(HtmlElement),
    Text(String),
}

/// An element node of the projected tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HtmlElement {
    /// Lowercased tag name (e.g., "div", "span")
    pub tag: String,

    /// Attributes in document order, `None` when the element has none
    pub attributes: Option<IndexMap<String, String>>,

    /// Child nodes in document order, `None` when there are none
    pub children: Option<Vec<HtmlNode>>,

    /// Trimmed text, only for elements without child elements
    pub text: Option<String>,
}

impl HtmlElement {
    /// Create a new element with a lowercased tag and nothing else
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_lowercase(),
            ..Default::default()
        }
    }

    /// Builder method: add one attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_attribute(name, value);
        self
    }

    /// Builder method: replace all attributes
    pub fn with_attributes(mut self, attributes: IndexMap<String, String>) -> Self {
        self.attributes = Some(attributes).filter(|a| !a.is_empty());
        self
    }

    /// Builder method: set leaf text (whitespace-only text is dropped)
    pub fn with_text(mut self, text: impl AsRef<str>) -> Self {
        self.text = non_empty_trimmed(text.as_ref());
        self
    }

    /// Builder method: replace all children
    pub fn with_children(mut self, children: Vec<HtmlNode>) -> Self {
        self.children = Some(children).filter(|c| !c.is_empty());
        self
    }

    /// Add a single attribute, keeping insertion order
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), value.into());
    }

    /// Append a child node
    pub fn add_child(&mut self, child: HtmlNode) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Get attribute value by name
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|attrs| attrs.get(name))
            .map(String::as_str)
    }

    /// Check if the element is a specific tag (case-insensitive)
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    /// Check if the element has a specific class
    pub fn has_class(&self, class_name: &str) -> bool {
        self.get_attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class_name))
    }

    /// Child nodes as a slice (empty when absent)
    pub fn children(&self) -> &[HtmlNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Number of direct children that are elements
    pub fn child_element_count(&self) -> usize {
        self.children().iter().filter(|c| c.is_element()).count()
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in self.attributes.iter().flatten() {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attribute(value));
            out.push('"');
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        if let Some(text) = &self.text {
            out.push_str(&escape_text(text));
        }
        for child in self.children() {
            child.write_markup(out);
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl HtmlNode {
    /// Create a text node; `None` if the text is empty after trimming
    pub fn text(text: impl AsRef<str>) -> Option<Self> {
        non_empty_trimmed(text.as_ref()).map(HtmlNode::Text)
    }

    /// Create an element node
    pub fn element(element: HtmlElement) -> Self {
        HtmlNode::Element(element)
    }

    pub fn is_element(&self) -> bool {
        matches!(self, HtmlNode::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, HtmlNode::Text(_))
    }

    /// Borrow the element, if this is one
    pub fn as_element(&self) -> Option<&HtmlElement> {
        match self {
            HtmlNode::Element(element) => Some(element),
            HtmlNode::Text(_) => None,
        }
    }

    /// Tag name for elements, `None` for text
    pub fn tag(&self) -> Option<&str> {
        self.as_element().map(|e| e.tag.as_str())
    }

    /// All text in this subtree, segments joined by a single space
    pub fn text_content(&self) -> String {
        let mut segments = Vec::new();
        self.collect_text(&mut segments);
        segments.join(" ")
    }

    fn collect_text<'a>(&'a self, segments: &mut Vec<&'a str>) {
        match self {
            HtmlNode::Text(text) => segments.push(text),
            HtmlNode::Element(element) => {
                if let Some(text) = &element.text {
                    segments.push(text);
                }
                for child in element.children() {
                    child.collect_text(segments);
                }
            }
        }
    }

    /// Render back to HTML markup: text as escaped literal text, elements with
    /// their tag and attributes spread onto it
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            HtmlNode::Text(text) => out.push_str(&escape_text(text)),
            HtmlNode::Element(element) => element.write_markup(out),
        }
    }
}

impl From<HtmlElement> for HtmlNode {
    fn from(element: HtmlElement) -> Self {
        HtmlNode::Element(element)
    }
}

impl Serialize for HtmlNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HtmlNode::Text(text) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "text")?;
                map.serialize_entry("text", text)?;
                map.end()
            }
            HtmlNode::Element(element) => {
                let len = 1
                    + usize::from(element.attributes.is_some())
                    + usize::from(element.children.is_some())
                    + usize::from(element.text.is_some());
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("type", &element.tag)?;
                if let Some(attributes) = &element.attributes {
                    map.serialize_entry("attributes", attributes)?;
                }
                if let Some(children) = &element.children {
                    map.serialize_entry("children", children)?;
                }
                if let Some(text) = &element.text {
                    map.serialize_entry("text", text)?;
                }
                map.end()
            }
        }
    }
}

/// Serialized form of a node, used for deserialization
#[derive(Deserialize)]
struct WireNode {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    attributes: Option<IndexMap<String, String>>,
    #[serde(default)]
    children: Option<Vec<HtmlNode>>,
    #[serde(default)]
    text: Option<String>,
}

impl TryFrom<WireNode> for HtmlNode {
    type Error = String;

    fn try_from(wire: WireNode) -> Result<Self, Self::Error> {
        // An attribute-less, child-less "text" entry is a text node; anything else
        // is an element (SVG has a real <text> tag).
        if wire.kind == "text" && wire.attributes.is_none() && wire.children.is_none() {
            return wire
                .text
                .as_deref()
                .and_then(HtmlNode::text)
                .ok_or_else(|| "text node without text".to_string());
        }

        let mut element = HtmlElement::new(wire.kind);
        if let Some(attributes) = wire.attributes {
            element = element.with_attributes(attributes);
        }
        if let Some(children) = wire.children {
            element = element.with_children(children);
        }
        if let Some(text) = wire.text {
            element = element.with_text(text);
        }
        Ok(HtmlNode::Element(element))
    }
}

fn non_empty_trimmed(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
