//! HTML string to [`HtmlNode`] projection
//!
//! The fragment is parsed as the body of a full document (the same way a browser's
//! `DOMParser` treats it), then the body's child nodes are walked depth-first.
//! Parsing is backed by `scraper` and only available with the `html-parser`
//! feature; without it every projection is empty.
//!
//! The walk keeps its own stack of open elements, and nesting is capped at
//! [`MAX_DEPTH`]: an element at the cap is projected as a leaf holding all of
//! its descendant text.

use crate::dom::node::HtmlNode;

#[cfg(feature = "html-parser")]
use crate::dom::node::HtmlElement;
#[cfg(feature = "html-parser")]
use ego_tree::{NodeRef, iter::Children};
#[cfg(feature = "html-parser")]
use scraper::{ElementRef, Html, Node, node::Element};

/// Deepest element nesting a projected tree can have
pub const MAX_DEPTH: usize = 256;

/// Whether this build can parse HTML at all
pub const fn parser_available() -> bool {
    cfg!(feature = "html-parser")
}

/// Project an HTML fragment into its top-level nodes
///
/// Never fails: malformed markup is recovered by the parser, and empty or
/// whitespace-only input yields an empty forest.
#[cfg(feature = "html-parser")]
pub fn project(html: &str) -> Vec<HtmlNode> {
    if html.trim().is_empty() {
        return Vec::new();
    }

    let document = Html::parse_document(html);

    let Some(body) = document
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "body")
    else {
        log::debug!("Parsed document has no <body>, projecting nothing");
        return Vec::new();
    };

    project_children(*body)
}

/// Project an HTML fragment into its top-level nodes
///
/// This build has no HTML parser, so the result is always empty.
#[cfg(not(feature = "html-parser"))]
pub fn project(html: &str) -> Vec<HtmlNode> {
    log::debug!(
        "HTML parsing unavailable, skipping projection of {} bytes",
        html.len()
    );
    Vec::new()
}

/// An element whose children are still being projected
#[cfg(feature = "html-parser")]
struct OpenElement<'a> {
    element: HtmlElement,
    children: Vec<HtmlNode>,
    pending: Children<'a, Node>,
}

#[cfg(feature = "html-parser")]
fn project_children(parent: NodeRef<'_, Node>) -> Vec<HtmlNode> {
    let mut roots = Vec::new();
    let mut pending = parent.children();
    let mut open: Vec<OpenElement> = Vec::new();
    let mut truncated = 0usize;

    loop {
        let next = match open.last_mut() {
            Some(current) => current.pending.next(),
            None => pending.next(),
        };

        let Some(node) = next else {
            // Current level exhausted: close the innermost open element
            let Some(done) = open.pop() else {
                break;
            };
            let projected = HtmlNode::Element(done.element.with_children(done.children));
            emit(&mut open, &mut roots, projected);
            continue;
        };

        match node.value() {
            Node::Text(text) => {
                if let Some(text) = HtmlNode::text(&**text) {
                    emit(&mut open, &mut roots, text);
                }
            }
            Node::Element(element) => {
                let projected = shell(element);
                let has_child_elements = node.children().any(|child| child.value().is_element());

                if !has_child_elements {
                    emit(&mut open, &mut roots, leaf(node, projected));
                } else if open.len() < MAX_DEPTH {
                    open.push(OpenElement {
                        element: projected,
                        children: Vec::new(),
                        pending: node.children(),
                    });
                } else {
                    truncated += 1;
                    emit(&mut open, &mut roots, truncated_leaf(node, projected));
                }
            }
            // Comments, doctypes and processing instructions carry no content
            _ => {}
        }
    }

    if truncated > 0 {
        log::debug!(
            "Flattened {} elements nested deeper than {} levels",
            truncated,
            MAX_DEPTH
        );
    }

    roots
}

/// Append a finished node to the innermost open element, or to the top level
#[cfg(feature = "html-parser")]
fn emit(open: &mut [OpenElement], roots: &mut Vec<HtmlNode>, node: HtmlNode) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

/// Tag and attributes of an element, without content
#[cfg(feature = "html-parser")]
fn shell(element: &Element) -> HtmlElement {
    let mut projected = HtmlElement::new(element.name());
    for (name, value) in element.attrs() {
        projected.add_attribute(name, value);
    }
    projected
}

/// Leaf: the concatenated raw text, trimmed once as a whole
#[cfg(feature = "html-parser")]
fn leaf(node: NodeRef<'_, Node>, projected: HtmlElement) -> HtmlNode {
    let text: String = node
        .children()
        .filter_map(|child| child.value().as_text())
        .map(|text| &**text)
        .collect();
    HtmlNode::Element(projected.with_text(text))
}

#[cfg(feature = "html-parser")]
fn truncated_leaf(node: NodeRef<'_, Node>, projected: HtmlElement) -> HtmlNode {
    let text: String = ElementRef::wrap(node)
        .map(|element| element.text().collect())
        .unwrap_or_default();
    HtmlNode::Element(projected.with_text(text))
}

#[cfg(all(test, feature = "html-parser"))]
mod tests {
    use super::*;

    fn element(node: &HtmlNode) -> &HtmlElement {
        node.as_element().expect("expected an element node")
    }

    #[test]
    fn test_facility_name_scenario() {
        let nodes = project(r#"<div data-testid="facility-42-name">Course A</div>"#);

        assert_eq!(nodes.len(), 1);
        let div = element(&nodes[0]);
        assert_eq!(div.tag, "div");
        assert_eq!(div.get_attribute("data-testid"), Some("facility-42-name"));
        assert_eq!(div.text.as_deref(), Some("Course A"));
        assert!(div.children.is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(project("").is_empty());
        assert!(project("   \n\t  ").is_empty());
    }

    #[test]
    fn test_whitespace_between_elements_dropped() {
        let nodes = project("<div>  <span>X</span>  </div>");

        let expected = HtmlNode::from(HtmlElement::new("div").with_children(vec![
            HtmlElement::new("span").with_text("X").into(),
        ]));
        assert_eq!(nodes, vec![expected]);
    }

    #[test]
    fn test_mixed_content_keeps_text_children() {
        let nodes = project("<p> Tee time: <b>7:30</b> AM </p>");

        let p = element(&nodes[0]);
        assert!(p.text.is_none());
        let children = p.children();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0], HtmlNode::Text("Tee time:".to_string()));
        assert_eq!(element(&children[1]).text.as_deref(), Some("7:30"));
        assert_eq!(children[2], HtmlNode::Text("AM".to_string()));
    }

    #[test]
    fn test_tag_names_lowercased_and_attributes_verbatim() {
        let nodes = project(r#"<SECTION Class="Card  Big" DATA-ID=" 7 "><P>hi</P></SECTION>"#);

        let section = element(&nodes[0]);
        assert_eq!(section.tag, "section");
        assert_eq!(section.get_attribute("class"), Some("Card  Big"));
        assert_eq!(section.get_attribute("data-id"), Some(" 7 "));
        assert_eq!(element(&section.children()[0]).tag, "p");
    }

    #[test]
    fn test_top_level_text_and_comments() {
        let nodes = project("Course list <!-- hidden --> <em>NY</em>");

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0], HtmlNode::Text("Course list".to_string()));
        assert_eq!(element(&nodes[1]).tag, "em");
    }

    #[test]
    fn test_leaf_text_joins_around_comments() {
        let nodes = project("<span>Marine <!-- x -->Park</span>");
        assert_eq!(element(&nodes[0]).text.as_deref(), Some("Marine Park"));
    }

    #[test]
    fn test_empty_leaf_has_no_text() {
        let nodes = project(r#"<div class="spacer">   </div><img src="a.png">"#);

        assert_eq!(nodes.len(), 2);
        assert!(element(&nodes[0]).text.is_none());
        assert!(element(&nodes[0]).children.is_none());
        assert_eq!(element(&nodes[1]).get_attribute("src"), Some("a.png"));
    }

    #[test]
    fn test_malformed_html_does_not_fail() {
        let nodes = project("<div><span>open <b>bold</div></i><p>after");

        assert!(!nodes.is_empty());
        assert_eq!(element(&nodes[0]).tag, "div");
    }

    #[test]
    fn test_deterministic() {
        let html = r#"<ul id="list"><li>One</li><li data-x="1">Two</li></ul>"#;
        assert_eq!(project(html), project(html));
    }

    fn depth(node: &HtmlNode) -> usize {
        let mut depth = 0;
        let mut current = Some(node);
        while let Some(node) = current {
            depth += 1;
            current = node.as_element().and_then(|e| e.children().first());
        }
        depth
    }

    #[test]
    fn test_deep_nesting_is_capped() {
        let levels = 20_000;
        let html = format!("{}deep{}", "<div>".repeat(levels), "</div>".repeat(levels));

        let nodes = project(&html);

        assert_eq!(nodes.len(), 1);
        assert_eq!(depth(&nodes[0]), MAX_DEPTH + 1);

        let mut innermost = element(&nodes[0]);
        while let Some(child) = innermost.children().first() {
            innermost = element(child);
        }
        assert_eq!(innermost.text.as_deref(), Some("deep"));
    }

    #[test]
    fn test_nesting_below_cap_is_kept() {
        let levels = 40;
        let html = format!("{}<b>x</b>{}", "<span>".repeat(levels), "</span>".repeat(levels));

        let nodes = project(&html);
        assert_eq!(depth(&nodes[0]), levels + 1);
    }

    #[test]
    fn test_parser_available() {
        assert!(parser_available());
    }
}
