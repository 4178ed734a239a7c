use crate::domain::model::NodeId;
use crate::domain::ports::{Dom, Viewport};
use crate::utils::error::{PageError, Result};
use crate::utils::selector::Selector;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One element of a page description: tag, markers, attributes,
/// vertical geometry and nested children. Deserializable from TOML and
/// buildable through the chained constructors in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementSpec {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,
    /// Offset from the document top, in pixels.
    pub top: f64,
    pub height: f64,
    pub text: Option<String>,
    /// Inline display value ("block", "none", ...).
    pub display: Option<String>,
    pub children: Vec<ElementSpec>,
}

impl Default for ElementSpec {
    fn default() -> Self {
        Self {
            tag: "div".to_string(),
            id: None,
            classes: Vec::new(),
            attrs: HashMap::new(),
            top: 0.0,
            height: 0.0,
            text: None,
            display: None,
            children: Vec::new(),
        }
    }
}

impl ElementSpec {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn at(mut self, top: f64, height: f64) -> Self {
        self.top = top;
        self.height = height;
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn display(mut self, display: &str) -> Self {
        self.display = Some(display.to_string());
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSpec {
    pub height: f64,
    /// Computed from the lowest element edge when omitted.
    pub document_height: Option<f64>,
}

impl Default for ViewportSpec {
    fn default() -> Self {
        Self {
            height: 800.0,
            document_height: None,
        }
    }
}

/// TOML-loadable page description: a `[viewport]` table plus nested
/// `[[element]]` tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSpec {
    pub viewport: ViewportSpec,
    #[serde(rename = "element")]
    pub elements: Vec<ElementSpec>,
}

impl PageSpec {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PageError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PageError::FixtureError {
            message: format!("page description parse error: {}", e),
        })
    }
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
    text: String,
    display: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    top: f64,
    height: f64,
}

/// In-memory element tree plus viewport state implementing the `Dom`
/// and `Viewport` ports. Node 0 is always the body. Scrolling clamps to
/// the scrollable range like a browser does.
#[derive(Debug, Clone)]
pub struct FixturePage {
    nodes: Vec<Node>,
    scroll: f64,
    inner_height: f64,
    document_height: f64,
}

impl FixturePage {
    pub const BODY: NodeId = 0;

    pub fn new(inner_height: f64, document_height: f64) -> Self {
        let body = Node {
            tag: "body".to_string(),
            classes: Vec::new(),
            attrs: HashMap::new(),
            text: String::new(),
            display: None,
            parent: None,
            children: Vec::new(),
            top: 0.0,
            height: document_height,
        };
        Self {
            nodes: vec![body],
            scroll: 0.0,
            inner_height,
            document_height,
        }
    }

    /// Inserts the element and its children under `parent`; returns the
    /// handle of the inserted root.
    pub fn insert(&mut self, parent: NodeId, spec: ElementSpec) -> NodeId {
        let ElementSpec {
            tag,
            id,
            classes,
            mut attrs,
            top,
            height,
            text,
            display,
            children,
        } = spec;
        if let Some(id) = id {
            attrs.insert("id".to_string(), id);
        }

        let node_id = self.nodes.len();
        self.nodes.push(Node {
            tag,
            classes,
            attrs,
            text: text.unwrap_or_default(),
            display,
            parent: Some(parent),
            children: Vec::new(),
            top,
            height,
        });
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(node_id);
        }

        for child in children {
            self.insert(node_id, child);
        }
        node_id
    }

    pub fn from_spec(spec: &PageSpec) -> Result<Self> {
        if spec.elements.is_empty() {
            return Err(PageError::FixtureError {
                message: "page description has no elements".to_string(),
            });
        }

        let bottom = lowest_edge(&spec.elements);
        let document_height = spec
            .viewport
            .document_height
            .unwrap_or_else(|| bottom.max(spec.viewport.height));

        let mut page = Self::new(spec.viewport.height, document_height);
        for element in &spec.elements {
            page.insert(Self::BODY, element.clone());
        }
        Ok(page)
    }

    /// The landing page the CLI walks through when no page description
    /// is given: navbar with mobile toggle, four linked sections, three
    /// fade-in blocks and a footer year slot.
    pub fn sample_landing() -> Self {
        let link = |href: &str, label: &str| {
            ElementSpec::new("a")
                .class("nav-link")
                .attr("href", href)
                .text(label)
        };

        let mut page = Self::new(800.0, 2400.0);
        page.insert(
            Self::BODY,
            ElementSpec::new("nav")
                .class("navbar")
                .at(0.0, 70.0)
                .child(
                    ElementSpec::new("button")
                        .class("mobile-nav-toggle")
                        .child(ElementSpec::new("span").class("icon-menu").display("block"))
                        .child(ElementSpec::new("span").class("icon-x").display("none")),
                )
                .child(
                    ElementSpec::new("ul")
                        .class("nav-menu")
                        .child(link("#home", "Home"))
                        .child(link("#features", "Features"))
                        .child(link("#pricing", "Pricing"))
                        .child(link("#contact", "Contact")),
                ),
        );
        page.insert(Self::BODY, ElementSpec::new("section").id("home").at(0.0, 600.0));
        page.insert(
            Self::BODY,
            ElementSpec::new("section")
                .id("features")
                .at(600.0, 700.0)
                .child(ElementSpec::new("div").class("fade-in").at(650.0, 200.0)),
        );
        page.insert(
            Self::BODY,
            ElementSpec::new("section")
                .id("pricing")
                .at(1300.0, 600.0)
                .child(ElementSpec::new("div").class("fade-in").at(1400.0, 200.0)),
        );
        page.insert(
            Self::BODY,
            ElementSpec::new("section")
                .id("contact")
                .at(1900.0, 500.0)
                .child(ElementSpec::new("div").class("fade-in").at(2000.0, 150.0)),
        );
        page.insert(
            Self::BODY,
            ElementSpec::new("footer")
                .at(2300.0, 100.0)
                .child(ElementSpec::new("span").id("current-year")),
        );
        page
    }

    pub fn scroll_to(&mut self, offset: f64) {
        let max_scroll = (self.document_height - self.inner_height).max(0.0);
        self.scroll = offset.clamp(0.0, max_scroll);
    }

    pub fn set_inner_height(&mut self, height: f64) {
        self.inner_height = height;
    }

    pub fn set_document_height(&mut self, height: f64) {
        self.document_height = height;
        if let Some(body) = self.nodes.first_mut() {
            body.height = height;
        }
    }

    pub fn text_of(&self, node: NodeId) -> &str {
        self.nodes.get(node).map_or("", |n| n.text.as_str())
    }

    pub fn display_of(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).and_then(|n| n.display.as_deref())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn matches(&self, node: NodeId, sel: &Selector) -> bool {
        let Some(node) = self.nodes.get(node) else {
            return false;
        };
        if let Some(tag) = &sel.tag {
            if node.tag != *tag {
                return false;
            }
        }
        if let Some(id) = &sel.id {
            if node.attrs.get("id") != Some(id) {
                return false;
            }
        }
        if !sel.classes.iter().all(|c| node.classes.contains(c)) {
            return false;
        }
        for attr in &sel.attrs {
            match (node.attrs.get(&attr.name), &attr.value) {
                (None, _) => return false,
                (Some(_), None) => {}
                (Some(actual), Some(expected)) => {
                    if actual != expected {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn preorder(&self, root: NodeId, out: &mut Vec<NodeId>) {
        out.push(root);
        if let Some(node) = self.nodes.get(root) {
            for &child in &node.children {
                self.preorder(child, out);
            }
        }
    }

    fn select(&self, root: NodeId, selector: &str, include_root: bool) -> Vec<NodeId> {
        let Ok(sel) = Selector::parse(selector) else {
            tracing::warn!(selector, "unsupported selector, treating as no match");
            return Vec::new();
        };
        let mut order = Vec::new();
        self.preorder(root, &mut order);
        order
            .into_iter()
            .skip(if include_root { 0 } else { 1 })
            .filter(|&node| self.matches(node, &sel))
            .collect()
    }
}

fn lowest_edge(elements: &[ElementSpec]) -> f64 {
    elements.iter().fold(0.0, |acc, e| {
        acc.max(e.top + e.height).max(lowest_edge(&e.children))
    })
}

impl Dom for FixturePage {
    fn query(&self, selector: &str) -> Option<NodeId> {
        self.select(Self::BODY, selector, true).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.select(Self::BODY, selector, true)
    }

    fn query_within(&self, node: NodeId, selector: &str) -> Option<NodeId> {
        self.select(node, selector, false).into_iter().next()
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(node)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(node) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(node) = self.nodes.get_mut(node) {
            node.classes.retain(|c| c != class);
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes.get(node).and_then(|n| n.attrs.get(name).cloned())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(node) {
            node.attrs.insert(name.to_string(), value.to_string());
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(node) = self.nodes.get_mut(node) {
            node.text = text.to_string();
        }
    }

    fn set_display(&mut self, node: NodeId, display: &str) {
        if let Some(node) = self.nodes.get_mut(node) {
            node.display = Some(display.to_string());
        }
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.nodes.get(current).and_then(|n| n.parent);
        }
        false
    }

    fn offset_top(&self, node: NodeId) -> f64 {
        self.nodes.get(node).map_or(0.0, |n| n.top)
    }

    fn client_height(&self, node: NodeId) -> f64 {
        self.nodes.get(node).map_or(0.0, |n| n.height)
    }

    fn offset_height(&self, node: NodeId) -> f64 {
        self.nodes.get(node).map_or(0.0, |n| n.height)
    }

    fn body(&self) -> NodeId {
        Self::BODY
    }
}

impl Viewport for FixturePage {
    fn scroll_y(&self) -> f64 {
        self.scroll
    }

    fn inner_height(&self) -> f64 {
        self.inner_height
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_all_returns_document_order() {
        let page = FixturePage::sample_landing();
        let sections = page.query_all("section[id]");

        let ids: Vec<String> = sections
            .iter()
            .filter_map(|&s| page.attribute(s, "id"))
            .collect();
        assert_eq!(ids, vec!["home", "features", "pricing", "contact"]);
    }

    #[test]
    fn test_query_within_excludes_root() {
        let page = FixturePage::sample_landing();
        let toggle = page.query(".mobile-nav-toggle").unwrap();

        assert!(page.query_within(toggle, ".icon-menu").is_some());
        assert!(page.query_within(toggle, ".mobile-nav-toggle").is_none());
        assert!(page.query_within(toggle, ".nav-link").is_none());
    }

    #[test]
    fn test_attr_value_matching() {
        let page = FixturePage::sample_landing();
        let link = page.query(".nav-link[href=\"#pricing\"]").unwrap();
        assert_eq!(page.attribute(link, "href").as_deref(), Some("#pricing"));
    }

    #[test]
    fn test_contains_is_reflexive_and_transitive() {
        let page = FixturePage::sample_landing();
        let navbar = page.query(".navbar").unwrap();
        let icon = page.query(".icon-menu").unwrap();
        let section = page.query("#home").unwrap();

        assert!(page.contains(navbar, navbar));
        assert!(page.contains(navbar, icon));
        assert!(page.contains(FixturePage::BODY, icon));
        assert!(!page.contains(navbar, section));
        assert!(!page.contains(icon, navbar));
    }

    #[test]
    fn test_scroll_clamps_to_scrollable_range() {
        let mut page = FixturePage::sample_landing();

        page.scroll_to(-50.0);
        assert_eq!(page.scroll_y(), 0.0);

        page.scroll_to(99_999.0);
        assert_eq!(page.scroll_y(), 1600.0); // 2400 document - 800 viewport
    }

    #[test]
    fn test_from_spec_with_nested_children() {
        let toml_content = r##"
[viewport]
height = 600

[[element]]
tag = "nav"
classes = ["navbar"]
height = 60

[[element.children]]
tag = "a"
classes = ["nav-link"]

[element.children.attrs]
href = "#top"

[[element]]
tag = "section"
id = "top"
top = 0
height = 900
"##;

        let spec = PageSpec::from_toml_str(toml_content).unwrap();
        let page = FixturePage::from_spec(&spec).unwrap();

        assert_eq!(page.inner_height(), 600.0);
        // document height derived from the lowest element edge
        assert_eq!(page.document_height(), 900.0);
        let link = page.query(".nav-link").unwrap();
        assert_eq!(page.attribute(link, "href").as_deref(), Some("#top"));
        let navbar = page.query(".navbar").unwrap();
        assert!(page.contains(navbar, link));
    }

    #[test]
    fn test_from_spec_rejects_empty_page() {
        let spec = PageSpec::from_toml_str("[viewport]\nheight = 600\n").unwrap();
        assert!(FixturePage::from_spec(&spec).is_err());
    }
}
