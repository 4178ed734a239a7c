use crate::domain::model::{Markers, NodeId, Selectors};

/// Facade over the host document tree.
///
/// Every element lookup and mutation the behaviors perform goes through
/// this trait, so each behavior can be exercised against an in-memory
/// page instead of a real browser. `query_all` returns matches in
/// document order (pre-order); the scroll highlighter's tie-break
/// depends on that.
pub trait Dom {
    fn query(&self, selector: &str) -> Option<NodeId>;
    fn query_all(&self, selector: &str) -> Vec<NodeId>;
    /// First match among the strict descendants of `node`.
    fn query_within(&self, node: NodeId, selector: &str) -> Option<NodeId>;

    fn has_class(&self, node: NodeId, class: &str) -> bool;
    fn add_class(&mut self, node: NodeId, class: &str);
    fn remove_class(&mut self, node: NodeId, class: &str);

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    fn set_text(&mut self, node: NodeId, text: &str);
    /// Inline display value, used to swap the toggle icons.
    fn set_display(&mut self, node: NodeId, display: &str);

    /// Reflexive containment: a node contains itself, like `Node.contains`.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;

    fn offset_top(&self, node: NodeId) -> f64;
    fn client_height(&self, node: NodeId) -> f64;
    fn offset_height(&self, node: NodeId) -> f64;

    fn body(&self) -> NodeId;
}

/// Scroll and geometry state of the visible rendering area.
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    fn inner_height(&self) -> f64;
    /// Total scrollable height of the document.
    fn document_height(&self) -> f64;
}

/// Source of the current calendar year for the footer stamp.
pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Read access to the selector set, marker classes and tuning values.
pub trait ConfigProvider {
    fn selectors(&self) -> &Selectors;
    fn markers(&self) -> &Markers;
    /// Fraction of an element that must be visible before it is revealed.
    fn reveal_threshold(&self) -> f64;
    /// Pixels subtracted from a section's top so the highlight switches
    /// slightly before the section reaches the top of the viewport.
    fn scroll_lookahead(&self) -> f64;
    /// Distance from the document bottom within which the last section
    /// is forced active.
    fn bottom_slack(&self) -> f64;
    /// Navbar height assumed when the navbar element is missing.
    fn navbar_fallback_height(&self) -> f64;
}
