use serde::{Deserialize, Serialize};

/// Opaque handle to an element owned by the host document.
///
/// Behaviors resolve handles once when they bind and hold them for the
/// lifetime of the page; the handle itself carries no DOM state.
pub type NodeId = usize;

/// One observation from an intersection source: how much of the target
/// currently overlaps the viewport, as a fraction of the target's area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: NodeId,
    pub ratio: f64,
}

/// Selectors locating the page elements the behaviors attach to.
///
/// Defaults match the original page contract; every field can be
/// overridden from the `[selectors]` table of a behavior config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav_toggle: String,
    pub nav_menu: String,
    pub nav_link: String,
    pub menu_icon: String,
    pub close_icon: String,
    pub navbar: String,
    pub section: String,
    pub fade_in: String,
    pub footer_year: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_toggle: ".mobile-nav-toggle".to_string(),
            nav_menu: ".nav-menu".to_string(),
            nav_link: ".nav-link".to_string(),
            menu_icon: ".icon-menu".to_string(),
            close_icon: ".icon-x".to_string(),
            navbar: ".navbar".to_string(),
            section: "section[id]".to_string(),
            fade_in: ".fade-in".to_string(),
            footer_year: "#current-year".to_string(),
        }
    }
}

/// Marker classes the behaviors write into the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Menu panel carries this while the mobile menu is open.
    pub menu_open: String,
    /// Body carries this while the mobile menu is open (overlay styling).
    pub body_overlay: String,
    /// The currently highlighted nav link. At most one link carries it.
    pub link_active: String,
    /// One-way marker for elements that have been revealed.
    pub visible: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            menu_open: "active".to_string(),
            body_overlay: "mobile-menu-active".to_string(),
            link_active: "active".to_string(),
            visible: "visible".to_string(),
        }
    }
}
