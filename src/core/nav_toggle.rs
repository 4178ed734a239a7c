use crate::core::{ConfigProvider, Dom, NodeId};

pub const ARIA_EXPANDED: &str = "aria-expanded";

/// Mobile navigation toggle. Open state lives in the document itself
/// (the menu panel carrying the open marker); `open`/`close` keep the
/// `aria-expanded` attribute, the menu and body markers and the two
/// icon displays in lock-step.
///
/// Link clicks and outside clicks call `close` directly rather than
/// re-dispatching a synthetic click through the toggle handler.
pub struct NavToggle {
    toggle: NodeId,
    menu: NodeId,
    body: NodeId,
    links: Vec<NodeId>,
    menu_icon: Option<NodeId>,
    close_icon: Option<NodeId>,
    open_marker: String,
    overlay_marker: String,
}

impl NavToggle {
    /// Resolves the toggle wiring once. Returns `None` when the toggle
    /// button or the menu panel is missing; the whole behavior is then
    /// skipped. The icon children are individually optional.
    pub fn bind<D: Dom, C: ConfigProvider>(dom: &D, config: &C) -> Option<Self> {
        let selectors = config.selectors();
        let (toggle, menu) = match (
            dom.query(&selectors.nav_toggle),
            dom.query(&selectors.nav_menu),
        ) {
            (Some(toggle), Some(menu)) => (toggle, menu),
            _ => {
                tracing::debug!("nav toggle or menu panel not found, skipping menu wiring");
                return None;
            }
        };

        let markers = config.markers();
        Some(Self {
            toggle,
            menu,
            body: dom.body(),
            links: dom.query_all(&selectors.nav_link),
            menu_icon: dom.query_within(toggle, &selectors.menu_icon),
            close_icon: dom.query_within(toggle, &selectors.close_icon),
            open_marker: markers.menu_open.clone(),
            overlay_marker: markers.body_overlay.clone(),
        })
    }

    pub fn is_open<D: Dom>(&self, dom: &D) -> bool {
        dom.has_class(self.menu, &self.open_marker)
    }

    pub fn toggle<D: Dom>(&self, dom: &mut D) {
        if self.is_open(dom) {
            self.close(dom);
        } else {
            self.open(dom);
        }
    }

    pub fn open<D: Dom>(&self, dom: &mut D) {
        dom.set_attribute(self.toggle, ARIA_EXPANDED, "true");
        dom.add_class(self.menu, &self.open_marker);
        dom.add_class(self.body, &self.overlay_marker);
        self.show_close_icon(dom, true);
        tracing::debug!("mobile menu opened");
    }

    pub fn close<D: Dom>(&self, dom: &mut D) {
        dom.set_attribute(self.toggle, ARIA_EXPANDED, "false");
        dom.remove_class(self.menu, &self.open_marker);
        dom.remove_class(self.body, &self.overlay_marker);
        self.show_close_icon(dom, false);
        tracing::debug!("mobile menu closed");
    }

    /// A click on any nav link closes the open menu.
    pub fn handle_link_click<D: Dom>(&self, dom: &mut D, link: NodeId) {
        if self.links.contains(&link) && self.is_open(dom) {
            self.close(dom);
        }
    }

    /// A click landing outside both the menu panel and the toggle
    /// button closes the open menu. Containment is reflexive, so a
    /// click on the panel or the button itself stays inside.
    pub fn handle_document_click<D: Dom>(&self, dom: &mut D, target: NodeId) {
        if self.is_open(dom)
            && !dom.contains(self.menu, target)
            && !dom.contains(self.toggle, target)
        {
            self.close(dom);
        }
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    fn show_close_icon<D: Dom>(&self, dom: &mut D, open: bool) {
        if let Some(icon) = self.menu_icon {
            dom.set_display(icon, if open { "none" } else { "block" });
        }
        if let Some(icon) = self.close_icon {
            dom.set_display(icon, if open { "block" } else { "none" });
        }
    }
}
