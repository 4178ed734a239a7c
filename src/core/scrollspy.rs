use crate::core::{ConfigProvider, Dom, NodeId, Viewport};

/// Scroll-position-based active-link highlighting.
///
/// Each section's span is shifted up by the rendered navbar height plus
/// a lookahead margin so the highlight switches slightly before the
/// section reaches the top of the viewport. Sections are scanned in
/// document order and later matches overwrite earlier ones, so when
/// spans overlap the last matching section wins.
pub struct ScrollSpy {
    sections: Vec<NodeId>,
    links: Vec<NodeId>,
    navbar: Option<NodeId>,
    lookahead: f64,
    bottom_slack: f64,
    navbar_fallback: f64,
    active_marker: String,
    active: Option<String>,
}

impl ScrollSpy {
    /// Resolves sections, links and the navbar once. Returns `None`
    /// when the page has no identified sections; the behavior is then
    /// skipped entirely.
    pub fn bind<D: Dom, C: ConfigProvider>(dom: &D, config: &C) -> Option<Self> {
        let selectors = config.selectors();
        let sections = dom.query_all(&selectors.section);
        if sections.is_empty() {
            tracing::debug!("no identified sections, skipping scroll highlighting");
            return None;
        }

        Some(Self {
            sections,
            links: dom.query_all(&selectors.nav_link),
            navbar: dom.query(&selectors.navbar),
            lookahead: config.scroll_lookahead(),
            bottom_slack: config.bottom_slack(),
            navbar_fallback: config.navbar_fallback_height(),
            active_marker: config.markers().link_active.clone(),
            active: None,
        })
    }

    pub fn on_scroll<H: Dom + Viewport>(&mut self, page: &mut H) {
        let scroll = page.scroll_y();
        let navbar_height = self
            .navbar
            .map(|navbar| page.offset_height(navbar))
            .unwrap_or(self.navbar_fallback);

        let mut current: Option<String> = None;
        for &section in &self.sections {
            let top = page.offset_top(section) - navbar_height - self.lookahead;
            let height = page.client_height(section);
            if scroll >= top && scroll < top + height {
                current = page.attribute(section, "id");
            }
        }

        // Hero region: offsets above the first adjusted span map to the
        // first section.
        let first = self.sections[0];
        if scroll < page.offset_top(first) - navbar_height - self.lookahead {
            current = page.attribute(first, "id");
        }

        // Near the document bottom the last section wins regardless of
        // its computed span; short trailing sections would otherwise
        // never be reachable.
        let last = self.sections[self.sections.len() - 1];
        if scroll + page.inner_height() >= page.document_height() - self.bottom_slack {
            current = page.attribute(last, "id");
        }

        match current {
            Some(id) => self.activate(page, &id),
            None => self.clear_all(page),
        }
    }

    /// Section id highlighted by the most recent mutation, if any.
    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn activate<D: Dom>(&mut self, dom: &mut D, id: &str) {
        let target = format!("#{id}");
        let matching = self
            .links
            .iter()
            .copied()
            .find(|&link| dom.attribute(link, "href").as_deref() == Some(target.as_str()));

        // A section without a matching link leaves the previous
        // highlight untouched.
        let Some(matching) = matching else {
            return;
        };

        for &link in &self.links {
            dom.remove_class(link, &self.active_marker);
        }
        dom.add_class(matching, &self.active_marker);

        if self.active.as_deref() != Some(id) {
            tracing::debug!(section = id, "active section changed");
        }
        self.active = Some(id.to_string());
    }

    fn clear_all<D: Dom>(&mut self, dom: &mut D) {
        for &link in &self.links {
            dom.remove_class(link, &self.active_marker);
        }
        self.active = None;
    }
}
