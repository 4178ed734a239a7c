use crate::core::footer;
use crate::core::nav_toggle::NavToggle;
use crate::core::reveal::Reveal;
use crate::core::scrollspy::ScrollSpy;
use crate::core::{Clock, ConfigProvider, Dom, IntersectionEntry, NodeId, Viewport};

/// Wires the page behaviors to a document, mirroring the single
/// page-load hook of the original script. Behaviors are independent: a
/// missing element disables only its own feature and the rest still
/// mount.
///
/// The host drives the engine through the event entry points; the
/// engine never registers listeners itself.
pub struct PageEngine {
    nav: Option<NavToggle>,
    reveal: Reveal,
    spy: Option<ScrollSpy>,
    footer_stamped: bool,
}

impl PageEngine {
    /// Binds every behavior, stamps the footer and runs the initial
    /// scroll pass so a page loaded mid-document highlights correctly.
    pub fn mount<H: Dom + Viewport, K: Clock, C: ConfigProvider>(
        page: &mut H,
        clock: &K,
        config: &C,
    ) -> Self {
        tracing::info!("Mounting page behaviors");

        let nav = NavToggle::bind(&*page, config);
        match &nav {
            Some(nav) => tracing::info!("Navigation toggle bound ({} links)", nav.link_count()),
            None => tracing::info!("Navigation toggle skipped (toggle or menu missing)"),
        }

        let reveal = Reveal::bind(&*page, config);
        tracing::info!("Reveal tracking {} elements", reveal.target_count());

        let spy = ScrollSpy::bind(&*page, config);
        match &spy {
            Some(spy) => tracing::info!("Scroll highlighting {} sections", spy.section_count()),
            None => tracing::info!("Scroll highlighting skipped (no sections)"),
        }

        let footer_stamped = footer::stamp_current_year(page, clock, config);
        if footer_stamped {
            tracing::info!("Footer year stamped: {}", clock.current_year());
        } else {
            tracing::info!("Footer year skipped (element missing)");
        }

        let mut engine = Self {
            nav,
            reveal,
            spy,
            footer_stamped,
        };
        engine.on_scroll(page);
        engine
    }

    /// Scroll event: recompute the active section, then re-scan the
    /// reveal targets against the new viewport position.
    pub fn on_scroll<H: Dom + Viewport>(&mut self, page: &mut H) {
        if let Some(spy) = &mut self.spy {
            spy.on_scroll(page);
        }
        self.reveal.scan(page);
    }

    pub fn on_toggle_click<D: Dom>(&mut self, dom: &mut D) {
        if let Some(nav) = &self.nav {
            nav.toggle(dom);
        }
    }

    pub fn on_link_click<D: Dom>(&mut self, dom: &mut D, link: NodeId) {
        if let Some(nav) = &self.nav {
            nav.handle_link_click(dom, link);
        }
    }

    /// Click anywhere in the document; closes the menu when the target
    /// lies outside both the menu panel and the toggle button.
    pub fn on_document_click<D: Dom>(&mut self, dom: &mut D, target: NodeId) {
        if let Some(nav) = &self.nav {
            nav.handle_document_click(dom, target);
        }
    }

    /// Observations from a host-provided intersection source.
    pub fn on_intersections<D: Dom>(&mut self, dom: &mut D, entries: &[IntersectionEntry]) {
        self.reveal.observe(dom, entries);
    }

    pub fn menu_open<D: Dom>(&self, dom: &D) -> bool {
        self.nav.as_ref().is_some_and(|nav| nav.is_open(dom))
    }

    pub fn active_section(&self) -> Option<&str> {
        self.spy.as_ref().and_then(|spy| spy.active_section())
    }

    pub fn section_count(&self) -> usize {
        self.spy.as_ref().map_or(0, |spy| spy.section_count())
    }

    pub fn revealed_count(&self) -> usize {
        self.reveal.revealed_count()
    }

    pub fn footer_stamped(&self) -> bool {
        self.footer_stamped
    }
}
