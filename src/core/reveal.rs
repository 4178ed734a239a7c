use crate::core::{ConfigProvider, Dom, IntersectionEntry, NodeId, Viewport};
use std::collections::HashSet;

/// Fade-in reveal. Tracks a fixed, queried-once set of elements and
/// applies the visible marker the first time enough of an element
/// enters the viewport. The transition is one-way: the marker is never
/// removed when the element scrolls back out.
pub struct Reveal {
    targets: Vec<NodeId>,
    revealed: HashSet<NodeId>,
    threshold: f64,
    marker: String,
}

impl Reveal {
    pub fn bind<D: Dom, C: ConfigProvider>(dom: &D, config: &C) -> Self {
        Self {
            targets: dom.query_all(&config.selectors().fade_in),
            revealed: HashSet::new(),
            threshold: config.reveal_threshold(),
            marker: config.markers().visible.clone(),
        }
    }

    /// Consumes intersection observations. Entries for untracked nodes
    /// and for already-revealed targets are ignored.
    pub fn observe<D: Dom>(&mut self, dom: &mut D, entries: &[IntersectionEntry]) {
        for entry in entries {
            if entry.ratio < self.threshold || !self.targets.contains(&entry.target) {
                continue;
            }
            if !self.revealed.insert(entry.target) {
                continue;
            }
            dom.add_class(entry.target, &self.marker);
            tracing::debug!(node = entry.target, "element revealed");
        }
    }

    /// Headless substitute for a browser intersection observer: derives
    /// each target's intersection ratio from its geometry against the
    /// current viewport and feeds the observations to `observe`.
    pub fn scan<H: Dom + Viewport>(&mut self, page: &mut H) {
        let view_top = page.scroll_y();
        let view_bottom = view_top + page.inner_height();

        let entries: Vec<IntersectionEntry> = self
            .targets
            .iter()
            .map(|&target| {
                let top = page.offset_top(target);
                let height = page.client_height(target);
                let ratio = if height <= 0.0 {
                    // a zero-height element counts as fully visible
                    // while its top edge lies inside the viewport
                    if top >= view_top && top <= view_bottom {
                        1.0
                    } else {
                        0.0
                    }
                } else {
                    let overlap = (top + height).min(view_bottom) - top.max(view_top);
                    (overlap / height).clamp(0.0, 1.0)
                };
                IntersectionEntry { target, ratio }
            })
            .collect();

        self.observe(page, &entries);
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
