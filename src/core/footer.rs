use crate::core::{Clock, ConfigProvider, Dom};

/// Writes the clock's four-digit year into the footer element. Runs
/// once at mount and is never refreshed; a missing element is a silent
/// no-op. Returns whether the stamp was written.
pub fn stamp_current_year<D: Dom, K: Clock, C: ConfigProvider>(
    dom: &mut D,
    clock: &K,
    config: &C,
) -> bool {
    let Some(node) = dom.query(&config.selectors().footer_year) else {
        tracing::debug!("footer year element not found, skipping stamp");
        return false;
    };
    dom.set_text(node, &clock.current_year().to_string());
    true
}
