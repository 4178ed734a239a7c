use navkit::{Clock, Dom, ElementSpec, FixturePage, IntersectionEntry, PageEngine, TomlConfig};

struct FixedClock(i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

fn mount(page: &mut FixturePage) -> PageEngine {
    PageEngine::mount(page, &FixedClock(2026), &TomlConfig::default())
}

fn page_with_fade_in(top: f64, height: f64) -> FixturePage {
    let mut page = FixturePage::new(800.0, 4000.0);
    page.insert(
        FixturePage::BODY,
        ElementSpec::new("div").class("fade-in").at(top, height),
    );
    page
}

#[test]
fn test_element_below_viewport_is_not_revealed() {
    let mut page = page_with_fade_in(2000.0, 200.0);
    let engine = mount(&mut page);

    let target = page.query(".fade-in").unwrap();
    assert!(!page.has_class(target, "visible"));
    assert_eq!(engine.revealed_count(), 0);
}

#[test]
fn test_scrolling_into_view_reveals_once_and_permanently() {
    let mut page = page_with_fade_in(2000.0, 200.0);
    let mut engine = mount(&mut page);
    let target = page.query(".fade-in").unwrap();

    page.scroll_to(1500.0);
    engine.on_scroll(&mut page);
    assert!(page.has_class(target, "visible"));
    assert_eq!(engine.revealed_count(), 1);

    // scrolling back out never removes the marker
    page.scroll_to(0.0);
    engine.on_scroll(&mut page);
    assert!(page.has_class(target, "visible"));
    assert_eq!(engine.revealed_count(), 1);
}

#[test]
fn test_ten_percent_threshold_boundary() {
    // element of height 200 at top 2000; viewport bottom reaches 2020
    // at offset 1220, exactly 10% of the element
    let mut page = page_with_fade_in(2000.0, 200.0);
    let mut engine = mount(&mut page);
    let target = page.query(".fade-in").unwrap();

    page.scroll_to(1210.0); // 5% visible
    engine.on_scroll(&mut page);
    assert!(!page.has_class(target, "visible"));

    page.scroll_to(1220.0); // exactly 10%
    engine.on_scroll(&mut page);
    assert!(page.has_class(target, "visible"));
}

#[test]
fn test_intersection_entries_respect_threshold() {
    let mut page = page_with_fade_in(2000.0, 200.0);
    let mut engine = mount(&mut page);
    let target = page.query(".fade-in").unwrap();

    engine.on_intersections(&mut page, &[IntersectionEntry { target, ratio: 0.09 }]);
    assert!(!page.has_class(target, "visible"));

    engine.on_intersections(&mut page, &[IntersectionEntry { target, ratio: 0.1 }]);
    assert!(page.has_class(target, "visible"));

    // an exit observation does not undo the reveal
    engine.on_intersections(&mut page, &[IntersectionEntry { target, ratio: 0.0 }]);
    assert!(page.has_class(target, "visible"));
}

#[test]
fn test_untracked_node_is_ignored() {
    let mut page = page_with_fade_in(2000.0, 200.0);
    page.insert(FixturePage::BODY, ElementSpec::new("div").at(100.0, 100.0));
    let mut engine = mount(&mut page);
    let plain = page.query_all("div")[1];

    engine.on_intersections(&mut page, &[IntersectionEntry { target: plain, ratio: 1.0 }]);
    assert!(!page.has_class(plain, "visible"));
    assert_eq!(engine.revealed_count(), 0);
}

#[test]
fn test_element_visible_at_load_is_revealed_by_mount() {
    let mut page = page_with_fade_in(100.0, 200.0);
    let engine = mount(&mut page);

    let target = page.query(".fade-in").unwrap();
    assert!(page.has_class(target, "visible"));
    assert_eq!(engine.revealed_count(), 1);
}

#[test]
fn test_each_target_revealed_exactly_once_across_sweep() {
    let mut page = FixturePage::sample_landing();
    let mut engine = mount(&mut page);

    let mut offset = 0.0;
    while offset <= 1600.0 {
        page.scroll_to(offset);
        engine.on_scroll(&mut page);
        offset += 100.0;
    }

    assert_eq!(engine.revealed_count(), 3);
    for target in page.query_all(".fade-in") {
        assert!(page.has_class(target, "visible"));
    }
}
