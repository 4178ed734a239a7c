use navkit::utils::validation::Validate;
use navkit::{Clock, Dom, FixturePage, PageEngine, PageSpec, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

struct FixedClock(i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

const PAGE_TOML: &str = r##"
[viewport]
height = 800

[[element]]
tag = "nav"
classes = ["topbar"]
top = 0
height = 60

[[element.children]]
tag = "button"
classes = ["menu-btn"]

[[element.children]]
tag = "ul"
classes = ["menu"]

[[element.children.children]]
tag = "a"
classes = ["menu-link"]

[element.children.children.attrs]
href = "#intro"

[[element.children.children]]
tag = "a"
classes = ["menu-link"]

[element.children.children.attrs]
href = "#outro"

[[element]]
tag = "section"
id = "intro"
top = 0
height = 900

[[element]]
tag = "section"
id = "outro"
top = 900
height = 900

[[element]]
tag = "div"
classes = ["lazy"]
top = 1200
height = 300

[[element]]
tag = "footer"
top = 1700
height = 100

[[element.children]]
tag = "span"
id = "year"
"##;

const CONFIG_TOML: &str = r##"
[page]
name = "custom-landing"

[selectors]
nav_toggle = ".menu-btn"
nav_menu = ".menu"
nav_link = ".menu-link"
navbar = ".topbar"
fade_in = ".lazy"
footer_year = "#year"

[markers]
link_active = "current"
visible = "shown"

[reveal]
threshold = 0.5
"##;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_custom_page_and_config_from_files() {
    let page_file = write_temp(PAGE_TOML);
    let config_file = write_temp(CONFIG_TOML);

    let config = TomlConfig::from_file(config_file.path()).unwrap();
    assert_eq!(config.page.name, "custom-landing");
    config.validate().unwrap();

    let spec = PageSpec::from_file(page_file.path()).unwrap();
    let mut page = FixturePage::from_spec(&spec).unwrap();

    let mut engine = PageEngine::mount(&mut page, &FixedClock(2030), &config);

    // footer stamped through the overridden selector
    let year = page.query("#year").unwrap();
    assert_eq!(page.text_of(year), "2030");

    // initial pass highlights the first section with the custom marker
    let intro_link = page.query(".menu-link[href=\"#intro\"]").unwrap();
    assert!(page.has_class(intro_link, "current"));
    assert!(!page.has_class(intro_link, "active"));

    // custom toggle selectors drive the menu
    engine.on_toggle_click(&mut page);
    let menu = page.query(".menu").unwrap();
    assert!(page.has_class(menu, "active"));

    // reveal honors the raised threshold: at offset 500 a third of the
    // lazy block is visible, at 600 two thirds
    page.scroll_to(500.0);
    engine.on_scroll(&mut page);
    let lazy = page.query(".lazy").unwrap();
    assert!(!page.has_class(lazy, "shown"));

    page.scroll_to(600.0);
    engine.on_scroll(&mut page);
    assert!(page.has_class(lazy, "shown"));
}

#[test]
fn test_invalid_config_file_fails_validation() {
    let config_file = write_temp("[reveal]\nthreshold = 2.0\n");
    let config = TomlConfig::from_file(config_file.path()).unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_missing_files_surface_io_errors() {
    assert!(TomlConfig::from_file("/nonexistent/navkit.toml").is_err());
    assert!(PageSpec::from_file("/nonexistent/page.toml").is_err());
}

#[test]
fn test_malformed_page_description_is_rejected() {
    let page_file = write_temp("[[element]\ntag = \"nav\"\n");
    assert!(PageSpec::from_file(page_file.path()).is_err());
}
