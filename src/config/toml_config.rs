use crate::domain::model::{Markers, Selectors};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PageError, Result};
use crate::utils::validation::{
    validate_marker, validate_non_negative, validate_selector, validate_unit_interval, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Behavior configuration loaded from a TOML file. Every table and field
/// is optional and falls back to the defaults of the original page
/// contract, so an empty file is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub page: PageMeta,
    pub selectors: Selectors,
    pub markers: Markers,
    pub reveal: RevealConfig,
    pub scrollspy: ScrollSpyConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of an element that must enter the viewport before the
    /// visible marker is applied.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: 0.1 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSpyConfig {
    /// Extra pixels subtracted from each section top so the highlight
    /// switches before the section reaches the top of the viewport.
    pub lookahead_px: f64,
    /// Distance from the document bottom within which the last section
    /// is forced active.
    pub bottom_slack_px: f64,
    /// Navbar height assumed when no navbar element is found.
    pub navbar_fallback_px: f64,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            lookahead_px: 50.0,
            bottom_slack_px: 50.0,
            navbar_fallback_px: 70.0,
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PageError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PageError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unresolved
    /// variables are left verbatim.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_selector("selectors.nav_toggle", &self.selectors.nav_toggle)?;
        validate_selector("selectors.nav_menu", &self.selectors.nav_menu)?;
        validate_selector("selectors.nav_link", &self.selectors.nav_link)?;
        validate_selector("selectors.menu_icon", &self.selectors.menu_icon)?;
        validate_selector("selectors.close_icon", &self.selectors.close_icon)?;
        validate_selector("selectors.navbar", &self.selectors.navbar)?;
        validate_selector("selectors.section", &self.selectors.section)?;
        validate_selector("selectors.fade_in", &self.selectors.fade_in)?;
        validate_selector("selectors.footer_year", &self.selectors.footer_year)?;

        validate_marker("markers.menu_open", &self.markers.menu_open)?;
        validate_marker("markers.body_overlay", &self.markers.body_overlay)?;
        validate_marker("markers.link_active", &self.markers.link_active)?;
        validate_marker("markers.visible", &self.markers.visible)?;

        validate_unit_interval("reveal.threshold", self.reveal.threshold)?;

        validate_non_negative("scrollspy.lookahead_px", self.scrollspy.lookahead_px)?;
        validate_non_negative("scrollspy.bottom_slack_px", self.scrollspy.bottom_slack_px)?;
        validate_non_negative("scrollspy.navbar_fallback_px", self.scrollspy.navbar_fallback_px)?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    fn markers(&self) -> &Markers {
        &self.markers
    }

    fn reveal_threshold(&self) -> f64 {
        self.reveal.threshold
    }

    fn scroll_lookahead(&self) -> f64 {
        self.scrollspy.lookahead_px
    }

    fn bottom_slack(&self) -> f64 {
        self.scrollspy.bottom_slack_px
    }

    fn navbar_fallback_height(&self) -> f64 {
        self.scrollspy.navbar_fallback_px
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_contract_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.selectors.nav_toggle, ".mobile-nav-toggle");
        assert_eq!(config.selectors.section, "section[id]");
        assert_eq!(config.markers.link_active, "active");
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.scrollspy.lookahead_px, 50.0);
        assert_eq!(config.scrollspy.navbar_fallback_px, 70.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_override() {
        let toml_content = r##"
[page]
name = "acme-landing"

[selectors]
footer_year = "#year"

[reveal]
threshold = 0.25
"##;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.page.name, "acme-landing");
        assert_eq!(config.selectors.footer_year, "#year");
        // untouched fields keep their defaults
        assert_eq!(config.selectors.nav_menu, ".nav-menu");
        assert_eq!(config.reveal.threshold, 0.25);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NAVKIT_TEST_MARKER", "shown");

        let toml_content = r#"
[markers]
visible = "${NAVKIT_TEST_MARKER}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.markers.visible, "shown");

        std::env::remove_var("NAVKIT_TEST_MARKER");
    }

    #[test]
    fn test_unresolved_env_var_left_verbatim() {
        let toml_content = r#"
[page]
name = "${NAVKIT_TEST_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.page.name, "${NAVKIT_TEST_UNSET_VAR}");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_threshold = TomlConfig::from_toml_str("[reveal]\nthreshold = 1.5\n").unwrap();
        assert!(bad_threshold.validate().is_err());

        let bad_selector =
            TomlConfig::from_toml_str("[selectors]\nnav_menu = \"nav .menu\"\n").unwrap();
        assert!(bad_selector.validate().is_err());

        let bad_marker = TomlConfig::from_toml_str("[markers]\nvisible = \"\"\n").unwrap();
        assert!(bad_marker.validate().is_err());

        let bad_px = TomlConfig::from_toml_str("[scrollspy]\nlookahead_px = -5.0\n").unwrap();
        assert!(bad_px.validate().is_err());
    }
}
