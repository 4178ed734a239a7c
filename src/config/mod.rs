pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "navkit")]
#[command(about = "Headless walkthrough of landing-page UI behaviors")]
pub struct CliConfig {
    /// TOML page description; the built-in sample landing page when omitted
    #[arg(long)]
    pub page: Option<String>,

    /// TOML behavior config; defaults match the original page contract
    #[arg(long)]
    pub config: Option<String>,

    /// Explicit scroll offsets to visit, in order
    #[arg(long, value_delimiter = ',')]
    pub scroll: Vec<f64>,

    /// Sweep step used when no explicit offsets are given
    #[arg(long, default_value_t = 200.0)]
    pub step: f64,

    /// Number of menu toggle clicks to simulate before scrolling
    #[arg(long, default_value_t = 0)]
    pub toggle_clicks: u32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit the run report as JSON")]
    pub json: bool,

    #[arg(long, help = "Write logs in JSON format")]
    pub log_json: bool,
}
