pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::clock::SystemClock;
pub use adapters::fixture::{ElementSpec, FixturePage, PageSpec};
pub use config::TomlConfig;
pub use core::engine::PageEngine;
pub use domain::model::{IntersectionEntry, Markers, NodeId, Selectors};
pub use domain::ports::{Clock, ConfigProvider, Dom, Viewport};
pub use utils::error::{PageError, Result};
