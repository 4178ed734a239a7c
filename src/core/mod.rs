pub mod engine;
pub mod footer;
pub mod nav_toggle;
pub mod reveal;
pub mod scrollspy;

pub use crate::domain::model::{IntersectionEntry, NodeId};
pub use crate::domain::ports::{Clock, ConfigProvider, Dom, Viewport};
pub use crate::utils::error::Result;
