//! YAML description of a dashboard.
//!
//! - [`Config`](crate::config::Config): top-level loader, builds a [`SimpleDashboard`](crate::SimpleDashboard)
//! - [`SectionConfig`](crate::config::SectionConfig): one chart or map section
//! - [`ShapeConfig`](crate::config::ShapeConfig): a shape drawn on a map when the page opens

mod main;
mod section;

pub use main::Config;
pub use section::{ChartSectionConfig, MapSectionConfig, MarkerConfig, SectionConfig, ShapeConfig};
