//! # GeoDash
//!
//! GeoDash assembles dashboards of chart and map sections and measures the shapes users draw on
//! the maps.
//!
//! ## Features
//! - **Charts**: validated chart types with `data` and `options` forwarded to the charting library.
//! - **Maps**: base layers, markers and a drawing tool whose shapes get area, perimeter or length.
//! - **Config**: whole dashboards described in YAML and rendered to a standalone HTML page.
//!
//! ## Usage Example
//!
//! ```rust
//! use geodash::{HtmlDocument, MapOptions, SimpleDashboard, geometry::{Coordinates, ShapeKind}, map::DrawEvent};
//! use serde_json::json;
//!
//! let mut dashboard = SimpleDashboard::new(HtmlDocument::with_container("dashboard"), "dashboard").unwrap();
//! dashboard.add_bar_chart("Sales", json!({ "labels": ["Jan", "Feb"] })).unwrap();
//!
//! let map = dashboard.add_map("Stores", Coordinates::new(48.8566, 2.3522), MapOptions::default()).unwrap();
//! let drawn = map
//! 	.handle_shape_created(DrawEvent::new(
//! 		ShapeKind::Polyline,
//! 		vec![Coordinates::new(48.8566, 2.3522), Coordinates::new(48.8606, 2.3376)],
//! 	))
//! 	.unwrap();
//! assert!(drawn.properties.length.unwrap() > 1000.0);
//!
//! let html = dashboard.render_html("Overview").unwrap();
//! assert!(html.contains("geodash-state"));
//! ```

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod dom;
pub mod map;

pub use chart::{ChartConfig, ChartSpec, ChartType};
pub use dashboard::SimpleDashboard;
pub use dom::{Document, HtmlDocument, NodeId};
pub use geodash_geometry as geometry;
pub use map::{MapOptions, MapWidget};
