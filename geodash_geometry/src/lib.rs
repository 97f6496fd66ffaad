//! # GeoDash geometry
//!
//! Measurement of shapes drawn on a web map: great-circle distances, path lengths,
//! ring perimeters and geodesic areas.
//!
//! Shapes arrive as an explicit [`ShapeKind`] plus an ordered list of [`Coordinates`].
//! [`compute_properties`] turns them into a [`ShapeProperties`] record, and a
//! [`DrawingLayer`] keeps the drawn shapes together with their properties.
//!
//! ```
//! use geodash_geometry::{Coordinates, ShapeKind, compute_properties};
//!
//! let path = [Coordinates::new(48.8566, 2.3522), Coordinates::new(48.8606, 2.3376)];
//! let properties = compute_properties(ShapeKind::Polyline, &path).unwrap();
//! assert!(properties.length.unwrap() > 1000.0);
//! ```

mod geometry;
pub mod layer;
pub mod measure;
mod properties;
mod shape;

pub use geometry::*;
pub use layer::{DrawingLayer, DrawnShape};
pub use properties::*;
pub use shape::*;
