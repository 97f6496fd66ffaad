//! Drawn shapes as an explicit tagged variant.
//!
//! The drawing tool decides the [`ShapeKind`] once, when the shape is created.
//! [`Shape::new`] validates the coordinate list for that kind and rejects degenerate input.

use crate::{
	Coordinates, GeometryTrait, LineStringGeometry, PointGeometry, RingGeometry, ShapeProperties,
	properties::compute_shape_properties,
};
use anyhow::{Context, Result, bail, ensure};
use serde_json::{Value, json};
use std::fmt::Display;

/// Discriminant of the shapes the drawing tool can create.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
	Point,
	Polygon,
	Rectangle,
	Polyline,
}

impl ShapeKind {
	pub const ALL: [ShapeKind; 4] = [ShapeKind::Point, ShapeKind::Polygon, ShapeKind::Rectangle, ShapeKind::Polyline];

	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			ShapeKind::Point => "point",
			ShapeKind::Polygon => "polygon",
			ShapeKind::Rectangle => "rectangle",
			ShapeKind::Polyline => "polyline",
		}
	}

	/// Parses a kind name. The drawing tool's `marker` is accepted for points,
	/// `line` and `linestring` for polylines.
	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value.to_lowercase().trim() {
			"point" | "marker" => ShapeKind::Point,
			"polygon" => ShapeKind::Polygon,
			"rectangle" => ShapeKind::Rectangle,
			"polyline" | "line" | "linestring" => ShapeKind::Polyline,
			_ => bail!("unknown shape kind \"{value}\", expected point, polygon, rectangle or polyline"),
		})
	}
}

impl Display for ShapeKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A validated shape with its coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
	Point(PointGeometry),
	Polygon(RingGeometry),
	Rectangle(RingGeometry),
	Polyline(LineStringGeometry),
}

impl Shape {
	/// Builds a shape of the given kind and verifies it.
	///
	/// A point needs exactly one coordinate, a polygon or rectangle at least three
	/// vertices (a repeated closing vertex is dropped) and a polyline at least two.
	pub fn new(kind: ShapeKind, coordinates: Vec<Coordinates>) -> Result<Self> {
		let shape = match kind {
			ShapeKind::Point => {
				ensure!(
					coordinates.len() == 1,
					"point must have exactly one coordinate, got {}",
					coordinates.len()
				);
				Shape::Point(PointGeometry::new(coordinates[0]))
			}
			ShapeKind::Polygon => Shape::Polygon(RingGeometry(coordinates).into_open()),
			ShapeKind::Rectangle => Shape::Rectangle(RingGeometry(coordinates).into_open()),
			ShapeKind::Polyline => Shape::Polyline(LineStringGeometry(coordinates)),
		};
		shape.verify().with_context(|| format!("invalid {kind}"))?;
		Ok(shape)
	}

	#[must_use]
	pub fn kind(&self) -> ShapeKind {
		match self {
			Shape::Point(_) => ShapeKind::Point,
			Shape::Polygon(_) => ShapeKind::Polygon,
			Shape::Rectangle(_) => ShapeKind::Rectangle,
			Shape::Polyline(_) => ShapeKind::Polyline,
		}
	}

	#[must_use]
	pub fn coordinates(&self) -> &[Coordinates] {
		match self {
			Shape::Point(g) => std::slice::from_ref(&g.0),
			Shape::Polygon(g) | Shape::Rectangle(g) => &g.0,
			Shape::Polyline(g) => &g.0,
		}
	}

	/// Runs the geometry calculator on this shape.
	#[must_use]
	pub fn properties(&self) -> ShapeProperties {
		compute_shape_properties(self)
	}

	pub fn verify(&self) -> Result<()> {
		match self {
			Shape::Point(g) => g.verify(),
			Shape::Polygon(g) | Shape::Rectangle(g) => g.verify(),
			Shape::Polyline(g) => g.verify(),
		}
	}

	#[must_use]
	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		match self {
			Shape::Point(g) => g.compute_bounds(),
			Shape::Polygon(g) | Shape::Rectangle(g) => g.compute_bounds(),
			Shape::Polyline(g) => g.compute_bounds(),
		}
	}

	/// GeoJSON geometry object. Rectangles are exported as polygons.
	#[must_use]
	pub fn to_geojson(&self, precision: Option<u8>) -> Value {
		let (type_name, coordinates) = match self {
			Shape::Point(g) => ("Point", g.to_coord_json(precision)),
			Shape::Polygon(g) | Shape::Rectangle(g) => ("Polygon", Value::from(vec![g.to_coord_json(precision)])),
			Shape::Polyline(g) => ("LineString", g.to_coord_json(precision)),
		};
		json!({ "type": type_name, "coordinates": coordinates })
	}
}
