//! The geometry calculator: derives area, perimeter, length or position of a drawn shape.

use crate::{Coordinates, GeometryTrait, Shape, ShapeKind};
use anyhow::Result;
use serde_json::{Map, Value};

/// Measured properties of a drawn shape.
///
/// Polygons and rectangles carry `area` (m²) and `perimeter` (m), polylines carry
/// `length` (m) and points carry `latitude`/`longitude` (degrees).
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeProperties {
	pub kind: ShapeKind,
	pub area: Option<f64>,
	pub perimeter: Option<f64>,
	pub length: Option<f64>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
}

impl ShapeProperties {
	fn empty(kind: ShapeKind) -> Self {
		Self {
			kind,
			area: None,
			perimeter: None,
			length: None,
			latitude: None,
			longitude: None,
		}
	}

	/// Area in square kilometers, for display.
	#[must_use]
	pub fn area_km2(&self) -> Option<f64> {
		self.area.map(|a| a / 1_000_000.0)
	}

	/// Flattens the properties into a JSON object, skipping absent values.
	#[must_use]
	pub fn to_json(&self) -> Value {
		let mut map = Map::new();
		map.insert("type".to_string(), Value::from(self.kind.as_str()));
		let fields = [
			("area", self.area),
			("perimeter", self.perimeter),
			("length", self.length),
			("latitude", self.latitude),
			("longitude", self.longitude),
		];
		for (key, value) in fields {
			if let Some(v) = value {
				map.insert(key.to_string(), Value::from(v));
			}
		}
		Value::Object(map)
	}
}

/// Computes the properties of a shape given as kind plus coordinates.
///
/// Degenerate input (fewer coordinates than the kind needs, non-finite values)
/// is rejected with an error instead of yielding zero-valued properties.
pub fn compute_properties(kind: ShapeKind, coordinates: &[Coordinates]) -> Result<ShapeProperties> {
	let shape = Shape::new(kind, coordinates.to_vec())?;
	Ok(compute_shape_properties(&shape))
}

pub(crate) fn compute_shape_properties(shape: &Shape) -> ShapeProperties {
	let mut properties = ShapeProperties::empty(shape.kind());
	match shape {
		Shape::Point(point) => {
			properties.latitude = Some(point.lat());
			properties.longitude = Some(point.lng());
		}
		Shape::Polygon(ring) | Shape::Rectangle(ring) => {
			properties.area = Some(ring.geodesic_area());
			properties.perimeter = Some(ring.geodesic_length());
		}
		Shape::Polyline(line) => {
			properties.length = Some(line.geodesic_length());
		}
	}
	log::trace!("computed {properties:?}");
	properties
}
