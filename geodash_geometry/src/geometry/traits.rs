use super::Coordinates;
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// Shared interface of the drawn geometry primitives.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Enclosed geodesic area in square meters.
	/// For non-area geometries (points, lines) this returns 0.
	fn geodesic_area(&self) -> f64;

	/// Great-circle length in meters: the path length of a line,
	/// the perimeter of a ring and 0 for a point.
	fn geodesic_length(&self) -> f64;

	/// Verifies that the geometry has enough finite vertices to be measured.
	fn verify(&self) -> Result<()>;

	/// Converts the geometry into GeoJSON coordinates, optionally rounded.
	fn to_coord_json(&self, precision: Option<u8>) -> Value;

	/// Returns `Some([lng_min, lat_min, lng_max, lat_max])`, or `None` if the geometry is empty.
	fn compute_bounds(&self) -> Option<[f64; 4]>;
}

/// Geometries built from an ordered list of coordinates.
pub trait CompositeGeometryTrait: Debug + Clone {
	fn new() -> Self;

	fn as_vec(&self) -> &Vec<Coordinates>;

	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates>;

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Coordinates) {
		self.as_mut_vec().push(item);
	}

	fn first(&self) -> Option<&Coordinates> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Coordinates> {
		self.as_vec().last()
	}
}

pub(crate) fn bounds_of(coordinates: &[Coordinates]) -> Option<[f64; 4]> {
	if coordinates.is_empty() {
		return None;
	}

	let mut lng_min = f64::MAX;
	let mut lat_min = f64::MAX;
	let mut lng_max = f64::MIN;
	let mut lat_max = f64::MIN;

	for c in coordinates {
		lng_min = lng_min.min(c.lng());
		lat_min = lat_min.min(c.lat());
		lng_max = lng_max.max(c.lng());
		lat_max = lat_max.max(c.lat());
	}

	Some([lng_min, lat_min, lng_max, lat_max])
}
