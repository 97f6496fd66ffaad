use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, traits::bounds_of};
use crate::measure;
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// The outline of a drawn polygon or rectangle.
///
/// Rings are implicitly closed: the segment from the last vertex back to the first
/// belongs to the ring without being stored. A repeated closing vertex is tolerated
/// and removed by [`RingGeometry::into_open`].
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Returns `true` if the last vertex repeats the first one.
	#[must_use]
	pub fn is_explicitly_closed(&self) -> bool {
		self.0.len() > 1 && self.0.first() == self.0.last()
	}

	/// Drops a repeated closing vertex, if any.
	#[must_use]
	pub fn into_open(mut self) -> Self {
		if self.is_explicitly_closed() {
			self.0.pop();
		}
		self
	}

	/// Geodesic area with the sign given by the winding order.
	#[must_use]
	pub fn signed_area(&self) -> f64 {
		measure::ring_signed_area(self.open_vertices())
	}

	/// Number of pairwise different vertices, ignoring a repeated closing vertex.
	#[must_use]
	pub fn distinct_vertex_count(&self) -> usize {
		let vertices = self.open_vertices();
		vertices
			.iter()
			.enumerate()
			.filter(|&(i, c)| !vertices[..i].contains(c))
			.count()
	}

	fn open_vertices(&self) -> &[Coordinates] {
		if self.is_explicitly_closed() {
			&self.0[..self.0.len() - 1]
		} else {
			&self.0
		}
	}
}

impl GeometryTrait for RingGeometry {
	/// Enclosed geodesic area in square meters, regardless of winding order.
	fn geodesic_area(&self) -> f64 {
		measure::ring_area(self.open_vertices())
	}

	/// Perimeter, including the closing segment.
	fn geodesic_length(&self) -> f64 {
		measure::ring_perimeter(self.open_vertices())
	}

	/// Verifies that the ring has at least three distinct, finite vertices.
	fn verify(&self) -> Result<()> {
		let vertices = self.open_vertices();
		ensure!(
			vertices.len() >= 3,
			"Ring must have at least 3 vertices, got {}",
			vertices.len()
		);
		let distinct = self.distinct_vertex_count();
		ensure!(distinct >= 3, "Ring must have at least 3 distinct vertices, got {distinct}");
		ensure!(
			vertices.iter().all(Coordinates::is_finite),
			"Ring must have finite coordinates"
		);
		Ok(())
	}

	/// GeoJSON rings are explicitly closed, so the first vertex is repeated at the end.
	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		let vertices = self.open_vertices();
		let mut ring = vertices.iter().map(|c| c.to_geojson(precision)).collect::<Vec<_>>();
		if let Some(first) = vertices.first() {
			ring.push(first.to_geojson(precision));
		}
		Value::from(ring)
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		bounds_of(&self.0)
	}
}

impl CompositeGeometryTrait for RingGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_coordinate_list!(RingGeometry);
