use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, traits::bounds_of};
use crate::measure;
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// An open path of connected coordinates, as drawn with the polyline tool.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	fn geodesic_area(&self) -> f64 {
		0.0
	}

	/// Sum of the great-circle distances between consecutive points, without wrapping around.
	fn geodesic_length(&self) -> f64 {
		measure::path_length(&self.0)
	}

	/// Ensures that the line has at least two finite points.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 2, "LineString must have at least two points, got {}", self.0.len());
		ensure!(
			self.0.iter().all(Coordinates::is_finite),
			"LineString must have finite coordinates"
		);
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::from(self.0.iter().map(|c| c.to_geojson(precision)).collect::<Vec<_>>())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		bounds_of(&self.0)
	}
}

impl CompositeGeometryTrait for LineStringGeometry {
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

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_coordinate_list!(LineStringGeometry);
