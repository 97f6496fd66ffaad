use super::{Coordinates, GeometryTrait};
use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// A single marker position.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}

	#[must_use]
	pub fn lat(&self) -> f64 {
		self.0.lat()
	}

	#[must_use]
	pub fn lng(&self) -> f64 {
		self.0.lng()
	}

	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	/// Points have no area.
	fn geodesic_area(&self) -> f64 {
		0.0
	}

	/// Points have no length.
	fn geodesic_length(&self) -> f64 {
		0.0
	}

	fn verify(&self) -> Result<()> {
		ensure!(self.0.is_finite(), "Point must have finite coordinates");
		Ok(())
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		self.0.to_geojson(precision)
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		Some([self.lng(), self.lat(), self.lng(), self.lat()])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}
