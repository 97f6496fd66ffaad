use anyhow::{Result, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// A geographic position in degrees, stored as latitude/longitude.
///
/// The order follows the map widget convention (`[lat, lng]`), GeoJSON output
/// swaps it to `[lng, lat]`.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
	lat: f64,
	lng: f64,
}

impl Coordinates {
	#[must_use]
	pub const fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}

	#[must_use]
	pub fn lat(&self) -> f64 {
		self.lat
	}

	#[must_use]
	pub fn lng(&self) -> f64 {
		self.lng
	}

	#[must_use]
	pub fn is_finite(&self) -> bool {
		self.lat.is_finite() && self.lng.is_finite()
	}

	/// Checks that latitude lies in [-90, 90] and longitude in [-180, 180].
	pub fn check(&self) -> Result<()> {
		ensure!(self.is_finite(), "coordinates {self:?} must be finite");
		ensure!((-90.0..=90.0).contains(&self.lat), "latitude {} must be between -90 and 90", self.lat);
		ensure!(
			(-180.0..=180.0).contains(&self.lng),
			"longitude {} must be between -180 and 180",
			self.lng
		);
		Ok(())
	}

	/// Converts into a `geo::Point` (x = longitude, y = latitude).
	#[must_use]
	pub fn to_point(&self) -> geo::Point<f64> {
		geo::Point::new(self.lng, self.lat)
	}

	/// Returns `[lng, lat]`, optionally rounded to `precision` decimals.
	#[must_use]
	pub fn to_geojson(&self, precision: Option<u8>) -> Value {
		if let Some(prec) = precision {
			let factor = 10f64.powi(i32::from(prec));
			let lng = (self.lng * factor).round() / factor;
			let lat = (self.lat * factor).round() / factor;
			Value::from(vec![lng, lat])
		} else {
			Value::from(vec![self.lng, self.lat])
		}
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates::new(value[0].into(), value[1].into())
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates::new(value[0], value[1])
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<&(f64, f64)> for Coordinates {
	fn from(value: &(f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<&Coordinates> for Coordinates {
	fn from(value: &Coordinates) -> Self {
		*value
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		[value.lat, value.lng]
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates::new(value.y, value.x)
	}
}

impl From<Coordinates> for geo::Coord {
	fn from(value: Coordinates) -> Self {
		geo::Coord { x: value.lng, y: value.lat }
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		[self.lat, self.lng].fmt(f)
	}
}
