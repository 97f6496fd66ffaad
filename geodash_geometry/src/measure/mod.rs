//! Great-circle and geodesic measurements over coordinate sequences.
//!
//! Distances use the haversine formula on the mean earth radius, areas use the
//! spherical-excess approximation of Chamberlain & Duquette on the WGS84 equatorial
//! radius. All results are in meters or square meters.

use crate::Coordinates;
use geo::{ChamberlainDuquetteArea, Distance, Haversine, LineString, Polygon};

/// Great-circle distance between two coordinates in meters.
#[must_use]
pub fn distance(a: &Coordinates, b: &Coordinates) -> f64 {
	Haversine.distance(a.to_point(), b.to_point())
}

/// Sum of the distances between consecutive coordinates of an open path.
#[must_use]
pub fn path_length(coordinates: &[Coordinates]) -> f64 {
	coordinates.windows(2).map(|pair| distance(&pair[0], &pair[1])).sum()
}

/// Sum of the distances between consecutive vertices of a ring, including the
/// closing segment from the last vertex back to the first.
#[must_use]
pub fn ring_perimeter(coordinates: &[Coordinates]) -> f64 {
	match (coordinates.first(), coordinates.last()) {
		(Some(first), Some(last)) if coordinates.len() > 1 => path_length(coordinates) + distance(last, first),
		_ => 0.0,
	}
}

/// Geodesic area enclosed by a ring, with the sign given by its winding order.
#[must_use]
pub fn ring_signed_area(coordinates: &[Coordinates]) -> f64 {
	if coordinates.len() < 3 {
		return 0.0;
	}
	to_polygon(coordinates).chamberlain_duquette_signed_area()
}

/// Geodesic area enclosed by a ring in square meters, independent of winding order.
#[must_use]
pub fn ring_area(coordinates: &[Coordinates]) -> f64 {
	ring_signed_area(coordinates).abs()
}

fn to_polygon(coordinates: &[Coordinates]) -> Polygon<f64> {
	let exterior: LineString<f64> = coordinates.iter().map(|c| geo::Coord::from(*c)).collect();
	Polygon::new(exterior, vec![])
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	const PARIS: Coordinates = Coordinates::new(48.8566, 2.3522);

	/// Meters per degree of latitude on the haversine sphere.
	fn meters_per_degree() -> f64 {
		distance(&Coordinates::new(0.0, 0.0), &Coordinates::new(1.0, 0.0))
	}

	fn square(center: Coordinates, side: f64) -> Vec<Coordinates> {
		let dlat = side / 2.0 / meters_per_degree();
		let dlng = dlat / center.lat().to_radians().cos();
		vec![
			Coordinates::new(center.lat() - dlat, center.lng() - dlng),
			Coordinates::new(center.lat() - dlat, center.lng() + dlng),
			Coordinates::new(center.lat() + dlat, center.lng() + dlng),
			Coordinates::new(center.lat() + dlat, center.lng() - dlng),
		]
	}

	#[test]
	fn distance_of_one_degree_latitude() {
		assert_relative_eq!(meters_per_degree(), 111_195.0, max_relative = 1e-3);
	}

	#[test]
	fn distance_is_symmetric_and_zero_on_itself() {
		let other = Coordinates::new(51.5074, -0.1278);
		assert_relative_eq!(distance(&PARIS, &other), distance(&other, &PARIS), max_relative = 1e-12);
		assert_eq!(distance(&PARIS, &PARIS), 0.0);
	}

	#[test]
	fn paris_to_london() {
		let london = Coordinates::new(51.5074, -0.1278);
		assert_relative_eq!(distance(&PARIS, &london), 343_500.0, max_relative = 0.01);
	}

	#[test]
	fn path_length_sums_segments() {
		let a = Coordinates::new(0.0, 0.0);
		let b = Coordinates::new(0.0, 1.0);
		let c = Coordinates::new(1.0, 1.0);
		assert_relative_eq!(path_length(&[a, b, c]), distance(&a, &b) + distance(&b, &c), max_relative = 1e-12);
	}

	#[test]
	fn path_length_of_short_paths_is_zero() {
		assert_eq!(path_length(&[]), 0.0);
		assert_eq!(path_length(&[PARIS]), 0.0);
	}

	#[test]
	fn square_perimeter_and_area() {
		let ring = square(PARIS, 1000.0);
		assert_relative_eq!(ring_perimeter(&ring), 4000.0, max_relative = 0.01);
		assert_relative_eq!(ring_area(&ring), 1_000_000.0, max_relative = 0.01);
	}

	#[test]
	fn perimeter_closes_the_ring() {
		let ring = square(PARIS, 1000.0);
		let open = path_length(&ring);
		assert_relative_eq!(ring_perimeter(&ring) - open, distance(&ring[3], &ring[0]), max_relative = 1e-9);
	}

	#[test]
	fn winding_changes_sign_but_not_magnitude() {
		let ring = square(PARIS, 1000.0);
		let mut reversed = ring.clone();
		reversed.reverse();
		assert_relative_eq!(ring_signed_area(&ring), -ring_signed_area(&reversed), max_relative = 1e-9);
		assert_relative_eq!(ring_area(&ring), ring_area(&reversed), max_relative = 1e-9);
	}

	#[test]
	fn collinear_ring_has_no_area() {
		let ring = [Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 1.0), Coordinates::new(0.0, 2.0)];
		assert!(ring_area(&ring) < 1e-3);
	}

	#[test]
	fn degenerate_rings_measure_zero() {
		assert_eq!(ring_area(&[PARIS, PARIS]), 0.0);
		assert_eq!(ring_perimeter(&[PARIS]), 0.0);
		assert_eq!(ring_perimeter(&[]), 0.0);
	}
}
