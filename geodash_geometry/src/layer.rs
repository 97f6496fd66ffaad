//! The drawing layer: the shapes a user has drawn on one map, with their measured properties.
//!
//! The layer is owned by its map. Shapes keep their properties for as long as they stay
//! in the layer; removing a shape discards both.

use crate::{Shape, ShapeKind, ShapeProperties};
use serde_json::{Value, json};

/// A shape that lives in a [`DrawingLayer`].
#[derive(Clone, Debug, PartialEq)]
pub struct DrawnShape {
	pub id: u64,
	pub shape: Shape,
	pub properties: ShapeProperties,
	pub tooltip: Option<String>,
}

impl DrawnShape {
	#[must_use]
	pub fn kind(&self) -> ShapeKind {
		self.shape.kind()
	}

	/// GeoJSON feature with the properties (and tooltip, if any) in `properties`.
	#[must_use]
	pub fn to_geojson(&self, precision: Option<u8>) -> Value {
		let mut properties = self.properties.to_json();
		if let (Some(tooltip), Value::Object(map)) = (&self.tooltip, &mut properties) {
			map.insert("tooltip".to_string(), Value::from(tooltip.as_str()));
		}
		json!({
			"type": "Feature",
			"id": self.id,
			"geometry": self.shape.to_geojson(precision),
			"properties": properties,
		})
	}
}

/// Insertion-ordered collection of drawn shapes.
#[derive(Clone, Debug, Default)]
pub struct DrawingLayer {
	shapes: Vec<DrawnShape>,
	next_id: u64,
}

impl DrawingLayer {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Measures the shape and adds it to the layer.
	pub fn add(&mut self, shape: Shape) -> &DrawnShape {
		self.insert(shape, None)
	}

	/// Measures the shape, derives its tooltip from the properties and adds it to the layer.
	pub fn add_with_tooltip<F>(&mut self, shape: Shape, tooltip: F) -> &DrawnShape
	where
		F: FnOnce(&ShapeProperties) -> String,
	{
		let properties = shape.properties();
		let tooltip = tooltip(&properties);
		self.push(shape, properties, Some(tooltip))
	}

	fn insert(&mut self, shape: Shape, tooltip: Option<String>) -> &DrawnShape {
		let properties = shape.properties();
		self.push(shape, properties, tooltip)
	}

	fn push(&mut self, shape: Shape, properties: ShapeProperties, tooltip: Option<String>) -> &DrawnShape {
		let id = self.next_id;
		self.next_id += 1;
		log::debug!("add {} #{id} to drawing layer", shape.kind());
		self.shapes.push(DrawnShape {
			id,
			shape,
			properties,
			tooltip,
		});
		&self.shapes[self.shapes.len() - 1]
	}

	/// Removes a shape together with its properties.
	pub fn remove(&mut self, id: u64) -> Option<DrawnShape> {
		let index = self.shapes.iter().position(|s| s.id == id)?;
		log::debug!("remove #{id} from drawing layer");
		Some(self.shapes.remove(index))
	}

	#[must_use]
	pub fn get(&self, id: u64) -> Option<&DrawnShape> {
		self.shapes.iter().find(|s| s.id == id)
	}

	pub fn iter(&self) -> impl Iterator<Item = &DrawnShape> {
		self.shapes.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.shapes.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.shapes.is_empty()
	}

	pub fn clear(&mut self) {
		self.shapes.clear();
	}

	/// Total area of all polygons and rectangles in square meters.
	#[must_use]
	pub fn total_area(&self) -> f64 {
		self.shapes.iter().filter_map(|s| s.properties.area).sum()
	}

	/// Total length of all polylines in meters.
	#[must_use]
	pub fn total_length(&self) -> f64 {
		self.shapes.iter().filter_map(|s| s.properties.length).sum()
	}

	/// Bounding box of all drawn shapes as `[lng_min, lat_min, lng_max, lat_max]`,
	/// or `None` for an empty layer.
	#[must_use]
	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		self.shapes
			.iter()
			.filter_map(|s| s.shape.compute_bounds())
			.reduce(|a, b| [a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])])
	}

	/// Exports the layer as a GeoJSON `FeatureCollection`.
	#[must_use]
	pub fn to_geojson(&self, precision: Option<u8>) -> Value {
		json!({
			"type": "FeatureCollection",
			"features": self.shapes.iter().map(|s| s.to_geojson(precision)).collect::<Vec<_>>(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Coordinates;
	use approx::assert_relative_eq;

	fn polygon() -> Shape {
		Shape::new(
			ShapeKind::Polygon,
			vec![
				Coordinates::new(0.0, 0.0),
				Coordinates::new(0.0, 0.01),
				Coordinates::new(0.01, 0.01),
			],
		)
		.unwrap()
	}

	fn polyline() -> Shape {
		Shape::new(
			ShapeKind::Polyline,
			vec![Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 0.01)],
		)
		.unwrap()
	}

	#[test]
	fn add_assigns_ids_and_properties() {
		let mut layer = DrawingLayer::new();
		let first = layer.add(polygon());
		assert_eq!(first.id, 0);
		assert!(first.properties.area.unwrap() > 0.0);
		assert_eq!(first.tooltip, None);
		assert_eq!(layer.add(polyline()).id, 1);
		assert_eq!(layer.len(), 2);
	}

	#[test]
	fn remove_discards_shape_and_properties() {
		let mut layer = DrawingLayer::new();
		let id = layer.add(polygon()).id;
		layer.add(polyline());

		let removed = layer.remove(id).unwrap();
		assert_eq!(removed.kind(), ShapeKind::Polygon);
		assert!(layer.get(id).is_none());
		assert!(layer.remove(id).is_none());
		assert_eq!(layer.len(), 1);
		assert_eq!(layer.total_area(), 0.0);
	}

	#[test]
	fn ids_are_not_reused() {
		let mut layer = DrawingLayer::new();
		let id = layer.add(polyline()).id;
		layer.remove(id);
		assert_eq!(layer.add(polyline()).id, id + 1);
	}

	#[test]
	fn tooltip_sees_the_properties() {
		let mut layer = DrawingLayer::new();
		let drawn = layer.add_with_tooltip(polyline(), |p| format!("{:.0}", p.length.unwrap()));
		assert_eq!(drawn.tooltip.as_deref(), Some("1112"));
	}

	#[test]
	fn totals() {
		let mut layer = DrawingLayer::new();
		layer.add(polygon());
		layer.add(polyline());
		layer.add(polyline());
		assert!(layer.total_area() > 0.0);
		assert_relative_eq!(layer.total_length(), 2.0 * polyline().properties().length.unwrap());
		layer.clear();
		assert!(layer.is_empty());
	}

	#[test]
	fn bounds_cover_all_shapes() {
		let mut layer = DrawingLayer::new();
		assert_eq!(layer.compute_bounds(), None);
		layer.add(polygon());
		layer.add(Shape::new(ShapeKind::Point, vec![Coordinates::new(-1.0, 2.0)]).unwrap());
		assert_eq!(layer.compute_bounds(), Some([0.0, -1.0, 2.0, 0.01]));
	}

	#[test]
	fn geojson_feature_collection() {
		let mut layer = DrawingLayer::new();
		layer.add_with_tooltip(polyline(), |_| "Line".to_string());
		let json = layer.to_geojson(Some(3));
		assert_eq!(json["type"], "FeatureCollection");
		let feature = &json["features"][0];
		assert_eq!(feature["id"], 0);
		assert_eq!(feature["geometry"]["type"], "LineString");
		assert_eq!(feature["geometry"]["coordinates"], serde_json::json!([[0.0, 0.0], [0.01, 0.0]]));
		assert_eq!(feature["properties"]["type"], "polyline");
		assert_eq!(feature["properties"]["tooltip"], "Line");
		assert!(feature["properties"]["length"].as_f64().unwrap() > 1000.0);
	}
}
