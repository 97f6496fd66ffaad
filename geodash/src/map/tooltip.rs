use geodash_geometry::{ShapeKind, ShapeProperties};

/// Formats the HTML tooltip bound to a drawn shape.
pub fn format_tooltip(properties: &ShapeProperties) -> String {
	match properties.kind {
		ShapeKind::Point => format!(
			"<strong>Point</strong><br>Latitude: {:.6}<br>Longitude: {:.6}",
			properties.latitude.unwrap_or_default(),
			properties.longitude.unwrap_or_default()
		),
		ShapeKind::Polygon | ShapeKind::Rectangle => format!(
			"<strong>Polygon</strong><br>Area: {:.2} km²<br>Perimeter: {:.2} m",
			properties.area_km2().unwrap_or_default(),
			properties.perimeter.unwrap_or_default()
		),
		ShapeKind::Polyline => format!(
			"<strong>Line</strong><br>Length: {:.2} m",
			properties.length.unwrap_or_default()
		),
	}
}
