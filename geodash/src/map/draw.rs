use anyhow::{Context, Result};
use geodash_geometry::{Coordinates, Shape, ShapeKind};
use serde_json::{Value, json};

/// Stroke and fill of shapes drawn with the drawing tool.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle {
	pub color: String,
	pub fill_color: String,
	pub fill_opacity: f64,
	pub weight: u32,
	pub opacity: f64,
}

impl Default for ShapeStyle {
	fn default() -> Self {
		Self {
			color: "#FF0000".to_string(),
			fill_color: "#FF0000".to_string(),
			fill_opacity: 0.3,
			weight: 2,
			opacity: 1.0,
		}
	}
}

impl ShapeStyle {
	pub fn to_json(&self) -> Value {
		json!({
			"color": self.color,
			"fillColor": self.fill_color,
			"fillOpacity": self.fill_opacity,
			"weight": self.weight,
			"opacity": self.opacity,
		})
	}
}

/// Icon of markers placed with the drawing tool, sizes and anchors in pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerIcon {
	pub icon_url: String,
	pub shadow_url: String,
	pub icon_size: [u32; 2],
	pub icon_anchor: [i32; 2],
	pub popup_anchor: [i32; 2],
	pub shadow_size: [u32; 2],
}

impl Default for MarkerIcon {
	fn default() -> Self {
		Self {
			icon_url: "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-2x-red.png"
				.to_string(),
			shadow_url: "https://cdnjs.cloudflare.com/ajax/libs/leaflet/0.7.7/images/marker-shadow.png".to_string(),
			icon_size: [25, 41],
			icon_anchor: [12, 41],
			popup_anchor: [1, -34],
			shadow_size: [41, 41],
		}
	}
}

impl MarkerIcon {
	pub fn to_json(&self) -> Value {
		json!({
			"iconUrl": self.icon_url,
			"shadowUrl": self.shadow_url,
			"iconSize": self.icon_size,
			"iconAnchor": self.icon_anchor,
			"popupAnchor": self.popup_anchor,
			"shadowSize": self.shadow_size,
		})
	}
}

/// Options of the drawing-tool control. Circles are not offered, their tool is always off.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawControlOptions {
	pub position: String,
	pub style: ShapeStyle,
	pub marker_icon: MarkerIcon,
	pub tools: Vec<ShapeKind>,
	pub edit: bool,
	pub remove: bool,
}

impl Default for DrawControlOptions {
	fn default() -> Self {
		Self {
			position: "topright".to_string(),
			style: ShapeStyle::default(),
			marker_icon: MarkerIcon::default(),
			tools: ShapeKind::ALL.to_vec(),
			edit: true,
			remove: true,
		}
	}
}

impl DrawControlOptions {
	pub fn is_enabled(&self, kind: ShapeKind) -> bool {
		self.tools.contains(&kind)
	}

	pub fn to_json(&self) -> Value {
		let style = self.style.to_json();
		let mut draw = serde_json::Map::new();
		for kind in ShapeKind::ALL {
			let key = match kind {
				ShapeKind::Point => "marker",
				_ => kind.as_str(),
			};
			let value = match (self.is_enabled(kind), kind) {
				(false, _) => Value::Bool(false),
				(true, ShapeKind::Point) => json!({ "icon": self.marker_icon.to_json() }),
				(true, _) => json!({ "shapeOptions": style }),
			};
			draw.insert(key.to_string(), value);
		}
		draw.insert("circle".to_string(), Value::Bool(false));
		json!({
			"position": self.position,
			"draw": draw,
			"edit": { "edit": self.edit, "remove": self.remove },
		})
	}
}

/// The drawing tool's "shape created" event.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawEvent {
	pub kind: ShapeKind,
	pub coordinates: Vec<Coordinates>,
}

impl DrawEvent {
	pub fn new(kind: ShapeKind, coordinates: Vec<Coordinates>) -> Self {
		Self { kind, coordinates }
	}

	/// Builds an event from the drawing tool's layer type name (`marker`, `polygon`, ...).
	pub fn from_layer_type(layer_type: &str, coordinates: Vec<Coordinates>) -> Result<Self> {
		Ok(Self::new(ShapeKind::parse_str(layer_type)?, coordinates))
	}

	pub fn into_shape(self) -> Result<Shape> {
		let kind = self.kind;
		Shape::new(kind, self.coordinates).with_context(|| format!("drawn {kind} can not be measured"))
	}
}
