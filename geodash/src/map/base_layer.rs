use serde_json::{Value, json};

/// A tiled basemap the mapping library can show underneath the drawing layer.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseLayer {
	pub name: String,
	pub url_template: String,
	pub max_zoom: u8,
	pub attribution: String,
}

impl BaseLayer {
	pub fn new(name: &str, url_template: &str, max_zoom: u8, attribution: &str) -> Self {
		Self {
			name: name.to_string(),
			url_template: url_template.to_string(),
			max_zoom,
			attribution: attribution.to_string(),
		}
	}

	pub fn to_json(&self) -> Value {
		json!({
			"name": self.name,
			"url": self.url_template,
			"maxZoom": self.max_zoom,
			"attribution": self.attribution,
		})
	}
}

/// The basemaps every map offers, the first one being the default.
pub fn default_base_layers() -> Vec<BaseLayer> {
	vec![
		BaseLayer::new(
			"OpenStreetMap",
			"https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
			19,
			"© OpenStreetMap contributors",
		),
		BaseLayer::new(
			"Satellite",
			"https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
			17,
			"© OpenTopoMap contributors",
		),
		BaseLayer::new(
			"CartoDB Dark",
			"https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
			19,
			"© CartoDB contributors",
		),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn catalog() {
		let layers = default_base_layers();
		let names: Vec<&str> = layers.iter().map(|l| l.name.as_str()).collect();
		assert_eq!(names, ["OpenStreetMap", "Satellite", "CartoDB Dark"]);
		assert_eq!(layers[1].max_zoom, 17);
	}

	#[test]
	fn json_uses_library_keys() {
		let json = default_base_layers()[0].to_json();
		assert_eq!(json["maxZoom"], 19);
		assert_eq!(json["url"], "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png");
	}
}
