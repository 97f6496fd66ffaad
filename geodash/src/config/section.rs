use crate::map::{DEFAULT_HEIGHT, DEFAULT_ZOOM};
use geodash_geometry::{Coordinates, ShapeKind};
use serde::{Deserialize, de::Error};
use serde_json::Value;

/// One dashboard section, written as `- chart: {...}` or `- map: {...}`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SectionConfig {
	Chart(ChartSectionConfig),
	Map(MapSectionConfig),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChartSectionConfig {
	/// Heading shown above the chart
	pub title: String,

	/// Chart type, e.g. `line`, `bar` or `polarArea`
	#[serde(rename = "type")]
	pub chart_type: String,

	/// `data` object forwarded to the charting library
	#[serde(default)]
	pub data: Value,

	/// `options` object forwarded to the charting library
	#[serde(default)]
	pub options: Value,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MapSectionConfig {
	/// Heading shown above the map
	pub title: String,

	/// Initial center as `[lat, lng]`
	pub center: [f64; 2],

	/// Initial zoom level
	#[serde(default = "default_zoom")]
	pub zoom: u8,

	/// CSS height of the map element
	#[serde(default = "default_height")]
	pub height: String,

	/// Name of the visible base layer, defaults to the first one
	pub base_layer: Option<String>,

	#[serde(default)]
	pub markers: Vec<MarkerConfig>,

	/// Shapes that are already drawn when the page opens
	#[serde(default)]
	pub shapes: Vec<ShapeConfig>,
}

fn default_zoom() -> u8 {
	DEFAULT_ZOOM
}

fn default_height() -> String {
	DEFAULT_HEIGHT.to_string()
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MarkerConfig {
	pub position: [f64; 2],
	pub popup: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeConfig {
	pub kind: ShapeKind,
	pub coordinates: Vec<Coordinates>,
}

impl<'de> Deserialize<'de> for ShapeConfig {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(deny_unknown_fields)]
		struct ShapeConfigHelper {
			kind: String,
			coordinates: Vec<[f64; 2]>,
		}

		let helper = ShapeConfigHelper::deserialize(deserializer)?;
		Ok(ShapeConfig {
			kind: ShapeKind::parse_str(&helper.kind).map_err(D::Error::custom)?,
			coordinates: helper.coordinates.into_iter().map(Coordinates::from).collect(),
		})
	}
}
