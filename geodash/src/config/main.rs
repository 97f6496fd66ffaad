use super::{ChartSectionConfig, MapSectionConfig, SectionConfig};
use crate::{
	chart::ChartConfig,
	dashboard::SimpleDashboard,
	dom::{Document, HtmlDocument},
	map::{DrawEvent, MapOptions},
};
use anyhow::{Context, Result};
use geodash_geometry::Coordinates;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Id of the element the sections are rendered into
	#[serde(default = "default_container")]
	pub container: String,

	/// Page title used by `render`
	pub title: Option<String>,

	/// Chart and map sections, in page order
	#[serde(default)]
	pub sections: Vec<SectionConfig>,
}

fn default_container() -> String {
	"dashboard".to_string()
}

impl Default for Config {
	fn default() -> Self {
		Self {
			container: default_container(),
			title: None,
			sections: Vec::new(),
		}
	}
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("failed to parse config {path:?}"))
	}

	/// Builds the dashboard in a fresh document holding only the container.
	pub fn build(&self) -> Result<SimpleDashboard<HtmlDocument>> {
		self.build_into(HtmlDocument::with_container(&self.container))
	}

	/// Builds the dashboard into the container of an existing document.
	pub fn build_into<D: Document>(&self, document: D) -> Result<SimpleDashboard<D>> {
		let mut dashboard = SimpleDashboard::new(document, &self.container)?;
		for (index, section) in self.sections.iter().enumerate() {
			let result = match section {
				SectionConfig::Chart(chart) => add_chart(&mut dashboard, chart),
				SectionConfig::Map(map) => add_map(&mut dashboard, map),
			};
			result.with_context(|| format!("section {index} is invalid"))?;
		}
		log::debug!("built dashboard with {} sections", self.sections.len());
		Ok(dashboard)
	}
}

fn add_chart<D: Document>(dashboard: &mut SimpleDashboard<D>, chart: &ChartSectionConfig) -> Result<()> {
	let config = ChartConfig::new(chart.data.clone(), chart.options.clone());
	dashboard.add_chart(&chart.title, &chart.chart_type, config)?;
	Ok(())
}

fn add_map<D: Document>(dashboard: &mut SimpleDashboard<D>, map: &MapSectionConfig) -> Result<()> {
	let options = MapOptions {
		zoom: map.zoom,
		height: map.height.clone(),
	};
	let widget = dashboard.add_map(&map.title, Coordinates::from(map.center), options)?;

	if let Some(name) = &map.base_layer {
		widget.set_base_layer(name)?;
	}
	for marker in &map.markers {
		widget.add_marker(Coordinates::from(marker.position), marker.popup.as_deref())?;
	}
	for shape in &map.shapes {
		widget.handle_shape_created(DrawEvent::new(shape.kind, shape.coordinates.clone()))?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{chart::ChartType, config::ShapeConfig};
	use geodash_geometry::ShapeKind;
	use pretty_assertions::assert_eq;

	#[test]
	fn parse_dashboard_config() {
		let cfg = Config::from_path(Path::new("../testdata/dashboard.yml")).unwrap();

		assert_eq!(cfg.container, "dashboard");
		assert_eq!(cfg.title.as_deref(), Some("Store overview"));
		assert_eq!(cfg.sections.len(), 3);

		let SectionConfig::Map(map) = &cfg.sections[2] else {
			panic!("expected a map section");
		};
		assert_eq!(map.base_layer.as_deref(), Some("CartoDB Dark"));
		assert_eq!(map.markers[0].popup.as_deref(), Some("Main store"));
		assert_eq!(
			map.shapes[1],
			ShapeConfig {
				kind: ShapeKind::Polyline,
				coordinates: vec![Coordinates::new(48.8566, 2.3522), Coordinates::new(48.8606, 2.3376)],
			}
		);
	}

	#[test]
	fn build_dashboard_config() {
		let dashboard = Config::from_path(Path::new("../testdata/dashboard.yml"))
			.unwrap()
			.build()
			.unwrap();

		let types: Vec<ChartType> = dashboard.charts().iter().map(|c| c.chart_type).collect();
		assert_eq!(types, [ChartType::Line, ChartType::Doughnut]);

		let map = &dashboard.maps()[0];
		assert_eq!(map.mount_id(), "map-0");
		assert_eq!(map.view().zoom, 14);
		assert_eq!(map.active_base_layer().name, "CartoDB Dark");
		assert_eq!(map.markers().len(), 1);
		assert_eq!(map.drawing_layer().len(), 2);
	}

	#[test]
	fn parse_empty_config() {
		assert_eq!(Config::from_string("").unwrap(), Config::default());
	}

	#[test]
	fn parse_invalid_config() {
		assert!(Config::from_string("container: dashboard\nwidgets: []").is_err());
		assert!(Config::from_path(Path::new("../testdata/missing.yml")).is_err());
	}

	#[test]
	fn invalid_section_names_its_index() {
		let cfg = Config::from_string(
			"sections:\n  - chart: { title: A, type: line }\n  - chart: { title: B, type: pie3d }",
		)
		.unwrap();
		let err = cfg.build().unwrap_err();
		assert_eq!(err.to_string(), "section 1 is invalid");
		assert!(format!("{err:#}").contains("unsupported chart type \"pie3d\""));
	}

	#[test]
	fn degenerate_shape_fails_build() {
		let cfg = Config::from_string(
			"sections:\n  - map:\n      title: M\n      center: [0, 0]\n      shapes: [{ kind: polygon, coordinates: [[0, 0], [1, 1]] }]",
		)
		.unwrap();
		assert!(cfg.build().is_err());
	}

	#[test]
	fn build_into_existing_document() {
		let cfg = Config::from_string("container: main").unwrap();
		assert!(cfg.build_into(HtmlDocument::with_container("other")).is_err());
		assert!(cfg.build_into(HtmlDocument::with_container("main")).is_ok());
	}
}
