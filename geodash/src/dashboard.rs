//! The dashboard: a container element filled with titled chart and map sections.

use crate::{
	chart::{ChartConfig, ChartSpec, ChartType},
	dom::{Document, HtmlDocument, NodeId, escape_html},
	map::{MapOptions, MapWidget},
};
use anyhow::{Context, Result};
use geodash_geometry::Coordinates;
use serde_json::{Value, json};

pub const SECTION_CLASS: &str = "dashboard-section";

/// Builds chart and map sections into a container element of a [`Document`].
#[derive(Debug)]
pub struct SimpleDashboard<D: Document = HtmlDocument> {
	document: D,
	container: NodeId,
	charts: Vec<ChartSpec>,
	maps: Vec<MapWidget>,
}

impl<D: Document> SimpleDashboard<D> {
	/// Looks up the container and empties it.
	pub fn new(mut document: D, container_id: &str) -> Result<Self> {
		let container = document
			.get_element_by_id(container_id)
			.with_context(|| format!("container \"#{container_id}\" was not found"))?;
		document.clear_children(container)?;
		log::debug!("dashboard mounted in #{container_id}");
		Ok(Self {
			document,
			container,
			charts: Vec::new(),
			maps: Vec::new(),
		})
	}

	/// Adds a chart section. The chart type is validated before anything is created.
	pub fn add_chart(&mut self, title: &str, chart_type: &str, config: ChartConfig) -> Result<&ChartSpec> {
		let chart_type = ChartType::parse_str(chart_type)?;
		let canvas_id = format!("chart-{}", self.charts.len());

		let section = self.create_section(title)?;
		let canvas = self.document.create_element("canvas");
		self.document.set_attribute(canvas, "id", &canvas_id)?;
		self.document.append_child(section, canvas)?;

		log::debug!("add {chart_type} chart \"{title}\" as #{canvas_id}");
		self.charts.push(ChartSpec::new(canvas_id, title, chart_type, config));
		Ok(&self.charts[self.charts.len() - 1])
	}

	pub fn add_line_chart(&mut self, title: &str, data: Value) -> Result<&ChartSpec> {
		self.add_chart(title, ChartType::Line.as_str(), ChartConfig::with_data(data))
	}

	pub fn add_bar_chart(&mut self, title: &str, data: Value) -> Result<&ChartSpec> {
		self.add_chart(title, ChartType::Bar.as_str(), ChartConfig::with_data(data))
	}

	/// Adds a map section with a mount element of the configured height.
	pub fn add_map(&mut self, title: &str, center: Coordinates, options: MapOptions) -> Result<&mut MapWidget> {
		let mount_id = format!("map-{}", self.maps.len());
		let widget = MapWidget::new(&mount_id, title, center, options)?;

		let section = self.create_section(title)?;
		let mount = self.document.create_element("div");
		self.document.set_attribute(mount, "id", &mount_id)?;
		self.document
			.set_attribute(mount, "style", &format!("height: {}", widget.height()))?;
		self.document.append_child(section, mount)?;

		log::debug!("add map \"{title}\" as #{mount_id}");
		self.maps.push(widget);
		let index = self.maps.len() - 1;
		Ok(&mut self.maps[index])
	}

	fn create_section(&mut self, title: &str) -> Result<NodeId> {
		let section = self.document.create_element("div");
		self.document.set_attribute(section, "class", SECTION_CLASS)?;

		let heading = self.document.create_element("h3");
		self.document.set_text(heading, title)?;
		self.document.append_child(section, heading)?;

		self.document.append_child(self.container, section)?;
		Ok(section)
	}

	pub fn charts(&self) -> &[ChartSpec] {
		&self.charts
	}

	pub fn maps(&self) -> &[MapWidget] {
		&self.maps
	}

	pub fn map_mut(&mut self, index: usize) -> Option<&mut MapWidget> {
		self.maps.get_mut(index)
	}

	pub fn document(&self) -> &D {
		&self.document
	}

	pub fn container(&self) -> NodeId {
		self.container
	}

	/// Chart and map state for the charting and mapping libraries.
	pub fn state_json(&self) -> Value {
		json!({
			"charts": self.charts.iter().map(ChartSpec::to_json).collect::<Vec<_>>(),
			"maps": self.maps.iter().map(MapWidget::to_json).collect::<Vec<_>>(),
		})
	}
}

impl SimpleDashboard<HtmlDocument> {
	/// Renders a standalone page: the document body plus a JSON block with the state.
	pub fn render_html(&self, title: &str) -> Result<String> {
		let state = serde_json::to_string(&self.state_json())?.replace("</", "<\\/");
		let mut html = String::new();
		html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
		html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
		html.push_str("</head>\n<body>\n");
		html.push_str(&self.document.to_html());
		html.push_str(&format!(
			"<script type=\"application/json\" id=\"geodash-state\">{state}</script>\n"
		));
		html.push_str("</body>\n</html>\n");
		Ok(html)
	}
}
