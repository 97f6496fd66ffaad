//! Map sections.
//!
//! A [`MapWidget`] holds everything the mapping library needs to show one map: the view,
//! the basemap catalog, the drawing-tool options, markers and the drawing layer. The
//! drawing tool reports finished shapes as [`DrawEvent`]s, which the widget measures,
//! labels with a tooltip and keeps in its own [`DrawingLayer`].

mod base_layer;
mod draw;
mod tooltip;

pub use base_layer::{BaseLayer, default_base_layers};
pub use draw::{DrawControlOptions, DrawEvent, MarkerIcon, ShapeStyle};
pub use tooltip::format_tooltip;

use anyhow::{Result, bail, ensure};
use geodash_geometry::{Coordinates, DrawingLayer, DrawnShape};
use serde_json::{Value, json};

pub const DEFAULT_ZOOM: u8 = 13;
pub const DEFAULT_HEIGHT: &str = "400px";

/// Center and zoom level of a map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapView {
	pub center: Coordinates,
	pub zoom: u8,
}

impl MapView {
	pub fn new(center: Coordinates, zoom: u8) -> Result<Self> {
		center.check()?;
		ensure!(zoom <= 30, "zoom level {zoom} must be <= 30");
		Ok(Self { center, zoom })
	}
}

/// Size and zoom of a new map.
#[derive(Clone, Debug, PartialEq)]
pub struct MapOptions {
	pub zoom: u8,
	pub height: String,
}

impl Default for MapOptions {
	fn default() -> Self {
		Self {
			zoom: DEFAULT_ZOOM,
			height: DEFAULT_HEIGHT.to_string(),
		}
	}
}

/// A pinned position with optional popup text.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
	pub position: Coordinates,
	pub popup: Option<String>,
}

#[derive(Clone, Debug)]
pub struct MapWidget {
	mount_id: String,
	title: String,
	height: String,
	view: MapView,
	base_layers: Vec<BaseLayer>,
	active_base_layer: usize,
	draw_control: DrawControlOptions,
	markers: Vec<Marker>,
	layer: DrawingLayer,
}

impl MapWidget {
	pub fn new(mount_id: &str, title: &str, center: Coordinates, options: MapOptions) -> Result<Self> {
		Ok(Self {
			mount_id: mount_id.to_string(),
			title: title.to_string(),
			height: options.height,
			view: MapView::new(center, options.zoom)?,
			base_layers: default_base_layers(),
			active_base_layer: 0,
			draw_control: DrawControlOptions::default(),
			markers: Vec::new(),
			layer: DrawingLayer::new(),
		})
	}

	pub fn mount_id(&self) -> &str {
		&self.mount_id
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn height(&self) -> &str {
		&self.height
	}

	pub fn view(&self) -> &MapView {
		&self.view
	}

	pub fn set_view(&mut self, center: Coordinates, zoom: u8) -> Result<()> {
		self.view = MapView::new(center, zoom)?;
		Ok(())
	}

	pub fn base_layers(&self) -> &[BaseLayer] {
		&self.base_layers
	}

	pub fn active_base_layer(&self) -> &BaseLayer {
		&self.base_layers[self.active_base_layer]
	}

	/// Switches the visible basemap by name.
	pub fn set_base_layer(&mut self, name: &str) -> Result<()> {
		let Some(index) = self.base_layers.iter().position(|l| l.name == name) else {
			let names: Vec<&str> = self.base_layers.iter().map(|l| l.name.as_str()).collect();
			bail!("unknown base layer \"{name}\", available layers: {}", names.join(", "));
		};
		log::debug!("map {}: switch base layer to {name}", self.mount_id);
		self.active_base_layer = index;
		Ok(())
	}

	pub fn draw_control(&self) -> &DrawControlOptions {
		&self.draw_control
	}

	pub fn draw_control_mut(&mut self) -> &mut DrawControlOptions {
		&mut self.draw_control
	}

	pub fn add_marker(&mut self, position: Coordinates, popup: Option<&str>) -> Result<&Marker> {
		position.check()?;
		self.markers.push(Marker {
			position,
			popup: popup.map(str::to_string),
		});
		Ok(&self.markers[self.markers.len() - 1])
	}

	pub fn markers(&self) -> &[Marker] {
		&self.markers
	}

	pub fn drawing_layer(&self) -> &DrawingLayer {
		&self.layer
	}

	/// Handles the drawing tool's "shape created" event: measures the shape, binds its
	/// tooltip and adds it to the drawing layer.
	pub fn handle_shape_created(&mut self, event: DrawEvent) -> Result<&DrawnShape> {
		ensure!(
			self.draw_control.is_enabled(event.kind),
			"drawing tool {} is disabled on map {}",
			event.kind,
			self.mount_id
		);
		let shape = event.into_shape()?;
		let drawn = self.layer.add_with_tooltip(shape, format_tooltip);
		log::info!("map {}: created {} #{}", self.mount_id, drawn.kind(), drawn.id);
		Ok(drawn)
	}

	/// Removes a drawn shape; its properties go with it.
	pub fn remove_shape(&mut self, id: u64) -> Option<DrawnShape> {
		self.layer.remove(id)
	}

	/// State handed to the mapping library.
	pub fn to_json(&self) -> Value {
		json!({
			"mount": self.mount_id,
			"center": [self.view.center.lat(), self.view.center.lng()],
			"zoom": self.view.zoom,
			"baseLayers": self.base_layers.iter().map(BaseLayer::to_json).collect::<Vec<_>>(),
			"activeBaseLayer": self.active_base_layer().name,
			"drawControl": self.draw_control.to_json(),
			"markers": self.markers.iter().map(|m| json!({
				"position": [m.position.lat(), m.position.lng()],
				"popup": m.popup,
			})).collect::<Vec<_>>(),
			"drawnItems": self.layer.to_geojson(None),
			"fitBounds": self.fit_bounds(),
		})
	}

	/// `[[south, west], [north, east]]` around the drawn shapes, `null` while nothing is drawn.
	fn fit_bounds(&self) -> Value {
		match self.layer.compute_bounds() {
			Some([lng_min, lat_min, lng_max, lat_max]) => json!([[lat_min, lng_min], [lat_max, lng_max]]),
			None => Value::Null,
		}
	}
}
