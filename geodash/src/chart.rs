//! Chart sections: the supported chart types and the configuration forwarded to the
//! charting library.

use anyhow::{Result, bail};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::fmt::Display;

/// Chart types the charting library is asked to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartType {
	Line,
	Bar,
	Radar,
	Doughnut,
	Pie,
	PolarArea,
	Bubble,
	Scatter,
	BoxPlot,
	Violin,
}

impl ChartType {
	pub const ALL: [ChartType; 10] = [
		ChartType::Line,
		ChartType::Bar,
		ChartType::Radar,
		ChartType::Doughnut,
		ChartType::Pie,
		ChartType::PolarArea,
		ChartType::Bubble,
		ChartType::Scatter,
		ChartType::BoxPlot,
		ChartType::Violin,
	];

	/// Name as understood by the charting library.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			ChartType::Line => "line",
			ChartType::Bar => "bar",
			ChartType::Radar => "radar",
			ChartType::Doughnut => "doughnut",
			ChartType::Pie => "pie",
			ChartType::PolarArea => "polarArea",
			ChartType::Bubble => "bubble",
			ChartType::Scatter => "scatter",
			ChartType::BoxPlot => "boxplot",
			ChartType::Violin => "violin",
		}
	}

	/// Parses a chart type name. Names are matched exactly.
	pub fn parse_str(value: &str) -> Result<Self> {
		match ChartType::ALL.iter().find(|t| t.as_str() == value) {
			Some(chart_type) => Ok(*chart_type),
			None => bail!(
				"unsupported chart type \"{value}\", valid types: {}",
				ChartType::ALL.map(|t| t.as_str()).join(", ")
			),
		}
	}
}

impl Display for ChartType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// `data` and `options` objects for a chart. Missing or `null` values become `{}`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
	#[serde(default)]
	pub data: Value,
	#[serde(default)]
	pub options: Value,
}

impl ChartConfig {
	#[must_use]
	pub fn new(data: Value, options: Value) -> Self {
		Self { data, options }
	}

	#[must_use]
	pub fn with_data(data: Value) -> Self {
		Self {
			data,
			options: Value::Null,
		}
	}
}

fn object_or_empty(value: Value) -> Value {
	match value {
		Value::Null => Value::Object(Map::new()),
		other => other,
	}
}

/// A validated chart bound to its canvas element.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
	pub canvas_id: String,
	pub title: String,
	pub chart_type: ChartType,
	pub data: Value,
	pub options: Value,
}

impl ChartSpec {
	pub(crate) fn new(canvas_id: String, title: &str, chart_type: ChartType, config: ChartConfig) -> Self {
		Self {
			canvas_id,
			title: title.to_string(),
			chart_type,
			data: object_or_empty(config.data),
			options: object_or_empty(config.options),
		}
	}

	/// The constructor argument of the charting library, plus the canvas it renders into.
	#[must_use]
	pub fn to_json(&self) -> Value {
		json!({
			"canvas": self.canvas_id,
			"type": self.chart_type.as_str(),
			"data": self.data,
			"options": self.options,
		})
	}
}
