use anyhow::{Context, Result, bail};
use geodash::geometry::{Coordinates, ShapeKind, ShapeProperties, compute_properties};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// shape kind: point, polygon, rectangle or polyline
	#[arg(required = true)]
	kind: String,

	/// vertices as "lat,lng" pairs, e.g. 48.8566,2.3522
	#[arg(required = true, allow_hyphen_values = true, num_args = 1..)]
	coordinates: Vec<String>,

	/// print the properties as JSON, must precede the coordinates
	#[arg(long)]
	json: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	if let Some(flag) = arguments.coordinates.iter().find(|text| text.starts_with("--")) {
		bail!("\"{flag}\" is read as a coordinate, put flags before the shape kind");
	}
	let kind = ShapeKind::parse_str(&arguments.kind)?;
	let coordinates = arguments
		.coordinates
		.iter()
		.map(|text| parse_coordinates(text))
		.collect::<Result<Vec<_>>>()?;
	log::debug!("measure {kind} with {} vertices", coordinates.len());

	let properties = compute_properties(kind, &coordinates)?;
	if arguments.json {
		println!("{}", serde_json::to_string_pretty(&properties.to_json())?);
	} else {
		print!("{}", format_properties(&properties));
	}
	Ok(())
}

fn parse_coordinates(text: &str) -> Result<Coordinates> {
	let parse = || -> Result<Coordinates> {
		let (lat, lng) = text.split_once(',').context("expected \"lat,lng\"")?;
		Ok(Coordinates::new(lat.trim().parse()?, lng.trim().parse()?))
	};
	parse().with_context(|| format!("invalid coordinates \"{text}\""))
}

fn format_properties(properties: &ShapeProperties) -> String {
	let mut text = format!("kind: {}\n", properties.kind);
	if let Some(area) = properties.area {
		text.push_str(&format!("area: {area:.2} m² ({:.6} km²)\n", area / 1_000_000.0));
	}
	let lines = [
		("perimeter", properties.perimeter, "m"),
		("length", properties.length, "m"),
	];
	for (name, value, unit) in lines {
		if let Some(value) = value {
			text.push_str(&format!("{name}: {value:.2} {unit}\n"));
		}
	}
	if let (Some(lat), Some(lng)) = (properties.latitude, properties.longitude) {
		text.push_str(&format!("latitude: {lat:.6}\nlongitude: {lng:.6}\n"));
	}
	text
}
