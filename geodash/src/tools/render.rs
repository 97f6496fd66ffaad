use anyhow::{Context, Result};
use geodash::config::Config;
use std::{fs, path::PathBuf};

const DEFAULT_TITLE: &str = "GeoDash";

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// dashboard description in YAML
	#[arg(required = true)]
	config: PathBuf,

	/// HTML file to write, prints to stdout if omitted
	output: Option<PathBuf>,

	/// page title, overrides the title of the config
	#[arg(long, short)]
	title: Option<String>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	log::info!("render {:?}", arguments.config);

	let config = Config::from_path(&arguments.config)?;
	let dashboard = config.build()?;

	let title = arguments
		.title
		.as_deref()
		.or(config.title.as_deref())
		.unwrap_or(DEFAULT_TITLE);
	let html = dashboard.render_html(title)?;

	match &arguments.output {
		Some(path) => {
			fs::write(path, html).with_context(|| format!("failed to write {path:?}"))?;
			log::info!("wrote {path:?}");
		}
		None => print!("{html}"),
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use std::fs;

	#[test]
	fn render_to_file() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("dashboard.html");
		run_command(vec![
			"geodash",
			"render",
			"-q",
			"../testdata/dashboard.yml",
			output.to_str().unwrap(),
		])
		.unwrap();

		let html = fs::read_to_string(output).unwrap();
		assert!(html.contains("<title>Store overview</title>"));
		assert!(html.contains("<canvas id=\"chart-1\"></canvas>"));
		assert!(html.contains("<div id=\"map-0\" style=\"height: 500px\"></div>"));
	}

	#[test]
	fn title_flag_wins() {
		let dir = tempfile::tempdir().unwrap();
		let output = dir.path().join("dashboard.html");
		run_command(vec![
			"geodash",
			"render",
			"--title",
			"Weekly",
			"../testdata/dashboard.yml",
			output.to_str().unwrap(),
		])
		.unwrap();
		assert!(fs::read_to_string(output).unwrap().contains("<title>Weekly</title>"));
	}

	#[test]
	fn missing_config() {
		assert!(run_command(vec!["geodash", "render", "../testdata/missing.yml"]).is_err());
	}
}
