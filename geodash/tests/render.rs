#![cfg(feature = "cli")]

use predicates::str;
use std::fs;
use test_utilities::*;

#[test]
fn render_to_stdout() {
	let config = get_testdata("dashboard.yml");
	geodash_cmd()
		.args(["render", config.to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::starts_with("<!DOCTYPE html>\n"))
		.stdout(str::contains("<title>Store overview</title>"))
		.stdout(str::contains("<h3>Monthly sales</h3>"))
		.stdout(str::contains("<script type=\"application/json\" id=\"geodash-state\">"));
}

#[test]
fn render_to_file() {
	let config = get_testdata("dashboard.yml");
	let (_temp_dir, output) = get_temp_output("dashboard.html");

	geodash_cmd()
		.args(["render", config.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::is_empty());

	let html = fs::read_to_string(&output).unwrap();
	let (_, state) = html.split_once("id=\"geodash-state\">").unwrap();
	let (state, _) = state.split_once("</script>").unwrap();
	let state: serde_json::Value = serde_json::from_str(state).unwrap();

	assert_eq!(state["charts"][0]["type"], "line");
	assert_eq!(state["charts"][1]["type"], "doughnut");
	assert_eq!(state["charts"][0]["options"]["responsive"], true);
	assert_eq!(state["maps"][0]["activeBaseLayer"], "CartoDB Dark");
	assert_eq!(state["maps"][0]["drawnItems"]["type"], "FeatureCollection");
	assert_eq!(state["maps"][0]["drawnItems"]["features"][1]["geometry"]["type"], "LineString");
}

#[test]
fn invalid_chart_type_fails() {
	let (temp_dir, output) = get_temp_output("dashboard.html");
	let config = temp_dir.path().join("broken.yml");
	fs::write(&config, "sections:\n  - chart: { title: Sales, type: pie3d }\n").unwrap();

	geodash_cmd()
		.args(["render", config.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("section 0 is invalid"))
		.stderr(str::contains("unsupported chart type \"pie3d\""));
	assert!(!output.exists());
}

#[test]
fn unknown_field_fails() {
	let (temp_dir, _) = get_temp_output("dashboard.html");
	let config = temp_dir.path().join("broken.yml");
	fs::write(&config, "container: dashboard\ntheme: dark\n").unwrap();

	geodash_cmd()
		.args(["render", config.to_str().unwrap()])
		.assert()
		.failure()
		.stderr(str::contains("failed to parse config"));
}
