#![cfg(feature = "cli")]

use predicates::str;
use rstest::rstest;
use test_utilities::*;

#[test]
fn command() {
	geodash_cmd()
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
}

#[rstest]
#[case("render", "[OPTIONS] <CONFIG> [OUTPUT]")]
#[case("measure", "[OPTIONS] <KIND> <COORDINATES>...")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) {
	geodash_cmd()
		.args(sub_command.split(' '))
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
}

#[test]
fn version() {
	geodash_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(str::starts_with("geodash "));
}
