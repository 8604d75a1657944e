//! End-to-end runs of the `nhbot` binary against the dry-run backend.

use std::process::{Command, Output};

fn nhbot(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_nhbot"))
		.args(args)
		.env_remove("RUST_LOG")
		.output()
		.expect("failed to execute nhbot")
}

fn stdout(output: &Output) -> String {
	String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn full_dry_run_plays_every_scene() {
	let output = nhbot(&["--dry-run", "--no-delay", "run"]);
	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

	let text = stdout(&output);
	let lines: Vec<_> = text.lines().collect();
	assert!(lines[0].ends_with("] Starting Ninja Heroes bot..."));
	assert!(lines[1].ends_with("] Already connected to localhost:5555"));
	assert!(text.contains("Tapped at (906, 868) via dry-run"));
	assert!(text.contains("Clicking Daily Reward 28 at (1490, 848)"));
	assert!(text.contains("Trying Trial 1 left"));
	assert!(lines.last().unwrap().ends_with("] All scenes played."));
}

#[test]
fn single_scene_dry_run() {
	let output = nhbot(&["scene", "close-announcements", "--dry-run", "--no-delay"]);
	assert!(output.status.success());

	let text = stdout(&output);
	assert!(text.contains("Playing scene Close announcements"));
	assert!(text.contains("Tapped at (1520, 167) via dry-run"));
	assert!(text.contains("Tapped at (1480, 85) via dry-run"));
	assert!(!text.contains("Daily Reward"));
}

#[test]
fn plan_json_lists_all_scenes_in_order() {
	let output = nhbot(&["plan", "-f", "json"]);
	assert!(output.status.success());

	let plans: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
	let ids: Vec<_> = plans
		.as_array()
		.unwrap()
		.iter()
		.map(|p| p["id"].as_str().unwrap().to_string())
		.collect();
	assert_eq!(
		ids,
		[
			"close-popup",
			"choose-server",
			"close-announcements",
			"collect-buildings",
			"daily-reward",
			"trial-a",
			"trial-b"
		]
	);
}

#[test]
fn plan_never_locates_adb() {
	let output = nhbot(&["--adb", "/nonexistent/nhbot-adb", "plan", "close-popup"]);
	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
	assert!(stdout(&output).starts_with("close-popup (Close initial popup): 1 inputs"));
}

#[test]
fn devices_reports_resolved_endpoint() {
	let output = nhbot(&["--dry-run", "devices", "--endpoint", "127.0.0.1:5565"]);
	assert!(output.status.success());
	assert!(stdout(&output).contains("Using 127.0.0.1:5565 (dry-run)"));
}

#[test]
fn missing_adb_exits_with_failure() {
	let output = nhbot(&["--adb", "/nonexistent/nhbot-adb", "tap", "1", "2"]);
	assert!(!output.status.success());
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("Error [INPUT_FAILED]: tap failed: failed to spawn"), "{stderr}");
}

#[test]
fn missing_device_halts_run() {
	let output = nhbot(&["--adb", "/nonexistent/nhbot-adb", "run"]);
	assert_eq!(output.status.code(), Some(1));

	let text = stdout(&output);
	assert!(text.contains("Error connecting to localhost:5555"));
	assert!(text.contains("Device localhost:5555 not found."));
	assert!(!text.contains("Tapped"));
	assert!(String::from_utf8_lossy(&output.stderr).contains("Error [DEVICE_NOT_FOUND]"));
}
