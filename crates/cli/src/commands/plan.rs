//! Prints the directive table.

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use nhbot::{Action, Directive, Scene, format_elapsed, scenes};
use serde::Serialize;

use crate::cli::PlanArgs;
use crate::error::Result;
use crate::output::{OutputFormat, print_json};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenePlan<'a> {
	#[serde(flatten)]
	scene: &'a Scene,
	title: &'static str,
	inputs: usize,
	estimated_secs: u64,
}

pub fn execute(args: &PlanArgs) -> Result<()> {
	let selected: Vec<Scene> = match args.scene {
		Some(id) => vec![id.scene()],
		None => scenes::script(),
	};

	match args.format {
		OutputFormat::Json => {
			let plans: Vec<_> = selected.iter().map(plan_of).collect();
			print_json(&plans)
		}
		OutputFormat::Text => {
			let stdout = std::io::stdout();
			let mut out = stdout.lock();
			write_text(&mut out, &selected).context("writing plan")?;
			Ok(())
		}
	}
}

fn plan_of(scene: &Scene) -> ScenePlan<'_> {
	ScenePlan {
		scene,
		title: scene.id.title(),
		inputs: scene.input_count(),
		estimated_secs: scene.estimated_duration().as_secs(),
	}
}

fn write_text<W: Write>(out: &mut W, scenes: &[Scene]) -> std::io::Result<()> {
	let mut total = Duration::ZERO;
	for scene in scenes {
		let estimate = scene.estimated_duration();
		total += estimate;
		writeln!(
			out,
			"{} ({}): {} inputs, ~{}",
			scene.id,
			scene.id.title(),
			scene.input_count(),
			format_elapsed(estimate)
		)?;
		for directive in &scene.directives {
			writeln!(out, "  {}", row(directive))?;
		}
	}
	writeln!(out, "total ~{}", format_elapsed(total))
}

fn row(directive: &Directive) -> String {
	let mut row = match directive.action {
		Action::Tap(at) => format!("tap   {at}"),
		Action::Swipe(swipe) => format!(
			"swipe {} -> {} {}ms",
			swipe.from,
			swipe.to,
			swipe.duration.as_millis()
		),
		Action::Idle => "-".to_string(),
	};
	if !directive.post_delay.is_zero() {
		row.push_str(&format!("  wait {}ms", directive.post_delay.as_millis()));
	}
	if let Some(note) = &directive.note {
		row.push_str(&format!("  # {note}"));
	}
	row
}

#[cfg(test)]
mod tests {
	use nhbot::SceneId;

	use super::*;

	#[test]
	fn rows_show_action_delay_and_note() {
		let scene = SceneId::ClosePopup.scene();
		assert_eq!(
			row(&scene.directives[0]),
			"tap   (906, 868)  wait 8000ms  # Clicking Close button at (906, 868)"
		);
	}

	#[test]
	fn text_plan_lists_header_and_total() {
		let mut buf = Vec::new();
		write_text(&mut buf, &[SceneId::CloseAnnouncements.scene()]).unwrap();
		let text = String::from_utf8(buf).unwrap();
		let lines: Vec<_> = text.lines().collect();
		assert_eq!(
			lines[0],
			"close-announcements (Close announcements): 2 inputs, ~00:00:04"
		);
		assert_eq!(lines[3], "  -  wait 2000ms");
		assert_eq!(lines.last(), Some(&"total ~00:00:04"));
	}

	#[test]
	fn json_plan_flattens_scene() {
		let scene = SceneId::DailyReward.scene();
		let json = serde_json::to_value(plan_of(&scene)).unwrap();
		assert_eq!(json["id"], "daily-reward");
		assert_eq!(json["inputs"], 33);
		assert_eq!(json["directives"][2]["action"]["x"], 530);
	}
}
