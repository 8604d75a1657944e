//! Timed input directives.
//!
//! A scene is a plain `Vec<Directive>`: what to do, what to print first, and how
//! long to wait afterwards. The player is the only code that interprets them.

use std::time::Duration;

use serde::Serialize;

use crate::device::{Point, Swipe};

/// The input half of a directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
	Tap(Point),
	Swipe(Swipe),
	/// No input; the directive only prints its note and/or waits.
	Idle,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Directive {
	pub action: Action,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub note: Option<String>,
	#[serde(rename = "postDelayMs", serialize_with = "millis")]
	pub post_delay: Duration,
}

fn millis<S: serde::Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
	serializer.serialize_u64(value.as_millis() as u64)
}

impl Directive {
	fn from_action(action: Action) -> Self {
		Self {
			action,
			note: None,
			post_delay: Duration::ZERO,
		}
	}

	pub fn tap(x: i32, y: i32) -> Self {
		Self::from_action(Action::Tap(Point::new(x, y)))
	}

	pub fn tap_at(at: Point) -> Self {
		Self::from_action(Action::Tap(at))
	}

	/// Swipe with the default on-device duration.
	pub fn swipe(from: Point, to: Point) -> Self {
		Self::from_action(Action::Swipe(Swipe::new(from, to)))
	}

	/// A progress line with no input.
	pub fn note(message: impl Into<String>) -> Self {
		Self::from_action(Action::Idle).say(message)
	}

	/// A bare pause.
	pub fn wait(delay: Duration) -> Self {
		Self::from_action(Action::Idle).then_wait(delay)
	}

	/// Progress line printed before the action.
	pub fn say(mut self, message: impl Into<String>) -> Self {
		self.note = Some(message.into());
		self
	}

	/// Pause after the action completes.
	pub fn then_wait(mut self, delay: Duration) -> Self {
		self.post_delay = delay;
		self
	}

	pub fn is_input(&self) -> bool {
		!matches!(self.action, Action::Idle)
	}
}

/// Whole seconds.
pub const fn secs(n: u64) -> Duration {
	Duration::from_secs(n)
}

/// Milliseconds.
pub const fn millis_of(n: u64) -> Duration {
	Duration::from_millis(n)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builder_sets_note_and_delay() {
		let d = Directive::tap(906, 868).say("Close").then_wait(secs(8));
		assert_eq!(d.action, Action::Tap(Point::new(906, 868)));
		assert_eq!(d.note.as_deref(), Some("Close"));
		assert_eq!(d.post_delay, secs(8));
		assert!(d.is_input());
	}

	#[test]
	fn wait_and_note_are_not_input() {
		assert!(!Directive::wait(secs(1)).is_input());
		assert!(!Directive::note("hi").is_input());
	}

	#[test]
	fn serializes_as_table_row() {
		let d = Directive::tap(1, 2).then_wait(millis_of(500));
		let json = serde_json::to_value(&d).unwrap();
		assert_eq!(json["action"]["type"], "tap");
		assert_eq!(json["action"]["x"], 1);
		assert_eq!(json["postDelayMs"], 500);
		assert!(json.get("note").is_none());
	}
}
