//! Run-scoped elapsed-time logging.
//!
//! A [`RunLog`] captures the instant a run starts and is handed to every part of
//! the sequencer, so progress lines carry `[HH:MM:SS]` stamps relative to that
//! start without any process-wide state.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::{debug, info};

/// Width of a `[HH:MM:SS] ` stamp; detail lines are indented by this much.
pub const STAMP_WIDTH: usize = 11;

/// Formats a duration as zero-padded `HH:MM:SS`. Hours do not wrap.
pub fn format_elapsed(elapsed: Duration) -> String {
	let total = elapsed.as_secs();
	let hours = total / 3600;
	let minutes = (total % 3600) / 60;
	let seconds = total % 60;
	format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[derive(Debug, Clone)]
enum Sink {
	Stdout,
	Memory(Arc<Mutex<Vec<String>>>),
}

/// Progress logger bound to the start of one run.
#[derive(Debug, Clone)]
pub struct RunLog {
	start: Instant,
	sink: Sink,
}

impl RunLog {
	/// Starts the run clock now and prints to stdout.
	pub fn stdout() -> Self {
		Self {
			start: Instant::now(),
			sink: Sink::Stdout,
		}
	}

	/// Starts the run clock now and keeps lines in memory.
	pub fn capturing() -> Self {
		Self {
			start: Instant::now(),
			sink: Sink::Memory(Arc::default()),
		}
	}

	pub fn start(&self) -> Instant {
		self.start
	}

	/// Elapsed time between run start and `now`, saturating at zero.
	pub fn elapsed_at(&self, now: Instant) -> Duration {
		now.saturating_duration_since(self.start)
	}

	/// `[HH:MM:SS] message` stamped at `now`.
	pub fn stamp_at(&self, now: Instant, message: &str) -> String {
		format!("[{}] {message}", format_elapsed(self.elapsed_at(now)))
	}

	/// Prints a stamped progress line.
	pub fn line(&self, message: impl AsRef<str>) {
		let message = message.as_ref();
		info!(target: "nhbot", "{message}");
		let line = self.stamp_at(Instant::now(), message);
		self.emit(line);
	}

	/// Prints an unstamped line aligned under the previous stamp.
	pub fn detail(&self, message: impl AsRef<str>) {
		let message = message.as_ref();
		debug!(target: "nhbot", "{message}");
		self.emit(format!("{:width$}{message}", "", width = STAMP_WIDTH));
	}

	/// Lines recorded so far by a capturing log. Empty for stdout logs.
	pub fn captured(&self) -> Vec<String> {
		match &self.sink {
			Sink::Stdout => Vec::new(),
			Sink::Memory(lines) => lines.lock().clone(),
		}
	}

	fn emit(&self, line: String) {
		match &self.sink {
			Sink::Stdout => println!("{line}"),
			Sink::Memory(lines) => lines.lock().push(line),
		}
	}
}
