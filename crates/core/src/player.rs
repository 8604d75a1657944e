//! Generic scene player.
//!
//! Walks a directive table in order against one device. Input failures are
//! logged and counted, never retried, and never stop the scene.

use std::time::Duration;

use serde::Serialize;
use tracing::warn;

use crate::clock::RunLog;
use crate::device::{DeviceControl, DeviceHandle, Point, Swipe};
use crate::directive::{Action, Directive};
use crate::scenes::{Scene, SceneId};

/// Local pause after a delivered swipe so the game can settle.
pub const SWIPE_SETTLE: Duration = Duration::from_secs(1);

/// What happened while a scene played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneReport {
	pub scene: SceneId,
	pub taps: usize,
	pub swipes: usize,
	pub failures: usize,
}

impl SceneReport {
	fn new(scene: SceneId) -> Self {
		Self {
			scene,
			taps: 0,
			swipes: 0,
			failures: 0,
		}
	}
}

pub struct ScenePlayer<'a, D: DeviceControl + ?Sized> {
	device: &'a D,
	handle: &'a DeviceHandle,
	log: &'a RunLog,
	skip_delays: bool,
}

impl<'a, D: DeviceControl + ?Sized> ScenePlayer<'a, D> {
	pub fn new(device: &'a D, handle: &'a DeviceHandle, log: &'a RunLog) -> Self {
		Self {
			device,
			handle,
			log,
			skip_delays: false,
		}
	}

	/// Drops every pause (post-delays and swipe settling). For rehearsals only.
	pub fn skip_delays(mut self, skip: bool) -> Self {
		self.skip_delays = skip;
		self
	}

	async fn pause(&self, delay: Duration) {
		if !self.skip_delays && !delay.is_zero() {
			tokio::time::sleep(delay).await;
		}
	}

	pub async fn play(&self, scene: &Scene) -> SceneReport {
		let mut report = SceneReport::new(scene.id);
		for directive in &scene.directives {
			self.step(directive, &mut report).await;
		}
		if report.failures > 0 {
			warn!(
				target: "nhbot",
				scene = %scene.id,
				failures = report.failures,
				"scene finished with failed inputs"
			);
		}
		report
	}

	async fn step(&self, directive: &Directive, report: &mut SceneReport) {
		if let Some(note) = &directive.note {
			self.log.line(note);
		}
		match directive.action {
			Action::Tap(at) => {
				report.taps += 1;
				if !self.tap(at).await {
					report.failures += 1;
				}
			}
			Action::Swipe(swipe) => {
				report.swipes += 1;
				if !self.swipe(&swipe).await {
					report.failures += 1;
				}
			}
			Action::Idle => {}
		}
		self.pause(directive.post_delay).await;
	}

	/// Issues one tap; `false` when the device call failed.
	pub async fn tap(&self, at: Point) -> bool {
		let via = self.device.name();
		match self.device.tap(self.handle, at).await {
			Ok(()) => {
				self.log.detail(format!("Tapped at {at} via {via}"));
				true
			}
			Err(e) => {
				self.log.detail(format!("Error tapping at {at} via {via}: {e}"));
				false
			}
		}
	}

	/// Issues one swipe and lets it settle; `false` when the device call failed.
	pub async fn swipe(&self, swipe: &Swipe) -> bool {
		let via = self.device.name();
		let (from, to) = (swipe.from, swipe.to);
		match self.device.swipe(self.handle, swipe).await {
			Ok(()) => {
				self.log.line(format!("Swiped from {from} to {to} via {via}"));
				self.pause(SWIPE_SETTLE).await;
				true
			}
			Err(e) => {
				self.log
					.line(format!("Error swiping from {from} to {to} via {via}: {e}"));
				false
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::device::DryRunDevice;
	use crate::directive::secs;

	#[tokio::test(start_paused = true)]
	async fn counts_inputs_and_honours_delays() {
		let device = DryRunDevice::new("localhost:5555");
		let handle = DeviceHandle::new("localhost:5555");
		let log = RunLog::capturing();
		let scene = Scene::new(
			SceneId::ClosePopup,
			vec![
				Directive::tap(906, 868).say("Clicking close").then_wait(secs(8)),
				Directive::swipe(Point::new(1900, 540), Point::new(50, 540)),
				Directive::note("Done"),
			],
		);

		let report = ScenePlayer::new(&device, &handle, &log).play(&scene).await;

		assert_eq!(report.taps, 1);
		assert_eq!(report.swipes, 1);
		assert_eq!(report.failures, 0);
		assert_eq!(
			log.captured(),
			[
				"[00:00:00] Clicking close",
				"           Tapped at (906, 868) via dry-run",
				"[00:00:08] Swiped from (1900, 540) to (50, 540) via dry-run",
				"[00:00:09] Done",
			]
		);
	}

	#[tokio::test(start_paused = true)]
	async fn skipping_delays_keeps_clock_still() {
		let device = DryRunDevice::new("localhost:5555");
		let handle = DeviceHandle::new("localhost:5555");
		let log = RunLog::capturing();
		let scene = SceneId::ChooseServer.scene();

		let report = ScenePlayer::new(&device, &handle, &log)
			.skip_delays(true)
			.play(&scene)
			.await;

		assert_eq!(report.swipes, 6);
		assert!(log.captured().iter().all(|l| !l.starts_with('[') || l.starts_with("[00:00:00]")));
	}
}
