//! Top-level run: connect, resolve the device, play every scene once.

use serde::Serialize;
use tracing::{info, warn};

use crate::clock::RunLog;
use crate::device::{ConnectOutcome, DEFAULT_ENDPOINT, DeviceControl, DeviceHandle, resolve_device};
use crate::error::{Error, Result};
use crate::player::{SceneReport, ScenePlayer};
use crate::scenes::{self, SceneId};

/// Per-scene outcome of a run, in play order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
	pub scenes: Vec<SceneReport>,
}

impl RunReport {
	pub fn total_failures(&self) -> usize {
		self.scenes.iter().map(|s| s.failures).sum()
	}

	pub fn scene_order(&self) -> Vec<SceneId> {
		self.scenes.iter().map(|s| s.scene).collect()
	}
}

pub struct Sequencer<'a, D: DeviceControl + ?Sized> {
	device: &'a D,
	log: &'a RunLog,
	endpoint: String,
	skip_delays: bool,
}

impl<'a, D: DeviceControl + ?Sized> Sequencer<'a, D> {
	pub fn new(device: &'a D, log: &'a RunLog) -> Self {
		Self {
			device,
			log,
			endpoint: DEFAULT_ENDPOINT.to_string(),
			skip_delays: false,
		}
	}

	/// See [`ScenePlayer::skip_delays`].
	pub fn skip_delays(mut self, skip: bool) -> Self {
		self.skip_delays = skip;
		self
	}

	fn player<'p>(&'p self, handle: &'p DeviceHandle) -> ScenePlayer<'p, D> {
		ScenePlayer::new(self.device, handle, self.log).skip_delays(self.skip_delays)
	}

	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.endpoint = endpoint.into();
		self
	}

	/// Full run. The only fatal outcome is a missing device, in which case no
	/// input is issued.
	pub async fn run(&self) -> Result<RunReport> {
		self.log.line("Starting Ninja Heroes bot...");
		self.connect().await;
		let handle = self.resolve().await?;
		Ok(self.run_sequence(&handle).await)
	}

	/// Connects to the endpoint. Failure is logged and otherwise ignored; the
	/// device listing decides whether the run proceeds.
	pub async fn connect(&self) {
		match self.device.connect(&self.endpoint).await {
			Ok(ConnectOutcome::AlreadyConnected) => {
				self.log.line(format!("Already connected to {}", self.endpoint));
			}
			Ok(ConnectOutcome::Connected) => {
				self.log.line(format!("Connected to {}", self.endpoint));
			}
			Err(e) => {
				self.log
					.line(format!("Error connecting to {}: {e}", self.endpoint));
			}
		}
	}

	/// Looks the endpoint up in the device listing.
	pub async fn resolve(&self) -> Result<DeviceHandle> {
		let lines = match self.device.list_devices().await {
			Ok(lines) => lines,
			Err(e) => {
				warn!(target: "nhbot", error = %e, "device listing failed");
				Vec::new()
			}
		};
		match resolve_device(&lines, &self.endpoint) {
			Some(handle) => {
				info!(target: "nhbot", device = %handle, "device resolved");
				Ok(handle)
			}
			None => {
				self.log
					.line(format!("Device {} not found.", self.endpoint));
				Err(Error::DeviceNotFound {
					endpoint: self.endpoint.clone(),
				})
			}
		}
	}

	/// Plays every scene exactly once, in order. Scene failures never stop the
	/// sequence.
	pub async fn run_sequence(&self, handle: &DeviceHandle) -> RunReport {
		let player = self.player(handle);
		let mut report = RunReport::default();
		for scene in scenes::script() {
			info!(target: "nhbot", scene = %scene.id, "scene start");
			report.scenes.push(player.play(&scene).await);
		}
		self.summarize(&report);
		report
	}

	/// Plays one scene on its own.
	pub async fn run_scene(&self, handle: &DeviceHandle, id: SceneId) -> SceneReport {
		let report = self.player(handle).play(&id.scene()).await;
		self.summarize_scene(&report);
		report
	}

	fn summarize(&self, report: &RunReport) {
		let failures = report.total_failures();
		if failures == 0 {
			self.log.line("All scenes played.");
			return;
		}
		for scene in report.scenes.iter().filter(|s| s.failures > 0) {
			self.summarize_scene(scene);
		}
		self.log.line(format!(
			"All scenes played; {failures} inputs failed and the game may be off script."
		));
	}

	fn summarize_scene(&self, report: &SceneReport) {
		if report.failures > 0 {
			self.log.line(format!(
				"{}: {} of {} inputs failed",
				report.scene.title(),
				report.failures,
				report.taps + report.swipes
			));
		}
	}
}
