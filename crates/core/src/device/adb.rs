//! `adb` command-line backend.

use std::path::PathBuf;
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::{ConnectOutcome, DEFAULT_ENDPOINT, DeviceControl, DeviceHandle, Point, Swipe};
use crate::error::{Error, Result};

/// Where to find `adb` and which endpoint to connect to.
#[derive(Clone, Debug)]
pub struct AdbConfig {
	/// Explicit path to the `adb` executable; searched on `PATH` when `None`.
	pub program: Option<PathBuf>,
	pub endpoint: String,
}

impl Default for AdbConfig {
	fn default() -> Self {
		Self {
			program: None,
			endpoint: DEFAULT_ENDPOINT.to_string(),
		}
	}
}

/// Drives the emulator by spawning one `adb` process per call.
#[derive(Clone, Debug)]
pub struct AdbDevice {
	program: PathBuf,
	endpoint: String,
}

impl AdbDevice {
	pub fn new(config: AdbConfig) -> Result<Self> {
		let program = match config.program {
			Some(path) => path,
			None => which::which("adb").map_err(|e| Error::AdbNotFound(e.to_string()))?,
		};
		debug!(target: "nhbot", program = %program.display(), "using adb");
		Ok(Self {
			program,
			endpoint: config.endpoint,
		})
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	async fn exec(&self, args: &[String]) -> Result<Output> {
		let command = self.describe(args);
		debug!(target: "nhbot", %command, "exec");

		let output = Command::new(&self.program)
			.args(args)
			.kill_on_drop(true)
			.output()
			.await
			.map_err(|source| Error::Spawn {
				program: self.program.display().to_string(),
				source,
			})?;

		if !output.status.success() {
			return Err(Error::CommandFailed {
				command,
				status: output.status,
				stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
			});
		}
		Ok(output)
	}

	fn describe(&self, args: &[String]) -> String {
		let mut command = self.program.display().to_string();
		for arg in args {
			command.push(' ');
			command.push_str(arg);
		}
		command
	}
}

fn tap_args(device: &DeviceHandle, at: Point) -> Vec<String> {
	let mut args = shell_input(device, "tap");
	args.extend([at.x.to_string(), at.y.to_string()]);
	args
}

fn swipe_args(device: &DeviceHandle, swipe: &Swipe) -> Vec<String> {
	let mut args = shell_input(device, "swipe");
	args.extend([
		swipe.from.x.to_string(),
		swipe.from.y.to_string(),
		swipe.to.x.to_string(),
		swipe.to.y.to_string(),
		swipe.duration.as_millis().to_string(),
	]);
	args
}

fn shell_input(device: &DeviceHandle, kind: &str) -> Vec<String> {
	["-s", device.serial(), "shell", "input", kind]
		.into_iter()
		.map(str::to_string)
		.collect()
}

#[async_trait]
impl DeviceControl for AdbDevice {
	fn name(&self) -> &str {
		"adb"
	}

	async fn list_devices(&self) -> Result<Vec<String>> {
		let output = self.exec(&["devices".to_string()]).await?;
		Ok(String::from_utf8_lossy(&output.stdout)
			.lines()
			.map(str::to_string)
			.collect())
	}

	async fn connect(&self, endpoint: &str) -> Result<ConnectOutcome> {
		let output = self
			.exec(&["connect".to_string(), endpoint.to_string()])
			.await?;
		let stdout = String::from_utf8_lossy(&output.stdout);
		if stdout.contains("already connected") {
			Ok(ConnectOutcome::AlreadyConnected)
		} else {
			Ok(ConnectOutcome::Connected)
		}
	}

	async fn tap(&self, device: &DeviceHandle, at: Point) -> Result<()> {
		self.exec(&tap_args(device, at)).await.map(drop)
	}

	async fn swipe(&self, device: &DeviceHandle, swipe: &Swipe) -> Result<()> {
		self.exec(&swipe_args(device, swipe)).await.map(drop)
	}
}
