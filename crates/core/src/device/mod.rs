//! Device control interface.
//!
//! [`DeviceControl`] is the seam between the sequencer and whatever actually
//! delivers input to the emulator. [`AdbDevice`] shells out to `adb`;
//! [`DryRunDevice`] accepts everything and only traces it.

mod adb;
mod dry_run;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use adb::{AdbConfig, AdbDevice};
pub use dry_run::DryRunDevice;

/// Loopback endpoint the emulator exposes its adb daemon on.
pub const DEFAULT_ENDPOINT: &str = "localhost:5555";

/// Status token `adb devices` prints next to a ready device.
const READY_TOKEN: &str = "device";

/// On-device duration of a swipe when none is given.
pub const DEFAULT_SWIPE_DURATION: Duration = Duration::from_millis(6000);

/// Screen coordinate in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
	pub x: i32,
	pub y: i32,
}

impl Point {
	pub const fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}
}

impl fmt::Display for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

/// Directional swipe from one point to another over `duration`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swipe {
	pub from: Point,
	pub to: Point,
	#[serde(rename = "durationMs", with = "duration_ms")]
	pub duration: Duration,
}

impl Swipe {
	/// Swipe with the default on-device duration.
	pub const fn new(from: Point, to: Point) -> Self {
		Self {
			from,
			to,
			duration: DEFAULT_SWIPE_DURATION,
		}
	}

	pub const fn with_duration(mut self, duration: Duration) -> Self {
		self.duration = duration;
		self
	}
}

mod duration_ms {
	use std::time::Duration;

	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_u64(value.as_millis() as u64)
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
		u64::deserialize(deserializer).map(Duration::from_millis)
	}
}

/// Identifies the one emulator instance a run talks to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeviceHandle(String);

impl DeviceHandle {
	pub fn new(serial: impl Into<String>) -> Self {
		Self(serial.into())
	}

	/// Serial passed to `adb -s`.
	pub fn serial(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for DeviceHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Result of asking the device-control tool to connect to an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectOutcome {
	Connected,
	AlreadyConnected,
}

/// Synchronous-in-effect device control. Each call completes before the next
/// input is issued.
#[async_trait]
pub trait DeviceControl: Send + Sync {
	/// Short backend name used in progress lines ("adb", "dry-run").
	fn name(&self) -> &str;

	/// One status line per attached device, as the tool prints them.
	async fn list_devices(&self) -> Result<Vec<String>>;

	/// Connects to `endpoint`. Idempotent.
	async fn connect(&self, endpoint: &str) -> Result<ConnectOutcome>;

	async fn tap(&self, device: &DeviceHandle, at: Point) -> Result<()>;

	async fn swipe(&self, device: &DeviceHandle, swipe: &Swipe) -> Result<()>;
}

/// Picks the endpoint out of a device listing.
///
/// A line must mention both `endpoint` and the `device` status token; anything
/// else (offline, unauthorized, another serial) leaves the run without a handle.
pub fn resolve_device<S: AsRef<str>>(lines: &[S], endpoint: &str) -> Option<DeviceHandle> {
	lines
		.iter()
		.map(AsRef::as_ref)
		.find(|line| line.contains(endpoint) && line.contains(READY_TOKEN))
		.map(|_| DeviceHandle::new(endpoint))
}
