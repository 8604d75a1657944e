use async_trait::async_trait;
use tracing::debug;

use super::{ConnectOutcome, DeviceControl, DeviceHandle, Point, Swipe};
use crate::error::Result;

/// Backend that accepts every input without touching a device.
///
/// Reports the endpoint as attached so a full run can be rehearsed.
#[derive(Clone, Debug)]
pub struct DryRunDevice {
	endpoint: String,
}

impl DryRunDevice {
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
		}
	}
}

#[async_trait]
impl DeviceControl for DryRunDevice {
	fn name(&self) -> &str {
		"dry-run"
	}

	async fn list_devices(&self) -> Result<Vec<String>> {
		Ok(vec![
			"List of devices attached".to_string(),
			format!("{}\tdevice", self.endpoint),
		])
	}

	async fn connect(&self, endpoint: &str) -> Result<ConnectOutcome> {
		debug!(target: "nhbot", endpoint, "[dry-run] connect");
		Ok(ConnectOutcome::AlreadyConnected)
	}

	async fn tap(&self, device: &DeviceHandle, at: Point) -> Result<()> {
		debug!(target: "nhbot", %device, x = at.x, y = at.y, "[dry-run] tap");
		Ok(())
	}

	async fn swipe(&self, device: &DeviceHandle, swipe: &Swipe) -> Result<()> {
		debug!(
			target: "nhbot",
			%device,
			from = %swipe.from,
			to = %swipe.to,
			duration_ms = swipe.duration.as_millis() as u64,
			"[dry-run] swipe"
		);
		Ok(())
	}
}
