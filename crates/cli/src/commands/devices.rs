use nhbot::{DeviceControl, resolve_device};

use crate::error::Result;

pub async fn execute(device: &dyn DeviceControl, endpoint: &str) -> Result<()> {
	let lines = device.list_devices().await?;
	for line in lines.iter().filter(|l| !l.trim().is_empty()) {
		println!("{line}");
	}
	match resolve_device(&lines, endpoint) {
		Some(handle) => println!("\nUsing {handle} ({})", device.name()),
		None => println!("\nNo ready device at {endpoint}"),
	}
	Ok(())
}
