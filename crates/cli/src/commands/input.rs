//! One-off inputs, mostly for checking coordinates against a live screen.
//!
//! Unlike scenes, a failed input here is an error and sets the exit status.

use std::time::Duration;

use nhbot::{DeviceControl, DeviceHandle, Point, Swipe};

use crate::cli::SwipeArgs;
use crate::error::{CliError, Result};

pub async fn tap(device: &dyn DeviceControl, endpoint: &str, x: i32, y: i32) -> Result<()> {
	let at = Point::new(x, y);
	let handle = DeviceHandle::new(endpoint);
	device
		.tap(&handle, at)
		.await
		.map_err(|source| CliError::Input {
			command: "tap",
			source,
		})?;
	println!("Tapped at {at} via {}", device.name());
	Ok(())
}

pub async fn swipe(device: &dyn DeviceControl, endpoint: &str, args: &SwipeArgs) -> Result<()> {
	let swipe = swipe_from_args(args);
	let handle = DeviceHandle::new(endpoint);
	device
		.swipe(&handle, &swipe)
		.await
		.map_err(|source| CliError::Input {
			command: "swipe",
			source,
		})?;
	println!(
		"Swiped from {} to {} via {}",
		swipe.from,
		swipe.to,
		device.name()
	);
	Ok(())
}

fn swipe_from_args(args: &SwipeArgs) -> Swipe {
	Swipe::new(Point::new(args.x1, args.y1), Point::new(args.x2, args.y2))
		.with_duration(Duration::from_millis(args.duration))
}

#[cfg(test)]
mod tests {
	use nhbot::DryRunDevice;

	use super::*;

	#[test]
	fn swipe_args_map_to_points_and_duration() {
		let args = SwipeArgs {
			x1: 50,
			y1: 540,
			x2: 1900,
			y2: 540,
			duration: 250,
		};
		let swipe = swipe_from_args(&args);
		assert_eq!(swipe.from, Point::new(50, 540));
		assert_eq!(swipe.to, Point::new(1900, 540));
		assert_eq!(swipe.duration, Duration::from_millis(250));
	}

	#[tokio::test]
	async fn dry_run_tap_succeeds() {
		let device = DryRunDevice::new("localhost:5555");
		assert!(tap(&device, "localhost:5555", 906, 868).await.is_ok());
	}
}
