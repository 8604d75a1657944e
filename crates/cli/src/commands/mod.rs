mod devices;
mod input;
mod plan;
mod run;

use nhbot::{AdbConfig, AdbDevice, DeviceControl, DryRunDevice};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::error::Result;

pub async fn dispatch(cli: Cli) -> Result<()> {
	match cli.command() {
		// Plan never needs a device
		Commands::Plan(args) => plan::execute(&args),
		command => on_device(&cli, command).await,
	}
}

async fn on_device(cli: &Cli, command: Commands) -> Result<()> {
	let device = build_device(cli)?;
	let device = device.as_ref();
	debug!(backend = device.name(), endpoint = %cli.endpoint, "device backend ready");

	match command {
		Commands::Run => run::execute(device, cli).await,
		Commands::Scene { name } => run::execute_scene(device, cli, name).await,
		Commands::Devices => devices::execute(device, &cli.endpoint).await,
		Commands::Tap { x, y } => input::tap(device, &cli.endpoint, x, y).await,
		Commands::Swipe(args) => input::swipe(device, &cli.endpoint, &args).await,
		Commands::Plan(args) => plan::execute(&args),
	}
}

fn build_device(cli: &Cli) -> Result<Box<dyn DeviceControl>> {
	if cli.dry_run {
		return Ok(Box::new(DryRunDevice::new(cli.endpoint.clone())));
	}
	let device = AdbDevice::new(AdbConfig {
		program: cli.adb.clone(),
		endpoint: cli.endpoint.clone(),
	})?;
	Ok(Box::new(device))
}
