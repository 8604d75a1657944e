//! Full runs and single scenes.

use nhbot::{DeviceControl, RunLog, SceneId, Sequencer};
use tracing::info;

use crate::cli::Cli;
use crate::error::Result;

pub async fn execute(device: &dyn DeviceControl, cli: &Cli) -> Result<()> {
	let log = RunLog::stdout();
	let report = sequencer(device, &log, cli).run().await?;
	info!(
		scenes = report.scenes.len(),
		failures = report.total_failures(),
		"run finished"
	);
	Ok(())
}

/// Connects and resolves like a full run, then plays only `scene`.
pub async fn execute_scene(device: &dyn DeviceControl, cli: &Cli, scene: SceneId) -> Result<()> {
	let log = RunLog::stdout();
	let sequencer = sequencer(device, &log, cli);
	sequencer.connect().await;
	let handle = sequencer.resolve().await?;

	log.line(format!("Playing scene {}", scene.title()));
	let report = sequencer.run_scene(&handle, scene).await;
	info!(scene = %scene, failures = report.failures, "scene finished");
	Ok(())
}

fn sequencer<'a>(
	device: &'a dyn DeviceControl,
	log: &'a RunLog,
	cli: &Cli,
) -> Sequencer<'a, dyn DeviceControl + 'a> {
	Sequencer::new(device, log)
		.with_endpoint(cli.endpoint.clone())
		.skip_delays(cli.no_delay)
}
