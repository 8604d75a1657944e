use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use nhbot::{DEFAULT_ENDPOINT, SceneId};

use crate::output::OutputFormat;
use crate::styles::cli_styles;

#[derive(Parser, Debug)]
#[command(name = "nhbot")]
#[command(about = "Replays the daily Ninja Heroes routine on an emulator over adb")]
#[command(version)]
#[command(styles = cli_styles())]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Path to the adb executable (searched on PATH by default)
	#[arg(long, global = true, value_name = "PATH")]
	pub adb: Option<PathBuf>,

	/// adb endpoint of the emulator instance
	#[arg(long, global = true, value_name = "ADDR", default_value = DEFAULT_ENDPOINT)]
	pub endpoint: String,

	/// Log every input instead of sending it to a device
	#[arg(long, global = true)]
	pub dry_run: bool,

	/// Skip all fixed waits (only sensible with --dry-run)
	#[arg(long, global = true)]
	pub no_delay: bool,

	#[command(subcommand)]
	pub command: Option<Commands>,
}

impl Cli {
	/// `run` when no subcommand is given.
	pub fn command(&self) -> Commands {
		self.command.clone().unwrap_or(Commands::Run)
	}
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
	/// Play every scene once, in order (default)
	Run,

	/// Play a single scene
	Scene {
		/// Scene name, e.g. daily-reward or trial-a
		#[arg(value_name = "NAME")]
		name: SceneId,
	},

	/// Print the directive table without touching a device
	Plan(PlanArgs),

	/// List attached devices and show which one a run would use
	Devices,

	/// Send one tap
	Tap {
		x: i32,
		y: i32,
	},

	/// Send one swipe
	Swipe(SwipeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
	/// Only this scene
	#[arg(value_name = "NAME")]
	pub scene: Option<SceneId>,

	/// Output format
	#[arg(short = 'f', long, value_enum, default_value = "text")]
	pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct SwipeArgs {
	pub x1: i32,
	pub y1: i32,
	pub x2: i32,
	pub y2: i32,

	/// On-device swipe duration in milliseconds
	#[arg(short, long, value_name = "MS", default_value_t = 6000)]
	pub duration: u64,
}
