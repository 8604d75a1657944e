//! nhbot: scripted input choreography for a game running in an Android emulator.
//!
//! The crate replays a fixed, hand-authored table of taps, swipes and waits
//! against one emulator instance reached through `adb`. Nothing observes the
//! screen: each scene is played open-loop and every input failure is logged and
//! skipped.
//!
//! ```ignore
//! use nhbot::{AdbConfig, AdbDevice, RunLog, Sequencer};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> nhbot::Result<()> {
//!     let device = AdbDevice::new(AdbConfig::default())?;
//!     let log = RunLog::stdout();
//!     let report = Sequencer::new(&device, &log).run().await?;
//!     println!("{} failed inputs", report.total_failures());
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod device;
pub mod directive;
pub mod error;
pub mod grid;
pub mod player;
pub mod scenes;
pub mod sequencer;

pub use clock::{RunLog, format_elapsed};
pub use device::{
	AdbConfig, AdbDevice, ConnectOutcome, DEFAULT_ENDPOINT, DeviceControl, DeviceHandle,
	DryRunDevice, Point, Swipe, resolve_device,
};
pub use directive::{Action, Directive};
pub use error::{Error, Result};
pub use grid::Grid;
pub use player::{SceneReport, ScenePlayer};
pub use scenes::{Scene, SceneId};
pub use sequencer::{RunReport, Sequencer};
