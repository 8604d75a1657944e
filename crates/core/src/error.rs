//! Error types for device control and sequencing.

use std::process::ExitStatus;

use thiserror::Error;

/// Result type alias for nhbot operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the device or running scenes.
#[derive(Debug, Error)]
pub enum Error {
	/// No connected device matched the endpoint. Fatal for a run.
	#[error("no connected device matches endpoint {endpoint}")]
	DeviceNotFound { endpoint: String },

	/// The `adb` executable could not be located.
	#[error("adb executable not found: {0}")]
	AdbNotFound(String),

	/// The device-control process could not be started.
	#[error("failed to spawn `{program}`: {source}")]
	Spawn {
		program: String,
		#[source]
		source: std::io::Error,
	},

	/// The device-control process ran but reported failure.
	#[error("`{command}` exited with {status}{}", stderr_suffix(stderr))]
	CommandFailed {
		command: String,
		status: ExitStatus,
		stderr: String,
	},

	/// Unknown scene name.
	#[error("unknown scene `{0}`")]
	UnknownScene(String),

	/// I/O error.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// JSON serialization error.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

fn stderr_suffix(stderr: &str) -> String {
	if stderr.is_empty() {
		String::new()
	} else {
		format!(": {stderr}")
	}
}
