use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
	#[error(transparent)]
	Bot(#[from] nhbot::Error),

	#[error("{command} failed: {source}")]
	Input {
		command: &'static str,
		#[source]
		source: nhbot::Error,
	},

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Anyhow(#[from] anyhow::Error),
}

impl CliError {
	/// Short category shown in the `Error [...]` prefix.
	pub fn code(&self) -> &'static str {
		match self {
			CliError::Bot(nhbot::Error::DeviceNotFound { .. }) => "DEVICE_NOT_FOUND",
			CliError::Bot(nhbot::Error::AdbNotFound(_)) => "ADB_NOT_FOUND",
			CliError::Bot(nhbot::Error::UnknownScene(_)) => "INVALID_INPUT",
			CliError::Bot(_) => "DEVICE_ERROR",
			CliError::Input { .. } => "INPUT_FAILED",
			CliError::Json(_) | CliError::Anyhow(_) => "INTERNAL_ERROR",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn device_not_found_has_its_own_code() {
		let err = CliError::from(nhbot::Error::DeviceNotFound {
			endpoint: "localhost:5555".into(),
		});
		assert_eq!(err.code(), "DEVICE_NOT_FOUND");
		assert_eq!(
			err.to_string(),
			"no connected device matches endpoint localhost:5555"
		);
	}

	#[test]
	fn input_failure_names_the_command() {
		let err = CliError::Input {
			command: "tap",
			source: nhbot::Error::Io(std::io::Error::other("boom")),
		};
		assert_eq!(err.code(), "INPUT_FAILED");
		assert_eq!(err.to_string(), "tap failed: I/O error: boom");
	}
}
