//! Output helpers shared by the commands.
//!
//! Progress during a run is printed by [`nhbot::RunLog`]; this module only covers
//! one-shot command output and error reporting.


use std::io::{self, Write};

use anyhow::Context;
use serde::Serialize;

use crate::error::{CliError, Result};

/// Output format for commands that can emit machine-readable data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text
	#[default]
	Text,
	/// Pretty-printed JSON
	Json,
}

impl std::fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OutputFormat::Text => write!(f, "text"),
			OutputFormat::Json => write!(f, "json"),
		}
	}
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
	serde_json::to_writer_pretty(&mut *out, value)?;
	writeln!(out).context("writing JSON output")?;
	Ok(())
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
	let stdout = io::stdout();
	let mut lock = stdout.lock();
	write_json(&mut lock, value)
}

pub fn format_error(error: &CliError) -> String {
	format!("Error [{}]: {}", error.code(), error)
}

pub fn print_error_stderr(error: &CliError) {
	eprintln!("{}", format_error(error));
}
