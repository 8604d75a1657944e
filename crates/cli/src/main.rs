mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod styles;

use clap::Parser;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	if let Err(err) = commands::dispatch(cli).await {
		handle_error(&err);
		std::process::exit(1);
	}
}

fn handle_error(err: &CliError) {
	tracing::debug!(error = ?err, "command failed");
	output::print_error_stderr(err);
}
