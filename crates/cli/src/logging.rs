use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Filter used when `RUST_LOG` is unset.
///
/// Progress lines always go to stdout; this only controls the stderr mirror.
fn default_filter(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "warn,nhbot=info",
		2 => "warn,nhbot=debug",
		_ => "debug",
	}
}

pub fn init_logging(verbosity: u8) {
	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr.with_max_level(tracing::Level::DEBUG))
		.with_target(verbosity > 1)
		.without_time()
		.compact()
		.init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbose_levels_scope_to_nhbot() {
		assert_eq!(default_filter(0), "warn");
		assert_eq!(default_filter(1), "warn,nhbot=info");
		assert_eq!(default_filter(2), "warn,nhbot=debug");
		assert_eq!(default_filter(5), "debug");
	}

	#[test]
	fn every_default_filter_parses() {
		for verbosity in 0..4 {
			assert!(EnvFilter::try_new(default_filter(verbosity)).is_ok());
		}
	}
}
