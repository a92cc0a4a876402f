//! The module for setting up log output.

// Uses
use std::io::stderr;

use tracing::Level;

/// Installs the global subscriber. Logs go to stderr so that stdout only
/// carries the batch summary.
pub fn init_logging(verbosity: u8, quiet: bool) {
	tracing_subscriber::fmt()
		.with_max_level(level_for(verbosity, quiet))
		.with_target(false)
		.with_writer(stderr)
		.init();
}

fn level_for(verbosity: u8, quiet: bool) -> Level {
	if quiet {
		return Level::ERROR;
	}

	match verbosity {
		0 => Level::INFO,
		1 => Level::DEBUG,
		_ => Level::TRACE,
	}
}
