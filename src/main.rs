//! A utility for packing folders of icons into Windows DLL resource libraries.
//!
//! Every subfolder of the output root becomes `<folder>.dll`: a copy of a
//! template library with the folder's icons merged in by Resource Hacker.

// Linting Rules
#![warn(
	clippy::complexity,
	clippy::correctness,
	clippy::pedantic,
	clippy::perf,
	clippy::style,
	clippy::suspicious,
	clippy::clone_on_ref_ptr,
	clippy::dbg_macro,
	clippy::decimal_literal_representation,
	clippy::exit,
	clippy::filetype_is_file,
	clippy::if_then_some_else_none,
	clippy::non_ascii_literal,
	clippy::self_named_module_files,
	clippy::str_to_string,
	clippy::undocumented_unsafe_blocks,
	clippy::wildcard_enum_match_arm
)]
#![allow(
	clippy::doc_markdown,
	clippy::module_name_repetitions,
	clippy::similar_names,
	clippy::too_many_lines
)]

// Modules
mod batch;
mod cli;
mod config;
mod constants;
mod logging;
mod pipeline;
mod resource_tool;
mod script;
mod template;
mod util;

// Uses
use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::{
	batch::run_batch,
	cli::build_cli,
	config::Config,
	logging::init_logging,
	resource_tool::ResourceHacker,
};

// Entry Point
fn main() -> Result<()> {
	let matches = build_cli().get_matches();
	init_logging(matches.get_count("verbose"), matches.get_flag("quiet"));

	let config =
		Config::from_matches(&matches).with_context(|| "unable to load the configuration")?;
	config
		.validate()
		.with_context(|| "the configuration is invalid")?;
	debug!("{config:?}");

	let tool = ResourceHacker::new(config.resource_tool.as_path());
	let summary = run_batch(&tool, &config).with_context(|| "unable to process the output root")?;
	print!("{summary}");

	if !summary.is_success() {
		return Err(anyhow!(
			"{} of {} folders failed",
			summary.failed(),
			summary.folders_found
		));
	}

	Ok(())
}
