//! Provides the CLI for the program.

// Uses
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::constants::APPLICATION_PROPER_NAME;

/// Builds the command-line interface.
pub fn build_cli() -> Command {
	Command::new(APPLICATION_PROPER_NAME)
		.version(env!("CARGO_PKG_VERSION"))
		.about(env!("CARGO_PKG_DESCRIPTION"))
		.arg_required_else_help(true)
		.help_expected(true)
		.arg(
			Arg::new("resource-tool")
				.long("resource-tool")
				.visible_alias("resource-hacker")
				.visible_alias("tool")
				.num_args(1)
				.action(ArgAction::Set)
				.value_name("PATH")
				.help("The path to the Resource Hacker executable.")
				.value_parser(value_parser!(PathBuf)),
		)
		.arg(
			Arg::new("template")
				.long("template")
				.visible_alias("template-dll")
				.num_args(1)
				.action(ArgAction::Set)
				.value_name("PATH")
				.help(
					"The DLL that every output library starts as a copy of. It should contain no \
					 icon resources of its own.",
				)
				.value_parser(value_parser!(PathBuf)),
		)
		.arg(
			Arg::new("output-root")
				.long("output-root")
				.visible_alias("root")
				.num_args(1)
				.action(ArgAction::Set)
				.value_name("PATH")
				.help(
					"The folder to work in. Each subfolder of icons becomes a DLL of the same name \
					 placed here.",
				)
				.value_parser(value_parser!(PathBuf)),
		)
		.arg(
			Arg::new("config")
				.long("config")
				.num_args(1)
				.action(ArgAction::Set)
				.value_name("PATH")
				.help(
					"A JSON file providing any of `resource-tool`, `template`, `output-root`, \
					 `fail-fast` and `keep-intermediates`. Command-line arguments take precedence.",
				)
				.value_parser(value_parser!(PathBuf)),
		)
		.arg(
			Arg::new("fail-fast")
				.long("fail-fast")
				.action(ArgAction::SetTrue)
				.help("Stop at the first folder that fails instead of moving on to the next one."),
		)
		.arg(
			Arg::new("keep-intermediates")
				.long("keep-intermediates")
				.action(ArgAction::SetTrue)
				.help("Leave the generated `.rc` and `.res` files on disk for inspection."),
		)
		.arg(
			Arg::new("verbose")
				.short('v')
				.long("verbose")
				.action(ArgAction::Count)
				.help("Log more detail. Repeat for even more."),
		)
		.arg(
			Arg::new("quiet")
				.short('q')
				.long("quiet")
				.action(ArgAction::SetTrue)
				.conflicts_with("verbose")
				.help("Only log errors."),
		)
}
