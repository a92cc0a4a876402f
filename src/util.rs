//! The module that provides utility functions.

// Uses
use std::{
	io::ErrorKind,
	iter::once,
	path::{absolute, Path, PathBuf},
	process::{Command, ExitStatus, Output},
};

use anyhow::{Context, Result};
use shell_words::join as join_shell_words;
use thiserror::Error;
use tracing::{debug, warn};

/// A command that ran to completion but reported failure through its exit
/// status.
#[derive(Debug, Error)]
#[error("`{command_line}` exited unsuccessfully ({status}){}", format_output(.output))]
pub struct CommandFailed {
	pub command_line: String,
	pub status:       ExitStatus,
	pub output:       String,
}

fn format_output(output: &str) -> String {
	if output.is_empty() {
		String::new()
	} else {
		format!(":\n{output}")
	}
}

/// Runs a provided command to completion and returns everything it printed,
/// stdout first.
///
/// An unsuccessful exit status is reported as a [`CommandFailed`] error.
pub fn run_command(mut command: Command) -> Result<String> {
	let command_line = describe_command(&command);
	debug!("running `{command_line}`");

	// Run the command
	let command_result = command
		.output()
		.with_context(|| format!("unable to run `{command_line}`"))?;
	let output = collect_output(&command_result);
	if !command_result.status.success() {
		return Err(CommandFailed {
			command_line,
			status: command_result.status,
			output,
		}
		.into());
	}

	Ok(output)
}

/// Renders a command as a single shell-quoted line, for logs and error
/// messages.
pub fn describe_command(command: &Command) -> String {
	let program = command.get_program().to_string_lossy();
	let args = command.get_args().map(|arg| arg.to_string_lossy());

	join_shell_words(once(program).chain(args))
}

fn collect_output(command_result: &Output) -> String {
	let stdout = String::from_utf8_lossy(&command_result.stdout);
	let stderr = String::from_utf8_lossy(&command_result.stderr);

	[stdout.trim(), stderr.trim()]
		.into_iter()
		.filter(|stream| !stream.is_empty())
		.collect::<Vec<_>>()
		.join("\n")
}

/// Makes a path absolute against the current directory without touching the
/// filesystem, so no `\\?\` prefixes are introduced on Windows.
pub fn absolute_path<P>(path: P) -> Result<PathBuf>
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	absolute(path).with_context(|| format!("unable to make {} absolute", path.display()))
}

/// Deletes a file, treating an already-missing file as success. Any other
/// failure is logged instead of returned.
///
/// Returns whether a file was actually removed.
pub fn remove_file_quietly<P>(path: P) -> bool
where
	P: AsRef<Path>,
{
	let path = path.as_ref();
	match std::fs::remove_file(path) {
		Ok(()) => {
			debug!("removed {}", path.display());
			true
		}
		Err(error) if error.kind() == ErrorKind::NotFound => false,
		Err(error) => {
			warn!("unable to remove {}: {error}", path.display());
			false
		}
	}
}

#[cfg(test)]
pub use self::scratch::ScratchDir;
