//! The module for resolving and validating the configuration of a run.
//!
//! Values come from the command line and, optionally, a JSON file passed with
//! `--config`. Command-line values win. The result is checked once, before any
//! folder is touched.

// Uses
use std::{
	fs::read_to_string,
	path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context, Error, Result};
use clap::ArgMatches;
use serde::Deserialize;

use crate::util::absolute_path;

/// Everything a run needs, fixed for its whole duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub resource_tool:      PathBuf,
	pub template:           PathBuf,
	pub output_root:        PathBuf,
	pub fail_fast:          bool,
	pub keep_intermediates: bool,
}

/// Configuration values from a single source, any of which may be absent.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialConfig {
	pub resource_tool:      Option<PathBuf>,
	pub template:           Option<PathBuf>,
	pub output_root:        Option<PathBuf>,
	pub fail_fast:          Option<bool>,
	pub keep_intermediates: Option<bool>,
}

impl PartialConfig {
	pub fn from_file<P>(path: P) -> Result<Self>
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref();
		let contents = read_to_string(path)
			.with_context(|| format!("unable to read the config file {}", path.display()))?;

		serde_json::from_str(contents.as_str())
			.with_context(|| format!("unable to parse the config file {}", path.display()))
	}

	pub fn from_matches(matches: &ArgMatches) -> Self {
		Self {
			resource_tool:      matches.get_one::<PathBuf>("resource-tool").cloned(),
			template:           matches.get_one::<PathBuf>("template").cloned(),
			output_root:        matches.get_one::<PathBuf>("output-root").cloned(),
			// Flags can only switch behaviour on, so an absent flag defers to the file
			fail_fast:          matches.get_flag("fail-fast").then_some(true),
			keep_intermediates: matches.get_flag("keep-intermediates").then_some(true),
		}
	}

	/// Fills in whatever this source is missing from `fallback`.
	#[must_use]
	pub fn or(self, fallback: Self) -> Self {
		Self {
			resource_tool:      self.resource_tool.or(fallback.resource_tool),
			template:           self.template.or(fallback.template),
			output_root:        self.output_root.or(fallback.output_root),
			fail_fast:          self.fail_fast.or(fallback.fail_fast),
			keep_intermediates: self.keep_intermediates.or(fallback.keep_intermediates),
		}
	}
}

impl Config {
	/// Builds the configuration from parsed command-line arguments, reading
	/// the config file they point to if there is one.
	pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
		let mut partial = PartialConfig::from_matches(matches);
		if let Some(config_path) = matches.get_one::<PathBuf>("config") {
			partial = partial.or(PartialConfig::from_file(config_path)?);
		}

		Self::resolve(partial)
	}

	pub fn resolve(partial: PartialConfig) -> Result<Self> {
		let resource_tool = partial
			.resource_tool
			.ok_or_else(|| missing_value("resource tool", "resource-tool"))?;
		let template = partial
			.template
			.ok_or_else(|| missing_value("template DLL", "template"))?;
		let output_root = partial
			.output_root
			.ok_or_else(|| missing_value("output root", "output-root"))?;

		// A bare program name would be looked up on `PATH` rather than in the
		// working directory
		Ok(Self {
			resource_tool: absolute_path(resource_tool)?,
			template: absolute_path(template)?,
			output_root: absolute_path(output_root)?,
			fail_fast: partial.fail_fast.unwrap_or(false),
			keep_intermediates: partial.keep_intermediates.unwrap_or(false),
		})
	}

	/// Checks that everything the configuration points to exists and is the
	/// right kind of filesystem entry.
	pub fn validate(&self) -> Result<()> {
		ensure_file(&self.resource_tool, "resource tool")?;
		ensure_file(&self.template, "template DLL")?;

		if !self.output_root.exists() {
			bail!(
				"the output root {} does not exist",
				self.output_root.display()
			);
		}
		if !self.output_root.is_dir() {
			bail!(
				"the output root {} is not a directory",
				self.output_root.display()
			);
		}

		Ok(())
	}
}

fn missing_value(description: &str, key: &str) -> Error {
	anyhow!("no {description} was provided; pass `--{key}` or set `{key}` in the config file")
}

fn ensure_file(path: &Path, description: &str) -> Result<()> {
	if !path.exists() {
		bail!("the {description} {} does not exist", path.display());
	}
	if !path.is_file() {
		bail!("the {description} {} is not a file", path.display());
	}

	Ok(())
}
