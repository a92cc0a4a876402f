//! The module for running every icon folder in the output root through the
//! pipeline and summarizing the results.

// Uses
use std::{
	borrow::Cow,
	fmt::{Display, Formatter, Result as FmtResult},
	fs::read_dir,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::{
	config::Config,
	pipeline::{process_folder, FolderReport},
	resource_tool::ResourceTool,
};

#[derive(Debug)]
pub struct FolderOutcome {
	pub folder: PathBuf,
	pub result: Result<FolderReport>,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
	pub outcomes:      Vec<FolderOutcome>,
	pub folders_found: usize,
	/// Set when fail-fast mode stopped the batch with folders left over.
	pub aborted:       bool,
}

impl BatchSummary {
	pub fn succeeded(&self) -> usize {
		self.outcomes
			.iter()
			.filter(|outcome| outcome.result.is_ok())
			.count()
	}

	pub fn failed(&self) -> usize {
		self.outcomes.len() - self.succeeded()
	}

	pub fn skipped(&self) -> usize {
		self.folders_found - self.outcomes.len()
	}

	pub fn is_success(&self) -> bool {
		self.failed() == 0
	}
}

impl Display for BatchSummary {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		for outcome in &self.outcomes {
			let name = display_name(&outcome.folder);
			match &outcome.result {
				Ok(report) => writeln!(
					f,
					"[OK]     {name} -> {} ({} icon{})",
					report.library.display(),
					report.icon_count,
					if report.icon_count == 1 { "" } else { "s" }
				)?,
				Err(error) => writeln!(f, "[FAILED] {name}: {error:#}")?,
			}
		}

		writeln!(f, "{} succeeded, {} failed", self.succeeded(), self.failed())?;
		if self.aborted {
			writeln!(
				f,
				"Stopped after the first failure; {} folder{} not processed",
				self.skipped(),
				if self.skipped() == 1 { " was" } else { "s were" }
			)?;
		}

		Ok(())
	}
}

/// Lists the immediate subdirectories of `output_root`, sorted by name.
/// Loose files, including the outputs of earlier runs, are ignored.
pub fn list_icon_folders<P>(output_root: P) -> Result<Vec<PathBuf>>
where
	P: AsRef<Path>,
{
	let output_root = output_root.as_ref();

	let mut folders = Vec::new();
	for entry in read_dir(output_root)
		.with_context(|| format!("unable to read the output root {}", output_root.display()))?
	{
		let path = entry
			.with_context(|| format!("unable to list the contents of {}", output_root.display()))?
			.path();
		if path.is_dir() {
			folders.push(path);
		}
	}

	folders.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

	Ok(folders)
}

/// Processes every folder in the output root, one after another.
///
/// A failed folder is recorded and the batch moves on, unless fail-fast mode
/// is on, in which case it stops there.
pub fn run_batch<T>(tool: &T, config: &Config) -> Result<BatchSummary>
where
	T: ResourceTool + ?Sized,
{
	let folders = list_icon_folders(&config.output_root)?;
	if folders.is_empty() {
		warn!(
			"no folders to process in {}",
			config.output_root.display()
		);
	}

	let mut summary = BatchSummary {
		folders_found: folders.len(),
		..BatchSummary::default()
	};
	for folder in folders {
		info!("Processing folder: {}", display_name(&folder));

		let result = process_folder(tool, config, &folder);
		let failed = result.is_err();
		if let Err(error) = &result {
			error!("{} failed: {error:#}", display_name(&folder));
		}
		summary.outcomes.push(FolderOutcome { folder, result });

		if failed && config.fail_fast {
			summary.aborted = summary.skipped() > 0;
			break;
		}
	}

	Ok(summary)
}

fn display_name(folder: &Path) -> Cow<'_, str> {
	folder
		.file_name()
		.map_or_else(|| folder.to_string_lossy(), |name| name.to_string_lossy())
}
