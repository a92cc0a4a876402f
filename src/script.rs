//! The module for generating resource scripts that list the icons in a
//! folder.

// Uses
use std::{
	fs::{read_dir, File},
	io::Write,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::trace;

use crate::{
	constants::{ICON_FILE_SUFFIX, ICON_ID_PREFIX},
	util::absolute_path,
};

/// Writes a resource script to `script_path` with one `ICON` statement per
/// icon file directly inside `icon_folder`.
///
/// Returns the absolute icon paths in identifier order.
pub fn generate_script<P, Q>(icon_folder: P, script_path: Q) -> Result<Vec<PathBuf>>
where
	P: AsRef<Path>,
	Q: AsRef<Path>,
{
	let icon_folder = absolute_path(icon_folder)?;
	let icon_files = collect_icon_files(&icon_folder)?;

	let mut script_file = File::create(script_path.as_ref()).with_context(|| {
		format!(
			"unable to open {} for writing",
			script_path.as_ref().display()
		)
	})?;
	script_file
		.write_all(render_script(icon_files.as_slice()).as_bytes())
		.with_context(|| "unable to write the resource script")?;

	Ok(icon_files)
}

/// Lists the icon files directly inside `icon_folder`, sorted by file name so
/// that identifiers come out the same on every platform.
pub fn collect_icon_files<P>(icon_folder: P) -> Result<Vec<PathBuf>>
where
	P: AsRef<Path>,
{
	let icon_folder = icon_folder.as_ref();

	let mut icon_files = Vec::new();
	for entry in read_dir(icon_folder)
		.with_context(|| format!("unable to read the icon folder {}", icon_folder.display()))?
	{
		let path = entry
			.with_context(|| format!("unable to list the contents of {}", icon_folder.display()))?
			.path();
		if is_icon_file(&path) {
			trace!("found icon {}", path.display());
			icon_files.push(path);
		}
	}

	icon_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

	Ok(icon_files)
}

/// Formats the resource script for the provided icons, numbering them from 1.
pub fn render_script(icon_files: &[PathBuf]) -> String {
	let mut script = String::new();

	for (index, icon_file) in icon_files.iter().enumerate() {
		script.push_str(
			format!(
				"{ICON_ID_PREFIX}{} ICON \"{}\"\n",
				index + 1,
				icon_file.display()
			)
			.as_str(),
		);
	}

	script
}

fn is_icon_file(path: &Path) -> bool {
	// A directory named `something.ico` is not an icon
	if !path.is_file() {
		return false;
	}

	path.file_name().is_some_and(|file_name| {
		file_name
			.to_string_lossy()
			.to_ascii_lowercase()
			.ends_with(ICON_FILE_SUFFIX)
	})
}
