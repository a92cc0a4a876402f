//! The module for turning a single folder of icons into a library.

// Uses
use std::{
	ffi::OsStr,
	path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use tracing::{debug, info, warn};

use crate::{
	config::Config,
	constants::{COMPILED_RESOURCE_EXTENSION, LIBRARY_EXTENSION, SCRIPT_EXTENSION},
	resource_tool::ResourceTool,
	script::generate_script,
	template::materialize_template,
	util::remove_file_quietly,
};

/// The files produced while processing one folder. All of them sit in the
/// output root and are named after the folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderArtifacts {
	pub script:            PathBuf,
	pub compiled_resource: PathBuf,
	pub library:           PathBuf,
}

impl FolderArtifacts {
	pub fn new(output_root: &Path, folder_name: &OsStr) -> Self {
		// `Path::with_extension` would clobber anything after a dot in the folder
		// name
		let artifact_path = |extension: &str| {
			let mut file_name = folder_name.to_os_string();
			file_name.push(".");
			file_name.push(extension);
			output_root.join(file_name)
		};

		Self {
			script:            artifact_path(SCRIPT_EXTENSION),
			compiled_resource: artifact_path(COMPILED_RESOURCE_EXTENSION),
			library:           artifact_path(LIBRARY_EXTENSION),
		}
	}

	/// Deletes the script and compiled resource, whichever of them exist.
	pub fn remove_intermediates(&self) {
		remove_file_quietly(&self.script);
		remove_file_quietly(&self.compiled_resource);
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderReport {
	pub library:    PathBuf,
	pub icon_count: usize,
}

/// Builds the library for `icon_folder`: generate the script, copy the
/// template, compile, merge, then clean up.
///
/// Intermediates are removed whether or not the build succeeded, unless the
/// configuration says to keep them.
pub fn process_folder<T>(tool: &T, config: &Config, icon_folder: &Path) -> Result<FolderReport>
where
	T: ResourceTool + ?Sized,
{
	let folder_name = icon_folder
		.file_name()
		.ok_or_else(|| anyhow!("{} does not name a folder", icon_folder.display()))?;
	let artifacts = FolderArtifacts::new(&config.output_root, folder_name);
	debug!("{artifacts:?}");

	let result = build_library(tool, &config.template, icon_folder, &artifacts);

	if config.keep_intermediates {
		debug!(
			"keeping {} and {}",
			artifacts.script.display(),
			artifacts.compiled_resource.display()
		);
	} else {
		artifacts.remove_intermediates();
	}

	result
}

fn build_library<T>(
	tool: &T,
	template: &Path,
	icon_folder: &Path,
	artifacts: &FolderArtifacts,
) -> Result<FolderReport>
where
	T: ResourceTool + ?Sized,
{
	let icon_files = generate_script(icon_folder, &artifacts.script)
		.with_context(|| "unable to generate the resource script")?;

	let template_size = materialize_template(template, &artifacts.library)
		.with_context(|| "unable to create the library from the template")?;
	debug!(
		"copied {template_size} bytes of template to {}",
		artifacts.library.display()
	);

	if icon_files.is_empty() {
		// The editor's handling of an empty script is undefined, so it isn't run
		warn!(
			"no icons found in {}; {} is an unmodified copy of the template",
			icon_folder.display(),
			artifacts.library.display()
		);
	} else {
		tool.compile(&artifacts.script, &artifacts.compiled_resource)?;
		tool.merge(&artifacts.compiled_resource, &artifacts.library)?;
		info!("Icons compiled into {}", artifacts.library.display());
	}

	Ok(FolderReport {
		library:    artifacts.library.clone(),
		icon_count: icon_files.len(),
	})
}
