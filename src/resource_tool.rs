//! The module for driving the external resource editor.

// Uses
use std::{
	path::{Path, PathBuf},
	process::Command,
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::util::run_command;

/// The two things the pipeline needs from a resource editor.
pub trait ResourceTool {
	/// Compiles the resource script at `script` into a compiled resource
	/// object at `compiled_resource`.
	fn compile(&self, script: &Path, compiled_resource: &Path) -> Result<()>;

	/// Merges `compiled_resource` into `library` in place, overwriting any
	/// resources that share a type and name.
	fn merge(&self, compiled_resource: &Path, library: &Path) -> Result<()>;
}

/// Resource Hacker, driven through its command-line interface.
///
/// <http://www.angusj.com/resourcehacker/>
#[derive(Debug, Clone)]
pub struct ResourceHacker {
	executable: PathBuf,
}

impl ResourceHacker {
	pub fn new<P>(executable: P) -> Self
	where
		P: Into<PathBuf>,
	{
		Self {
			executable: executable.into(),
		}
	}

	fn compile_command(&self, script: &Path, compiled_resource: &Path) -> Command {
		let mut command = Command::new(&self.executable);
		command
			.arg("-open")
			.arg(script)
			.arg("-save")
			.arg(compiled_resource)
			.arg("-action")
			.arg("compile");
		command
	}

	fn merge_command(&self, compiled_resource: &Path, library: &Path) -> Command {
		let mut command = Command::new(&self.executable);
		command
			.arg("-open")
			.arg(library)
			.arg("-save")
			.arg(library) // Saved in place
			.arg("-resource")
			.arg(compiled_resource)
			.arg("-action")
			.arg("addoverwrite");
		command
	}
}

impl ResourceTool for ResourceHacker {
	fn compile(&self, script: &Path, compiled_resource: &Path) -> Result<()> {
		let output = run_command(self.compile_command(script, compiled_resource))
			.with_context(|| format!("unable to compile {}", script.display()))?;
		if !output.is_empty() {
			debug!("Resource Hacker output:\n{output}");
		}

		Ok(())
	}

	fn merge(&self, compiled_resource: &Path, library: &Path) -> Result<()> {
		let output = run_command(self.merge_command(compiled_resource, library)).with_context(
			|| {
				format!(
					"unable to merge {} into {}",
					compiled_resource.display(),
					library.display()
				)
			},
		)?;
		if !output.is_empty() {
			debug!("Resource Hacker output:\n{output}");
		}

		Ok(())
	}
}

#[cfg(test)]
pub use self::fake::FakeTool;

#[cfg(test)]
mod fake {
	// Uses
	use std::{
		cell::RefCell,
		fs::{read, read_to_string, write, OpenOptions},
		io::Write,
		path::Path,
	};

	use anyhow::{bail, Result};

	use super::ResourceTool;

	/// A stand-in for the external editor. Compiling copies the script to the
	/// compiled resource path and merging appends it to the library, so tests
	/// can see what went where.
	#[derive(Debug, Default)]
	pub struct FakeTool {
		/// Every call made, as `compile <file name>` or `merge <file name>`.
		pub calls:           RefCell<Vec<String>>,
		/// The contents of every script handed to `compile`.
		pub scripts:         RefCell<Vec<String>>,
		pub fail_compile_of: Option<&'static str>,
		pub fail_merge_of:   Option<&'static str>,
	}

	impl FakeTool {
		pub fn failing_compile_of(folder_name: &'static str) -> Self {
			Self {
				fail_compile_of: Some(folder_name),
				..Self::default()
			}
		}

		pub fn failing_merge_of(folder_name: &'static str) -> Self {
			Self {
				fail_merge_of: Some(folder_name),
				..Self::default()
			}
		}

		pub fn calls(&self) -> Vec<String> {
			self.calls.borrow().clone()
		}
	}

	fn stem_of(path: &Path) -> String {
		path.file_stem()
			.map(|stem| stem.to_string_lossy().into_owned())
			.unwrap_or_default()
	}

	impl ResourceTool for FakeTool {
		fn compile(&self, script: &Path, compiled_resource: &Path) -> Result<()> {
			let name = stem_of(script);
			self.calls.borrow_mut().push(format!("compile {name}"));
			let contents = read_to_string(script)?;
			self.scripts.borrow_mut().push(contents.clone());

			if self.fail_compile_of == Some(name.as_str()) {
				bail!("fake compile failure for {name}");
			}

			write(compiled_resource, contents)?;
			Ok(())
		}

		fn merge(&self, compiled_resource: &Path, library: &Path) -> Result<()> {
			let name = stem_of(library);
			self.calls.borrow_mut().push(format!("merge {name}"));

			if self.fail_merge_of == Some(name.as_str()) {
				bail!("fake merge failure for {name}");
			}

			let resource = read(compiled_resource)?;
			let mut library_file = OpenOptions::new().append(true).open(library)?;
			library_file.write_all(&resource)?;
			Ok(())
		}
	}
}
