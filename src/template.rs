//! The module for materializing copies of the template library.

// Uses
use std::{
	fs::{canonicalize, File},
	io::copy,
	path::Path,
};

use anyhow::{bail, Context, Result};

/// Copies the template to `destination`, replacing whatever is there.
///
/// Only the contents are copied, not the permissions: the copy has to stay
/// writable for the merge step even when the template is read-only.
///
/// Fails without touching anything if `destination` is the template itself.
pub fn materialize_template<P, Q>(template: P, destination: Q) -> Result<u64>
where
	P: AsRef<Path>,
	Q: AsRef<Path>,
{
	let template = template.as_ref();
	let destination = destination.as_ref();

	let mut template_file = File::open(template)
		.with_context(|| format!("unable to open the template {}", template.display()))?;
	if is_same_file(template, destination)? {
		bail!(
			"{} is the template itself and would be overwritten",
			destination.display()
		);
	}
	let mut destination_file = File::create(destination)
		.with_context(|| format!("unable to open {} for writing", destination.display()))?;

	copy(&mut template_file, &mut destination_file).with_context(|| {
		format!(
			"unable to copy the template to {}",
			destination.display()
		)
	})
}

fn is_same_file(template: &Path, destination: &Path) -> Result<bool> {
	if !destination.exists() {
		return Ok(false);
	}

	let template = canonicalize(template)
		.with_context(|| format!("unable to resolve the template {}", template.display()))?;
	let destination = canonicalize(destination)
		.with_context(|| format!("unable to resolve {}", destination.display()))?;

	Ok(template == destination)
}

#[cfg(test)]
mod tests {
	// Uses
	use std::fs::{read, set_permissions};

	use super::*;
	use crate::util::ScratchDir;

	const TEMPLATE_BYTES: &[u8] = b"MZ\x90\x00\x03\x00\x00\x00template body\x00\xff";

	#[test]
	fn copy_is_byte_identical() {
		let scratch = ScratchDir::new("template-copy");
		let template = scratch.write("template.dll", TEMPLATE_BYTES);
		let destination = scratch.path().join("icons.dll");

		let copied = materialize_template(&template, &destination).unwrap();

		assert_eq!(copied, TEMPLATE_BYTES.len() as u64);
		assert_eq!(read(&destination).unwrap(), TEMPLATE_BYTES);
	}

	#[test]
	fn existing_destination_is_replaced() {
		let scratch = ScratchDir::new("template-overwrite");
		let template = scratch.write("template.dll", TEMPLATE_BYTES);
		let destination = scratch.write(
			"icons.dll",
			b"a much longer library left over from a previous run, with resources merged in",
		);

		materialize_template(&template, &destination).unwrap();

		assert_eq!(read(&destination).unwrap(), TEMPLATE_BYTES);
	}

	#[test]
	fn read_only_template_yields_a_writable_copy() {
		let scratch = ScratchDir::new("template-readonly");
		let template = scratch.write("template.dll", TEMPLATE_BYTES);
		let mut permissions = template.metadata().unwrap().permissions();
		permissions.set_readonly(true);
		set_permissions(&template, permissions).unwrap();
		let destination = scratch.path().join("icons.dll");

		materialize_template(&template, &destination).unwrap();

		assert!(!destination.metadata().unwrap().permissions().readonly());
	}

	#[test]
	fn missing_template_is_an_error() {
		let scratch = ScratchDir::new("template-missing");

		let error = materialize_template(
			scratch.path().join("missing.dll"),
			scratch.path().join("icons.dll"),
		)
		.unwrap_err();

		assert!(error.to_string().contains("unable to open the template"));
		assert!(!scratch.path().join("icons.dll").exists());
	}

	#[test]
	fn template_is_never_its_own_destination() {
		let scratch = ScratchDir::new("template-same-file");
		let template = scratch.write("out/template.dll", TEMPLATE_BYTES);
		scratch.mkdir("out/sub");

		let error = materialize_template(&template, scratch.path().join("out/sub/../template.dll"))
			.unwrap_err();

		assert!(error.to_string().contains("is the template itself"));
		assert_eq!(read(&template).unwrap(), TEMPLATE_BYTES);
	}

	#[test]
	fn missing_destination_directory_is_an_error() {
		let scratch = ScratchDir::new("template-no-dir");
		let template = scratch.write("template.dll", TEMPLATE_BYTES);

		assert!(
			materialize_template(&template, scratch.path().join("missing/icons.dll")).is_err()
		);
	}
}
