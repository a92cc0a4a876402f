// Uses
use std::io::Result;

#[cfg(windows)]
use winresource::WindowsResource;

// Constants
#[cfg(windows)]
const NEUTRAL_LCID: u16 = 0x0000;

/// Build script that prepares the application.
fn main() -> Result<()> {
	// OS-Specific Executable Packaging
	executable_packaging()?;

	Ok(())
}

/// Embeds the version information from `[package.metadata.winresource]`.
/// Windows-only.
fn executable_packaging() -> Result<()> {
	#[cfg(windows)]
	{
		WindowsResource::new().set_language(NEUTRAL_LCID).compile()?;
	}

	Ok(())
}
