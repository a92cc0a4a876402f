//! The module providing constants that need to be shared between several
//! modules.

// Constants
pub const APPLICATION_PROPER_NAME: &str = "icodll";
/// The suffix that marks a file as an icon. Matched without regard to ASCII
/// case.
pub const ICON_FILE_SUFFIX: &str = ".ico";
/// Prepended to the 1-based index of each icon to form its resource name.
pub const ICON_ID_PREFIX: &str = "ICON_";
pub const SCRIPT_EXTENSION: &str = "rc";
pub const COMPILED_RESOURCE_EXTENSION: &str = "res";
pub const LIBRARY_EXTENSION: &str = "dll";
