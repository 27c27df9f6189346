//! Path handling.
//!
//! Relative paths resolve against an explicit base directory instead of the
//! process working directory.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::descriptor::DESCRIPTOR_SUFFIX;

/// Extension of produced animations.
pub const OUTPUT_EXTENSION: &str = "gif";

/// Directory relative paths are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDir {
	root: PathBuf,
}

impl BaseDir {
	/// Uses `root` as the base directory.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
		}
	}

	/// Uses the directory holding the running executable.
	pub fn from_executable() -> std::io::Result<Self> {
		let exe = std::env::current_exe()?;
		let root = exe.parent().map(Path::to_path_buf).unwrap_or_default();
		Ok(Self::new(root))
	}

	/// The base directory.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Absolute paths pass through; relative ones are joined onto the base.
	pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
		let path = path.as_ref();
		if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) }
	}
}

/// Descriptor path for a sprite: the full file name plus `.mcmeta`.
pub fn descriptor_path(sprite: impl AsRef<Path>) -> PathBuf {
	let mut path = OsString::from(sprite.as_ref().as_os_str());
	path.push(DESCRIPTOR_SUFFIX);
	PathBuf::from(path)
}

/// Output path for a sprite: same location and stem, `.gif` extension.
pub fn output_path(sprite: impl AsRef<Path>) -> PathBuf {
	sprite.as_ref().with_extension(OUTPUT_EXTENSION)
}
