//! This module is separated into its own crate so that `stripgif` can re-export a stable surface, and should not be used directly.

/// `use stripgif::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export stripgif_types for convenience
pub use stripgif_types;

// Re-export commonly used types at crate root
pub use stripgif_types::{
	SourceKind, StripError,
	convert::{Conversion, ConversionReport},
	descriptor::{AnimationDescriptor, OverridePolicy, ParseConfig},
	paths::BaseDir,
	sprite::SpriteStrip,
};
