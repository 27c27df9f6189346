//! Prelude module for `stripgif_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```
//! use stripgif_types::prelude::*;
//!
//! let descriptor = AnimationDescriptor::from_json_str(r#"{"animation":{}}"#).unwrap();
//! let timeline = Timeline::build(&descriptor, 4, &ParseConfig::default()).unwrap();
//! assert_eq!(timeline.len(), 4);
//! ```

#[doc(inline)]
pub use crate::{
	// Assembly
	assemble::{AnimationAssembler, AssemblyConfig, OutputFrame, OutputTimeline, TIME_UNIT_MS},

	// Conversion
	convert::{Conversion, ConversionReport},

	// Descriptor types
	descriptor::{
		AnimationDescriptor, FrameOrder, OrderEntry, OverridePolicy, ParseConfig, TimingOverride,
	},

	// Encoding
	encode::{GifProbe, probe_gif, save_gif, write_gif},

	// Errors
	error::{SourceKind, StripError},

	interpolate::{RenderedFrame, blend},

	// Palette types
	palette::{Color, Palette},

	paths::{BaseDir, descriptor_path, output_path},

	sprite::{SourceFrame, SpriteStrip, TARGET_SIZE},

	timeline::{Timeline, TimelineEntry},

	// Transparency
	transparency::{
		ALPHA_THRESHOLD, IndexedFrame, PaletteTransparencyMapper, ReservedIndexLayout, RotateToZero,
	},
};
