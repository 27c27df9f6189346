//! This crate provides the core types and pipeline for the `stripgif` project.
//!
//! # Pipeline
//!
//! - **sprite**: slices a vertical strip of square frames and resamples each to 32×32
//! - **descriptor**: parses the `.mcmeta` JSON descriptor (frame order, timing, interpolation)
//! - **timeline**: pairs each frame order position with its successor and duration multiplier
//! - **interpolate**: blends two frames linearly
//! - **transparency**: quantizes a frame to an indexed palette with index 0 transparent
//! - **assemble**: turns a timeline into quantized frames with durations
//! - **encode**: writes the result as a looping GIF
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use stripgif_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let strip = SpriteStrip::open("water_flow.png", TARGET_SIZE)?;
//! let descriptor = AnimationDescriptor::open("water_flow.png.mcmeta")?;
//! let timeline = Timeline::build(&descriptor, strip.frame_count(), &ParseConfig::default())?;
//!
//! let output = AnimationAssembler::new(&strip).assemble(&timeline)?;
//! save_gif(&output, "water_flow.gif")?;
//! # Ok(())
//! # }
//! ```

pub mod assemble;
pub mod convert;
pub mod descriptor;
pub mod encode;
mod error;
pub mod interpolate;
pub mod palette;
pub mod paths;
pub mod quantize;
pub mod sprite;
pub mod timeline;
pub mod transparency;

/// `use stripgif_types::prelude::*;` to import commonly used items.
pub mod prelude;

pub use error::{SourceKind, StripError};
