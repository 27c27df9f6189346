//! End-to-end conversion of one sprite strip.
//!
//! ```no_run
//! use stripgif_types::convert::Conversion;
//! use stripgif_types::paths::BaseDir;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = Conversion::new(BaseDir::from_executable()?).run("textures/lava_flow.png")?;
//! println!("{} frames -> {}", report.frames, report.output.display());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use log::info;

use crate::assemble::{AnimationAssembler, AssemblyConfig, OutputTimeline};
use crate::descriptor::{AnimationDescriptor, ParseConfig};
use crate::encode;
use crate::error::StripError;
use crate::paths::{self, BaseDir};
use crate::sprite::SpriteStrip;
use crate::timeline::Timeline;

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
	/// Written GIF
	pub output: PathBuf,
	/// Frames in the GIF
	pub frames: usize,
	/// Total loop length in milliseconds
	pub total_ms: u64,
}

/// Settings for converting sprite strips.
#[derive(Debug, Clone)]
pub struct Conversion {
	base: BaseDir,
	parse: ParseConfig,
	assembly: AssemblyConfig,
	output: Option<PathBuf>,
}

impl Conversion {
	/// Conversion with default settings, resolving paths against `base`.
	pub fn new(base: BaseDir) -> Self {
		Self {
			base,
			parse: ParseConfig::default(),
			assembly: AssemblyConfig::default(),
			output: None,
		}
	}

	/// Sets the descriptor parse configuration.
	pub fn with_parse_config(mut self, parse: ParseConfig) -> Self {
		self.parse = parse;
		self
	}

	/// Sets the assembly configuration.
	pub fn with_assembly_config(mut self, assembly: AssemblyConfig) -> Self {
		self.assembly = assembly;
		self
	}

	/// Writes to `output` instead of next to the sprite.
	pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
		self.output = Some(output.into());
		self
	}

	/// Loads the sprite and its descriptor and builds the output timeline
	/// without writing anything.
	pub fn render(&self, sprite: impl AsRef<Path>) -> Result<OutputTimeline, StripError> {
		let sprite = self.base.resolve(sprite);
		let descriptor_path = paths::descriptor_path(&sprite);

		// descriptor before sprite
		let descriptor = AnimationDescriptor::open(&descriptor_path)?;
		let strip = SpriteStrip::open(&sprite, self.assembly.target_size)?;
		let timeline = Timeline::build(&descriptor, strip.frame_count(), &self.parse)?;

		AnimationAssembler::with_config(&strip, &self.assembly).assemble(&timeline)
	}

	/// Converts a sprite strip and writes the GIF.
	///
	/// # Errors
	///
	/// Any [`StripError`] from loading, timeline construction or encoding. No
	/// output is written when an earlier stage fails.
	pub fn run(&self, sprite: impl AsRef<Path>) -> Result<ConversionReport, StripError> {
		let sprite = sprite.as_ref();
		let timeline = self.render(sprite)?;

		let output = match &self.output {
			Some(path) => self.base.resolve(path),
			None => paths::output_path(self.base.resolve(sprite)),
		};
		encode::save_gif(&timeline, &output)?;

		info!(
			"{} -> {} ({} frames, {} ms loop)",
			sprite.display(),
			output.display(),
			timeline.len(),
			timeline.total_ms()
		);

		Ok(ConversionReport {
			output,
			frames: timeline.len(),
			total_ms: timeline.total_ms(),
		})
	}
}
