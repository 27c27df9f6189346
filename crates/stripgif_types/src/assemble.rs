//! Animation assembly.
//!
//! Walks a [`Timeline`], renders each entry (blending when interpolation is on),
//! quantizes the result and records how long it is shown. Durations are kept in
//! base time units; [`OutputTimeline::time_unit_ms`] converts them.
//!
//! | entry kind                          | frames emitted | units per frame          |
//! |-------------------------------------|----------------|--------------------------|
//! | interpolated, source != successor   | `frametime`    | `multiplier`             |
//! | otherwise                           | 1              | `frametime * multiplier` |

use log::{debug, trace};

use crate::error::StripError;
use crate::interpolate::{self, RenderedFrame};
use crate::palette::Palette;
use crate::sprite::{SourceFrame, SpriteStrip, TARGET_SIZE};
use crate::timeline::{Timeline, TimelineEntry};
use crate::transparency::{ALPHA_THRESHOLD, IndexedFrame, PaletteTransparencyMapper, RotateToZero};

/// Length of one base time unit in milliseconds (1/20 s).
pub const TIME_UNIT_MS: u32 = 1000 / 20;

/// Tunables for slicing and assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyConfig {
	/// Edge length frames are resampled to
	pub target_size: u32,
	/// Milliseconds per base time unit
	pub time_unit_ms: u32,
	/// Alpha values above this are opaque
	pub alpha_threshold: u8,
	/// Forces interpolation on or off, ignoring the descriptor
	pub interpolate_override: Option<bool>,
}

impl Default for AssemblyConfig {
	fn default() -> Self {
		Self {
			target_size: TARGET_SIZE,
			time_unit_ms: TIME_UNIT_MS,
			alpha_threshold: ALPHA_THRESHOLD,
			interpolate_override: None,
		}
	}
}

/// One output frame and its display time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFrame {
	/// Quantized frame
	pub frame: IndexedFrame,
	/// Display time in base units
	pub duration: u64,
	/// Timeline position the frame was rendered for
	pub position: usize,
}

/// Ordered output frames, ready for the GIF encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTimeline {
	frames: Vec<OutputFrame>,
	time_unit_ms: u32,
}

impl Default for OutputTimeline {
	fn default() -> Self {
		Self {
			frames: Vec::new(),
			time_unit_ms: TIME_UNIT_MS,
		}
	}
}

impl OutputTimeline {
	/// Output frames in display order.
	pub fn frames(&self) -> &[OutputFrame] {
		&self.frames
	}

	/// Number of output frames.
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Returns true if there are no frames.
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Milliseconds per base unit.
	pub fn time_unit_ms(&self) -> u32 {
		self.time_unit_ms
	}

	/// Frame durations in base units.
	pub fn durations(&self) -> impl Iterator<Item = u64> + '_ {
		self.frames.iter().map(|f| f.duration)
	}

	/// Frame durations in milliseconds, saturating at `u64::MAX`.
	pub fn durations_ms(&self) -> impl Iterator<Item = u64> + '_ {
		let unit = u64::from(self.time_unit_ms);
		self.durations().map(move |d| d.saturating_mul(unit))
	}

	/// Total display time in milliseconds, saturating at `u64::MAX`.
	pub fn total_ms(&self) -> u64 {
		self.durations_ms().fold(0, u64::saturating_add)
	}

	/// Palette used for the container: the first frame's palette.
	pub fn global_palette(&self) -> Option<&Palette> {
		self.frames.first().map(|f| f.frame.palette())
	}

	/// Width and height shared by all frames.
	pub fn dimensions(&self) -> Option<(u32, u32)> {
		self.frames.first().map(|f| (f.frame.width(), f.frame.height()))
	}
}

/// Drives rendering and quantization over a timeline.
#[derive(Debug, Clone)]
pub struct AnimationAssembler<'a> {
	strip: &'a SpriteStrip,
	mapper: PaletteTransparencyMapper<RotateToZero>,
	time_unit_ms: u32,
	interpolate_override: Option<bool>,
}

impl<'a> AnimationAssembler<'a> {
	/// Creates an assembler with default settings.
	pub fn new(strip: &'a SpriteStrip) -> Self {
		Self::with_config(strip, &AssemblyConfig::default())
	}

	/// Whether `timeline` is rendered with blended sub-frames, after applying
	/// [`AssemblyConfig::interpolate_override`].
	pub fn blends(&self, timeline: &Timeline) -> bool {
		self.interpolate_override.unwrap_or(timeline.interpolate())
	}

	/// Creates an assembler with explicit settings.
	pub fn with_config(strip: &'a SpriteStrip, config: &AssemblyConfig) -> Self {
		Self {
			strip,
			mapper: PaletteTransparencyMapper::with_layout(RotateToZero, config.alpha_threshold),
			time_unit_ms: config.time_unit_ms,
			interpolate_override: config.interpolate_override,
		}
	}

	/// Renders every timeline entry.
	///
	/// # Errors
	///
	/// [`StripError::FrameOutOfRange`] if an entry names a frame the strip
	/// lacks; timelines built against the same strip never do.
	pub fn assemble(&self, timeline: &Timeline) -> Result<OutputTimeline, StripError> {
		let blending = self.blends(timeline);
		let frametime = timeline.frametime();
		let mut frames = Vec::with_capacity(timeline.output_frame_count(blending));

		for entry in timeline.entries() {
			trace!("Rendering {entry}");
			let source = self.frame(entry, entry.source)?;

			if blending && entry.blends() {
				let next = self.frame(entry, entry.next)?;
				for step in 0..frametime {
					let t = interpolate::step_fraction(step, frametime);
					let rendered = interpolate::blend(source.pixels(), next.pixels(), t)?;
					frames.push(self.emit(&rendered, entry, u64::from(entry.multiplier)));
				}
			} else {
				let rendered = RenderedFrame::borrowed(source.pixels());
				frames.push(self.emit(&rendered, entry, timeline.units(entry.multiplier)));
			}
		}

		debug!(
			"Assembled {} frames from {} timeline entries (interpolate: {blending})",
			frames.len(),
			timeline.len()
		);

		Ok(OutputTimeline {
			frames,
			time_unit_ms: self.time_unit_ms,
		})
	}

	fn frame(
		&self,
		entry: &TimelineEntry,
		index: usize,
	) -> Result<&'a SourceFrame, StripError> {
		self.strip.get_frame(index).ok_or(StripError::FrameOutOfRange {
			position: entry.position,
			index: index as u32,
			frame_count: self.strip.frame_count(),
		})
	}

	fn emit(
		&self,
		rendered: &RenderedFrame<'_>,
		entry: &TimelineEntry,
		duration: u64,
	) -> OutputFrame {
		OutputFrame {
			frame: self.mapper.map(rendered, self.strip.has_alpha()),
			duration,
			position: entry.position,
		}
	}
}
