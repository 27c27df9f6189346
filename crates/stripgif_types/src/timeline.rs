//! Timeline construction.
//!
//! A [`Timeline`] pairs every frame order position with its cyclic successor
//! and the display time multiplier that applies there. Interpolation and
//! quantization happen later, in the assembler.

use std::fmt;

use log::debug;

use crate::descriptor::{AnimationDescriptor, FrameOrder, ParseConfig};
use crate::error::StripError;

/// One displayed order position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
	/// Source frame shown at this position
	pub source: usize,
	/// Source frame of the following position, wrapping to the first
	pub next: usize,
	/// Position within the frame order
	pub position: usize,
	/// Display time multiplier (1 unless the timing override targets this position)
	pub multiplier: u32,
}

impl TimelineEntry {
	/// True when the entry and its successor show different frames, so blending
	/// between them produces new images.
	#[inline]
	pub fn blends(&self) -> bool {
		self.source != self.next
	}
}

impl fmt::Display for TimelineEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}: {} -> {} (x{})", self.position, self.source, self.next, self.multiplier)
	}
}

/// Ordered timeline entries plus the descriptor's global timing settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
	entries: Vec<TimelineEntry>,
	interpolate: bool,
	frametime: u32,
}

impl Timeline {
	/// Builds the timeline for a strip with `frame_count` frames.
	///
	/// # Errors
	///
	/// Propagates frame order errors: multiple overrides under a strict policy
	/// and indices past the end of the strip.
	pub fn build(
		descriptor: &AnimationDescriptor,
		frame_count: usize,
		config: &ParseConfig,
	) -> Result<Self, StripError> {
		let order = descriptor.frame_order(frame_count, config)?;
		let timeline =
			Self::from_order(&order, descriptor.interpolate(), descriptor.frametime());
		debug!(
			"Timeline: {} entries, frametime {}, interpolate {}, {} units",
			timeline.len(),
			timeline.frametime,
			timeline.interpolate,
			timeline.total_units()
		);
		Ok(timeline)
	}

	/// Builds the timeline from an already resolved frame order.
	pub fn from_order(order: &FrameOrder, interpolate: bool, frametime: u32) -> Self {
		let indices = order.indices();
		let entries = indices
			.iter()
			.enumerate()
			.map(|(position, &source)| TimelineEntry {
				source: source as usize,
				next: indices[(position + 1) % indices.len()] as usize,
				position,
				multiplier: order.multiplier_at(position),
			})
			.collect();

		Self {
			entries,
			interpolate,
			frametime,
		}
	}

	/// Timeline entries in display order.
	pub fn entries(&self) -> &[TimelineEntry] {
		&self.entries
	}

	/// Whether intermediate frames are blended.
	pub fn interpolate(&self) -> bool {
		self.interpolate
	}

	/// Base time units per declared frame.
	pub fn frametime(&self) -> u32 {
		self.frametime
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the timeline has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of frames emitted for this timeline with blending on or off.
	pub fn output_frame_count(&self, blending: bool) -> usize {
		self.entries
			.iter()
			.map(|e| if blending && e.blends() { self.frametime as usize } else { 1 })
			.sum()
	}

	/// Total display time in base units.
	pub fn total_units(&self) -> u64 {
		self.entries.iter().map(|e| self.units(e.multiplier)).sum()
	}

	/// Display time of one unblended entry: `frametime * multiplier` base units.
	#[inline]
	pub fn units(&self, multiplier: u32) -> u64 {
		u64::from(self.frametime) * u64::from(multiplier)
	}
}
