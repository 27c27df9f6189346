//! Frame order entries and their resolution into a plain index list.

use log::warn;

use crate::error::StripError;

use super::parse_config::{OverridePolicy, ParseConfig};

/// One entry of a descriptor's `frames` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderEntry {
	/// A bare frame index
	Plain(u32),
	/// An `{"index", "time"}` object: shows frame `index` and scales the
	/// display time of order position `index` by `multiplier`
	Override {
		/// Source frame, also the order position the multiplier applies to
		index: u32,
		/// Display time multiplier
		multiplier: u32,
	},
}

impl OrderEntry {
	/// Source frame index shown for this entry.
	pub fn index(&self) -> u32 {
		match *self {
			OrderEntry::Plain(index)
			| OrderEntry::Override {
				index,
				..
			} => index,
		}
	}
}

/// Display time multiplier attached to one order position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingOverride {
	/// Order position the multiplier applies to
	pub position: usize,
	/// Display time multiplier
	pub multiplier: u32,
}

impl TimingOverride {
	/// Multiplier for an order position: the override's when it targets
	/// `position`, otherwise 1.
	pub fn multiplier_at(override_: Option<&Self>, position: usize) -> u32 {
		match override_ {
			Some(o) if o.position == position => o.multiplier,
			_ => 1,
		}
	}
}

/// A resolved frame order: plain source indices plus at most one override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOrder {
	indices: Vec<u32>,
	timing_override: Option<TimingOverride>,
}

impl FrameOrder {
	/// Identity order `0..frame_count` without override.
	pub fn identity(frame_count: usize) -> Self {
		Self {
			indices: (0..frame_count as u32).collect(),
			timing_override: None,
		}
	}

	/// Resolves raw entries in a single left-to-right pass.
	///
	/// # Errors
	///
	/// [`StripError::MultipleOverrides`] when a second override is found and
	/// the policy is [`OverridePolicy::Reject`].
	pub fn resolve(entries: &[OrderEntry], config: &ParseConfig) -> Result<Self, StripError> {
		let mut indices = Vec::with_capacity(entries.len());
		let mut found: Option<(usize, TimingOverride)> = None;

		for (slot, entry) in entries.iter().enumerate() {
			indices.push(entry.index());

			let OrderEntry::Override {
				index,
				multiplier,
			} = *entry
			else {
				continue;
			};
			let candidate = TimingOverride {
				position: index as usize,
				multiplier,
			};

			found = match (found, config.override_policy) {
				(None, _) | (Some(_), OverridePolicy::LastWins) => Some((slot, candidate)),
				(Some(first), OverridePolicy::FirstWins) => Some(first),
				(Some((first, _)), OverridePolicy::Reject) => {
					return Err(StripError::MultipleOverrides {
						first,
						second: slot,
					});
				}
			};
		}

		let timing_override = found.map(|(_, o)| o);
		if let Some(o) = &timing_override {
			if o.position >= indices.len() {
				warn!(
					"Timing override targets position {} but the frame order has {} entries, it has no effect",
					o.position,
					indices.len()
				);
			}
		}

		Ok(Self {
			indices,
			timing_override,
		})
	}

	/// Source indices in display order.
	pub fn indices(&self) -> &[u32] {
		&self.indices
	}

	/// The timing override, if any.
	pub fn timing_override(&self) -> Option<&TimingOverride> {
		self.timing_override.as_ref()
	}

	/// Multiplier applied at an order position.
	pub fn multiplier_at(&self, position: usize) -> u32 {
		TimingOverride::multiplier_at(self.timing_override.as_ref(), position)
	}

	/// Number of order positions.
	pub fn len(&self) -> usize {
		self.indices.len()
	}

	/// Returns true if the order is empty.
	pub fn is_empty(&self) -> bool {
		self.indices.is_empty()
	}
}
