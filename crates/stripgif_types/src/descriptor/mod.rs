//! `.mcmeta` animation descriptor support.
//!
//! The descriptor is a JSON object next to the sprite strip:
//!
//! ```json
//! { "animation": {
//!     "interpolate": false,
//!     "frametime": 2,
//!     "frames": [0, 1, 2, {"index": 1, "time": 3}]
//! } }
//! ```
//!
//! Every field inside `animation` is optional. `interpolate` defaults to false,
//! `frametime` to 1 and `frames` to the identity order over the strip. Unknown
//! keys are ignored.
//!
//! # Usage Examples
//!
//! ```
//! use stripgif_types::descriptor::{AnimationDescriptor, ParseConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = r#"{"animation":{"frametime":5,"frames":[0,1,{"index":1,"time":3}]}}"#;
//! let descriptor = AnimationDescriptor::from_json_str(json)?;
//!
//! assert_eq!(descriptor.frametime(), 5);
//! let order = descriptor.frame_order(4, &ParseConfig::default())?;
//! assert_eq!(order.indices(), &[0, 1, 1]);
//! assert_eq!(order.multiplier_at(1), 3);
//! # Ok(())
//! # }
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{SourceKind, StripError};

pub mod order;
pub mod parse_config;

pub use order::{FrameOrder, OrderEntry, TimingOverride};
pub use parse_config::{OverridePolicy, ParseConfig};

/// Suffix appended to a sprite's file name to find its descriptor.
pub const DESCRIPTOR_SUFFIX: &str = ".mcmeta";

#[derive(Debug, Deserialize)]
struct RawDescriptor {
	animation: RawAnimation,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAnimation {
	interpolate: Option<bool>,
	frametime: Option<u32>,
	frames: Option<Vec<RawOrderEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawOrderEntry {
	Plain(u32),
	Override {
		index: u32,
		time: u32,
	},
}

/// Parsed animation metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationDescriptor {
	interpolate: bool,
	frametime: u32,
	frames: Option<Vec<OrderEntry>>,
}

impl AnimationDescriptor {
	/// Default number of base time units per frame.
	pub const DEFAULT_FRAMETIME: u32 = 1;

	/// Creates a descriptor with explicit values.
	pub fn new(interpolate: bool, frametime: u32, frames: Option<Vec<OrderEntry>>) -> Self {
		Self {
			interpolate,
			frametime,
			frames,
		}
	}

	/// Opens and parses a descriptor file.
	///
	/// # Errors
	///
	/// - [`StripError::SourceNotFound`] if the file cannot be read
	/// - [`StripError::MalformedDescriptor`] if it is not a descriptor
	/// - [`StripError::InvalidDescriptor`] for zero `frametime`/`time` or an
	///   empty `frames` list
	pub fn open(path: impl AsRef<Path>) -> Result<Self, StripError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path)
			.map_err(|e| StripError::not_found(SourceKind::Descriptor, path, e))?;
		Self::parse(&text, path)
	}

	/// Parses a descriptor from a reader.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, StripError> {
		let mut text = String::new();
		reader.read_to_string(&mut text)?;
		Self::from_json_str(&text)
	}

	/// Parses a descriptor from a JSON string.
	pub fn from_json_str(text: &str) -> Result<Self, StripError> {
		Self::parse(text, Path::new(""))
	}

	fn parse(text: &str, path: &Path) -> Result<Self, StripError> {
		let raw: RawDescriptor =
			serde_json::from_str(text).map_err(|source| StripError::MalformedDescriptor {
				path: PathBuf::from(path),
				source,
			})?;
		Self::from_raw(raw.animation)
	}

	fn from_raw(raw: RawAnimation) -> Result<Self, StripError> {
		let frametime = raw.frametime.unwrap_or(Self::DEFAULT_FRAMETIME);
		if frametime == 0 {
			return Err(StripError::invalid_descriptor("frametime must be a positive integer"));
		}

		let frames = match raw.frames {
			Some(entries) if entries.is_empty() => {
				return Err(StripError::invalid_descriptor("frames list is empty"));
			}
			Some(entries) => Some(
				entries
					.into_iter()
					.map(|entry| match entry {
						RawOrderEntry::Plain(index) => Ok(OrderEntry::Plain(index)),
						RawOrderEntry::Override {
							time: 0,
							index,
						} => Err(StripError::invalid_descriptor(format!(
							"time override for frame {index} must be a positive integer"
						))),
						RawOrderEntry::Override {
							index,
							time,
						} => Ok(OrderEntry::Override {
							index,
							multiplier: time,
						}),
					})
					.collect::<Result<Vec<_>, _>>()?,
			),
			None => None,
		};

		Ok(Self {
			interpolate: raw.interpolate.unwrap_or(false),
			frametime,
			frames,
		})
	}

	/// Whether intermediate frames are blended between declared frames.
	pub fn interpolate(&self) -> bool {
		self.interpolate
	}

	/// Base time units per declared frame.
	pub fn frametime(&self) -> u32 {
		self.frametime
	}

	/// Raw frame order entries, `None` when the descriptor left it out.
	pub fn frames(&self) -> Option<&[OrderEntry]> {
		self.frames.as_deref()
	}

	/// Resolves the frame order for a strip with `frame_count` frames.
	///
	/// Without an explicit `frames` list this is the identity order. Every
	/// index is checked against `frame_count`.
	pub fn frame_order(
		&self,
		frame_count: usize,
		config: &ParseConfig,
	) -> Result<FrameOrder, StripError> {
		let order = match &self.frames {
			Some(entries) => FrameOrder::resolve(entries, config)?,
			None => FrameOrder::identity(frame_count),
		};

		if let Some((position, &index)) =
			order.indices().iter().enumerate().find(|(_, i)| **i as usize >= frame_count)
		{
			return Err(StripError::FrameOutOfRange {
				position,
				index,
				frame_count,
			});
		}

		Ok(order)
	}
}

impl Default for AnimationDescriptor {
	fn default() -> Self {
		Self::new(false, Self::DEFAULT_FRAMETIME, None)
	}
}
