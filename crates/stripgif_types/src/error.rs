//! Error types for sprite slicing, descriptor parsing and GIF output.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which input or output an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
	/// The sprite strip image
	Sprite,
	/// The `.mcmeta` animation descriptor
	Descriptor,
	/// The produced GIF
	Output,
}

impl fmt::Display for SourceKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SourceKind::Sprite => write!(f, "sprite"),
			SourceKind::Descriptor => write!(f, "descriptor"),
			SourceKind::Output => write!(f, "output"),
		}
	}
}

/// Errors that can occur while turning a sprite strip into an animation.
#[derive(Debug, Error)]
pub enum StripError {
	/// An input file is missing or unreadable
	#[error("{} not found: {kind} file could not be read ({source})", path.display())]
	SourceNotFound {
		/// Which input was missing
		kind: SourceKind,
		/// Path that was looked up
		path: PathBuf,
		/// Underlying IO error
		#[source]
		source: std::io::Error,
	},

	/// The sprite file exists but is not a decodable image
	#[error("{} could not be decoded as an image: {source}", path.display())]
	UndecodableSprite {
		/// Sprite path
		path: PathBuf,
		/// Decoder error
		#[source]
		source: image::ImageError,
	},

	/// The descriptor is not valid JSON or lacks the `animation` object
	#[error("Malformed descriptor {}: {source}", path.display())]
	MalformedDescriptor {
		/// Descriptor path (empty when parsed from memory)
		path: PathBuf,
		/// JSON error
		#[source]
		source: serde_json::Error,
	},

	/// The descriptor parsed but holds a value the animation cannot use
	#[error("Invalid descriptor: {message}")]
	InvalidDescriptor {
		/// What was wrong
		message: String,
	},

	/// More than one timing override under a policy that rejects it
	#[error(
		"Descriptor has more than one timing override (frame list slots {first} and {second})"
	)]
	MultipleOverrides {
		/// Slot of the first override in the raw frame list
		first: usize,
		/// Slot of the second override in the raw frame list
		second: usize,
	},

	/// A frame order entry references a frame the strip does not contain
	#[error(
		"Frame order position {position} references frame {index}, but the strip has {frame_count} frames"
	)]
	FrameOutOfRange {
		/// Position in the frame order
		position: usize,
		/// Referenced source frame
		index: u32,
		/// Frames available in the strip
		frame_count: usize,
	},

	/// The strip is shorter than it is wide
	#[error("Sprite strip {width}x{height} holds no square frame")]
	EmptySprite {
		/// Strip width
		width: u32,
		/// Strip height
		height: u32,
	},

	/// Two frames of different size were blended
	#[error("Cannot blend a {left:?} frame with a {right:?} frame")]
	FrameSizeMismatch {
		/// Dimensions of the first frame
		left: (u32, u32),
		/// Dimensions of the second frame
		right: (u32, u32),
	},

	/// Frames exceed the 65535 pixel edge a GIF can describe
	#[error("{width}x{height} frames do not fit in a GIF")]
	FrameTooLarge {
		/// Frame width
		width: u32,
		/// Frame height
		height: u32,
	},

	/// GIF encoder failure
	#[error(transparent)]
	Encode(#[from] gif::EncodingError),

	/// Image decoder failure outside sprite loading
	#[error(transparent)]
	Decode(#[from] image::ImageError),

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl StripError {
	/// Creates an [`StripError::InvalidDescriptor`] from any message.
	pub fn invalid_descriptor(message: impl Into<String>) -> Self {
		Self::InvalidDescriptor {
			message: message.into(),
		}
	}

	/// Creates a [`StripError::SourceNotFound`].
	pub fn not_found(kind: SourceKind, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::SourceNotFound {
			kind,
			path: path.into(),
			source,
		}
	}
}
