//! Sprite strip slicing.
//!
//! A strip stacks square frames vertically: a `W×H` image holds `H / W` frames,
//! frame `i` occupying rows `i*W .. (i+1)*W`. Rows left over when `W` does not
//! divide `H` are dropped. Every frame is resampled once, with nearest-neighbor
//! filtering, to the target resolution.
//!
//! ```no_run
//! use stripgif_types::sprite::SpriteStrip;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let strip = SpriteStrip::open("lava_flow.png", 32)?;
//! println!("{} frames, alpha: {}", strip.frame_count(), strip.has_alpha());
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use log::{debug, warn};

use crate::error::{SourceKind, StripError};

/// Edge length frames are resampled to.
pub const TARGET_SIZE: u32 = 32;

/// A single frame cut from the strip, already at target resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFrame {
	index: usize,
	pixels: RgbaImage,
}

impl SourceFrame {
	/// Position of the frame within the strip.
	#[inline]
	pub fn index(&self) -> usize {
		self.index
	}

	/// Frame pixels.
	#[inline]
	pub fn pixels(&self) -> &RgbaImage {
		&self.pixels
	}
}

/// All frames of a sprite strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteStrip {
	frames: Vec<SourceFrame>,
	has_alpha: bool,
}

impl SpriteStrip {
	/// Loads and slices a strip from disk.
	///
	/// # Errors
	///
	/// - [`StripError::SourceNotFound`] if the file cannot be read
	/// - [`StripError::UndecodableSprite`] if it is not an image
	/// - [`StripError::EmptySprite`] if it holds no full frame
	pub fn open(path: impl AsRef<Path>, target_size: u32) -> Result<Self, StripError> {
		let path = path.as_ref();
		let data = std::fs::read(path)
			.map_err(|e| StripError::not_found(SourceKind::Sprite, path, e))?;
		let image = image::load_from_memory(&data).map_err(|source| {
			StripError::UndecodableSprite {
				path: path.to_path_buf(),
				source,
			}
		})?;
		Self::from_image(&image, target_size)
	}

	/// Slices an already decoded strip.
	pub fn from_image(image: &DynamicImage, target_size: u32) -> Result<Self, StripError> {
		let has_alpha = image.color().has_alpha();
		let mut strip = Self::from_rgba(&image.to_rgba8(), target_size)?;
		strip.has_alpha = has_alpha;
		Ok(strip)
	}

	/// Slices an RGBA strip. The strip is treated as carrying alpha.
	pub fn from_rgba(image: &RgbaImage, target_size: u32) -> Result<Self, StripError> {
		let (width, height) = image.dimensions();
		if width == 0 || height < width {
			return Err(StripError::EmptySprite {
				width,
				height,
			});
		}

		let frame_count = height / width;
		if height % width != 0 {
			warn!(
				"Strip height {height} is not a multiple of width {width}, ignoring {} trailing rows",
				height % width
			);
		}

		let frames = (0..frame_count)
			.map(|i| {
				let tile = imageops::crop_imm(image, 0, i * width, width, width).to_image();
				let pixels = if width == target_size {
					tile
				} else {
					imageops::resize(&tile, target_size, target_size, FilterType::Nearest)
				};
				SourceFrame {
					index: i as usize,
					pixels,
				}
			})
			.collect::<Vec<_>>();

		debug!("Sliced {width}x{height} strip into {} frames of {target_size}px", frames.len());

		Ok(Self {
			frames,
			has_alpha: true,
		})
	}

	/// Number of frames in the strip.
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// Whether the decoded strip carried an alpha channel.
	pub fn has_alpha(&self) -> bool {
		self.has_alpha
	}

	/// Returns a frame by index.
	pub fn get_frame(&self, index: usize) -> Option<&SourceFrame> {
		self.frames.get(index)
	}

	/// All frames in strip order.
	pub fn frames(&self) -> &[SourceFrame] {
		&self.frames
	}
}
