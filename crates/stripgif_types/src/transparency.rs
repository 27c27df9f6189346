//! Palette quantization with a reserved transparent index.
//!
//! Rendering a frame into GIF form happens in two steps:
//!
//! 1. Opaque pixels (alpha above the threshold, or every pixel when the strip
//!    has no alpha channel) are quantized to at most 255 colors, occupying
//!    slots `0..=254`. Transparent pixels take slot 255.
//! 2. A [`ReservedIndexLayout`] moves the indices into their final position.
//!    The GIF layout, [`RotateToZero`], maps index `i` to `(i + 1) % 256` and
//!    rotates the palette the same way, so slot 255 lands on index 0.
//!
//! Index 0 is the only transparent index. Without an alpha channel no pixel
//! uses it.

use log::trace;

use crate::interpolate::RenderedFrame;
use crate::palette::{Color, Palette};
use crate::quantize::Quantizer;

/// Alpha values above this are opaque.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Maps quantizer output to the index convention of an output format.
pub trait ReservedIndexLayout {
	/// Slot the quantizer leaves free and assigns to transparent pixels.
	fn quantized_slot(&self) -> u8;

	/// Final index of a quantized slot.
	fn remap_index(&self, slot: u8) -> u8;

	/// Reorders a palette so that `remap_index(i)` points at the color that
	/// was in slot `i`.
	fn remap_palette(&self, palette: &mut Palette);

	/// Final index of transparent pixels.
	fn transparent_index(&self) -> u8 {
		self.remap_index(self.quantized_slot())
	}
}

/// GIF layout: the reserved slot is 255 and ends up at index 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotateToZero;

impl ReservedIndexLayout for RotateToZero {
	fn quantized_slot(&self) -> u8 {
		u8::MAX
	}

	#[inline]
	fn remap_index(&self, slot: u8) -> u8 {
		slot.wrapping_add(1)
	}

	fn remap_palette(&self, palette: &mut Palette) {
		palette.rotate_right(1);
	}
}

/// A frame as palette indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFrame {
	width: u32,
	height: u32,
	palette: Palette,
	indices: Vec<u8>,
	transparent_index: u8,
}

impl IndexedFrame {
	/// Frame width.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Frame height.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Frame palette.
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Row-major palette indices.
	pub fn indices(&self) -> &[u8] {
		&self.indices
	}

	/// Palette index of transparent pixels.
	pub fn transparent_index(&self) -> u8 {
		self.transparent_index
	}

	/// Index at `(x, y)`.
	pub fn index_at(&self, x: u32, y: u32) -> u8 {
		self.indices[(y * self.width + x) as usize]
	}

	/// Color at `(x, y)`, transparent black for transparent pixels.
	pub fn color_at(&self, x: u32, y: u32) -> Color {
		let index = self.index_at(x, y);
		if index == self.transparent_index {
			Color::transparent()
		} else {
			self.palette.get(index)
		}
	}

	/// Number of transparent pixels.
	pub fn transparent_pixel_count(&self) -> usize {
		self.indices.iter().filter(|&&i| i == self.transparent_index).count()
	}
}

/// Converts rendered frames into [`IndexedFrame`]s.
#[derive(Debug, Clone)]
pub struct PaletteTransparencyMapper<L = RotateToZero> {
	layout: L,
	alpha_threshold: u8,
}

impl PaletteTransparencyMapper<RotateToZero> {
	/// Mapper for GIF output with the default alpha threshold.
	pub fn new() -> Self {
		Self::with_layout(RotateToZero, ALPHA_THRESHOLD)
	}
}

impl Default for PaletteTransparencyMapper<RotateToZero> {
	fn default() -> Self {
		Self::new()
	}
}

impl<L: ReservedIndexLayout> PaletteTransparencyMapper<L> {
	/// Mapper with a custom layout and alpha threshold.
	pub fn with_layout(layout: L, alpha_threshold: u8) -> Self {
		Self {
			layout,
			alpha_threshold,
		}
	}

	/// Quantizes a frame.
	///
	/// With `has_alpha` unset every pixel counts as opaque regardless of its
	/// alpha byte.
	pub fn map(&self, frame: &RenderedFrame<'_>, has_alpha: bool) -> IndexedFrame {
		let pixels = frame.pixels();
		let (width, height) = pixels.dimensions();
		let opaque = |p: &image::Rgba<u8>| !has_alpha || p[3] > self.alpha_threshold;

		let reserved = self.layout.quantized_slot();
		let quantizer = Quantizer::new(usize::from(reserved));
		let color_map =
			quantizer.quantize(pixels.pixels().filter(|&p| opaque(p)).map(|p| [p[0], p[1], p[2]]));

		let mut palette = Palette::from_colors(color_map.colors());
		palette.set(reserved, Color::transparent());
		self.layout.remap_palette(&mut palette);

		let indices = pixels
			.pixels()
			.map(|p| {
				let slot = if opaque(p) {
					color_map.index_of([p[0], p[1], p[2]]).unwrap_or(reserved)
				} else {
					reserved
				};
				self.layout.remap_index(slot)
			})
			.collect::<Vec<_>>();

		trace!(
			"Quantized {width}x{height} frame to {} colors{}, {palette}",
			color_map.len(),
			if color_map.is_lossy() { " (lossy)" } else { "" }
		);

		IndexedFrame {
			width,
			height,
			palette,
			indices,
			transparent_index: self.layout.transparent_index(),
		}
	}
}
