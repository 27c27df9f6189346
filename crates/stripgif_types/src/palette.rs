//! Indexed colour palettes.
//!
//! GIF frames reference a table of up to 256 RGB colours. [`Palette`] always
//! holds exactly 256 slots; slots the quantizer does not fill stay transparent
//! black.

use std::fmt;

/// RGBA color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
	/// Alpha component (0-255)
	pub a: u8,
}

impl Color {
	/// Creates a new RGBA color.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}

	/// Creates a new RGB color with full opacity.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::new(r, g, b, 255)
	}

	/// Creates a transparent black color.
	pub const fn transparent() -> Self {
		Self::new(0, 0, 0, 0)
	}

	/// Returns true if the color is fully transparent.
	pub const fn is_transparent(&self) -> bool {
		self.a == 0
	}

	/// Returns the RGB triple, dropping alpha.
	pub const fn to_rgb(&self) -> [u8; 3] {
		[self.r, self.g, self.b]
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::transparent()
	}
}

/// A 256-slot color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	colors: [Color; 256],
}

impl Palette {
	/// Total palette size
	pub const PALETTE_SIZE: usize = 256;

	/// Creates a new empty palette with all colors set to transparent black.
	pub fn new() -> Self {
		Self {
			colors: [Color::transparent(); Self::PALETTE_SIZE],
		}
	}

	/// Builds a palette from the given colors, filling the rest with
	/// transparent black. Colors past slot 255 are ignored.
	pub fn from_colors(colors: &[Color]) -> Self {
		let mut palette = Self::new();
		for (slot, color) in palette.colors.iter_mut().zip(colors) {
			*slot = *color;
		}
		palette
	}

	/// Gets a color by index.
	#[inline]
	pub fn get(&self, index: u8) -> Color {
		self.colors[index as usize]
	}

	/// Sets a color at the specified index.
	#[inline]
	pub fn set(&mut self, index: u8, color: Color) {
		self.colors[index as usize] = color;
	}

	/// Moves every color `n` slots towards higher indices, wrapping the top
	/// slots around to the bottom.
	pub fn rotate_right(&mut self, n: usize) {
		self.colors.rotate_right(n % Self::PALETTE_SIZE);
	}

	/// Flattens the palette into `R, G, B` bytes (768 bytes) as GIF color
	/// tables expect.
	pub fn to_rgb_bytes(&self) -> Vec<u8> {
		self.colors.iter().flat_map(Color::to_rgb).collect()
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Display for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let used = self.colors.iter().filter(|c| !c.is_transparent()).count();
		write!(f, "Palette: {used} opaque colors")
	}
}
