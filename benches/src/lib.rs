//! Benchmark helper utilities for stripgif
//!
//! This module provides synthetic sprite strips for the benchmark suite. Frames
//! are filled with smooth gradients so that quantization has to reduce colors,
//! which is the expensive path.

use image::{Rgba, RgbaImage};

/// Generates a vertical strip of `frames` square frames of `size` pixels.
///
/// Every frame shifts the gradient, and a quarter of each frame is transparent
/// when `with_holes` is set.
pub fn generate_strip(size: u32, frames: u32, with_holes: bool) -> RgbaImage {
	RgbaImage::from_fn(size, size * frames, |x, y| {
		let frame = y / size;
		let local_y = y % size;

		if with_holes && x < size / 2 && local_y < size / 2 {
			return Rgba([0, 0, 0, 0]);
		}

		let r = ((x * 255) / size.max(1)) as u8;
		let g = ((local_y * 255) / size.max(1)) as u8;
		let b = ((frame * 37) % 256) as u8;
		Rgba([r, g, b, 255])
	})
}

/// Builds a descriptor JSON string for a strip with `frames` frames.
pub fn descriptor_json(frames: u32, frametime: u32, interpolate: bool) -> String {
	let order: Vec<String> = (0..frames).map(|i| i.to_string()).collect();
	format!(
		r#"{{"animation":{{"interpolate":{interpolate},"frametime":{frametime},"frames":[{}]}}}}"#,
		order.join(",")
	)
}

/// Common benchmark shapes: `(frame size, frame count)`
pub mod shapes {
	/// Vanilla block texture: 16px, short loop
	pub const BLOCK: (u32, u32) = (16, 16);
	/// High-resolution pack texture
	pub const HD: (u32, u32) = (64, 32);
	/// Very high-resolution pack texture
	pub const XHD: (u32, u32) = (256, 16);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_strip() {
		let strip = generate_strip(16, 4, true);
		assert_eq!(strip.dimensions(), (16, 64));
		assert_eq!(strip.get_pixel(0, 0)[3], 0);
		assert_eq!(strip.get_pixel(15, 15)[3], 255);
	}

	#[test]
	fn test_descriptor_json() {
		assert_eq!(
			descriptor_json(3, 2, true),
			r#"{"animation":{"interpolate":true,"frametime":2,"frames":[0,1,2]}}"#
		);
	}
}
