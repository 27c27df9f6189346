//! End-to-end tests for `stripgif`: sprite strip and descriptor in, GIF out.

mod convert;
mod errors;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{Rgba, RgbaImage};
use stripgif::prelude::*;

/// Writes a strip of `colors.len()` square frames of `size` pixels, one solid color each.
pub(crate) fn write_strip(path: &Path, size: u32, colors: &[[u8; 4]]) {
	let image = RgbaImage::from_fn(size, size * colors.len() as u32, |_, y| {
		Rgba(colors[(y / size) as usize])
	});
	image.save(path).unwrap();
}

/// Writes the descriptor belonging to `sprite`.
pub(crate) fn write_descriptor(sprite: &Path, json: &serde_json::Value) {
	std::fs::write(descriptor_path(sprite), json.to_string()).unwrap();
}

/// Reads back a written GIF.
pub(crate) fn probe(path: &Path) -> GifProbe {
	let reader = BufReader::new(File::open(path).unwrap());
	probe_gif(reader).unwrap()
}

pub(crate) const RED: [u8; 4] = [255, 0, 0, 255];
pub(crate) const GREEN: [u8; 4] = [0, 255, 0, 255];
pub(crate) const BLUE: [u8; 4] = [0, 0, 255, 255];
pub(crate) const CLEAR: [u8; 4] = [0, 0, 0, 0];
