//! Linear blending between two frames.

use std::borrow::Cow;

use image::RgbaImage;

use crate::error::StripError;

/// A frame ready for quantization: either a borrowed source frame or a blend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame<'a> {
	pixels: Cow<'a, RgbaImage>,
}

impl<'a> RenderedFrame<'a> {
	/// Wraps a source frame without copying it.
	pub fn borrowed(pixels: &'a RgbaImage) -> Self {
		Self {
			pixels: Cow::Borrowed(pixels),
		}
	}

	/// Wraps an owned image.
	pub fn owned(pixels: RgbaImage) -> Self {
		Self {
			pixels: Cow::Owned(pixels),
		}
	}

	/// Frame pixels.
	pub fn pixels(&self) -> &RgbaImage {
		&self.pixels
	}

	/// True if this frame is a copy of a source frame rather than a blend.
	pub fn is_borrowed(&self) -> bool {
		matches!(self.pixels, Cow::Borrowed(_))
	}
}

/// Fraction `step / steps` used for sub-frame `step` of `steps`.
#[inline]
pub fn step_fraction(step: u32, steps: u32) -> f32 {
	if steps == 0 { 0.0 } else { step as f32 / steps as f32 }
}

/// Blends `from` towards `to` by `t`, channel by channel including alpha:
/// `from * (1 - t) + to * t`.
///
/// `t` is clamped to `[0, 1]`. At `t == 0` the result borrows `from`.
///
/// # Errors
///
/// [`StripError::FrameSizeMismatch`] if the frames differ in size.
pub fn blend<'a>(
	from: &'a RgbaImage,
	to: &RgbaImage,
	t: f32,
) -> Result<RenderedFrame<'a>, StripError> {
	if from.dimensions() != to.dimensions() {
		return Err(StripError::FrameSizeMismatch {
			left: from.dimensions(),
			right: to.dimensions(),
		});
	}

	let t = t.clamp(0.0, 1.0);
	if t == 0.0 {
		return Ok(RenderedFrame::borrowed(from));
	}

	let mut out = from.clone();
	for (dst, src) in out.pixels_mut().zip(to.pixels()) {
		for (a, b) in dst.0.iter_mut().zip(src.0) {
			*a = lerp(*a, b, t);
		}
	}
	Ok(RenderedFrame::owned(out))
}

#[inline]
fn lerp(a: u8, b: u8, t: f32) -> u8 {
	let value = f32::from(a) * (1.0 - t) + f32::from(b) * t;
	value.round().clamp(0.0, 255.0) as u8
}
