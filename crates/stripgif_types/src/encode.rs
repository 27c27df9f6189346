//! GIF encoding and read-back.
//!
//! Frames are written with the `gif` encoder directly so that palettes and
//! indices reach the file untouched: the first frame's palette becomes the
//! global color table, every frame also carries its own local table, index 0 is
//! the transparent color, frames are disposed to background and the animation
//! loops forever. GIF delays are centiseconds: durations are rounded to the
//! nearest centisecond, at least 1 and at most `u16::MAX`. Time units that are
//! not a multiple of 10 ms therefore read back rounded.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufWriter, Seek, Write};
use std::path::Path;

use gif::{DisposalMethod, Encoder, Frame, Repeat};
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ImageDecoder};
use log::debug;

use crate::assemble::OutputTimeline;
use crate::error::{SourceKind, StripError};

/// Encodes a timeline as an infinitely looping GIF.
///
/// An empty timeline writes nothing.
pub fn write_gif<W: Write>(timeline: &OutputTimeline, writer: W) -> Result<(), StripError> {
	let (Some((width, height)), Some(global)) = (timeline.dimensions(), timeline.global_palette())
	else {
		return Ok(());
	};

	let (width, height) = gif_dimensions(width, height)?;
	let mut encoder = Encoder::new(writer, width, height, &global.to_rgb_bytes())?;
	encoder.set_repeat(Repeat::Infinite)?;

	for (output, delay_ms) in timeline.frames().iter().zip(timeline.durations_ms()) {
		let indexed = &output.frame;
		let mut frame = Frame::default();
		(frame.width, frame.height) = gif_dimensions(indexed.width(), indexed.height())?;
		frame.buffer = Cow::Borrowed(indexed.indices());
		frame.palette = Some(indexed.palette().to_rgb_bytes());
		frame.transparent = Some(indexed.transparent_index());
		frame.dispose = DisposalMethod::Background;
		frame.delay = delay_centiseconds(delay_ms);
		encoder.write_frame(&frame)?;
	}

	encoder.into_inner()?.flush()?;
	Ok(())
}

/// Encodes a timeline into a GIF file, creating parent directories.
pub fn save_gif(timeline: &OutputTimeline, path: impl AsRef<Path>) -> Result<(), StripError> {
	let path = path.as_ref();
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() && !parent.exists() {
			std::fs::create_dir_all(parent)?;
		}
	}

	let file =
		File::create(path).map_err(|e| StripError::not_found(SourceKind::Output, path, e))?;
	write_gif(timeline, BufWriter::new(file))?;
	debug!("Wrote {} frames to {}", timeline.len(), path.display());
	Ok(())
}

fn gif_dimensions(width: u32, height: u32) -> Result<(u16, u16), StripError> {
	match (u16::try_from(width), u16::try_from(height)) {
		(Ok(w), Ok(h)) => Ok((w, h)),
		_ => Err(StripError::FrameTooLarge {
			width,
			height,
		}),
	}
}

fn delay_centiseconds(ms: u64) -> u16 {
	let centiseconds = ms.saturating_add(5) / 10;
	centiseconds.clamp(1, u64::from(u16::MAX)) as u16
}

/// Frame count and timing read back from an encoded GIF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifProbe {
	/// Logical screen width
	pub width: u32,
	/// Logical screen height
	pub height: u32,
	/// Per-frame delays in milliseconds
	pub delays_ms: Vec<u64>,
}

impl GifProbe {
	/// Number of frames.
	pub fn frame_count(&self) -> usize {
		self.delays_ms.len()
	}
}

/// Decodes a GIF and reports its frames' delays.
pub fn probe_gif<R: BufRead + Seek>(reader: R) -> Result<GifProbe, StripError> {
	let decoder = GifDecoder::new(reader)?;
	let (width, height) = decoder.dimensions();
	let delays_ms = decoder
		.into_frames()
		.collect_frames()?
		.iter()
		.map(|frame| {
			let (numer, denom) = frame.delay().numer_denom_ms();
			if denom == 0 { 0 } else { u64::from(numer / denom) }
		})
		.collect();

	Ok(GifProbe {
		width,
		height,
		delays_ms,
	})
}
