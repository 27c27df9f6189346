//! Adaptive palette quantization (median cut).
//!
//! Colors are counted per frame and split into boxes along their widest
//! channel until the requested palette size is reached. Frames that already use
//! few enough distinct colors are mapped losslessly.

use std::collections::{BTreeMap, HashMap};

use log::warn;

use crate::palette::Color;

/// Maps every color seen during quantization to a palette slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMap {
	colors: Vec<Color>,
	lookup: HashMap<[u8; 3], u8>,
	lossy: bool,
}

impl ColorMap {
	/// Palette colors in slot order.
	pub fn colors(&self) -> &[Color] {
		&self.colors
	}

	/// Number of palette slots in use.
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// Returns true if no color was quantized.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Slot assigned to a color seen during quantization.
	pub fn index_of(&self, rgb: [u8; 3]) -> Option<u8> {
		self.lookup.get(&rgb).copied()
	}

	/// True when the input had more distinct colors than palette slots.
	pub fn is_lossy(&self) -> bool {
		self.lossy
	}
}

/// Median-cut quantizer producing at most `max_colors` palette entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantizer {
	max_colors: usize,
}

impl Quantizer {
	/// Creates a quantizer; `max_colors` is clamped to `1..=256`.
	pub fn new(max_colors: usize) -> Self {
		Self {
			max_colors: max_colors.clamp(1, 256),
		}
	}

	/// Builds a palette over the given pixel colors.
	pub fn quantize<I>(&self, pixels: I) -> ColorMap
	where
		I: IntoIterator<Item = [u8; 3]>,
	{
		let mut histogram: BTreeMap<[u8; 3], u32> = BTreeMap::new();
		for rgb in pixels {
			*histogram.entry(rgb).or_insert(0) += 1;
		}

		if histogram.len() <= self.max_colors {
			let colors = histogram.keys().map(|&[r, g, b]| Color::rgb(r, g, b)).collect();
			let lookup = histogram.keys().enumerate().map(|(i, &rgb)| (rgb, i as u8)).collect();
			return ColorMap {
				colors,
				lookup,
				lossy: false,
			};
		}

		warn!(
			"{} distinct colors exceed the {}-entry palette, approximating",
			histogram.len(),
			self.max_colors
		);

		let mut boxes = vec![ColorBox::new(histogram.into_iter().collect())];
		while boxes.len() < self.max_colors {
			let Some(widest) = boxes
				.iter()
				.enumerate()
				.filter(|(_, b)| b.colors.len() > 1)
				.max_by_key(|(_, b)| b.widest_channel().1)
				.map(|(i, _)| i)
			else {
				break;
			};

			let (left, right) = boxes.swap_remove(widest).split();
			boxes.push(left);
			boxes.push(right);
		}

		let mut colors = Vec::with_capacity(boxes.len());
		let mut lookup = HashMap::new();
		for (slot, color_box) in boxes.iter().enumerate() {
			colors.push(color_box.average_color());
			for (rgb, _) in &color_box.colors {
				lookup.insert(*rgb, slot as u8);
			}
		}

		ColorMap {
			colors,
			lookup,
			lossy: true,
		}
	}
}

#[derive(Debug, Clone, Copy)]
enum Channel {
	Red,
	Green,
	Blue,
}

impl Channel {
	fn pick(self, rgb: &[u8; 3]) -> u8 {
		match self {
			Channel::Red => rgb[0],
			Channel::Green => rgb[1],
			Channel::Blue => rgb[2],
		}
	}
}

/// A box of colors and their pixel counts.
#[derive(Debug, Clone)]
struct ColorBox {
	colors: Vec<([u8; 3], u32)>,
}

impl ColorBox {
	fn new(colors: Vec<([u8; 3], u32)>) -> Self {
		Self {
			colors,
		}
	}

	/// Channel with the largest value range, and that range.
	fn widest_channel(&self) -> (Channel, u8) {
		let mut min = [u8::MAX; 3];
		let mut max = [u8::MIN; 3];
		for (rgb, _) in &self.colors {
			for c in 0..3 {
				min[c] = min[c].min(rgb[c]);
				max[c] = max[c].max(rgb[c]);
			}
		}

		let range = |c: usize| max[c].saturating_sub(min[c]);
		let (r, g, b) = (range(0), range(1), range(2));
		if r >= g && r >= b {
			(Channel::Red, r)
		} else if g >= b {
			(Channel::Green, g)
		} else {
			(Channel::Blue, b)
		}
	}

	/// Splits at the pixel-weighted median of the widest channel.
	fn split(mut self) -> (ColorBox, ColorBox) {
		let (channel, _) = self.widest_channel();
		self.colors.sort_by_key(|(rgb, _)| channel.pick(rgb));

		let total: u64 = self.colors.iter().map(|(_, n)| u64::from(*n)).sum();
		let mut running = 0u64;
		let mut split_idx = self.colors.len() / 2;
		for (i, (_, n)) in self.colors.iter().enumerate() {
			running += u64::from(*n);
			if running * 2 >= total {
				split_idx = i + 1;
				break;
			}
		}

		// both halves keep at least one color
		split_idx = split_idx.clamp(1, self.colors.len() - 1);

		let right = self.colors.split_off(split_idx);
		(ColorBox::new(self.colors), ColorBox::new(right))
	}

	/// Pixel-weighted average color.
	fn average_color(&self) -> Color {
		let total: u64 = self.colors.iter().map(|(_, n)| u64::from(*n)).sum();
		if total == 0 {
			return Color::rgb(0, 0, 0);
		}

		let mut sums = [0u64; 3];
		for (rgb, n) in &self.colors {
			for c in 0..3 {
				sums[c] += u64::from(rgb[c]) * u64::from(*n);
			}
		}

		let avg = |c: usize| ((sums[c] + total / 2) / total) as u8;
		Color::rgb(avg(0), avg(1), avg(2))
	}
}
