//! Benchmark suite for sprite strip conversion
//!
//! This benchmark measures quantization and assembly, the hot path of a
//! conversion, plus GIF encoding of the assembled frames.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use stripgif_benches::{descriptor_json, generate_strip, shapes};
use stripgif_types::prelude::*;

/// Benchmark quantizing a single frame with transparency
fn bench_transparency_mapping(c: &mut Criterion) {
	let mut group = c.benchmark_group("transparency_map");
	let mapper = PaletteTransparencyMapper::new();

	for size in [16u32, 32, 64] {
		let frame = generate_strip(size, 1, true);
		group.throughput(Throughput::Elements(u64::from(size * size)));
		group.bench_with_input(BenchmarkId::new("map", size), &frame, |b, frame| {
			b.iter(|| black_box(mapper.map(&RenderedFrame::borrowed(black_box(frame)), true)));
		});
	}

	group.finish();
}

/// Benchmark full assembly with and without interpolation
fn bench_assemble(c: &mut Criterion) {
	let mut group = c.benchmark_group("assemble");

	for (name, (size, frames)) in [("block", shapes::BLOCK), ("hd", shapes::HD), ("xhd", shapes::XHD)]
	{
		let image = generate_strip(size, frames, true);
		let Ok(strip) = SpriteStrip::from_rgba(&image, TARGET_SIZE) else {
			eprintln!("Warning: Could not slice synthetic strip {name}");
			continue;
		};

		for interpolate in [false, true] {
			let json = descriptor_json(frames, 4, interpolate);
			let Ok(descriptor) = AnimationDescriptor::from_json_str(&json) else {
				continue;
			};
			let Ok(timeline) =
				Timeline::build(&descriptor, strip.frame_count(), &ParseConfig::default())
			else {
				continue;
			};

			let assembler = AnimationAssembler::new(&strip);
			let frames = timeline.output_frame_count(assembler.blends(&timeline));
			let id = if interpolate { "interpolated" } else { "plain" };
			group.throughput(Throughput::Elements(frames as u64));
			group.bench_with_input(BenchmarkId::new(id, name), &timeline, |b, timeline| {
				b.iter(|| black_box(assembler.assemble(black_box(timeline))));
			});
		}
	}

	group.finish();
}

/// Benchmark GIF encoding of an assembled animation
fn bench_encode(c: &mut Criterion) {
	let (size, frames) = shapes::BLOCK;
	let image = generate_strip(size, frames, false);
	let Ok(strip) = SpriteStrip::from_rgba(&image, TARGET_SIZE) else {
		return;
	};
	let Ok(timeline) =
		Timeline::build(&AnimationDescriptor::default(), strip.frame_count(), &ParseConfig::default())
	else {
		return;
	};
	let Ok(output) = AnimationAssembler::new(&strip).assemble(&timeline) else {
		return;
	};

	c.bench_function("encode_gif", |b| {
		b.iter(|| {
			let mut buffer = Vec::with_capacity(64 * 1024);
			black_box(write_gif(black_box(&output), &mut buffer))
		});
	});
}

criterion_group!(benches, bench_transparency_mapping, bench_assemble, bench_encode);
criterion_main!(benches);
