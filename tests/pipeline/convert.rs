//! Successful conversions.

use std::fs::File;
use std::io::BufReader;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, RgbImage};
use serde_json::json;
use stripgif::prelude::*;

use crate::{BLUE, CLEAR, GREEN, RED, probe, write_descriptor, write_strip};

#[test]
fn test_empty_animation_object() {
	let dir = tempfile::tempdir().unwrap();
	let sprite = dir.path().join("water_still.png");
	write_strip(&sprite, 16, &[RED, GREEN, BLUE, RED]);
	write_descriptor(&sprite, &json!({ "animation": {} }));

	let report = Conversion::new(BaseDir::new(dir.path())).run("water_still.png").unwrap();
	assert_eq!(report.output, dir.path().join("water_still.gif"));
	assert_eq!(report.frames, 4);
	assert_eq!(report.total_ms, 200);

	let gif = probe(&report.output);
	assert_eq!((gif.width, gif.height), (32, 32));
	assert_eq!(gif.delays_ms, vec![50, 50, 50, 50]);
}

#[test]
fn test_timing_override() {
	let dir = tempfile::tempdir().unwrap();
	let sprite = dir.path().join("lava.png");
	write_strip(&sprite, 32, &[RED, GREEN]);
	write_descriptor(
		&sprite,
		&json!({ "animation": { "frametime": 5, "frames": [0, 1, { "index": 1, "time": 3 }] } }),
	);

	let report = Conversion::new(BaseDir::new(dir.path())).run("lava.png").unwrap();
	assert_eq!(report.total_ms, 1250);
	assert_eq!(probe(&report.output).delays_ms, vec![250, 750, 250]);
}

#[test]
fn test_interpolated_frame_count() {
	let dir = tempfile::tempdir().unwrap();
	let sprite = dir.path().join("prismarine.png");
	write_strip(&sprite, 8, &[RED, BLUE, BLUE]);
	write_descriptor(
		&sprite,
		&json!({ "animation": { "interpolate": true, "frametime": 4, "frames": [0, 1, 2] } }),
	);

	let report = Conversion::new(BaseDir::new(dir.path())).run("prismarine.png").unwrap();

	// blending follows frame indices, so 1->2 blends even though both are blue
	assert_eq!(report.frames, 12);
	let gif = probe(&report.output);
	assert_eq!(gif.frame_count(), 12);
	assert!(gif.delays_ms.iter().all(|&d| d == 50));
	assert_eq!(gif.delays_ms.iter().sum::<u64>(), report.total_ms);
}

#[test]
fn test_repeated_frame_is_not_blended() {
	let dir = tempfile::tempdir().unwrap();
	let sprite = dir.path().join("fire.png");
	write_strip(&sprite, 8, &[RED, GREEN]);
	write_descriptor(
		&sprite,
		&json!({ "animation": { "interpolate": true, "frametime": 3, "frames": [1, 1] } }),
	);

	let report = Conversion::new(BaseDir::new(dir.path())).run("fire.png").unwrap();
	assert_eq!(probe(&report.output).delays_ms, vec![150, 150]);
}

#[test]
fn test_transparent_pixels_survive() {
	let dir = tempfile::tempdir().unwrap();
	let sprite = dir.path().join("glass.png");
	write_strip(&sprite, 32, &[CLEAR, GREEN]);
	write_descriptor(&sprite, &json!({ "animation": {} }));

	let report = Conversion::new(BaseDir::new(dir.path())).run("glass.png").unwrap();

	let decoder = GifDecoder::new(BufReader::new(File::open(&report.output).unwrap())).unwrap();
	let frames = decoder.into_frames().collect_frames().unwrap();
	assert_eq!(frames.len(), 2);
	assert!(frames[0].buffer().pixels().all(|p| p[3] == 0));
	assert!(frames[1].buffer().pixels().all(|p| p.0 == GREEN));
}

#[test]
fn test_strip_without_alpha_is_fully_opaque() {
	let dir = tempfile::tempdir().unwrap();
	let sprite = dir.path().join("stone.png");
	RgbImage::from_fn(16, 32, |x, y| image::Rgb([(x * 16) as u8, (y * 8) as u8, 0]))
		.save(&sprite)
		.unwrap();
	write_descriptor(&sprite, &json!({ "animation": { "frametime": 2 } }));

	let report = Conversion::new(BaseDir::new(dir.path())).run("stone.png").unwrap();

	let decoder = GifDecoder::new(BufReader::new(File::open(&report.output).unwrap())).unwrap();
	for frame in decoder.into_frames().collect_frames().unwrap() {
		assert!(frame.buffer().pixels().all(|p| p[3] == 255));
	}
}

#[test]
fn test_custom_size_and_tick() {
	let dir = tempfile::tempdir().unwrap();
	let sprite = dir.path().join("sea_lantern.png");
	write_strip(&sprite, 16, &[RED, GREEN, BLUE]);
	write_descriptor(&sprite, &json!({ "animation": { "frametime": 2 } }));

	let assembly = AssemblyConfig {
		target_size: 16,
		time_unit_ms: 100,
		..AssemblyConfig::default()
	};
	let report = Conversion::new(BaseDir::new(dir.path()))
		.with_assembly_config(assembly)
		.with_output("anim/lantern.gif")
		.run("sea_lantern.png")
		.unwrap();

	assert_eq!(report.output, dir.path().join("anim/lantern.gif"));
	let gif = probe(&report.output);
	assert_eq!((gif.width, gif.height), (16, 16));
	assert_eq!(gif.delays_ms, vec![200, 200, 200]);
}

#[test]
fn test_lenient_overrides() {
	let dir = tempfile::tempdir().unwrap();
	let sprite = dir.path().join("kelp.png");
	write_strip(&sprite, 8, &[RED, GREEN]);
	write_descriptor(
		&sprite,
		&json!({ "animation": { "frames": [{ "index": 0, "time": 2 }, { "index": 1, "time": 4 }] } }),
	);

	let report = Conversion::new(BaseDir::new(dir.path()))
		.with_parse_config(ParseConfig::lenient())
		.run("kelp.png")
		.unwrap();

	// last override wins: position 1 scaled by 4
	assert_eq!(probe(&report.output).delays_ms, vec![50, 200]);
}
