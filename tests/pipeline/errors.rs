//! Failed conversions never write output.

use serde_json::json;
use stripgif::prelude::*;

use crate::{GREEN, RED, write_descriptor, write_strip};

fn convert(dir: &std::path::Path, sprite: &str) -> StripError {
	Conversion::new(BaseDir::new(dir)).run(sprite).unwrap_err()
}

#[test]
fn test_missing_sprite() {
	let dir = tempfile::tempdir().unwrap();
	let sprite = dir.path().join("missing.png");
	write_descriptor(&sprite, &json!({ "animation": {} }));

	let err = convert(dir.path(), "missing.png");
	assert!(matches!(
		err,
		StripError::SourceNotFound {
			kind: SourceKind::Sprite,
			..
		}
	));
	assert!(err.to_string().contains("missing.png not found"));
	assert!(!dir.path().join("missing.gif").exists());
}

#[test]
fn test_missing_descriptor() {
	let dir = tempfile::tempdir().unwrap();
	write_strip(&dir.path().join("torch.png"), 8, &[RED]);

	let err = convert(dir.path(), "torch.png");
	assert!(matches!(
		err,
		StripError::SourceNotFound {
			kind: SourceKind::Descriptor,
			..
		}
	));
	assert!(err.to_string().contains("torch.png.mcmeta"));
}

#[test]
fn test_undecodable_sprite() {
	let dir = tempfile::tempdir().unwrap();
	let sprite = dir.path().join("broken.png");
	std::fs::write(&sprite, b"not a png").unwrap();
	write_descriptor(&sprite, &json!({ "animation": {} }));

	assert!(matches!(convert(dir.path(), "broken.png"), StripError::UndecodableSprite { .. }));
}

#[test]
fn test_malformed_descriptor() {
	let dir = tempfile::tempdir().unwrap();
	let sprite = dir.path().join("sand.png");
	write_strip(&sprite, 8, &[RED]);
	std::fs::write(descriptor_path(&sprite), "{ \"animation\": ").unwrap();

	assert!(matches!(convert(dir.path(), "sand.png"), StripError::MalformedDescriptor { .. }));
	assert!(!dir.path().join("sand.gif").exists());
}

#[test]
fn test_frame_out_of_range() {
	let dir = tempfile::tempdir().unwrap();
	let sprite = dir.path().join("portal.png");
	write_strip(&sprite, 8, &[RED, GREEN]);
	write_descriptor(&sprite, &json!({ "animation": { "frames": [0, 1, 5] } }));

	let err = convert(dir.path(), "portal.png");
	assert!(matches!(
		err,
		StripError::FrameOutOfRange {
			position: 2,
			index: 5,
			frame_count: 2
		}
	));
	assert!(!dir.path().join("portal.gif").exists());
}

#[test]
fn test_multiple_overrides_rejected_by_default() {
	let dir = tempfile::tempdir().unwrap();
	let sprite = dir.path().join("kelp.png");
	write_strip(&sprite, 8, &[RED, GREEN]);
	write_descriptor(
		&sprite,
		&json!({ "animation": { "frames": [{ "index": 0, "time": 2 }, { "index": 1, "time": 4 }] } }),
	);

	assert!(matches!(
		convert(dir.path(), "kelp.png"),
		StripError::MultipleOverrides {
			first: 0,
			second: 1
		}
	));
}

#[test]
fn test_strip_shorter_than_wide() {
	let dir = tempfile::tempdir().unwrap();
	let sprite = dir.path().join("wide.png");
	image::RgbaImage::new(16, 8).save(&sprite).unwrap();
	write_descriptor(&sprite, &json!({ "animation": {} }));

	assert!(matches!(
		convert(dir.path(), "wide.png"),
		StripError::EmptySprite {
			width: 16,
			height: 8
		}
	));
}
