//! Command line front end: converts one sprite strip into a GIF.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::debug;
use stripgif::prelude::*;

fn main() -> Result<()> {
	let cli = Cli::parse();

	let default_level = if cli.verbose { "debug" } else { "info" };
	env_logger::init_from_env(env_logger::Env::default().default_filter_or(default_level));

	let base = match &cli.base_dir {
		Some(dir) => BaseDir::new(dir),
		None => BaseDir::from_executable().context("Failed to locate the executable directory")?,
	};
	debug!("Resolving paths against {}", base.root().display());

	let mut conversion = Conversion::new(base)
		.with_parse_config(ParseConfig::new(cli.overrides.into()))
		.with_assembly_config(cli.assembly_config());
	if let Some(output) = &cli.output {
		conversion = conversion.with_output(output);
	}

	let report = conversion
		.run(&cli.sprite)
		.with_context(|| format!("Failed to convert {}", cli.sprite.display()))?;
	println!("{} ({} frames, {} ms)", report.output.display(), report.frames, report.total_ms);

	Ok(())
}

#[derive(Parser)]
#[command(name = "stripgif")]
#[command(author = "stripgif project")]
#[command(version)]
#[command(about = "Convert an animated sprite strip and its .mcmeta descriptor into a GIF", long_about = None)]
struct Cli {
	/// Sprite strip image, relative to the base directory
	#[arg(value_name = "SPRITE")]
	sprite: PathBuf,

	/// Directory relative paths are resolved against (default: the executable's directory)
	#[arg(long, value_name = "DIR", env = "STRIPGIF_BASE_DIR")]
	base_dir: Option<PathBuf>,

	/// Output file (default: the sprite path with a .gif extension)
	#[arg(short, long, value_name = "FILE")]
	output: Option<PathBuf>,

	/// Edge length of output frames in pixels
	#[arg(long, value_name = "PIXELS", env = "STRIPGIF_SIZE", default_value_t = TARGET_SIZE,
		value_parser = clap::value_parser!(u32).range(1..=i64::from(u16::MAX)))]
	size: u32,

	/// Milliseconds per descriptor time unit
	#[arg(long, value_name = "MS", env = "STRIPGIF_TICK_MS", default_value_t = TIME_UNIT_MS,
		value_parser = clap::value_parser!(u32).range(1..))]
	tick_ms: u32,

	/// Handling of multiple timing overrides in the frame list
	#[arg(long, value_enum, env = "STRIPGIF_OVERRIDES", default_value_t = Overrides::Reject)]
	overrides: Overrides,

	/// Force interpolation on, ignoring the descriptor
	#[arg(long, action = ArgAction::SetTrue, conflicts_with = "no_interpolate")]
	interpolate: bool,

	/// Force interpolation off, ignoring the descriptor
	#[arg(long, action = ArgAction::SetTrue)]
	no_interpolate: bool,

	/// Enable debug logging
	#[arg(short, long, default_value_t = false)]
	verbose: bool,
}

impl Cli {
	fn assembly_config(&self) -> AssemblyConfig {
		let interpolate_override = match (self.interpolate, self.no_interpolate) {
			(true, _) => Some(true),
			(_, true) => Some(false),
			_ => None,
		};

		AssemblyConfig {
			target_size: self.size,
			time_unit_ms: self.tick_ms,
			interpolate_override,
			..AssemblyConfig::default()
		}
	}
}

#[derive(Clone, Copy, ValueEnum)]
enum Overrides {
	/// Fail on a second override
	Reject,
	/// Keep the first override
	First,
	/// Keep the last override
	Last,
}

impl From<Overrides> for OverridePolicy {
	fn from(value: Overrides) -> Self {
		match value {
			Overrides::Reject => Self::Reject,
			Overrides::First => Self::FirstWins,
			Overrides::Last => Self::LastWins,
		}
	}
}
