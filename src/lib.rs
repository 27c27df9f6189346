#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `stripgif` turns animated sprite strips and their `.mcmeta` descriptors into looping GIFs.
//!
//! A sprite strip is a PNG holding square frames stacked vertically. The descriptor next to it
//! (`<sprite>.mcmeta`) selects the frame order, the time each frame is shown in 1/20 s units,
//! and whether frames fade into their successor.
//!
//! ```no_run
//! use stripgif::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = Conversion::new(BaseDir::new("assets")).run("blocks/water_flow.png")?;
//! println!("wrote {}", report.output.display());
//! # Ok(())
//! # }
//! ```
pub use stripgif_internal::*;
