//! Prelude module for `stripgif_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use stripgif_internal::prelude::*;
//!
//! let config = ParseConfig::lenient();
//! assert_eq!(config.override_policy, OverridePolicy::LastWins);
//!
//! let assembly = AssemblyConfig::default();
//! assert_eq!(assembly.target_size, TARGET_SIZE);
//! ```

// Re-export everything from stripgif_types::prelude
#[doc(inline)]
pub use stripgif_types::prelude::*;

// Re-export the entire stripgif_types module for advanced usage
#[doc(inline)]
pub use stripgif_types;
