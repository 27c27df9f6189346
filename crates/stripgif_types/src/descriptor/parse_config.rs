//! Parse configuration for animation descriptors.

/// What to do when a descriptor's frame list holds more than one timing
/// override object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverridePolicy {
	/// Fail with [`StripError::MultipleOverrides`](crate::StripError::MultipleOverrides)
	#[default]
	Reject,
	/// Keep the override found first in a left-to-right scan
	FirstWins,
	/// Keep the override found last, as a forward scan that overwrites would
	LastWins,
}

/// Configuration for parsing animation descriptors.
///
/// # Presets
///
/// - `default()` / `strict()`: reject multiple overrides
/// - `lenient()`: last override wins
///
/// # Examples
///
/// ```
/// use stripgif_types::descriptor::{OverridePolicy, ParseConfig};
///
/// let config = ParseConfig::default();
/// assert_eq!(config.override_policy, OverridePolicy::Reject);
///
/// let config = ParseConfig::lenient();
/// assert_eq!(config.override_policy, OverridePolicy::LastWins);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseConfig {
	/// Handling of multiple timing overrides
	pub override_policy: OverridePolicy,
}

impl ParseConfig {
	/// Create a configuration with an explicit override policy.
	pub fn new(override_policy: OverridePolicy) -> Self {
		Self {
			override_policy,
		}
	}

	/// Strict configuration: multiple overrides are an error.
	pub fn strict() -> Self {
		Self::new(OverridePolicy::Reject)
	}

	/// Lenient configuration: the last override wins.
	pub fn lenient() -> Self {
		Self::new(OverridePolicy::LastWins)
	}
}
