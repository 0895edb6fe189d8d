//! Tunables for validation, random sequence generation and history.
//!
//! All structs implement [`Default`] and are meant to be customised with
//! struct-update syntax:
//!
//! ```rust
//! use pcrhelper_core::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig {
//!     max_len: Some(50_000),
//!     ..Default::default()
//! };
//! assert_eq!(config.max_len, Some(50_000));
//! ```

/// Shortest random sequence the generator produces.
pub const RANDOM_MIN_LEN: usize = 1;
/// Longest random sequence the generator produces.
pub const RANDOM_MAX_LEN: usize = 10_000;
/// Length used when no explicit length is requested.
pub const RANDOM_DEFAULT_LEN: usize = 100;
/// Step applied by the length increase/decrease controls.
pub const RANDOM_LENGTH_STEP: isize = 50;

/// Number of raw inputs kept in the recent-input list.
pub const HISTORY_CAPACITY: usize = 10;
/// Characters shown per entry when listing history.
pub const HISTORY_PREVIEW_LEN: usize = 50;

/// Configuration for [`crate::seq::dna::normalize_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Upper bound on the normalized sequence length. `None` accepts any length.
    pub max_len: Option<usize>,
}

/// Configuration for [`crate::random::random_dna`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomConfig {
    /// Sequence length in bases (valid range `1..=10_000`).
    pub length: usize,
    /// PRNG seed; the same seed always yields the same sequence.
    pub seed: u64,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            length: RANDOM_DEFAULT_LEN,
            seed: 42,
        }
    }
}

impl RandomConfig {
    /// Clamp any requested length into the generator's accepted range.
    pub fn clamp_length(len: usize) -> usize {
        len.clamp(RANDOM_MIN_LEN, RANDOM_MAX_LEN)
    }

    /// Apply a +/- step to `current` and clamp the result.
    pub fn adjust_length(current: usize, delta: isize) -> usize {
        let next = current.saturating_add_signed(delta);
        Self::clamp_length(next)
    }
}
