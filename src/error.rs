//! Error taxonomy for the pinyin renderer.
//!
//! Two failure kinds exist, both deterministic and tied to configuration or
//! resource state. Conversion itself never fails: unmapped characters pass
//! through verbatim and are not an error.

use thiserror::Error;

/// Errors surfaced by table loading and mode selection.
#[derive(Debug, Error)]
pub enum PinyinError {
    /// An integer outside the three valid tone-mode encodings was supplied.
    ///
    /// Valid encodings are 1 (tone numbers), 2 (tone marks) and 3 (no tones).
    /// Invalid values are reported, never clamped to a default.
    #[error("invalid tone mode value {value}, expected 1, 2 or 3")]
    InvalidModeValue { value: i64 },

    /// One of the four required lookup tables could not be obtained.
    ///
    /// Conversion refuses to run against partial tables; a `LookupTableSet`
    /// can only be built once all four tables loaded successfully.
    #[error("failed to load {table} table: {reason}")]
    TableLoad {
        table: &'static str,
        reason: String,
    },
}
