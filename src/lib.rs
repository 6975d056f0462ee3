//! hanyu-pinyin
//!
//! Converts Chinese characters and numbered Hanyu Pinyin into pinyin with
//! tone numbers, tone marks, or no tone information.
//!
//! Conversion is a dictionary-driven, four-pass transformation: Chinese
//! glyphs are resolved into numbered syllables, those syllables are
//! rewritten per the selected tone mode, any syllables still run together
//! are separated, and the accumulated whitespace is collapsed. All passes
//! are literal whole-string substitution over read-only lookup tables.
//!
//! Public API:
//! - `HanyuPinyin` - stateful converter with eager re-rendering
//! - `convert` / `normalize` - the pure pipeline functions
//! - `ToneMode` - tone display mode with its stable 1/2/3 encoding
//! - `LookupTable` / `LookupTableSet` - the four conversion tables
//! - `Config` - TOML-backed host configuration
//! - `PinyinError` - load / mode-selection failures

pub mod config;
pub mod convert;
pub mod engine;
pub mod error;
pub mod mark;
pub mod table;
pub mod tone;

pub use config::Config;
pub use convert::{convert, normalize};
pub use engine::HanyuPinyin;
pub use error::PinyinError;
pub use table::{LookupTable, LookupTableSet, PINYIN_SYLLABLES};
pub use tone::ToneMode;
