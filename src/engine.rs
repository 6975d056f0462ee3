//! Stateful convenience wrapper over the pure conversion pipeline.
//!
//! `HanyuPinyin` caches the last input, mode and rendering, and eagerly
//! re-converts whenever either changes. The conversion itself lives in
//! [`crate::convert::convert`], which callers wanting no retained state can
//! use directly.

use std::fmt;

use unicode_normalization::UnicodeNormalization;

use crate::convert::convert;
use crate::error::PinyinError;
use crate::table::LookupTableSet;
use crate::tone::ToneMode;

/// Converts Chinese characters and numbered pinyin into rendered pinyin.
///
/// Construction requires a fully loaded [`LookupTableSet`], so a value of
/// this type can always convert; there is no partially initialized state.
///
/// # Example
/// ```
/// use hanyu_pinyin::{HanyuPinyin, ToneMode};
///
/// let mut hp = HanyuPinyin::new()?;
/// hp.set_input("你好");
/// assert_eq!(hp.render().trim(), "ni3 hao3");
/// hp.set_mode(ToneMode::Marked);
/// assert_eq!(hp.render().trim(), "nǐ hǎo");
/// # Ok::<(), hanyu_pinyin::PinyinError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HanyuPinyin {
    tables: LookupTableSet,
    input: String,
    output: String,
    mode: ToneMode,
}

impl HanyuPinyin {
    /// Build a converter over the built-in tables.
    pub fn new() -> Result<Self, PinyinError> {
        Ok(Self::with_tables(LookupTableSet::builtin()?))
    }

    /// Build a converter over the built-in tables with input already set.
    pub fn with_input(text: &str) -> Result<Self, PinyinError> {
        let mut hp = Self::new()?;
        hp.set_input(text);
        Ok(hp)
    }

    /// Build a converter over a caller-supplied table set.
    pub fn with_tables(tables: LookupTableSet) -> Self {
        Self {
            tables,
            input: String::new(),
            output: String::new(),
            mode: ToneMode::default(),
        }
    }

    /// Set the input text and immediately re-convert.
    ///
    /// Input is NFC-normalized so decomposed glyph spellings match the
    /// (NFC-normalized) table keys.
    pub fn set_input(&mut self, text: &str) -> &mut Self {
        self.input = text.nfc().collect();
        self.output = convert(&self.input, self.mode, &self.tables);
        self
    }

    /// The last input set.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Set the tone display mode and re-convert the current input.
    pub fn set_mode(&mut self, mode: ToneMode) -> &mut Self {
        self.mode = mode;
        self.output = convert(&self.input, self.mode, &self.tables);
        self
    }

    /// Set the tone display mode from its integer encoding (1, 2 or 3).
    ///
    /// Values outside the encoding are [`PinyinError::InvalidModeValue`]
    /// and leave mode and output unchanged.
    pub fn set_mode_value(&mut self, value: i64) -> Result<&mut Self, PinyinError> {
        let mode = ToneMode::from_value(value)?;
        Ok(self.set_mode(mode))
    }

    /// The current tone display mode.
    pub fn mode(&self) -> ToneMode {
        self.mode
    }

    /// The current rendered output.
    pub fn render(&self) -> &str {
        &self.output
    }

    /// The table set this converter reads from.
    pub fn tables(&self) -> &LookupTableSet {
        &self.tables
    }
}

impl fmt::Display for HanyuPinyin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}
