//! Tone display modes.
//!
//! A `ToneMode` selects which syllable table drives the second pass of the
//! conversion pipeline. The integer encoding (1/2/3) is stable and part of
//! the public contract; it matches the values accepted by
//! [`HanyuPinyin::set_mode_value`](crate::engine::HanyuPinyin::set_mode_value).

use crate::error::PinyinError;

/// How rendered pinyin displays tone information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ToneMode {
    /// Tone digit suffixed to each syllable, e.g. `ni3`. The default.
    #[default]
    Numbered = 1,
    /// Diacritical mark over the syllable vowel, e.g. `nǐ`.
    Marked = 2,
    /// Tone information stripped entirely, e.g. `ni`.
    Plain = 3,
}

impl ToneMode {
    /// The stable integer encoding of this mode.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Decode the stable integer encoding.
    ///
    /// Anything outside 1–3 is [`PinyinError::InvalidModeValue`]; there is
    /// no silent fallback to the default mode.
    pub fn from_value(value: i64) -> Result<Self, PinyinError> {
        match value {
            1 => Ok(ToneMode::Numbered),
            2 => Ok(ToneMode::Marked),
            3 => Ok(ToneMode::Plain),
            _ => Err(PinyinError::InvalidModeValue { value }),
        }
    }
}

impl TryFrom<u8> for ToneMode {
    type Error = PinyinError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ToneMode::from_value(i64::from(value))
    }
}
