//! The conversion pipeline: four ordered passes over the input string.
//!
//! Every pass is literal whole-string substitution — each table key is
//! replaced wherever it occurs, not just at word edges — and each
//! substitution appends one trailing space so syllable boundaries survive
//! into the final rendering. The last pass collapses the accumulated
//! spacing.
//!
//! The pipeline is pure: it reads the tables, builds a fresh output string
//! and returns it. Unmapped characters pass through verbatim; malformed
//! tables produce malformed output rather than an error (table integrity
//! is the loader's job).

use tracing::debug;

use crate::table::LookupTableSet;
use crate::tone::ToneMode;

/// Convert `text` into pinyin rendered under `mode`.
///
/// Pass 1 resolves Chinese glyphs into numbered syllables; pass 2 rewrites
/// those syllables per the tone mode; pass 3 re-separates any syllable
/// tokens still run together; pass 4 collapses the extra whitespace.
pub fn convert(text: &str, mode: ToneMode, tables: &LookupTableSet) -> String {
    debug!(?mode, chars = text.chars().count(), "running conversion pipeline");

    let mut out = text.to_string();

    // Pass 1: hanzi -> numbered syllables. The only pass that reads glyphs.
    for (key, value) in tables.hanzi.iter() {
        if out.contains(key) {
            out = out.replace(key, &format!("{value} "));
        }
    }

    // Pass 2: tone-mode rendering. The numbered branch rewrites each token
    // to itself, which only guarantees a following space.
    match mode {
        ToneMode::Marked => {
            for (key, value) in tables.marks.iter() {
                if out.contains(key) {
                    out = out.replace(key, &format!("{value} "));
                }
            }
        }
        ToneMode::Plain => {
            for (key, value) in tables.plain.iter() {
                if out.contains(key) {
                    out = out.replace(key, &format!("{value} "));
                }
            }
        }
        ToneMode::Numbered => {
            for (key, _) in tables.tokens.iter() {
                if out.contains(key) {
                    out = out.replace(key, &format!("{key} "));
                }
            }
        }
    }

    // Pass 3: atomization, pin1yin1 -> pin1 yin1. Only the marked mode
    // transforms through the marks table here; the other modes re-insert
    // the token unchanged so already-rendered output is not re-converted.
    for (key, value) in tables.marks.iter() {
        if out.contains(key) {
            let replacement = if mode == ToneMode::Marked { value } else { key };
            out = out.replace(key, &format!("{replacement} "));
        }
    }

    // Pass 4: collapse the spacing introduced above.
    normalize(&out)
}

/// Collapse redundant spaces between pinyin units.
///
/// Exactly two sequential reductions: triple space to one, then double
/// space to one. This is not a fixed-point loop, so very long space runs
/// can leave a two-space residue; tabs and newlines are untouched.
pub fn normalize(text: &str) -> String {
    text.replace("   ", " ").replace("  ", " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> LookupTableSet {
        LookupTableSet::builtin().unwrap()
    }

    #[test]
    fn numbered_mode_keeps_tone_digits() {
        assert_eq!(convert("你", ToneMode::Numbered, &tables()), "ni3 ");
    }

    #[test]
    fn marked_mode_renders_diacritics() {
        assert_eq!(convert("你", ToneMode::Marked, &tables()), "nǐ ");
    }

    #[test]
    fn plain_mode_strips_tones_entirely() {
        // Tone digits are removed in pass 2, so the atomization pass finds
        // no numbered tokens to re-convert.
        assert_eq!(convert("你", ToneMode::Plain, &tables()), "ni ");
    }

    #[test]
    fn multi_glyph_words_prefer_the_longest_key() {
        // Keyed both as the word 你好 and as the single glyphs; descending
        // key length makes the word entry win.
        let out = convert("你好", ToneMode::Numbered, &tables());
        assert_eq!(out.split_whitespace().collect::<Vec<_>>(), ["ni3", "hao3"]);
    }

    #[test]
    fn unmapped_text_passes_through() {
        let out = convert("hello, world!", ToneMode::Numbered, &tables());
        assert_eq!(out, "hello, world!");
    }

    #[test]
    fn mixed_text_keeps_unmapped_characters_in_place() {
        let out = convert("我爱你!", ToneMode::Numbered, &tables());
        assert_eq!(out.split_whitespace().collect::<Vec<_>>(), ["wo3", "ai4", "ni3", "!"]);
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(convert("", ToneMode::Marked, &tables()), "");
    }

    #[test]
    fn numbered_pinyin_input_is_atomized() {
        // Raw numbered pinyin with no glyphs still gets separated.
        let out = convert("pin1yin1", ToneMode::Numbered, &tables());
        assert_eq!(out, "pin1 yin1 ");
    }

    #[test]
    fn numbered_pinyin_input_converts_under_marked_mode() {
        let out = convert("pin1yin1", ToneMode::Marked, &tables());
        assert_eq!(out, "pīn yīn ");
    }

    #[test]
    fn neutral_tone_renders_without_a_mark() {
        let out = convert("谢谢", ToneMode::Marked, &tables());
        assert_eq!(out, "xiè xie ");
    }

    #[test]
    fn normalize_collapses_short_runs() {
        assert_eq!(normalize("a  b"), "a b");
        assert_eq!(normalize("a   b"), "a b");
        assert_eq!(normalize("a    b"), "a b");
    }

    #[test]
    fn normalize_is_not_a_fixed_point() {
        // Seven spaces reduce 7 -> 3 -> 2; the residue is documented
        // behavior, not a defect.
        assert_eq!(normalize("a       b"), "a  b");
    }

    #[test]
    fn normalize_leaves_other_whitespace_alone() {
        assert_eq!(normalize("a\t\tb\n\nc"), "a\t\tb\n\nc");
    }
}
