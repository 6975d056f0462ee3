//! End-to-end pipeline tests over the built-in tables and over small
//! caller-supplied table sets.
//!
//! Exact spacing is only asserted where the pass arithmetic is pinned
//! down; everywhere else assertions compare whitespace-split tokens, since
//! substitution deliberately over-produces spaces and the normalizer is
//! not a fixed point.

use hanyu_pinyin::{convert, normalize, HanyuPinyin, LookupTableSet, PinyinError, ToneMode};

fn tokens(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

#[test]
fn single_glyph_across_all_modes() {
    let tables = LookupTableSet::builtin().unwrap();
    assert_eq!(convert("你", ToneMode::Numbered, &tables), "ni3 ");
    assert_eq!(convert("你", ToneMode::Marked, &tables), "nǐ ");
    assert_eq!(convert("你", ToneMode::Plain, &tables), "ni ");
}

#[test]
fn sentence_conversion_in_each_mode() {
    let tables = LookupTableSet::builtin().unwrap();
    let text = "我爱北京";

    assert_eq!(
        tokens(&convert(text, ToneMode::Numbered, &tables)),
        ["wo3", "ai4", "bei3", "jing1"]
    );
    assert_eq!(
        tokens(&convert(text, ToneMode::Marked, &tables)),
        ["wǒ", "ài", "běi", "jīng"]
    );
    assert_eq!(
        tokens(&convert(text, ToneMode::Plain, &tables)),
        ["wo", "ai", "bei", "jing"]
    );
}

#[test]
fn unmapped_text_is_unchanged_up_to_whitespace() {
    let tables = LookupTableSet::builtin().unwrap();
    for text in ["hello world", "1234", "¡hola!", ""] {
        assert_eq!(convert(text, ToneMode::Numbered, &tables), normalize(text));
    }
}

#[test]
fn marked_output_matches_the_marks_table_entry() {
    let tables = LookupTableSet::builtin().unwrap();
    let syllable = tables.hanzi.get("好").unwrap();
    let marked = tables.marks.get(syllable).unwrap();
    let out = convert("好", ToneMode::Marked, &tables);
    assert_eq!(out.trim(), marked);
}

#[test]
fn mode_switch_rerenders_the_same_input() {
    let mut hp = HanyuPinyin::with_input("谢谢").unwrap();
    assert_eq!(tokens(hp.render()), ["xie4", "xie5"]);

    hp.set_mode(ToneMode::Marked);
    assert_eq!(tokens(hp.render()), ["xiè", "xie"]);

    hp.set_mode(ToneMode::Plain);
    assert_eq!(tokens(hp.render()), ["xie", "xie"]);

    // Input survives mode changes.
    assert_eq!(hp.input(), "谢谢");
}

#[test]
fn set_mode_value_accepts_only_the_three_encodings() {
    let mut hp = HanyuPinyin::new().unwrap();
    assert_eq!(hp.set_mode_value(1).unwrap().mode(), ToneMode::Numbered);
    assert_eq!(hp.set_mode_value(2).unwrap().mode(), ToneMode::Marked);
    assert_eq!(hp.set_mode_value(3).unwrap().mode(), ToneMode::Plain);

    for bad in [0, 4, 5, -7] {
        assert!(matches!(
            hp.set_mode_value(bad),
            Err(PinyinError::InvalidModeValue { value }) if value == bad
        ));
    }
}

#[test]
fn normalizer_residue_is_preserved_end_to_end() {
    // Two fixed reductions only: a seven-space run keeps a two-space
    // residue instead of collapsing fully.
    assert_eq!(normalize("a       b"), "a  b");
    assert_eq!(normalize("a    b"), "a b");
}

#[test]
fn custom_table_set_drives_the_pipeline() {
    let tables = LookupTableSet::from_json_strs(
        r#"{"犬": "quan3"}"#,
        r#"{"quan3": "quǎn"}"#,
        r#"{"quan3": "quan3"}"#,
        r#"{"quan3": "quan"}"#,
    )
    .unwrap();

    assert_eq!(convert("犬", ToneMode::Numbered, &tables), "quan3 ");
    assert_eq!(convert("犬", ToneMode::Marked, &tables), "quǎn ");
    assert_eq!(convert("犬", ToneMode::Plain, &tables), "quan ");
}

#[test]
fn numbered_pinyin_input_is_accepted_directly() {
    let tables = LookupTableSet::builtin().unwrap();
    assert_eq!(
        tokens(&convert("han4yu3pin1yin1", ToneMode::Marked, &tables)),
        ["hàn", "yǔ", "pīn", "yīn"]
    );
}
