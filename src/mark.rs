//! Tone-diacritic placement for bare pinyin syllables.
//!
//! Standard Hanyu Pinyin orthography places the tone mark on exactly one
//! vowel of the syllable:
//! - on `a` whenever present,
//! - otherwise on `e`,
//! - otherwise on the `o` of `ou`,
//! - otherwise on the last vowel.
//!
//! `v` is the ASCII spelling of `ü` and is rendered as such. Tone 5 is the
//! neutral tone and takes no mark.

/// Plain and toned forms of each markable vowel, indexed by tone 1–4.
static TONED_VOWELS: [[char; 5]; 6] = [
    ['a', 'ā', 'á', 'ǎ', 'à'],
    ['e', 'ē', 'é', 'ě', 'è'],
    ['i', 'ī', 'í', 'ǐ', 'ì'],
    ['o', 'ō', 'ó', 'ǒ', 'ò'],
    ['u', 'ū', 'ú', 'ǔ', 'ù'],
    ['ü', 'ǖ', 'ǘ', 'ǚ', 'ǜ'],
];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'ü')
}

/// Returns `vowel` carrying the diacritic for `tone` (1–4).
fn toned(vowel: char, tone: u8) -> char {
    for row in TONED_VOWELS.iter() {
        if row[0] == vowel {
            return row[tone as usize];
        }
    }
    vowel
}

/// Render a bare syllable with the diacritic for `tone` (1–5).
///
/// `syllable` is the toneless ASCII spelling (`ni`, `hao`, `lv`). Tone 5
/// returns the syllable unmarked. Syllables without a markable vowel
/// (e.g. the interjection `ng`) are returned unchanged apart from the
/// `v` → `ü` rewrite.
pub fn marked_form(syllable: &str, tone: u8) -> String {
    let chars: Vec<char> = syllable
        .chars()
        .map(|c| if c == 'v' { 'ü' } else { c })
        .collect();

    if !(1..=4).contains(&tone) {
        return chars.into_iter().collect();
    }

    let target = mark_position(&chars);
    chars
        .into_iter()
        .enumerate()
        .map(|(i, c)| if Some(i) == target { toned(c, tone) } else { c })
        .collect()
}

/// Index of the vowel that carries the mark, per the orthographic rules.
fn mark_position(chars: &[char]) -> Option<usize> {
    if let Some(i) = chars.iter().position(|&c| c == 'a') {
        return Some(i);
    }
    if let Some(i) = chars.iter().position(|&c| c == 'e') {
        return Some(i);
    }
    if let Some(i) = chars.windows(2).position(|w| w == ['o', 'u']) {
        return Some(i);
    }
    chars.iter().rposition(|&c| is_vowel(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_takes_precedence() {
        assert_eq!(marked_form("hao", 3), "hǎo");
        assert_eq!(marked_form("zhuang", 1), "zhuāng");
        assert_eq!(marked_form("ma", 1), "mā");
    }

    #[test]
    fn e_beats_remaining_vowels() {
        assert_eq!(marked_form("xie", 4), "xiè");
        assert_eq!(marked_form("wei", 4), "wèi");
    }

    #[test]
    fn ou_marks_the_o() {
        assert_eq!(marked_form("gou", 3), "gǒu");
        assert_eq!(marked_form("zhou", 1), "zhōu");
    }

    #[test]
    fn otherwise_last_vowel_carries_the_mark() {
        assert_eq!(marked_form("shui", 3), "shuǐ");
        assert_eq!(marked_form("liu", 2), "liú");
        assert_eq!(marked_form("ni", 3), "nǐ");
    }

    #[test]
    fn v_is_rendered_as_u_umlaut() {
        assert_eq!(marked_form("lv", 4), "lǜ");
        assert_eq!(marked_form("nve", 4), "nüè");
        assert_eq!(marked_form("lv", 5), "lü");
    }

    #[test]
    fn neutral_tone_takes_no_mark() {
        assert_eq!(marked_form("ma", 5), "ma");
        assert_eq!(marked_form("de", 5), "de");
    }

    #[test]
    fn vowelless_syllable_is_left_alone() {
        assert_eq!(marked_form("ng", 2), "ng");
    }
}
