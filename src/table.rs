//! Lookup tables backing the conversion pipeline.
//!
//! Four read-only string-to-string tables drive the pipeline:
//! - `hanzi`: Chinese glyph sequence → numbered pinyin syllable(s)
//! - `marks`: numbered syllable → syllable with diacritical tone mark
//! - `tokens`: numbered syllable → itself (boundary recognition only)
//! - `plain`: numbered syllable → syllable with tone stripped
//!
//! The hanzi table is data-driven (JSON, same shape as the upstream idx
//! resources); the three syllable tables are derived from the standard
//! syllable inventory and the tone-mark rules in [`crate::mark`], so the
//! structural guarantee that every hanzi-table value is a valid key in all
//! three syllable tables holds by construction.
//!
//! Entries are held sorted by descending key length (ties broken by key
//! order), so literal substitution always prefers the longest match and
//! output does not depend on loader iteration order.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::error::PinyinError;
use crate::mark;

/// All standard pinyin syllables (without tone markers).
/// This list includes all valid pinyin syllables in Mandarin Chinese.
pub const PINYIN_SYLLABLES: &[&str] = &[
    "a", "ai", "an", "ang", "ao", "ba", "bai", "ban", "bang", "bao", "bei", "ben", "beng", "bi",
    "bian", "biao", "bie", "bin", "bing", "bo", "bu", "ca", "cai", "can", "cang", "cao", "ce",
    "cen", "ceng", "cha", "chai", "chan", "chang", "chao", "che", "chen", "cheng", "chi", "chong",
    "chou", "chu", "chuai", "chuan", "chuang", "chui", "chun", "chuo", "ci", "cong", "cou", "cu",
    "cuan", "cui", "cun", "cuo", "da", "dai", "dan", "dang", "dao", "de", "dei", "deng", "di",
    "dia", "dian", "diao", "die", "ding", "diu", "dong", "dou", "du", "duan", "dui", "dun", "duo",
    "e", "ei", "en", "er", "fa", "fan", "fang", "fei", "fen", "feng", "fo", "fou", "fu", "ga",
    "gai", "gan", "gang", "gao", "ge", "gei", "gen", "geng", "gong", "gou", "gu", "gua", "guai",
    "guan", "guang", "gui", "gun", "guo", "ha", "hai", "han", "hang", "hao", "he", "hei", "hen",
    "heng", "hong", "hou", "hu", "hua", "huai", "huan", "huang", "hui", "hun", "huo", "ji", "jia",
    "jian", "jiang", "jiao", "jie", "jin", "jing", "jiong", "jiu", "ju", "juan", "jue", "jun",
    "ka", "kai", "kan", "kang", "kao", "ke", "ken", "keng", "kong", "kou", "ku", "kua", "kuai",
    "kuan", "kuang", "kui", "kun", "kuo", "la", "lai", "lan", "lang", "lao", "le", "lei", "leng",
    "li", "lia", "lian", "liang", "liao", "lie", "lin", "ling", "liu", "lo", "long", "lou", "lu",
    "luan", "lun", "luo", "lv", "lve", "ma", "mai", "man", "mang", "mao", "me", "mei", "men",
    "meng", "mi", "mian", "miao", "mie", "min", "ming", "miu", "mo", "mou", "mu", "na", "nai",
    "nan", "nang", "nao", "ne", "nei", "nen", "neng", "ng", "ni", "nian", "niang", "niao", "nie",
    "nin", "ning", "niu", "nong", "nou", "nu", "nuan", "nuo", "nv", "nve", "o", "ou", "pa", "pai",
    "pan", "pang", "pao", "pei", "pen", "peng", "pi", "pian", "piao", "pie", "pin", "ping", "po",
    "pou", "pu", "qi", "qia", "qian", "qiang", "qiao", "qie", "qin", "qing", "qiong", "qiu", "qu",
    "quan", "que", "qun", "ran", "rang", "rao", "re", "ren", "reng", "ri", "rong", "rou", "ru",
    "ruan", "rui", "run", "ruo", "sa", "sai", "san", "sang", "sao", "se", "sen", "seng", "sha",
    "shai", "shan", "shang", "shao", "she", "shei", "shen", "sheng", "shi", "shou", "shu", "shua",
    "shuai", "shuan", "shuang", "shui", "shun", "shuo", "si", "song", "sou", "su", "suan", "sui",
    "sun", "suo", "ta", "tai", "tan", "tang", "tao", "te", "teng", "ti", "tian", "tiao", "tie",
    "ting", "tong", "tou", "tu", "tuan", "tui", "tun", "tuo", "wa", "wai", "wan", "wang", "wei",
    "wen", "weng", "wo", "wu", "xi", "xia", "xian", "xiang", "xiao", "xie", "xin", "xing", "xiong",
    "xiu", "xu", "xuan", "xue", "xun", "ya", "yan", "yang", "yao", "ye", "yi", "yin", "ying", "yo",
    "yong", "you", "yu", "yuan", "yue", "yun", "za", "zai", "zan", "zang", "zao", "ze", "zei",
    "zen", "zeng", "zha", "zhai", "zhan", "zhang", "zhao", "zhe", "zhen", "zheng", "zhi", "zhong",
    "zhou", "zhu", "zhua", "zhuai", "zhuan", "zhuang", "zhui", "zhun", "zhuo", "zi", "zong", "zou",
    "zu", "zuan", "zui", "zun", "zuo",
];

/// Built-in hanzi → numbered-syllable dictionary, same JSON object shape as
/// the upstream `IdxHanyuPinyin` resource.
const BUILTIN_HANZI_JSON: &str = include_str!("../data/hanzi_pinyin.json");

/// A single read-only string-to-string mapping table.
///
/// Entries keep a fixed substitution order: longest key first, then key
/// order. Conversion never mutates a table.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    entries: Vec<(String, String)>,
}

impl LookupTable {
    /// Build a table from key/value pairs.
    ///
    /// Keys and values are NFC-normalized so composed and decomposed glyph
    /// spellings resolve to the same entry.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut entries: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| {
                (
                    k.as_ref().nfc().collect::<String>(),
                    v.as_ref().nfc().collect::<String>(),
                )
            })
            .collect();
        // Longest key first; equal-length keys cannot overlap, the key
        // tiebreak just keeps the order reproducible.
        entries.sort_by(|a, b| {
            b.0.chars()
                .count()
                .cmp(&a.0.chars().count())
                .then_with(|| a.0.cmp(&b.0))
        });
        Self { entries }
    }

    /// Parse a table from a JSON object of string keys to string values.
    ///
    /// An unparsable document or an empty object is a
    /// [`PinyinError::TableLoad`] for `name`.
    pub fn from_json_str(name: &'static str, json: &str) -> Result<Self, PinyinError> {
        let map: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| PinyinError::TableLoad {
                table: name,
                reason: e.to_string(),
            })?;
        if map.is_empty() {
            return Err(PinyinError::TableLoad {
                table: name,
                reason: "table is empty".into(),
            });
        }
        let table = Self::from_pairs(map);
        debug!(table = name, entries = table.len(), "loaded lookup table");
        Ok(table)
    }

    /// Whether `key` exists in this table.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate entries in substitution order (longest key first).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The three syllable-domain tables, derived once from the syllable
/// inventory: (marks, tokens, plain).
static SYLLABLE_TABLES: Lazy<(LookupTable, LookupTable, LookupTable)> = Lazy::new(|| {
    let mut marks = Vec::new();
    let mut tokens = Vec::new();
    let mut plain = Vec::new();
    for syllable in PINYIN_SYLLABLES {
        for tone in 1..=5u8 {
            let key = format!("{syllable}{tone}");
            marks.push((key.clone(), mark::marked_form(syllable, tone)));
            tokens.push((key.clone(), key.clone()));
            plain.push((key, (*syllable).to_string()));
        }
    }
    debug!(syllables = PINYIN_SYLLABLES.len(), "derived syllable tables");
    (
        LookupTable::from_pairs(marks),
        LookupTable::from_pairs(tokens),
        LookupTable::from_pairs(plain),
    )
});

/// The four immutable tables consumed by the conversion pipeline.
///
/// Loading is two-phase: constructors return `Result`, and conversion only
/// ever sees a fully loaded set. A shared set may be read from any number
/// of threads as long as nothing mutates it, which nothing here does.
#[derive(Debug, Clone)]
pub struct LookupTableSet {
    /// Chinese glyph sequence → numbered syllable(s).
    pub hanzi: LookupTable,
    /// Numbered syllable → tone-marked syllable.
    pub marks: LookupTable,
    /// Numbered syllable → itself, for boundary recognition.
    pub tokens: LookupTable,
    /// Numbered syllable → toneless syllable.
    pub plain: LookupTable,
}

impl LookupTableSet {
    /// The built-in table set: embedded hanzi dictionary plus syllable
    /// tables derived from [`PINYIN_SYLLABLES`].
    pub fn builtin() -> Result<Self, PinyinError> {
        let hanzi = LookupTable::from_json_str("hanzi", BUILTIN_HANZI_JSON)?;
        let (marks, tokens, plain) = SYLLABLE_TABLES.clone();
        Ok(Self {
            hanzi,
            marks,
            tokens,
            plain,
        })
    }

    /// Load all four tables from JSON object documents, mirroring the four
    /// upstream idx resources. Fails on the first table that cannot be
    /// loaded; no partial set is ever returned.
    pub fn from_json_strs(
        hanzi: &str,
        marks: &str,
        tokens: &str,
        plain: &str,
    ) -> Result<Self, PinyinError> {
        Ok(Self {
            hanzi: LookupTable::from_json_str("hanzi", hanzi)?,
            marks: LookupTable::from_json_str("marks", marks)?,
            tokens: LookupTable::from_json_str("tokens", tokens)?,
            plain: LookupTable::from_json_str("plain", plain)?,
        })
    }

    /// Built-in syllable tables with a caller-supplied hanzi dictionary.
    ///
    /// `hanzi_json` has the same shape as the embedded resource: a JSON
    /// object mapping glyph sequences to numbered syllables.
    pub fn with_hanzi_json(hanzi_json: &str) -> Result<Self, PinyinError> {
        let hanzi = LookupTable::from_json_str("hanzi", hanzi_json)?;
        let (marks, tokens, plain) = SYLLABLE_TABLES.clone();
        Ok(Self {
            hanzi,
            marks,
            tokens,
            plain,
        })
    }
}
