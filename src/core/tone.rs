// File: src/core/tone.rs
//! Tone-mark placement on a vowel nucleus.

use crate::core::types::Tone;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Base vowel followed by its six forms, in [`Tone::ALL`] order
/// (ngang, sắc, huyền, hỏi, ngã, nặng).
const TONE_TABLE: [(char, [char; 6]); 12] = [
    ('a', ['a', 'á', 'à', 'ả', 'ã', 'ạ']),
    ('ă', ['ă', 'ắ', 'ằ', 'ẳ', 'ẵ', 'ặ']),
    ('â', ['â', 'ấ', 'ầ', 'ẩ', 'ẫ', 'ậ']),
    ('e', ['e', 'é', 'è', 'ẻ', 'ẽ', 'ẹ']),
    ('ê', ['ê', 'ế', 'ề', 'ể', 'ễ', 'ệ']),
    ('i', ['i', 'í', 'ì', 'ỉ', 'ĩ', 'ị']),
    ('o', ['o', 'ó', 'ò', 'ỏ', 'õ', 'ọ']),
    ('ô', ['ô', 'ố', 'ồ', 'ổ', 'ỗ', 'ộ']),
    ('ơ', ['ơ', 'ớ', 'ờ', 'ở', 'ỡ', 'ợ']),
    ('u', ['u', 'ú', 'ù', 'ủ', 'ũ', 'ụ']),
    ('ư', ['ư', 'ứ', 'ừ', 'ử', 'ữ', 'ự']),
    ('y', ['y', 'ý', 'ỳ', 'ỷ', 'ỹ', 'ỵ']),
];

/// Every marked character back to its base and tone. Bases map to themselves
/// with [`Tone::Ngang`].
static REVERSE_TONE_TABLE: Lazy<HashMap<char, (char, Tone)>> = Lazy::new(|| {
    let mut reverse = HashMap::with_capacity(TONE_TABLE.len() * Tone::ALL.len());
    for (base, forms) in TONE_TABLE.iter() {
        for tone in Tone::ALL {
            reverse.insert(forms[tone.index()], (*base, tone));
        }
    }
    reverse
});

/// The twelve base vowels, in table order.
pub fn base_vowels() -> impl Iterator<Item = char> {
    TONE_TABLE.iter().map(|(base, _)| *base)
}

/// The marked form of `base` for `tone`, or `None` if `base` is not a vowel.
pub fn toned_char(base: char, tone: Tone) -> Option<char> {
    TONE_TABLE
        .iter()
        .find(|(b, _)| *b == base)
        .map(|(_, forms)| forms[tone.index()])
}

/// Splits a possibly marked vowel into its base and tone.
pub fn decompose_tone(ch: char) -> Option<(char, Tone)> {
    REVERSE_TONE_TABLE.get(&ch).copied()
}

/// Removes every tone mark, leaving vowel qualities (â, ơ, ...) intact.
pub fn strip_tones(s: &str) -> String {
    s.chars().map(base_of).collect()
}

fn base_of(ch: char) -> char {
    decompose_tone(ch).map_or(ch, |(base, _)| base)
}

/// Position of the tone mark within a plain nucleus, or `None` when the
/// nucleus shape is unsupported (empty or longer than three letters).
fn tone_position(plain: &[char]) -> Option<usize> {
    match plain {
        [] => None,
        [_] => Some(0),
        ['u', _] | ['i', 'ê'] | ['o', 'a'] | ['ư', 'ơ'] => Some(1),
        [_, _] => Some(0),
        ['u', 'y', 'ê'] => Some(2),
        [_, _, _] => Some(1),
        _ => None,
    }
}

/// Places `tone` on the main vowel of `nucleus`.
///
/// Any marks already present are removed first, so re-applying a tone is
/// idempotent and [`Tone::Ngang`] always yields the bare nucleus. Empty
/// nuclei and nuclei longer than three letters are returned unchanged.
pub fn apply_tone(nucleus: &str, tone: Tone) -> String {
    let mut chars: Vec<char> = nucleus.chars().map(base_of).collect();

    let Some(target) = tone_position(&chars) else {
        return nucleus.to_string();
    };

    let base = chars[target];
    chars[target] = toned_char(base, tone).unwrap_or(base);
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_vowel_takes_the_mark() {
        assert_eq!(apply_tone("a", Tone::Sac), "á");
        assert_eq!(apply_tone("ư", Tone::Nga), "ữ");
        assert_eq!(apply_tone("y", Tone::Hoi), "ỷ");
    }

    #[test]
    fn two_letter_nuclei() {
        assert_eq!(apply_tone("oa", Tone::Huyen), "oà");
        assert_eq!(apply_tone("iê", Tone::Sac), "iế");
        assert_eq!(apply_tone("ươ", Tone::Nang), "ượ");
        assert_eq!(apply_tone("uy", Tone::Hoi), "uỷ");
        assert_eq!(apply_tone("ua", Tone::Sac), "uá");
        assert_eq!(apply_tone("ai", Tone::Huyen), "ài");
        assert_eq!(apply_tone("eo", Tone::Nga), "ẽo");
    }

    #[test]
    fn three_letter_nuclei() {
        assert_eq!(apply_tone("uyê", Tone::Nang), "uyệ");
        assert_eq!(apply_tone("ươi", Tone::Sac), "ưới");
        assert_eq!(apply_tone("oai", Tone::Huyen), "oài");
        assert_eq!(apply_tone("iêu", Tone::Hoi), "iểu");
    }

    #[test]
    fn unsupported_shapes_pass_through() {
        assert_eq!(apply_tone("", Tone::Sac), "");
        assert_eq!(apply_tone("oaoa", Tone::Sac), "oaoa");
        assert_eq!(apply_tone("[x9]", Tone::Nang), "[x9]");
    }

    #[test]
    fn existing_marks_are_replaced() {
        assert_eq!(apply_tone("á", Tone::Huyen), "à");
        assert_eq!(apply_tone("oà", Tone::Ngang), "oa");
        assert_eq!(apply_tone("ứơ", Tone::Nga), "ưỡ");
    }

    #[test]
    fn marked_characters_round_trip() {
        for base in base_vowels() {
            for tone in Tone::ALL {
                let marked = apply_tone(&base.to_string(), tone);
                let mut chars = marked.chars();
                let ch = chars.next().unwrap();
                assert!(chars.next().is_none());
                assert_eq!(decompose_tone(ch), Some((base, tone)), "{marked}");
            }
        }
    }

    #[test]
    fn ngang_restores_the_bare_nucleus() {
        for nucleus in ["ả", "oẹ", "uyễ", "ườ", "iệu", "ay"] {
            let bare = apply_tone(nucleus, Tone::Ngang);
            assert_eq!(bare, strip_tones(nucleus));
            assert!(bare.chars().all(|c| decompose_tone(c).map_or(true, |(_, t)| t == Tone::Ngang)));
        }
    }

    #[test]
    fn reapplying_a_tone_is_idempotent() {
        for nucleus in ["a", "oa", "uyê", "ươu", "ie", ""] {
            for tone in Tone::ALL {
                let once = apply_tone(nucleus, tone);
                assert_eq!(apply_tone(&once, tone), once);
            }
        }
    }

    #[test]
    fn reverse_table_covers_every_form_once() {
        assert_eq!(REVERSE_TONE_TABLE.len(), 72);
        assert_eq!(toned_char('b', Tone::Sac), None);
        assert_eq!(decompose_tone('đ'), None);
    }
}
