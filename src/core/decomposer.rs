// File: src/core/decomposer.rs
use crate::core::inventory::{FINALS_LONGEST_FIRST, INITIALS_LONGEST_FIRST};
use crate::core::tone::decompose_tone;
use crate::core::types::{SyllableFields, Tone};

/// Recovers the editable fields of a written syllable.
///
/// The initial and final clusters are stripped greedily, longest first, and
/// the first tone-marked vowel of what remains gives the tone. There is no
/// backtracking: a word such as `"gìn"` splits as `g + ì + n` even though
/// `gi` is also a legal initial.
pub fn decompose(word: &str) -> SyllableFields {
    let (initial, rest) = strip_initial(word);
    let (toned_nucleus, final_) = strip_final(rest);

    let marked = toned_nucleus
        .char_indices()
        .find_map(|(pos, ch)| match decompose_tone(ch) {
            Some((base, tone)) if tone != Tone::Ngang => Some((pos, ch, base, tone)),
            _ => None,
        });

    let (nucleus, tone) = match marked {
        Some((pos, ch, base, tone)) => {
            let mut bare = String::with_capacity(toned_nucleus.len());
            bare.push_str(&toned_nucleus[..pos]);
            bare.push(base);
            bare.push_str(&toned_nucleus[pos + ch.len_utf8()..]);
            (bare, tone)
        }
        None => (toned_nucleus.to_string(), Tone::Ngang),
    };

    SyllableFields {
        initial: initial.to_string(),
        nucleus,
        tone,
        final_: final_.to_string(),
    }
}

fn strip_initial(word: &str) -> (&str, &str) {
    INITIALS_LONGEST_FIRST
        .iter()
        .find_map(|cluster| word.strip_prefix(cluster).map(|rest| (*cluster, rest)))
        .unwrap_or(("", word))
}

fn strip_final(rest: &str) -> (&str, &str) {
    FINALS_LONGEST_FIRST
        .iter()
        .find_map(|cluster| rest.strip_suffix(cluster).map(|nucleus| (nucleus, *cluster)))
        .unwrap_or((rest, ""))
}
