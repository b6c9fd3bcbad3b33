use crate::core::tone::apply_tone;
use crate::core::types::SyllableFields;

/// Assembles the written syllable: initial, toned nucleus, final.
pub fn compose(fields: &SyllableFields) -> String {
    let mut syllable = fields.initial.clone();
    syllable.push_str(&apply_tone(&fields.nucleus, fields.tone));
    syllable.push_str(&fields.final_);
    syllable
}

/// Text handed to the speech synthesizer for a composed syllable.
pub fn speech_text(syllable: &str) -> String {
    syllable.replace('_', " ").trim().to_string()
}
