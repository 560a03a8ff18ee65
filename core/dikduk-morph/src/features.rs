//! Diagnostic phonological descriptors. Display material only; nothing in
//! the classifier reads these.

use crate::chars;
use alloc::string::String;
use dikduk_protocol::{PhonoFeatures, SpecialMarkers};

pub fn detect(word: &str) -> PhonoFeatures {
    let vowel_pattern: String = word.chars().filter(|c| chars::is_vowel_point(*c)).collect();
    let consonant_pattern = chars::consonants(word);

    // Every word carries at least one syllable, unpointed text included
    let syllable_estimate = vowel_pattern.chars().count().max(1);

    let mut markers = SpecialMarkers::empty();
    if word.contains(chars::DAGESH) {
        markers |= SpecialMarkers::DAGESH;
    }
    if word.chars().any(chars::is_final_form) {
        markers |= SpecialMarkers::FINAL_FORM;
    }
    if word.chars().any(chars::is_cantillation) {
        markers |= SpecialMarkers::CANTILLATION;
    }

    PhonoFeatures {
        syllable_estimate,
        vowel_pattern,
        consonant_pattern,
        markers,
    }
}
