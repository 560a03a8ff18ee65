//! Script-aware classification of Hebrew codepoints.
//!
//! Everything here is a plain range test over the Hebrew Unicode block:
//! letters live at U+05D0..U+05EA, the combining accents and points at
//! U+0591..U+05C7.

use alloc::string::String;

/// Dagesh / mapiq point, doubles as the gemination marker.
pub const DAGESH: char = '\u{05BC}';

/// Sof pasuq, the verse-final punctuation mark.
pub const SOF_PASUQ: char = '\u{05C3}';

/// Any combining mark in the accents-and-points block. This is the range
/// stripped when reducing a word to bare consonants.
pub fn is_mark(c: char) -> bool {
    matches!(c, '\u{0591}'..='\u{05C7}')
}

/// Cantillation accents only, disjoint from the vowel points below.
pub fn is_cantillation(c: char) -> bool {
    matches!(c, '\u{0591}'..='\u{05AF}')
}

/// Full vowel signs, the subset of points that carry a syllable. Excludes
/// maqaf (U+05BE), paseq (U+05C0), sof pasuq (U+05C3) and nun hafukha
/// (U+05C6), which are word/verse punctuation rather than vowels.
pub fn is_vowel_point(c: char) -> bool {
    matches!(
        c,
        '\u{05B0}'..='\u{05BD}' | '\u{05BF}' | '\u{05C1}' | '\u{05C2}' | '\u{05C4}' | '\u{05C5}' | '\u{05C7}'
    )
}

/// The five word-final consonant forms.
pub fn is_final_form(c: char) -> bool {
    matches!(c, 'ך' | 'ם' | 'ן' | 'ף' | 'ץ')
}

/// A consonant letter (including final forms).
pub fn is_letter(c: char) -> bool {
    matches!(c, '\u{05D0}'..='\u{05EA}')
}

/// Strips every accent and point codepoint, leaving bare consonants in
/// their original order.
pub fn consonants(text: &str) -> String {
    text.chars().filter(|c| !is_mark(*c)).collect()
}
