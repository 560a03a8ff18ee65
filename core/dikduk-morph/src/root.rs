//! Mechanical consonantal-root extraction.

use crate::chars;
use dikduk_protocol::{RootConfidence, RootInfo};

/// Reduces a stem to its bare consonants and reports that as the candidate
/// root. No root dictionary is consulted: hollow, geminate and heavily
/// affixed forms will come out wrong, and the Medium/Low tag is the only
/// acknowledgement of that.
pub fn extract(stem: &str) -> RootInfo {
    let consonants = chars::consonants(stem);
    let length = consonants.chars().count();
    let confidence = if (2..=4).contains(&length) {
        RootConfidence::Medium
    } else {
        RootConfidence::Low
    };
    RootInfo {
        consonants,
        length,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triliteral_root_from_pointed_stem() {
        let root = extract("כָּתַב");
        assert_eq!(root.consonants, "כתב");
        assert_eq!(root.length, 3);
        assert_eq!(root.confidence, RootConfidence::Medium);
    }

    #[test]
    fn test_biliteral_root_still_medium() {
        let root = extract("יָד");
        assert_eq!(root.length, 2);
        assert_eq!(root.confidence, RootConfidence::Medium);
    }

    #[test]
    fn test_one_letter_stem_is_low_confidence() {
        let root = extract("נ");
        assert_eq!(root.length, 1);
        assert_eq!(root.confidence, RootConfidence::Low);
    }

    #[test]
    fn test_overlong_residual_is_low_confidence() {
        let root = extract("שמרתםה");
        assert_eq!(root.length, 6);
        assert_eq!(root.confidence, RootConfidence::Low);
    }

    #[test]
    fn test_empty_stem() {
        let root = extract("");
        assert_eq!(root.consonants, "");
        assert_eq!(root.length, 0);
        assert_eq!(root.confidence, RootConfidence::Low);
    }
}
