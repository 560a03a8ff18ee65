//! Affix stripping: cleaned token -> stacked prefixes, stem, one suffix.

use crate::patterns::PatternDatabase;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use dikduk_protocol::MorphemeSpan;

/// Result of segmenting one cleaned token. Concatenating the prefix texts,
/// the stem and the suffix text reproduces the input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub prefixes: Vec<MorphemeSpan>,
    pub stem: String,
    pub suffix: Option<MorphemeSpan>,
}

/// Greedy segmentation over the pattern tables.
///
/// Prefixes: rescan the priority list after every strip, stop when the
/// residual start matches nothing or only one codepoint would remain.
/// Suffixes: longest match wins, at most one is removed, and it must leave
/// a non-empty remainder.
///
/// Known over-strip: several table entries are also legitimate stem
/// letters (a ב-initial stem loses its first letter, a ות-final root its
/// ending). Kept as-is; the confidence score is where that uncertainty
/// shows up.
pub fn segment(db: &PatternDatabase, cleaned: &str) -> Segmentation {
    let mut rest = cleaned;
    let mut prefixes = Vec::new();

    'scan: loop {
        for &(letter, function) in db.prefixes {
            if rest.starts_with(letter) && rest.chars().count() > 1 {
                prefixes.push(MorphemeSpan::prefix(letter, function));
                rest = &rest[letter.len_utf8()..];
                continue 'scan;
            }
        }
        break;
    }

    let mut suffix = None;
    for &(ending, function) in db.suffixes {
        if rest.ends_with(ending) && rest.chars().count() > ending.chars().count() {
            suffix = Some(MorphemeSpan::suffix(ending, function));
            rest = &rest[..rest.len() - ending.len()];
            break;
        }
    }

    Segmentation {
        prefixes,
        stem: rest.to_string(),
        suffix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::DEFAULT;
    use dikduk_protocol::{MorphemeFunction, PrefixFunction, SuffixFunction};

    fn prefix_functions(seg: &Segmentation) -> Vec<PrefixFunction> {
        seg.prefixes
            .iter()
            .map(|span| match span.function {
                MorphemeFunction::Prefix(f) => f,
                MorphemeFunction::Suffix(_) => panic!("suffix span in prefix list"),
            })
            .collect()
    }

    #[test]
    fn test_stacked_prefixes_in_application_order() {
        let seg = segment(&DEFAULT, "ובאדם");
        assert_eq!(
            prefix_functions(&seg),
            alloc::vec![
                PrefixFunction::ConjunctionVav,
                PrefixFunction::PrepositionIn
            ]
        );
        assert_eq!(seg.stem, "אדם");
        assert!(seg.suffix.is_none());
    }

    #[test]
    fn test_article_strips_before_plural_suffix() {
        let seg = segment(&DEFAULT, "הספרים");
        assert_eq!(prefix_functions(&seg), alloc::vec![PrefixFunction::DefiniteArticle]);
        assert_eq!(seg.stem, "ספר");
        let suffix = seg.suffix.expect("plural suffix");
        assert_eq!(suffix.text, "ים");
        assert_eq!(
            suffix.function,
            MorphemeFunction::Suffix(SuffixFunction::MasculinePlural)
        );
    }

    #[test]
    fn test_longest_suffix_wins() {
        // ות must beat the bare ת
        let seg = segment(&DEFAULT, "דלתות");
        let suffix = seg.suffix.expect("feminine plural");
        assert_eq!(suffix.text, "ות");
        assert_eq!(seg.stem, "דלת");
    }

    #[test]
    fn test_at_most_one_suffix() {
        // נו after ת would stack if stacking were allowed
        let seg = segment(&DEFAULT, "קראתנו");
        let suffix = seg.suffix.expect("one suffix");
        assert_eq!(suffix.text, "נו");
        assert_eq!(seg.stem, "קראת");
    }

    #[test]
    fn test_single_letter_token_is_left_whole() {
        let seg = segment(&DEFAULT, "ה");
        assert!(seg.prefixes.is_empty());
        assert_eq!(seg.stem, "ה");
        assert!(seg.suffix.is_none());
    }

    #[test]
    fn test_suffix_must_leave_remainder() {
        // The whole token equals a suffix entry; nothing may be stripped
        let seg = segment(&DEFAULT, "נו");
        assert!(seg.suffix.is_none());
        assert_eq!(seg.stem, "נו");
    }

    #[test]
    fn test_known_overstrip_of_short_stems() {
        // בנות is really root ב-נ-ה, but ב strips as a preposition and
        // ות as a plural, leaving a one-letter stem. Documented behavior.
        let seg = segment(&DEFAULT, "בנות");
        assert_eq!(prefix_functions(&seg), alloc::vec![PrefixFunction::PrepositionIn]);
        assert_eq!(seg.stem, "נ");
        assert_eq!(seg.suffix.expect("plural").text, "ות");
    }

    #[test]
    fn test_prefix_skips_pointed_first_letter_residual() {
        // After stripping the bare ב the residual starts with a vowel
        // point, which matches no prefix letter.
        let seg = segment(&DEFAULT, "בְּרֵאשִׁית");
        assert_eq!(prefix_functions(&seg), alloc::vec![PrefixFunction::PrepositionIn]);
        assert!(seg.stem.starts_with('\u{05B0}'));
    }

    #[test]
    fn test_empty_input_yields_empty_segmentation() {
        let seg = segment(&DEFAULT, "");
        assert!(seg.prefixes.is_empty());
        assert_eq!(seg.stem, "");
        assert!(seg.suffix.is_none());
    }
}
