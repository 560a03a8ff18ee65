//! Coarse part-of-speech classification over the cleaned token.
//!
//! First match wins: verb, noun, short-word particle, unknown. Both the
//! verb and noun checks are noisy letter heuristics; the secondary hints
//! they produce are plausibility tags, not verified parses.

use crate::chars;
use crate::patterns::{PatternDatabase, ARTICLE};
use alloc::vec::Vec;
use dikduk_protocol::{CategoryHint, Classification, WordCategory};

/// Verb candidate test: at least two of three indicators must hold. A
/// deliberately noisy rule, not a certainty test.
pub fn matches_verb(db: &PatternDatabase, word: &str) -> bool {
    let first = word.chars().next();
    let last = word.chars().next_back();

    let mut indicators = 0;
    if chars::consonants(word).chars().count() >= 3 {
        indicators += 1;
    }
    if last.is_some_and(|c| db.verb_trailing.contains(&c)) {
        indicators += 1;
    }
    if first.is_some_and(|c| db.verb_leading.contains(&c)) {
        indicators += 1;
    }
    indicators >= 2
}

/// Noun candidate test: definite article up front, or a nominal ending.
pub fn matches_noun(db: &PatternDatabase, word: &str) -> bool {
    word.starts_with(ARTICLE) || db.noun_endings.iter().any(|ending| word.ends_with(ending))
}

pub fn classify(db: &PatternDatabase, word: &str) -> Classification {
    if matches_verb(db, word) {
        return Classification {
            primary: WordCategory::Verb,
            secondary: verbal_hints(word),
            reasoning: "matches Hebrew verbal morphology patterns".into(),
        };
    }

    if matches_noun(db, word) {
        return Classification {
            primary: WordCategory::Noun,
            secondary: nominal_hints(word),
            reasoning: "matches Hebrew nominal morphology patterns".into(),
        };
    }

    // Short function words dominate this length class
    if word.chars().count() <= 3 {
        return Classification {
            primary: WordCategory::Particle,
            secondary: alloc::vec![CategoryHint::ShortFunctionWord],
            reasoning: "short word likely function/grammatical particle".into(),
        };
    }

    Classification::unknown("pattern not clearly identified")
}

/// Plausible binyan/tense from the leading letter.
fn verbal_hints(word: &str) -> Vec<CategoryHint> {
    let mut hints = Vec::new();
    match word.chars().next() {
        Some('ה') => hints.push(CategoryHint::PossibleHiphil),
        Some('נ') => hints.push(CategoryHint::PossibleNiphal),
        Some('ת') => hints.push(CategoryHint::PossibleHitpaelOrFuture),
        Some('י') => hints.push(CategoryHint::PossibleFuture3ms),
        Some('א') => hints.push(CategoryHint::PossibleFuture1s),
        _ => {}
    }
    hints
}

/// Definiteness/gender/number from the outermost letters. A ות-final word
/// also ends in ת, so it collects both feminine tags.
fn nominal_hints(word: &str) -> Vec<CategoryHint> {
    let mut hints = Vec::new();
    if word.starts_with(ARTICLE) {
        hints.push(CategoryHint::DefiniteArticle);
    }
    if word.ends_with("ים") {
        hints.push(CategoryHint::MasculinePlural);
    }
    if word.ends_with("ות") {
        hints.push(CategoryHint::FemininePlural);
    }
    if word.ends_with('ת') {
        hints.push(CategoryHint::FeminineOrConstruct);
    }
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::DEFAULT;

    #[test]
    fn test_future_form_is_verb_with_unverified_binyan_hint() {
        // יכתב: leading yod + three consonants = two indicators
        let c = classify(&DEFAULT, "יכתב");
        assert_eq!(c.primary, WordCategory::Verb);
        assert_eq!(c.secondary, alloc::vec![CategoryHint::PossibleFuture3ms]);
    }

    #[test]
    fn test_niphal_shaped_word_is_verb_with_unverified_hint() {
        // נשמרת: leading nun, trailing tav, five consonants
        let c = classify(&DEFAULT, "נשמרת");
        assert_eq!(c.primary, WordCategory::Verb);
        assert_eq!(c.secondary, alloc::vec![CategoryHint::PossibleNiphal]);
    }

    #[test]
    fn test_definite_plural_is_noun_not_verb() {
        // Leading article and trailing final mem are not verb evidence
        let c = classify(&DEFAULT, "הספרים");
        assert_eq!(c.primary, WordCategory::Noun);
        assert_eq!(
            c.secondary,
            alloc::vec![CategoryHint::DefiniteArticle, CategoryHint::MasculinePlural]
        );
    }

    #[test]
    fn test_feminine_plural_collects_both_trailing_hints() {
        // ends in ות and therefore also in ת
        let hints = nominal_hints("מלכות");
        assert!(hints.contains(&CategoryHint::FemininePlural));
        assert!(hints.contains(&CategoryHint::FeminineOrConstruct));
    }

    #[test]
    fn test_definite_word_is_noun_with_article_hint() {
        let c = classify(&DEFAULT, "הארץ");
        assert_eq!(c.primary, WordCategory::Noun);
        assert_eq!(c.secondary, alloc::vec![CategoryHint::DefiniteArticle]);
    }

    #[test]
    fn test_short_unmatched_word_falls_back_to_particle() {
        let c = classify(&DEFAULT, "גד");
        assert_eq!(c.primary, WordCategory::Particle);
        assert_eq!(c.secondary, alloc::vec![CategoryHint::ShortFunctionWord]);
    }

    #[test]
    fn test_long_unmatched_word_is_unknown() {
        // Four consonants but no verbal edge letters and no nominal ending
        let c = classify(&DEFAULT, "פרעש");
        assert_eq!(c.primary, WordCategory::Unknown);
        assert!(c.secondary.is_empty());
    }

    #[test]
    fn test_empty_token_takes_the_length_fallback() {
        // Length zero sits inside the particle length class; the
        // empty-input unknown override lives in the analyzer, not here
        let c = classify(&DEFAULT, "");
        assert_eq!(c.primary, WordCategory::Particle);
    }

    #[test]
    fn test_non_hebrew_text_fails_all_pattern_checks() {
        let c = classify(&DEFAULT, "hello");
        assert_eq!(c.primary, WordCategory::Unknown);
    }
}
