//! The static pattern database: affix tables and classifier letter sets.
//!
//! Read-only for the process lifetime. All analysis is a pure function of
//! these tables and the input token, so analyzers are freely shareable
//! across threads.

use dikduk_protocol::{PrefixFunction, SuffixFunction};

#[derive(Debug)]
pub struct PatternDatabase {
    /// Single-letter prefixes in priority order. The strip loop rescans
    /// from the top after every removal, so prefixes stack (e.g.
    /// conjunction + preposition + article).
    pub prefixes: &'static [(char, PrefixFunction)],
    /// Suffixes ordered longest first, frequency order within a length.
    /// The scan takes the first hit and never strips a second suffix.
    pub suffixes: &'static [(&'static str, SuffixFunction)],
    /// Leading letters counting toward the verb heuristic.
    pub verb_leading: &'static [char],
    /// Trailing letters counting toward the verb heuristic.
    pub verb_trailing: &'static [char],
    /// Endings that mark a token as a noun candidate.
    pub noun_endings: &'static [&'static str],
}

/// The definite article, checked by both the prefix stripper and the noun
/// heuristic.
pub const ARTICLE: char = 'ה';

pub const DEFAULT: PatternDatabase = PatternDatabase {
    prefixes: &[
        (ARTICLE, PrefixFunction::DefiniteArticle),
        ('ו', PrefixFunction::ConjunctionVav),
        ('ב', PrefixFunction::PrepositionIn),
        ('כ', PrefixFunction::PrepositionLike),
        ('ל', PrefixFunction::PrepositionTo),
        ('מ', PrefixFunction::PrepositionFrom),
        ('ש', PrefixFunction::RelativePronoun),
    ],
    suffixes: &[
        ("ים", SuffixFunction::MasculinePlural),
        ("ות", SuffixFunction::FemininePlural),
        ("נו", SuffixFunction::FirstPluralPossessive),
        ("כם", SuffixFunction::SecondMasculinePlural),
        ("כן", SuffixFunction::SecondFemininePlural),
        ("ת", SuffixFunction::FeminineSingularOrConstruct),
        ("י", SuffixFunction::ConstructOrPossessive),
        ("ה", SuffixFunction::FeminineOrDirectional),
        ("ן", SuffixFunction::FinalNunEnergicum),
    ],
    // The article is deliberately absent here: a leading ה feeds the noun
    // heuristic instead. Likewise final mem stays out of the trailing set
    // so that ים-final plurals do not count as verb evidence.
    verb_leading: &['א', 'ת', 'י', 'נ'],
    verb_trailing: &['ת', 'י', 'נ', 'ה'],
    noun_endings: &["ים", "ות", "ת", "ה", "י"],
};
