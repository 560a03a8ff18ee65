#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Grammatical function of a stripped single-letter prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum PrefixFunction {
    DefiniteArticle = 0,
    ConjunctionVav = 1,
    PrepositionIn = 2,
    PrepositionLike = 3,
    PrepositionTo = 4,
    PrepositionFrom = 5,
    RelativePronoun = 6,
}

/// Grammatical function of a stripped suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum SuffixFunction {
    MasculinePlural = 0,
    FemininePlural = 1,
    FeminineSingularOrConstruct = 2,
    ConstructOrPossessive = 3,
    FeminineOrDirectional = 4,
    FinalNunEnergicum = 5,
    FirstPluralPossessive = 6,
    SecondMasculinePlural = 7,
    SecondFemininePlural = 8,
}

/// Where an affix sits relative to the stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum AffixPosition {
    Prefix = 0,
    Suffix = 1,
}

/// Function tag of a morpheme span, prefix and suffix tags unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum MorphemeFunction {
    Prefix(PrefixFunction),
    Suffix(SuffixFunction),
}

/// Coarse part-of-speech guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum WordCategory {
    Verb = 0,
    Noun = 1,
    Particle = 2,
    Unknown = 3,
}

impl WordCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WordCategory::Verb => "verb",
            WordCategory::Noun => "noun",
            WordCategory::Particle => "particle",
            WordCategory::Unknown => "unknown",
        }
    }
}

/// How trustworthy a mechanically extracted root is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum RootConfidence {
    Low = 0,
    Medium = 1,
}

/// Secondary category hints. These come from leading/trailing-letter
/// heuristics and are explicitly NOT guaranteed correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum CategoryHint {
    // Verbal: plausible binyan/tense from the leading letter
    PossibleHiphil = 0,
    PossibleNiphal = 1,
    PossibleHitpaelOrFuture = 2,
    PossibleFuture3ms = 3,
    PossibleFuture1s = 4,
    // Nominal: definiteness/gender/number from leading or trailing letters
    DefiniteArticle = 5,
    MasculinePlural = 6,
    FemininePlural = 7,
    FeminineOrConstruct = 8,
    // Particle fallback
    ShortFunctionWord = 9,
}

bitflags! {
    /// Independent presence flags for special orthographic marks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct SpecialMarkers: u8 {
        /// Dagesh (U+05BC), gemination or plosive marker.
        const DAGESH = 1;
        /// Any of the five final-form consonants.
        const FINAL_FORM = 2;
        /// Any cantillation accent (U+0591..U+05AF).
        const CANTILLATION = 4;
    }
}
