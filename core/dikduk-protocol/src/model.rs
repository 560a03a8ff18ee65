use crate::morphology::{
    AffixPosition, CategoryHint, MorphemeFunction, PrefixFunction, RootConfidence, SpecialMarkers,
    SuffixFunction, WordCategory,
};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One detected affix. The span text is the exact slice removed from the
/// cleaned token, so spans concatenate back losslessly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct MorphemeSpan {
    pub text: String,
    pub function: MorphemeFunction,
    pub position: AffixPosition,
}

impl MorphemeSpan {
    pub fn prefix(letter: char, function: PrefixFunction) -> Self {
        Self {
            text: letter.to_string(),
            function: MorphemeFunction::Prefix(function),
            position: AffixPosition::Prefix,
        }
    }

    pub fn suffix(text: &str, function: SuffixFunction) -> Self {
        Self {
            text: text.to_string(),
            function: MorphemeFunction::Suffix(function),
            position: AffixPosition::Suffix,
        }
    }
}

/// Part-of-speech guess with its supporting hints and a human-readable
/// justification line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Classification {
    pub primary: WordCategory,
    pub secondary: Vec<CategoryHint>,
    pub reasoning: String,
}

impl Classification {
    pub fn unknown(reasoning: &str) -> Self {
        Self {
            primary: WordCategory::Unknown,
            secondary: Vec::new(),
            reasoning: reasoning.to_string(),
        }
    }
}

/// Candidate consonantal root. Purely mechanical: no root dictionary is
/// consulted, so irregular forms will come out wrong. Known limitation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct RootInfo {
    pub consonants: String,
    pub length: usize,
    pub confidence: RootConfidence,
}

/// Diagnostic phonological/orthographic descriptors. Display material, not
/// classification input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct PhonoFeatures {
    pub syllable_estimate: usize,
    pub vowel_pattern: String,
    pub consonant_pattern: String,
    pub markers: SpecialMarkers,
}

/// Full analysis of a single word token. Created fresh per call, owned by
/// the caller, never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct WordAnalysis {
    pub original: String,
    pub cleaned: String,
    /// Stripped prefixes, outermost first (application order).
    pub prefixes: Vec<MorphemeSpan>,
    pub stem: String,
    /// At most one suffix is ever stripped.
    pub suffix: Option<MorphemeSpan>,
    pub category: Classification,
    pub root: RootInfo,
    pub features: PhonoFeatures,
    /// Mean of three clamped factors, rounded to two decimals. In [0, 1].
    pub confidence: f64,
}

impl WordAnalysis {
    /// Reassembles prefixes + stem + suffix. Equal to `cleaned` by the
    /// lossless-segmentation invariant.
    pub fn reassemble(&self) -> String {
        let mut out = String::new();
        for span in &self.prefixes {
            out.push_str(&span.text);
        }
        out.push_str(&self.stem);
        if let Some(span) = &self.suffix {
            out.push_str(&span.text);
        }
        out
    }
}
