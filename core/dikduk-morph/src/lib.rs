//! Rule-based Hebrew morphological analysis.
//!
//! Dictionary-free by design: an inflected word is segmented into stacked
//! prefixes, a stem and at most one suffix by greedy table scans, then
//! classified, root-extracted and scored. Every call returns a fully
//! populated [`WordAnalysis`]; degenerate input degrades to low-confidence
//! `unknown` values instead of failing.

#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod chars;
mod classify;
mod confidence;
mod features;
mod morphemes;
pub mod patterns;
mod root;

pub use patterns::PatternDatabase;

use dikduk_protocol::{AnalyzerError, Classification, WordAnalysis, WordAnalyzer};

/// Strips one trailing run of verse/sentence punctuation and surrounding
/// whitespace. Idempotent.
pub fn clean(word: &str) -> &str {
    word.trim_end_matches(|c: char| {
        c.is_whitespace() || matches!(c, chars::SOF_PASUQ | '.' | ',' | ';' | '!' | '?')
    })
    .trim()
}

/// The rule engine. Stateless per call: analysis is a pure function of the
/// static pattern tables and the input token, so one value can be shared
/// across threads without coordination.
#[derive(Debug, Clone, Copy)]
pub struct RuleAnalyzer {
    patterns: &'static PatternDatabase,
}

impl RuleAnalyzer {
    pub const fn new() -> Self {
        Self {
            patterns: &patterns::DEFAULT,
        }
    }

    /// Analyzes one word token. Never fails: empty, punctuation-only and
    /// non-Hebrew input all come back as low-confidence results.
    pub fn analyze(&self, word: &str) -> WordAnalysis {
        let cleaned = clean(word);

        let segmentation = morphemes::segment(self.patterns, cleaned);
        let root = root::extract(&segmentation.stem);
        let features = features::detect(cleaned);

        // An empty or whitespace-only call is a valid degenerate input and
        // reports unknown with zero confidence outright; a token that
        // merely cleans to empty (bare punctuation) still goes through the
        // classifier fallbacks and the factor mean.
        let (category, confidence) = if word.trim().is_empty() {
            (Classification::unknown("empty input token"), 0.0)
        } else {
            (
                classify::classify(self.patterns, cleaned),
                confidence::score(self.patterns, cleaned, &segmentation.stem),
            )
        };

        WordAnalysis {
            original: word.into(),
            cleaned: cleaned.into(),
            prefixes: segmentation.prefixes,
            stem: segmentation.stem,
            suffix: segmentation.suffix,
            category,
            root,
            features,
            confidence,
        }
    }
}

impl Default for RuleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordAnalyzer for RuleAnalyzer {
    fn analyze_word(&self, word: &str) -> Result<WordAnalysis, AnalyzerError> {
        Ok(self.analyze(word))
    }
}
