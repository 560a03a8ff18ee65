use crate::model::WordAnalysis;
use alloc::string::String;
use core::fmt;

/// Failure reported by a fallible analysis backend.
///
/// The rule engine itself never fails; this exists for adapters over
/// external sources (remote models, subprocess tools) that share the
/// `WordAnalyzer` seam.
#[derive(Debug)]
pub enum AnalyzerError {
    BackendUnavailable(String),
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzerError::BackendUnavailable(detail) => {
                write!(f, "analysis backend unavailable: {}", detail)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnalyzerError {}

/// Capability contract for anything that can analyze one Hebrew word.
pub trait WordAnalyzer {
    fn analyze_word(&self, word: &str) -> Result<WordAnalysis, AnalyzerError>;
}
