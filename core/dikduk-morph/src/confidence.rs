//! Confidence aggregation: three clamped factors, averaged and rounded.
//!
//! Interpretable score, not a calibrated probability. The factor values
//! and the two-decimal rounding are load-bearing for downstream consumers
//! comparing stored results, so they must not drift.

use crate::classify;
use crate::patterns::PatternDatabase;

pub fn score(db: &PatternDatabase, cleaned: &str, stem: &str) -> f64 {
    let length = cleaned.chars().count();
    let length_factor = if (2..=8).contains(&length) { 1.0 } else { 0.5 };

    let pattern_factor =
        if classify::matches_verb(db, cleaned) || classify::matches_noun(db, cleaned) {
            0.8
        } else {
            0.4
        };

    let stem_factor = if stem.is_empty() { 0.3 } else { 0.7 };

    round2((length_factor + pattern_factor + stem_factor) / 3.0)
}

// Half-up rounding to two decimals; core has no f64::round. All inputs are
// positive means of the factor table, so the cast truncation is safe.
fn round2(value: f64) -> f64 {
    ((value * 100.0 + 0.5) as u64) as f64 / 100.0
}
