#![no_std] // Critical for WASM/embedded consumers of the analysis types

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod analyzer;
pub mod morphology;

// Re-export core types for convenience
pub use analyzer::{AnalyzerError, WordAnalyzer};
pub use morphology::*;

pub mod model;
pub use model::*;
