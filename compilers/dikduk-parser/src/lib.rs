//! Verse-level front end for the rule analyzer: splits running Hebrew text
//! into word and punctuation tokens, then analyzes each word token.

pub mod parser;
pub mod token;

use crate::parser::{parse_with_spans, RawToken};
use crate::token::{Token, TokenKind};
use dikduk_morph::RuleAnalyzer;
use dikduk_protocol::{WordAnalysis, WordCategory};

/// One token of a verse, with the morphological analysis attached to word
/// tokens. Punctuation carries no analysis.
#[derive(Debug, Clone)]
pub struct AnalyzedToken<'a> {
    pub token: Token<'a>,
    pub analysis: Option<WordAnalysis>,
}

pub struct VerseAnalyzer {
    analyzer: RuleAnalyzer,
}

impl VerseAnalyzer {
    pub const fn new() -> Self {
        Self {
            analyzer: RuleAnalyzer::new(),
        }
    }

    /// Text -> structured tokens, spans indexing the original input.
    pub fn tokenize<'a>(&self, input: &'a str) -> Vec<Token<'a>> {
        parse_with_spans(input)
            .into_iter()
            .map(|(span, raw)| {
                let text = &input[span.start..span.end];
                let kind = match raw {
                    RawToken::Punct(c) => TokenKind::Punctuation(c),
                    RawToken::Word(_) => TokenKind::Word,
                };
                Token { span, text, kind }
            })
            .collect()
    }

    /// Primary entry point: tokenize a verse and analyze every word token.
    pub fn analyze_verse<'a>(&self, input: &'a str) -> Vec<AnalyzedToken<'a>> {
        self.tokenize(input)
            .into_iter()
            .map(|token| {
                let analysis = match token.kind {
                    TokenKind::Word => {
                        let analysis = self.analyzer.analyze(token.text);
                        if analysis.category.primary == WordCategory::Unknown {
                            log::debug!(
                                "no morphological pattern matched for '{}' at byte {}",
                                token.text,
                                token.span.start
                            );
                        }
                        Some(analysis)
                    }
                    TokenKind::Punctuation(_) => None,
                };
                AnalyzedToken { token, analysis }
            })
            .collect()
    }
}

impl Default for VerseAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
