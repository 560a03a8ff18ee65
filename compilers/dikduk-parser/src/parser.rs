use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::map,
    IResult,
};

use crate::token::Span;

/// Predicate to define what constitutes a "Hebrew word" character.
/// Letters plus the combining points and accents, plus maqaf, which joins
/// words into one token. Sof pasuq and paseq separate, so they stay out.
fn is_hebrew_word_char(c: char) -> bool {
    match c {
        // Letter block (includes final forms)
        '\u{05D0}'..='\u{05EA}' => true,
        // Accents and points that ride on a letter
        '\u{0591}'..='\u{05BD}' | '\u{05BF}' | '\u{05C1}' | '\u{05C2}' => true,
        '\u{05C4}' | '\u{05C5}' | '\u{05C7}' => true,
        // Maqaf: word joiner
        '\u{05BE}' => true,
        // Standard alphabetic check for resilience on mixed text
        _ => c.is_alphabetic(),
    }
}

#[derive(Debug, Clone)]
pub enum RawToken<'a> {
    Word(&'a str),
    Punct(char),
}

pub fn parse_with_spans(original_input: &str) -> Vec<(Span, RawToken)> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        // 1. Skip whitespace
        let (next_input, _) = match multispace0::<&str, nom::error::Error<&str>>(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        // 2. Try to match a token
        let parse_res: IResult<&str, RawToken> = alt((
            map(take_while1(is_hebrew_word_char), RawToken::Word),
            map(char('\u{05C3}'), RawToken::Punct), // sof pasuq
            map(char('\u{05C0}'), RawToken::Punct), // paseq
            map(char('.'), RawToken::Punct),
            map(char(','), RawToken::Punct),
            map(char(';'), RawToken::Punct),
            map(char('?'), RawToken::Punct),
            map(char('!'), RawToken::Punct),
        ))(input);

        match parse_res {
            Ok((next_input, token)) => {
                // 'token' came from 'input', which came from 'original_input'
                let len = input.len() - next_input.len();
                let start = input.as_ptr() as usize - original_input.as_ptr() as usize;

                result.push((Span::new(start, start + len), token));
                input = next_input;
            }
            Err(_) => {
                // Skip one char to recover (resilient parsing)
                if let Some(c) = input.chars().next() {
                    let len = c.len_utf8();
                    input = &input[len..];
                } else {
                    break;
                }
            }
        }
    }

    result
}
