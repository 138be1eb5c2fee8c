//! Tokenizer for the `$` placeholder syntax.
//!
//! Three forms exist inside string values:
//! - `$name`                  variable (block reference vars)
//! - `$theme.seg1.seg2...`    theme token
//! - `$t:key`                 translation key
//!
//! A string is a placeholder only as a whole. `"Hello $name"` is literal text.

use logos::{Lexer, Logos};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'src> {
    #[token("$theme.")]
    ThemePrefix,

    #[token("$t:")]
    TranslationPrefix,

    #[token("$")]
    Sigil,

    #[token(".")]
    Dot,

    #[regex(r"[^.$]+", |lex| lex.slice())]
    Segment(&'src str),
}

/// Classification of a string value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder<'a> {
    Literal,
    Variable(&'a str),
    ThemePath(Vec<&'a str>),
    Translation(&'a str),
}

pub fn classify(input: &str) -> Placeholder<'_> {
    let mut lexer = Token::lexer(input);
    match lexer.next() {
        Some(Ok(Token::ThemePrefix)) => match theme_path(&mut lexer) {
            Some(segments) => Placeholder::ThemePath(segments),
            None => variable_name(input).map_or(Placeholder::Literal, Placeholder::Variable),
        },
        Some(Ok(Token::TranslationPrefix)) => {
            let key = lexer.remainder();
            if key.is_empty() {
                variable_name(input).map_or(Placeholder::Literal, Placeholder::Variable)
            } else {
                Placeholder::Translation(key)
            }
        }
        _ => variable_name(input).map_or(Placeholder::Literal, Placeholder::Variable),
    }
}

/// Name a `$`-prefixed string would look up in a vars mapping
pub fn variable_name(input: &str) -> Option<&str> {
    input.strip_prefix('$').filter(|name| !name.is_empty())
}

/// `$theme.` already consumed. Expects `Segment (Dot Segment)*` up to the end.
fn theme_path<'a>(lexer: &mut Lexer<'a, Token<'a>>) -> Option<Vec<&'a str>> {
    let mut segments = Vec::new();
    loop {
        match lexer.next() {
            Some(Ok(Token::Segment(segment))) => segments.push(segment),
            _ => return None,
        }
        match lexer.next() {
            None => return Some(segments),
            Some(Ok(Token::Dot)) => {}
            _ => return None,
        }
    }
}
