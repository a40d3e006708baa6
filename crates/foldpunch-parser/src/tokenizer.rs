//! Whitespace-separated token reader with line tracking
//!
//! Numbers are read as whole whitespace-delimited tokens. Shape
//! discriminators are read as a single character, so a discriminator glued to
//! the following number (`P0 0 10 10`) still splits correctly.

use std::str::FromStr;

use foldpunch_core::Point;

use crate::error::{ParseError, ParseResult};

pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
        }
    }

    /// 1-based line of the next token.
    pub fn line(&mut self) -> usize {
        self.skip_whitespace();
        self.line
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        let trimmed = rest.trim_start();
        let skipped = &rest[..rest.len() - trimmed.len()];
        self.line += skipped.matches('\n').count();
        self.pos += skipped.len();
    }

    /// Whether only whitespace remains.
    pub fn is_exhausted(&mut self) -> bool {
        self.skip_whitespace();
        self.pos >= self.input.len()
    }

    /// Next non-whitespace character.
    pub fn next_char(&mut self, expected: &'static str) -> ParseResult<char> {
        self.skip_whitespace();
        let c = self.input[self.pos..]
            .chars()
            .next()
            .ok_or(ParseError::UnexpectedEof {
                line: self.line,
                expected,
            })?;
        self.pos += c.len_utf8();
        Ok(c)
    }

    /// Next whitespace-delimited token.
    pub fn next_token(&mut self, expected: &'static str) -> ParseResult<&'a str> {
        self.skip_whitespace();
        let rest = &self.input[self.pos..];
        if rest.is_empty() {
            return Err(ParseError::UnexpectedEof {
                line: self.line,
                expected,
            });
        }
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.pos += len;
        Ok(&rest[..len])
    }

    pub fn parse<T: FromStr>(&mut self, expected: &'static str) -> ParseResult<T> {
        let line = self.line();
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| ParseError::InvalidNumber {
            line,
            token: token.to_string(),
            expected,
        })
    }

    /// A 1-based index, returned 0-based.
    pub fn index(&mut self, expected: &'static str) -> ParseResult<usize> {
        let line = self.line();
        match self.parse::<usize>(expected)? {
            0 => Err(ParseError::ZeroIndex { line }),
            one_based => Ok(one_based - 1),
        }
    }

    pub fn point(&mut self, expected: &'static str) -> ParseResult<Point> {
        let x = self.parse::<f64>(expected)?;
        let y = self.parse::<f64>(expected)?;
        Ok(Point::new(x, y))
    }
}
