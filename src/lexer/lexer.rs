use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorLog, ErrorReporter},
    MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    // A fraction is only taken when a digit follows the dot, so `1.` leaves the dot alone.
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap();
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
}

/// Single-pass scanner over one source text.
///
/// `start` marks the beginning of the lexeme under construction and `current`
/// the next unread byte; both always sit on char boundaries.
pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            tokens: vec![],
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the whole source, reporting lexical errors as they are found.
    ///
    /// The returned tokens always end with an `EOF` token on the last line.
    pub fn scan_tokens(mut self, reporter: &mut dyn ErrorReporter) -> Vec<Token> {
        while !self.at_eof() {
            self.start = self.current;
            self.scan_token(reporter);
        }

        self.tokens
            .push(MK_TOKEN!(TokenKind::EOF, String::new(), None, self.line));
        self.tokens
    }

    fn scan_token(&mut self, reporter: &mut dyn ErrorReporter) {
        match self.advance() {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.match_char('/') {
                    while self.at() != '\n' && !self.at_eof() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.string(reporter),
            c if c.is_ascii_digit() => self.number(),
            c if c.is_ascii_alphabetic() || c == '_' => self.symbol(),
            character => reporter.report(Error::new(
                ErrorImpl::UnexpectedCharacter { character },
                self.line,
                self.start,
            )),
        }
    }

    fn string(&mut self, reporter: &mut dyn ErrorReporter) {
        // The token belongs to the line of its opening quote.
        let line = self.line;

        while self.at() != '"' && !self.at_eof() {
            if self.at() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.at_eof() {
            reporter.report(Error::new(
                ErrorImpl::UnterminatedString,
                self.line,
                self.start,
            ));
            return;
        }

        // closing quote
        self.advance();

        let value = self.source[(self.start + 1)..(self.current - 1)].to_string();
        let lexeme = self.lexeme().to_string();
        self.tokens.push(MK_TOKEN!(
            TokenKind::String,
            lexeme,
            Some(Literal::String(value)),
            line
        ));
    }

    fn number(&mut self) {
        self.current = NUMBER_PATTERN
            .find(&self.source[self.start..])
            .map_or(self.current, |matched| self.start + matched.end());

        // A run of ASCII digits with an optional fraction always parses.
        let value = self.lexeme().parse::<f64>().unwrap_or_default();
        self.add_literal(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn symbol(&mut self) {
        self.current = SYMBOL_PATTERN
            .find(&self.source[self.start..])
            .map_or(self.current, |matched| self.start + matched.end());

        let kind = RESERVED_LOOKUP
            .get(self.lexeme())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn add_either(&mut self, expected: char, matched: TokenKind, otherwise: TokenKind) {
        if self.match_char(expected) {
            self.add_token(matched);
        } else {
            self.add_token(otherwise);
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal(kind, None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.lexeme().to_string();
        self.tokens.push(MK_TOKEN!(kind, lexeme, literal, self.line));
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.at_eof() || self.at() != expected {
            return false;
        }

        self.current += expected.len_utf8();
        true
    }

    fn advance(&mut self) -> char {
        match self.remainder().chars().next() {
            Some(c) => {
                self.current += c.len_utf8();
                c
            }
            None => '\0',
        }
    }

    fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    fn remainder(&self) -> &'a str {
        &self.source[self.current..]
    }

    fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }
}

pub fn scan_tokens(source: &str, reporter: &mut dyn ErrorReporter) -> Vec<Token> {
    Scanner::new(source).scan_tokens(reporter)
}

/// Scans `source` and fails with every reported error if there were any.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Vec<Error>> {
    let mut errors = ErrorLog::new();
    let tokens = scan_tokens(source, &mut errors);

    if errors.had_error() {
        return Err(errors.into_errors());
    }

    Ok(tokens)
}
