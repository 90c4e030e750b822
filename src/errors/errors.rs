use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
    position: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize, position: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
            position,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    /// Byte offset of the first character of the offending lexeme.
    pub fn get_position(&self) -> usize {
        self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("add a closing `\"` to end the string"))
            }
            ErrorImpl::UnexpectedCharacter { character } if !character.is_ascii() => {
                ErrorTip::Suggestion(format!(
                    "`{}` is only allowed inside string literals",
                    character
                ))
            }
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unexpected character.")]
    UnexpectedCharacter { character: char },
}

/// Receives lexical errors as the scanner detects them.
///
/// Reporting never stops the scan; what an error means for the process
/// (exit codes, "had error" flags) is up to the implementor.
pub trait ErrorReporter {
    fn report(&mut self, error: Error);
}

/// Reporter that keeps every error in the order it was reported.
#[derive(Debug, Default, Clone)]
pub struct ErrorLog {
    errors: Vec<Error>,
}

impl ErrorLog {
    pub fn new() -> Self {
        ErrorLog { errors: vec![] }
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl ErrorReporter for ErrorLog {
    fn report(&mut self, error: Error) {
        self.errors.push(error);
    }
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for &mut R {
    fn report(&mut self, error: Error) {
        (**self).report(error);
    }
}
