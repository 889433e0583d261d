use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;

/// Raised by the lexer when the input text contains something that is not a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("invalid number '{text}' at position {position}")]
    InvalidNumber { text: String, position: usize },
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedChar { character: char, position: usize },
}

/// Raised by the parser when the tokens do not form a valid expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected token '{token}' at token {position}")]
    UnexpectedToken { token: Token, position: usize },
    #[error("opening parenthesis is never closed")]
    UnclosedParen,
    #[error("input ended in the middle of an expression")]
    UnexpectedEnd,
    #[error("expression nests deeper than {limit} levels at token {position}")]
    NestingTooDeep { limit: usize, position: usize },
}

/// Raised by the evaluator when a well-formed expression has no numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("domain error: {0}")]
    DomainError(&'static str),
    #[error("result is not a finite number")]
    NumericOverflow,
}

/// Any failure of the calculation pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// The fixed vocabulary of errors shown to a user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidNumber,
    UnexpectedChar,
    UnexpectedToken,
    UnclosedParen,
    UnexpectedEnd,
    DivisionByZero,
    DomainError,
    NumericOverflow,
    NestingTooDeep,
}

impl ErrorKind {
    /// The display string of this kind. Every string starts with `Error: `,
    /// which no formatted number can.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidNumber => "Error: invalid number",
            ErrorKind::UnexpectedChar => "Error: unexpected character",
            ErrorKind::UnexpectedToken => "Error: unexpected token",
            ErrorKind::UnclosedParen => "Error: unclosed parenthesis",
            ErrorKind::UnexpectedEnd => "Error: unexpected end of input",
            ErrorKind::DivisionByZero => "Error: division by zero",
            ErrorKind::DomainError => "Error: domain error",
            ErrorKind::NumericOverflow => "Error: numeric overflow",
            ErrorKind::NestingTooDeep => "Error: expression nested too deeply",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LexError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LexError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            LexError::UnexpectedChar { .. } => ErrorKind::UnexpectedChar,
        }
    }
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            ParseError::UnclosedParen => ErrorKind::UnclosedParen,
            ParseError::UnexpectedEnd => ErrorKind::UnexpectedEnd,
            ParseError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
        }
    }
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::DivisionByZero => ErrorKind::DivisionByZero,
            EvalError::DomainError(_) => ErrorKind::DomainError,
            EvalError::NumericOverflow => ErrorKind::NumericOverflow,
        }
    }
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Lex(error) => error.kind(),
            CalcError::Parse(error) => error.kind(),
            CalcError::Eval(error) => error.kind(),
        }
    }
}
