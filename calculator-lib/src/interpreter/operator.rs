use crate::interpreter::error::EvalError;
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// A mathematical function of a single argument.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    SquareRoot,
    Cosine,
    Sine,
    ArcCosine,
}

impl BinaryOperator {
    pub fn from_token(token: &Token) -> Option<BinaryOperator> {
        match token {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Minus => Some(BinaryOperator::Subtract),
            Token::Star => Some(BinaryOperator::Multiply),
            Token::Slash => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn token(&self) -> Token {
        match self {
            BinaryOperator::Add => Token::Plus,
            BinaryOperator::Subtract => Token::Minus,
            BinaryOperator::Multiply => Token::Star,
            BinaryOperator::Divide => Token::Slash,
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 0,
            BinaryOperator::Multiply | BinaryOperator::Divide => 1,
        }
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    pub fn evaluate(&self, a: f64, b: f64) -> Result<f64, EvalError> {
        match self {
            BinaryOperator::Add => Ok(a + b),
            BinaryOperator::Subtract => Ok(a - b),
            BinaryOperator::Multiply => Ok(a * b),
            BinaryOperator::Divide if b == 0.0 => Err(EvalError::DivisionByZero),
            BinaryOperator::Divide => Ok(a / b),
        }
    }
}

impl UnaryOperator {
    pub fn from_token(token: &Token) -> Option<UnaryOperator> {
        match token {
            Token::Sqrt => Some(UnaryOperator::SquareRoot),
            Token::Cos => Some(UnaryOperator::Cosine),
            Token::Sin => Some(UnaryOperator::Sine),
            Token::Acos => Some(UnaryOperator::ArcCosine),
            _ => None,
        }
    }

    pub fn token(&self) -> Token {
        match self {
            UnaryOperator::SquareRoot => Token::Sqrt,
            UnaryOperator::Cosine => Token::Cos,
            UnaryOperator::Sine => Token::Sin,
            UnaryOperator::ArcCosine => Token::Acos,
        }
    }

    /// Trigonometric functions take their argument in radians.
    pub fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            UnaryOperator::SquareRoot if x < 0.0 => {
                Err(EvalError::DomainError("sqrt of negative"))
            }
            UnaryOperator::SquareRoot => Ok(x.sqrt()),
            UnaryOperator::Cosine => Ok(x.cos()),
            UnaryOperator::Sine => Ok(x.sin()),
            UnaryOperator::ArcCosine if !(-1.0..=1.0).contains(&x) => {
                Err(EvalError::DomainError("acos out of range"))
            }
            UnaryOperator::ArcCosine => Ok(x.acos()),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
