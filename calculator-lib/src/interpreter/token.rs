use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Sqrt,
    Cos,
    Sin,
    Acos,
}

/// Spellings of the function tokens, longest first so that `acos` is
/// never mistaken for a prefix match of something shorter.
pub(crate) static FUNCTION_NAMES: [(&str, Token); 4] = [
    ("acos", Token::Acos),
    ("cos", Token::Cos),
    ("sin", Token::Sin),
    ("√", Token::Sqrt),
];

impl Token {
    /// A function token applies to exactly one operand.
    pub fn is_function(&self) -> bool {
        matches!(self, Token::Sqrt | Token::Cos | Token::Sin | Token::Acos)
    }

    pub fn is_binary_operator(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus | Token::Star | Token::Slash)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Sqrt => write!(f, "√"),
            Token::Cos => write!(f, "cos"),
            Token::Sin => write!(f, "sin"),
            Token::Acos => write!(f, "acos"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_display_as_their_source_spelling() {
        let tokens = [
            Token::Number(12.5),
            Token::Plus,
            Token::Sqrt,
            Token::LParen,
            Token::Acos,
            Token::RParen,
        ];

        let spelled: Vec<String> = tokens.iter().map(Token::to_string).collect();

        assert_eq!(spelled, ["12.5", "+", "√", "(", "acos", ")"]);
    }

    #[test]
    fn every_function_name_maps_to_a_function_token() {
        assert!(FUNCTION_NAMES.iter().all(|(_, token)| token.is_function()))
    }
}
