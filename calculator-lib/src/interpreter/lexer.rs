use crate::interpreter::error::LexError;
use crate::interpreter::token::{Token, FUNCTION_NAMES};

/// Splits the given expression into tokens.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression, in the order they appear.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::lexer::tokenize;
/// use calculator::interpreter::token::Token;
///
/// let tokens = tokenize("√(2.5)").unwrap();
/// assert_eq!(
///     tokens,
///     vec![Token::Sqrt, Token::LParen, Token::Number(2.5), Token::RParen]
/// );
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexError> {
    let characters: Vec<char> = expression.chars().collect();
    let mut tokens = Vec::new();
    let mut position = 0;

    while let Some(&character) = characters.get(position) {
        if character.is_whitespace() {
            position += 1;
            continue;
        }

        if is_numeral_character(character) {
            let (number, length) = read_number(&characters[position..], position)?;
            tokens.push(number);
            position += length;
            continue;
        }

        if let Some((function, length)) = read_function_name(&characters[position..]) {
            tokens.push(function);
            position += length;
            continue;
        }

        let token = match character {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => return Err(LexError::UnexpectedChar { character, position }),
        };
        tokens.push(token);
        position += 1;
    }

    Ok(tokens)
}

fn is_numeral_character(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

/// Reads the numeral at the start of `characters`, returning the token and
/// how many characters it spans.
fn read_number(characters: &[char], position: usize) -> Result<(Token, usize), LexError> {
    let text: String = characters
        .iter()
        .take_while(|character| is_numeral_character(**character))
        .collect();
    let length = text.chars().count();

    let dots = text.chars().filter(|character| *character == '.').count();
    let invalid = || LexError::InvalidNumber {
        text: text.clone(),
        position,
    };
    if dots > 1 {
        return Err(invalid());
    }

    let value = text.parse::<f64>().map_err(|_| invalid())?;
    Ok((Token::Number(value), length))
}

fn read_function_name(characters: &[char]) -> Option<(Token, usize)> {
    FUNCTION_NAMES.iter().find_map(|(name, token)| {
        let length = name.chars().count();
        let matches = characters.len() >= length
            && name
                .chars()
                .zip(characters)
                .all(|(expected, actual)| expected == *actual);
        matches.then(|| (*token, length))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn simple_expression_returns_tokens() {
        let tokens = tokenize("7+12-3*1.1/2").unwrap();

        pretty_assertions::assert_eq!(
            tokens,
            vec![
                Token::Number(7.0),
                Token::Plus,
                Token::Number(12.0),
                Token::Minus,
                Token::Number(3.0),
                Token::Star,
                Token::Number(1.1),
                Token::Slash,
                Token::Number(2.0),
            ]
        );
    }

    #[test]
    fn whitespace_is_skipped() {
        let tokens = tokenize("  ( 1 +\t2 )  ").unwrap();

        pretty_assertions::assert_eq!(
            tokens,
            vec![
                Token::LParen,
                Token::Number(1.0),
                Token::Plus,
                Token::Number(2.0),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn function_names_are_recognized() {
        let tokens = tokenize("-cos(0)+√9*sin acos 1").unwrap();

        pretty_assertions::assert_eq!(
            tokens,
            vec![
                Token::Minus,
                Token::Cos,
                Token::LParen,
                Token::Number(0.0),
                Token::RParen,
                Token::Plus,
                Token::Sqrt,
                Token::Number(9.0),
                Token::Star,
                Token::Sin,
                Token::Acos,
                Token::Number(1.0),
            ]
        );
    }

    #[parameterized(
    numeral = { "12.12", ".12", "12.", "0.0", "007" },
    expected = { 12.12, 0.12, 12.0, 0.0, 7.0 }
    )]
    fn valid_numerals_become_a_single_number(numeral: &str, expected: f64) {
        let tokens = tokenize(numeral).unwrap();

        assert_eq!(tokens, vec![Token::Number(expected)]);
    }

    #[parameterized(
    input = { "12.2.", "13..", "1.2.3", "." },
    text = { "12.2.", "13..", "1.2.3", "." }
    )]
    fn malformed_numerals_are_invalid_numbers(input: &str, text: &str) {
        let error = tokenize(input).unwrap_err();

        assert_eq!(
            error,
            LexError::InvalidNumber {
                text: text.to_string(),
                position: 0,
            }
        );
    }

    #[test]
    fn invalid_number_reports_where_it_starts() {
        let error = tokenize("1 + 2..5").unwrap_err();

        pretty_assertions::assert_eq!(
            error,
            LexError::InvalidNumber {
                text: "2..5".to_string(),
                position: 4,
            }
        );
    }

    #[parameterized(
    input = { "12$12", "a", "12b", "&", "Cos(0)", "√9 x" },
    character = { '$', 'a', 'b', '&', 'C', 'x' },
    position = { 2, 0, 2, 0, 0, 3 }
    )]
    fn unknown_characters_are_rejected(input: &str, character: char, position: usize) {
        let error = tokenize(input).unwrap_err();

        assert_eq!(error, LexError::UnexpectedChar { character, position });
    }

    #[test]
    fn positions_count_characters_not_bytes() {
        let error = tokenize("√√#").unwrap_err();

        pretty_assertions::assert_eq!(
            error,
            LexError::UnexpectedChar {
                character: '#',
                position: 2,
            }
        );
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
