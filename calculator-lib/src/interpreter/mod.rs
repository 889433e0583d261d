pub mod error;
pub mod evaluator;
pub mod formatter;
pub mod lexer;
mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::interpreter::error::CalcError;
use crate::interpreter::formatter::format;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use string_builder::Builder;
use syntax::expression_tree::Node;

pub use operator::{BinaryOperator, UnaryOperator};

/// Calculates the given expression and renders the outcome as display text.
///
/// Input that is empty or only whitespace yields an empty string, since it is
/// normal for a caller to ask while the expression is still being typed.
/// Every failure is rendered as one of the fixed error strings.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression, or an error string.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::calculate;
///
/// assert_eq!(calculate("2+3*4"), "14");
/// assert_eq!(calculate("5/0"), "Error: division by zero");
/// assert_eq!(calculate(""), "");
/// ```
pub fn calculate(expression: &str) -> String {
    match evaluate_expression(expression) {
        Ok(None) => String::new(),
        Ok(Some(value)) => format(Ok::<f64, CalcError>(value)),
        Err(error) => format(Err(error)),
    }
}

/// Runs the whole pipeline on the given expression.
///
/// returns: `None` if the expression has no tokens, otherwise its value.
pub fn evaluate_expression(expression: &str) -> Result<Option<f64>, CalcError> {
    let tokens = lexer::tokenize(expression)?;
    if tokens.is_empty() {
        return Ok(None);
    }
    log::trace!("tokens of {:?}: {:?}", expression, tokens);

    let tree = parser::parse(tokens)?;
    let value = evaluator::evaluate(&tree)?;
    log::debug!("{:?} evaluated to {}", expression, value);
    Ok(Some(value))
}

/// Converts the given input string into an equivalent expression tree,
/// which is easier to evaluate than the original string.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::convert;
/// # use calculator::interpreter::error::CalcError;
///
/// # fn main() -> Result<(), CalcError> {
/// let expression = "-cos(0)";
/// let tree = convert(expression)?;
/// let regenerated_tokens = tree.to_infix();
/// # Ok(()) }
/// ```
pub fn convert(expression: &str) -> Result<Node, CalcError> {
    let tokens = lexer::tokenize(expression)?;
    let expression_tree = parser::parse(tokens)?;
    Ok(expression_tree)
}

/// Pretty-prints the given tokens with added whitespace around binary operators.
///
/// A minus sign counts as binary only when it follows a number or a closing
/// parenthesis; otherwise it is a negation and is attached to its operand.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::tokens_to_string;
/// use calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::Number(2.0),
///     Token::Star,
///     Token::Minus,
///     Token::Number(3.0),
/// ];
/// let pretty_printed_tokens = tokens_to_string(&tokens)?;
/// assert_eq!(pretty_printed_tokens, "2 * -3");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len());
    let mut previous: Option<Token> = None;

    for token in tokens {
        let follows_operand = matches!(previous, Some(Token::Number(_)) | Some(Token::RParen));
        if token.is_binary_operator() && follows_operand {
            builder.append(" ");
            builder.append(token.to_string());
            builder.append(" ");
        } else {
            builder.append(token.to_string());
        }
        previous = Some(*token);
    }

    builder.string().context("Failed to build token string")
}
