mod recursive_descent;

use crate::interpreter::error::ParseError;
use crate::interpreter::parser::recursive_descent::Parser;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;

pub use crate::interpreter::parser::recursive_descent::MAX_NESTING;

/// Parses the given tokens into an equivalent expression tree,
/// which is easier to evaluate than the original tokens.
///
/// Every token has to be part of the expression; anything left over after a
/// complete expression is an error. Trees higher than [`MAX_NESTING`] levels
/// are rejected.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// # use calculator::interpreter::error::ParseError;
/// # fn main() -> Result<(), ParseError> {
/// use calculator::interpreter::parser::parse;
/// use calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Minus,
///     Token::Cos,
///     Token::LParen,
///     Token::Number(0.0),
///     Token::RParen,
/// ];
/// let tree = parse(infix_tokens)?;
/// let regenerated_tokens = tree.to_infix();
/// # Ok(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Node, ParseError> {
    let tree = Parser::new(infix_tokens).parse_complete_expression()?;
    log::trace!("parsed expression tree:\n{}", tree);
    Ok(tree)
}
