use crate::interpreter::error::ParseError;
use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;

/// The highest expression tree the parser builds. Parsing, evaluation and
/// dropping of a tree all recurse once per level.
pub const MAX_NESTING: usize = 256;

/// A parsed subtree together with its height.
type Parsed = (Node, usize);

/// A recursive descent parser over the grammar
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := '-' factor | function factor | '(' expression ')' | number
/// function   := '√' | 'cos' | 'sin' | 'acos'
/// ```
pub(super) struct Parser {
    tokens: Vec<Token>,
    position: usize,
    open_parentheses: usize,
    depth: usize,
}

impl Parser {
    pub(super) fn new(tokens: Vec<Token>) -> Parser {
        Parser {
            tokens,
            position: 0,
            open_parentheses: 0,
            depth: 0,
        }
    }

    pub(super) fn parse_complete_expression(mut self) -> Result<Node, ParseError> {
        let (expression, _) = self.parse_expression()?;
        match self.peek() {
            None => Ok(expression),
            Some(token) => Err(ParseError::UnexpectedToken {
                token,
                position: self.position,
            }),
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.position).copied()
    }

    /// Consumes the next token, returning it together with its index.
    fn next(&mut self) -> Option<(Token, usize)> {
        let token = self.peek()?;
        let position = self.position;
        self.position += 1;
        Some((token, position))
    }

    /// Running out of tokens inside parentheses means one of them is never closed.
    fn end_of_input(&self) -> ParseError {
        if self.open_parentheses > 0 {
            ParseError::UnclosedParen
        } else {
            ParseError::UnexpectedEnd
        }
    }

    fn checked_height(height: usize, position: usize) -> Result<usize, ParseError> {
        if height > MAX_NESTING {
            Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING,
                position,
            })
        } else {
            Ok(height)
        }
    }

    fn parse_nested(
        &mut self,
        position: usize,
        parse: fn(&mut Self) -> Result<Parsed, ParseError>,
    ) -> Result<Parsed, ParseError> {
        Self::checked_height(self.depth + 1, position)?;
        self.depth += 1;
        let parsed = parse(self);
        self.depth -= 1;
        parsed
    }

    fn parse_expression(&mut self) -> Result<Parsed, ParseError> {
        self.parse_left_associative(Self::parse_term, &[Token::Plus, Token::Minus])
    }

    fn parse_term(&mut self) -> Result<Parsed, ParseError> {
        self.parse_left_associative(Self::parse_factor, &[Token::Star, Token::Slash])
    }

    fn parse_left_associative(
        &mut self,
        parse_operand: fn(&mut Self) -> Result<Parsed, ParseError>,
        operator_tokens: &[Token],
    ) -> Result<Parsed, ParseError> {
        let (mut left, mut height) = parse_operand(self)?;
        while let Some(operator) = self
            .peek()
            .filter(|token| operator_tokens.contains(token))
            .and_then(|token| BinaryOperator::from_token(&token))
        {
            let position = self.position;
            self.position += 1;
            let (right, right_height) = parse_operand(self)?;
            height = Self::checked_height(height.max(right_height) + 1, position)?;
            left = Node::new_binary_operation(operator, left, right);
        }
        Ok((left, height))
    }

    fn parse_factor(&mut self) -> Result<Parsed, ParseError> {
        let (token, position) = match self.next() {
            Some(next) => next,
            None => return Err(self.end_of_input()),
        };
        match token {
            Token::Number(value) => Ok((Node::new_literal(value), 1)),
            Token::Minus => {
                let (operand, height) = self.parse_nested(position, Self::parse_factor)?;
                let height = Self::checked_height(height + 1, position)?;
                Ok((Node::new_negation(operand), height))
            }
            Token::LParen => {
                self.open_parentheses += 1;
                let inner = self.parse_nested(position, Self::parse_expression)?;
                match self.next() {
                    Some((Token::RParen, _)) => {
                        self.open_parentheses -= 1;
                        Ok(inner)
                    }
                    Some((token, position)) => Err(ParseError::UnexpectedToken { token, position }),
                    None => Err(ParseError::UnclosedParen),
                }
            }
            token => match UnaryOperator::from_token(&token) {
                Some(function) => {
                    let (operand, height) = self.parse_nested(position, Self::parse_factor)?;
                    let height = Self::checked_height(height + 1, position)?;
                    Ok((Node::new_unary_function(function, operand), height))
                }
                None => Err(ParseError::UnexpectedToken { token, position }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use parameterized_macro::parameterized;

    fn parse_text(expression: &str) -> Result<Node, ParseError> {
        let tokens = tokenize(expression).unwrap();
        Parser::new(tokens).parse_complete_expression()
    }

    fn literal(value: f64) -> Node {
        Node::new_literal(value)
    }

    fn binary(operator: BinaryOperator, left: Node, right: Node) -> Node {
        Node::new_binary_operation(operator, left, right)
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expected_tree = binary(
            BinaryOperator::Add,
            literal(2.0),
            binary(BinaryOperator::Multiply, literal(3.0), literal(4.0)),
        );

        pretty_assertions::assert_eq!(parse_text("2+3*4").unwrap(), expected_tree);
    }

    #[test]
    fn parentheses_override_precedence() {
        let expected_tree = binary(
            BinaryOperator::Multiply,
            binary(BinaryOperator::Add, literal(2.0), literal(3.0)),
            literal(4.0),
        );

        pretty_assertions::assert_eq!(parse_text("(2+3)*4").unwrap(), expected_tree);
    }

    #[test]
    fn same_precedence_operators_group_to_the_left() {
        let expected_tree = binary(
            BinaryOperator::Subtract,
            binary(BinaryOperator::Subtract, literal(8.0), literal(3.0)),
            literal(2.0),
        );

        pretty_assertions::assert_eq!(parse_text("8-3-2").unwrap(), expected_tree);
    }

    #[test]
    fn negation_wraps_function_application() {
        let expected_tree = Node::new_negation(Node::new_unary_function(
            UnaryOperator::Cosine,
            literal(0.0),
        ));

        pretty_assertions::assert_eq!(parse_text("-cos(0)").unwrap(), expected_tree);
    }

    #[test]
    fn negation_binds_tighter_than_binary_operators() {
        let expected_tree = binary(
            BinaryOperator::Multiply,
            Node::new_negation(literal(2.0)),
            literal(3.0),
        );

        pretty_assertions::assert_eq!(parse_text("-2*3").unwrap(), expected_tree);
    }

    #[test]
    fn function_applies_to_a_single_factor() {
        let expected_tree = binary(
            BinaryOperator::Multiply,
            Node::new_unary_function(UnaryOperator::SquareRoot, literal(9.0)),
            literal(2.0),
        );

        pretty_assertions::assert_eq!(parse_text("√9*2").unwrap(), expected_tree);
    }

    #[test]
    fn functions_nest() {
        let expected_tree = Node::new_unary_function(
            UnaryOperator::SquareRoot,
            Node::new_unary_function(
                UnaryOperator::SquareRoot,
                Node::new_negation(literal(16.0)),
            ),
        );

        pretty_assertions::assert_eq!(parse_text("√√-16").unwrap(), expected_tree);
    }

    #[parameterized(
    expression = { "2++3", "2 3", "1)", "()", "*2", "(1 2)", "cos)" },
    token = { Token::Plus, Token::Number(3.0), Token::RParen, Token::RParen, Token::Star, Token::Number(2.0), Token::RParen },
    position = { 2, 1, 1, 1, 0, 2, 1 }
    )]
    fn misplaced_tokens_are_unexpected(expression: &str, token: Token, position: usize) {
        let error = parse_text(expression).unwrap_err();

        assert_eq!(error, ParseError::UnexpectedToken { token, position });
    }

    #[parameterized(expression = { "(1+2", "((1)", "√(9", "(", "(1+", "3*(1-", "√(", "((1)+(", "-(cos" })]
    fn missing_closing_parenthesis_is_unclosed(expression: &str) {
        assert_eq!(parse_text(expression), Err(ParseError::UnclosedParen));
    }

    #[parameterized(expression = { "", "2+", "-", "cos", "(1)*", "(1+2)-√" })]
    fn incomplete_expression_ends_unexpectedly(expression: &str) {
        assert_eq!(parse_text(expression), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn deep_nesting_within_the_limit_is_parsed() {
        let negations = format!("{}1", "-".repeat(MAX_NESTING - 1));
        let parentheses = format!(
            "{}1{}",
            "(".repeat(MAX_NESTING - 1),
            ")".repeat(MAX_NESTING - 1)
        );
        let sum = format!("1{}", "+1".repeat(MAX_NESTING - 1));

        assert!(parse_text(&negations).is_ok());
        assert!(parse_text(&parentheses).is_ok());
        assert!(parse_text(&sum).is_ok());
    }

    #[parameterized(prefix = { "-", "(", "√", "cos -" })]
    fn nesting_beyond_the_limit_is_rejected(prefix: &str) {
        let expression = format!("{}1", prefix.repeat(20 * MAX_NESTING));

        assert!(matches!(
            parse_text(&expression),
            Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING,
                ..
            })
        ));
    }

    #[test]
    fn long_chain_of_operators_is_rejected_when_too_high() {
        let sum = format!("1{}", "+1".repeat(20 * MAX_NESTING));

        assert_eq!(
            parse_text(&sum),
            Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING,
                position: 2 * MAX_NESTING - 1,
            })
        );
    }
}
