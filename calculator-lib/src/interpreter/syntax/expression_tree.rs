use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, walk_operand, SyntaxVisitor,
};
use crate::interpreter::token::Token;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Terminal symbols (leaves)
    Literal(f64),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
    UnaryFunction {
        function: UnaryOperator,
        operand: Box<Node>,
    },
    Negation {
        operand: Box<Node>,
    },
}

impl Node {
    pub fn new_literal(value: f64) -> Node {
        Node::Literal(value)
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn new_unary_function(function: UnaryOperator, operand: Node) -> Node {
        Node::UnaryFunction {
            function,
            operand: Box::new(operand),
        }
    }

    pub fn new_negation(operand: Node) -> Node {
        Node::Negation {
            operand: Box::new(operand),
        }
    }

    pub fn as_binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Node::BinaryOperation { operator, .. } => Some(*operator),
            Node::Literal(_) | Node::UnaryFunction { .. } | Node::Negation { .. } => None,
        }
    }

    /// The number of nodes in the tree rooted at this node.
    pub fn size(&self) -> usize {
        let mut counter = NodeCounter { count: 0 };
        self.accept(&mut counter);
        counter.count
    }

    /// Whether every literal in the tree holds a finite value. Numerals too
    /// large for `f64` parse to infinity and do not regenerate to themselves.
    pub fn literals_are_finite(&self) -> bool {
        let mut checker = FiniteLiteralChecker { all_finite: true };
        self.accept(&mut checker);
        checker.all_finite
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Literal(value) => visitor.visit_literal(*value),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
            Node::UnaryFunction { function, operand } => {
                visitor.visit_unary_function(function, operand)
            }
            Node::Negation { operand } => visitor.visit_negation(operand),
        }
    }

    /// Regenerates the infix tokens of this tree, with only the parentheses
    /// needed to parse back into the same tree.
    pub fn to_infix(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.build_expression(&mut tokens);
        tokens
    }

    fn build_expression(&self, tokens: &mut Vec<Token>) {
        match self {
            Node::Literal(value) => tokens.push(Token::Number(*value)),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => {
                // Operators of equal precedence group to the left, so only a
                // right operand of the same precedence needs parentheses.
                let left_needs_parentheses = left_operand
                    .as_binary_operator()
                    .map_or(false, |child| operator.precedence_gt(&child));
                let right_needs_parentheses = right_operand
                    .as_binary_operator()
                    .map_or(false, |child| !child.precedence_gt(operator));

                parenthesize_if(tokens, left_needs_parentheses, |tokens| {
                    left_operand.build_expression(tokens)
                });
                tokens.push(operator.token());
                parenthesize_if(tokens, right_needs_parentheses, |tokens| {
                    right_operand.build_expression(tokens)
                });
            }
            Node::UnaryFunction { function, operand } => {
                tokens.push(function.token());
                parenthesize_if(tokens, true, |tokens| operand.build_expression(tokens));
            }
            Node::Negation { operand } => {
                tokens.push(Token::Minus);
                let operand_is_binary = operand.as_binary_operator().is_some();
                parenthesize_if(tokens, operand_is_binary, |tokens| {
                    operand.build_expression(tokens)
                });
            }
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_literal(&mut self, value: f64) {
        self.builder.add_empty_child(format!("{}", value));
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
    fn visit_unary_function(&mut self, function: &UnaryOperator, operand: &Node) {
        self.builder.begin_child(format!("{}", function));
        walk_operand(self, operand);
        self.builder.end_child();
    }
    fn visit_negation(&mut self, operand: &Node) {
        self.builder.begin_child("negate".into());
        walk_operand(self, operand);
        self.builder.end_child();
    }
}

struct NodeCounter {
    count: usize,
}

impl SyntaxVisitor for NodeCounter {
    fn visit_literal(&mut self, _value: f64) {
        self.count += 1;
    }
    fn visit_binary_operation(
        &mut self,
        _operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.count += 1;
        walk_binary_operation(self, left_operand, right_operand);
    }
    fn visit_unary_function(&mut self, _function: &UnaryOperator, operand: &Node) {
        self.count += 1;
        walk_operand(self, operand);
    }
    fn visit_negation(&mut self, operand: &Node) {
        self.count += 1;
        walk_operand(self, operand);
    }
}

struct FiniteLiteralChecker {
    all_finite: bool,
}

impl SyntaxVisitor for FiniteLiteralChecker {
    fn visit_literal(&mut self, value: f64) {
        self.all_finite &= value.is_finite();
    }
    fn visit_binary_operation(
        &mut self,
        _operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        walk_binary_operation(self, left_operand, right_operand);
    }
    fn visit_unary_function(&mut self, _function: &UnaryOperator, operand: &Node) {
        walk_operand(self, operand);
    }
    fn visit_negation(&mut self, operand: &Node) {
        walk_operand(self, operand);
    }
}

fn parenthesize_if(
    tokens: &mut Vec<Token>,
    predicate: bool,
    build_interior: impl FnOnce(&mut Vec<Token>),
) {
    if predicate {
        tokens.push(Token::LParen);
    }

    build_interior(tokens);

    if predicate {
        tokens.push(Token::RParen);
    }
}
