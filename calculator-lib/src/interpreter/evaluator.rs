use crate::interpreter::error::EvalError;
use crate::interpreter::syntax::expression_tree::Node;

/// Computes the numeric value of the given expression tree.
///
/// Every intermediate value has to be a finite number; an infinity or a NaN
/// anywhere in the tree fails the whole evaluation with
/// [`EvalError::NumericOverflow`].
///
/// # Arguments
///
/// * `node`: The root of the expression tree to evaluate.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use calculator::interpreter::convert;
/// use calculator::interpreter::evaluator::evaluate;
///
/// let tree = convert("(2 + 3) * 4").unwrap();
/// assert_eq!(evaluate(&tree), Ok(20.0));
/// ```
pub fn evaluate(node: &Node) -> Result<f64, EvalError> {
    let value = match node {
        Node::Literal(value) => *value,
        Node::BinaryOperation {
            operator,
            left_operand,
            right_operand,
        } => {
            let left = evaluate(left_operand)?;
            let right = evaluate(right_operand)?;
            operator.evaluate(left, right)?
        }
        Node::UnaryFunction { function, operand } => function.evaluate(evaluate(operand)?)?,
        Node::Negation { operand } => -evaluate(operand)?,
    };
    finite(value)
}

fn finite(value: f64) -> Result<f64, EvalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NumericOverflow)
    }
}
