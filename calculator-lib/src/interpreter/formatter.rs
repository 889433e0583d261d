use crate::interpreter::error::{CalcError, ErrorKind};

/// Renders the result of a calculation as display text.
///
/// Numbers use the shortest decimal representation that reads back as the
/// same value, without trailing zeros or exponent. Errors render as the fixed
/// string of their [`ErrorKind`].
///
/// # Examples
///
/// ```
/// use calculator::interpreter::error::EvalError;
/// use calculator::interpreter::formatter::format;
///
/// assert_eq!(format(Ok::<f64, EvalError>(4.0)), "4");
/// assert_eq!(format::<EvalError>(Err(EvalError::DivisionByZero)), "Error: division by zero");
/// ```
pub fn format<E: Into<CalcError>>(result: Result<f64, E>) -> String {
    match result {
        Ok(value) if value.is_finite() => format_number(value),
        Ok(_) => ErrorKind::NumericOverflow.to_string(),
        Err(error) => error.into().kind().to_string(),
    }
}

fn format_number(value: f64) -> String {
    // -0 and 0 both show as "0".
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
