use super::builtin;
use crate::{
    error::{EvalError, EvalResult},
    syntax::{Expression, Operator, Parser},
};

/// Evaluates a calculator expression to a number.
///
/// Supports decimal literals, `+ - * /`, parentheses, unary minus, the
/// constant `e` and the functions `sin`, `cos`, `tan`, `ln`, `sinh`, `cosh`
/// and `tanh` (radians). Evaluation is pure: the same input always yields
/// the same result, and the first error encountered is returned.
///
/// ```
/// assert_eq!(vcalc::evaluate("2*(3+4)"), Ok(14.0));
/// assert_eq!(vcalc::evaluate("1/0"), Err(vcalc::EvalError::DivisionByZero));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let result = eval_str(expression);

    match &result {
        Ok(value) => log::debug!("{expression:?} = {value}"),
        Err(why) => log::debug!("{expression:?} failed: {why}"),
    }

    result
}

fn eval_str(expression: &str) -> EvalResult<f64> {
    if expression.trim().is_empty() {
        return Err(EvalError::Empty);
    }

    let expr = Parser::new(expression)?.parse()?;
    log::trace!("parsed {expression:?} as {expr:?}");

    eval_expr(&expr)
}

fn eval_expr(expr: &Expression) -> EvalResult<f64> {
    let value = match expr {
        Expression::Number(v) => *v,
        Expression::Constant(c) => c.value(),
        Expression::Grouping(expr) => eval_expr(expr)?,
        Expression::Unary(expr) => -eval_expr(expr)?,
        Expression::Binary { lhs, op, rhs } => {
            let lhs = eval_expr(lhs)?;
            let rhs = eval_expr(rhs)?;

            match op {
                Operator::Plus => lhs + rhs,
                Operator::Minus => lhs - rhs,
                Operator::Mul => lhs * rhs,
                Operator::Div => {
                    if rhs == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    lhs / rhs
                }
            }
        }
        Expression::Call { func, arg } => builtin::apply(*func, eval_expr(arg)?)?,
    };

    if !value.is_finite() {
        return Err(EvalError::Overflow);
    }
    Ok(value)
}
