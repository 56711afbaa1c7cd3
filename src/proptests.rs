//! Property-based tests for the evaluator.

use proptest::prelude::*;

use crate::{evaluate, EvalError};

/// Arithmetic built directly, so it can be evaluated without the parser.
#[derive(Debug, Clone)]
enum Arith {
    Lit(i32),
    Bin(Box<Arith>, char, Box<Arith>),
}

impl Arith {
    /// Fully parenthesized source text.
    fn render(&self) -> String {
        match self {
            Self::Lit(n) => n.to_string(),
            Self::Bin(lhs, op, rhs) => format!("({} {op} {})", lhs.render(), rhs.render()),
        }
    }

    fn eval(&self) -> Result<f64, EvalError> {
        match self {
            Self::Lit(n) => Ok(f64::from(*n)),
            Self::Bin(lhs, op, rhs) => {
                let lhs = lhs.eval()?;
                let rhs = rhs.eval()?;
                apply(lhs, *op, rhs)
            }
        }
    }
}

fn apply(lhs: f64, op: char, rhs: f64) -> Result<f64, EvalError> {
    match op {
        '+' => Ok(lhs + rhs),
        '-' => Ok(lhs - rhs),
        '*' => Ok(lhs * rhs),
        _ if rhs == 0.0 => Err(EvalError::DivisionByZero),
        _ => Ok(lhs / rhs),
    }
}

/// Reference for flat `a op b op c ...` input: fold each run of `*` and `/`
/// into a term, then fold the terms with `+` and `-`.
fn eval_flat(first: i32, rest: &[(char, i32)]) -> Result<f64, EvalError> {
    let mut terms = vec![('+', f64::from(first))];

    for &(op, n) in rest {
        let n = f64::from(n);
        match op {
            '*' | '/' => {
                let (sign, term) = terms.pop().unwrap_or(('+', 0.0));
                terms.push((sign, apply(term, op, n)?));
            }
            _ => terms.push((op, n)),
        }
    }

    terms
        .into_iter()
        .try_fold(0.0, |acc, (sign, term)| apply(acc, sign, term))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn operand() -> impl Strategy<Value = i32> {
    -50i32..50
}

fn operator() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '-', '*', '/'])
}

fn arith() -> impl Strategy<Value = Arith> {
    operand().prop_map(Arith::Lit).prop_recursive(4, 32, 2, |inner| {
        (inner.clone(), operator(), inner)
            .prop_map(|(lhs, op, rhs)| Arith::Bin(Box::new(lhs), op, Box::new(rhs)))
    })
}

proptest! {
    #[test]
    fn parenthesized_matches_reference(tree in arith()) {
        let src = tree.render();
        match (evaluate(&src), tree.eval()) {
            (Ok(actual), Ok(expected)) => {
                prop_assert!(close(actual, expected), "{src} = {actual}, expected {expected}");
            }
            (actual, expected) => {
                prop_assert_eq!(actual, expected);
            }
        }
    }

    #[test]
    fn precedence_matches_reference(
        first in operand(),
        rest in prop::collection::vec((operator(), operand()), 0..8),
    ) {
        let mut src = first.to_string();
        for (op, n) in &rest {
            src.push_str(&format!(" {op} {n}"));
        }

        match (evaluate(&src), eval_flat(first, &rest)) {
            (Ok(actual), Ok(expected)) => {
                prop_assert!(close(actual, expected), "{src} = {actual}, expected {expected}");
            }
            (actual, expected) => {
                prop_assert_eq!(actual, expected);
            }
        }
    }

    #[test]
    fn evaluation_is_idempotent(src in "[0-9e+*/(). -]{0,24}|(sin|cos|tan|ln|sinh|cosh|tanh)\\([0-9.+-]{0,6}\\)?") {
        prop_assert_eq!(evaluate(&src), evaluate(&src));
    }

    #[test]
    fn arbitrary_input_never_panics(src in ".{0,64}") {
        if let Ok(value) = evaluate(&src) {
            prop_assert!(value.is_finite());
        }
    }
}
