use thiserror::Error;

/// Positions are 0-based character indices into the input.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,
    #[error("invalid token at position {0}")]
    InvalidToken(usize),
    #[error("unexpected token at position {0}")]
    UnexpectedToken(usize),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    #[error("missing argument for `{0}`")]
    MissingArgument(&'static str),
    #[error("expression is nested too deeply")]
    TooDeep,
    #[error("expression is too long")]
    TooLong,
    #[error("division by zero")]
    DivisionByZero,
    #[error("`{0}` is undefined for {1}")]
    DomainError(&'static str, f64),
    #[error("result is not a finite number")]
    Overflow,
}

pub type EvalResult<T> = Result<T, EvalError>;
