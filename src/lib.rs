//! Scientific expression evaluator behind the Vcalc calculator.
//!
//! [`evaluate`] turns text such as `2*(3+4)` or `ln(e) + sin(0)` into an
//! `f64`; [`History`] is the caller-owned, append-only record of what was
//! evaluated and how the outcome was rendered.

mod error;
mod format;
mod history;
mod runtime;
mod syntax;

#[cfg(test)]
mod proptests;

pub use error::{EvalError, EvalResult};
pub use format::{format_number, render, DEFAULT_PRECISION};
pub use history::{History, HistoryEntry};
pub use runtime::eval::evaluate;
pub use syntax::Function;
