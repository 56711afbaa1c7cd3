use crate::error::EvalResult;

pub const DEFAULT_PRECISION: usize = 10;

// Integral values below this print without a fraction.
const INTEGER_LIMIT: f64 = 1e15;
// Enough decimals for the exact expansion of any f64.
const MAX_PRECISION: usize = 1074;

/// Formats a number with at most `precision` decimals, trimming trailing
/// zeros.
pub fn format_number(value: f64, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);

    if value.fract() == 0.0 && value.abs() < INTEGER_LIMIT {
        // `as` keeps `-0` from printing a sign.
        return format!("{}", value as i64);
    }

    let formatted = format!("{value:.precision$}");
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

pub fn render(result: &EvalResult<f64>, precision: usize) -> String {
    match result {
        Ok(value) => format_number(*value, precision),
        Err(why) => format!("Error: {why}"),
    }
}
