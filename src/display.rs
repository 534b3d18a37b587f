//! Number rendering for the result line.
//!
//! Whole numbers keep a trailing `.0` (`3.0`), very small or very large
//! magnitudes switch to exponent form with a signed two-digit exponent
//! (`1e-05`, `1.5e+16`), and everything else uses the shortest text that
//! round-trips.

use crate::CalcError;

const SMALL: f64 = 1e-4;
const LARGE: f64 = 1e16;

pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && (magnitude < SMALL || magnitude >= LARGE) {
        return scientific(value);
    }

    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Renders either the number or the error text.
pub fn format_outcome(outcome: &Result<f64, CalcError>) -> String {
    match outcome {
        Ok(value) => format_number(*value),
        Err(err) => err.to_string(),
    }
}

fn scientific(value: f64) -> String {
    let raw = format!("{:e}", value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => raw,
    }
}
