//! # Measurement Model
//!
//! The two physical quantities a BMI evaluation works on, plus the lenient
//! number reader used on raw text-field input.
//!
//! Text fields are unconstrained, so the reader only looks at the leading
//! part of the input: `"70kg"` reads as `70`, `"1,75"` reads as `1` and
//! `"abc"` does not read at all.

use std::fmt;

use serde::Serialize;

/// Mass in kilograms and height in meters, as read from one request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub mass_kg: f64,
    pub height_m: f64,
}

impl Measurement {
    pub fn new(mass_kg: f64, height_m: f64) -> Self {
        Self { mass_kg, height_m }
    }

    /// Reads both fields, returning `None` for a field that has no numeric prefix.
    pub fn read(mass_input: &str, height_input: &str) -> (Option<f64>, Option<f64>) {
        (read_decimal(mass_input), read_decimal(height_input))
    }
}

/// One of the two inputs of a measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Mass,
    Height,
}

impl Field {
    pub const MASS_LIMIT_KG: f64 = 300.0;
    pub const HEIGHT_LIMIT_M: f64 = 2.5;

    /// Largest accepted value, inclusive.
    pub fn limit(&self) -> f64 {
        match self {
            Field::Mass => Self::MASS_LIMIT_KG,
            Field::Height => Self::HEIGHT_LIMIT_M,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Field::Mass => "kg",
            Field::Height => "m",
        }
    }

    pub fn value_of(&self, measurement: &Measurement) -> f64 {
        match self {
            Field::Mass => measurement.mass_kg,
            Field::Height => measurement.height_m,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Mass => write!(f, "mass"),
            Field::Height => write!(f, "height"),
        }
    }
}

/// Reads the longest decimal prefix of `input` after leading whitespace.
///
/// Accepts an optional sign, digits with at most one `.`, an optional
/// exponent (only when followed by digits) and the `Infinity` keyword.
/// Returns `None` when no digit is found before the prefix ends.
pub fn read_decimal(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].replace("Infinity", "inf").parse().ok();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
