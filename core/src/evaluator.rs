//! Body-mass-index evaluation.
//!
//! [`evaluate`] takes the two raw inputs exactly as typed and always returns an
//! [`EvaluationResult`]; rejected input is an ordinary outcome, not an error.
//!
//! Validation happens in a fixed order:
//! 1. both inputs must read as numbers greater than zero,
//! 2. neither may exceed its physical bound ([`Field::limit`]),
//! 3. only then is the index computed and classified.

use bodyscale_common::measurement::{Field, Measurement};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub const INVALID_REASON: &str = "must supply valid positive numbers";

/// Weight-status band derived from a BMI value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Category {
    /// Every band in ascending order.
    pub const ALL: [Category; 4] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obese,
    ];

    /// Bands are half-open and left-inclusive: a value equal to a
    /// threshold belongs to the upper band.
    pub fn classify(bmi: f64) -> Self {
        if bmi < Category::Normal.lower_bound() {
            Category::Underweight
        } else if bmi < Category::Overweight.lower_bound() {
            Category::Normal
        } else if bmi < Category::Obese.lower_bound() {
            Category::Overweight
        } else {
            Category::Obese
        }
    }

    /// Inclusive lower bound of the band. `Underweight` has none.
    pub fn lower_bound(&self) -> f64 {
        match self {
            Category::Underweight => f64::NEG_INFINITY,
            Category::Normal => 18.5,
            Category::Overweight => 24.9,
            Category::Obese => 29.9,
        }
    }

    /// Exclusive upper bound of the band. `Obese` has none.
    pub fn upper_bound(&self) -> f64 {
        match self {
            Category::Underweight => Category::Normal.lower_bound(),
            Category::Normal => Category::Overweight.lower_bound(),
            Category::Overweight => Category::Obese.lower_bound(),
            Category::Obese => f64::INFINITY,
        }
    }
}

/// A field that went past its accepted maximum.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Violation {
    pub field: Field,
    pub limit: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EvaluationResult {
    Invalid { reason: &'static str },
    /// Never empty. Lists mass before height when both exceed.
    OutOfRange { violations: Vec<Violation> },
    /// `bmi` is rounded half-up to two decimals.
    Valid { bmi: f64, category: Category },
}

impl EvaluationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, EvaluationResult::Valid { .. })
    }
}

/// Why a measurement was turned down before computing anything.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Rejection {
    #[error("must supply valid positive numbers")]
    NotPositive,

    #[error("out of range: {}", list_fields(.0))]
    OutOfRange(Vec<Violation>),
}

impl From<Rejection> for EvaluationResult {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::NotPositive => EvaluationResult::Invalid {
                reason: INVALID_REASON,
            },
            Rejection::OutOfRange(violations) => EvaluationResult::OutOfRange { violations },
        }
    }
}

/// Evaluates raw text inputs.
///
/// An input without a numeric prefix and an input that reads as zero are
/// the same case: both end up as [`EvaluationResult::Invalid`].
pub fn evaluate(mass_input: &str, height_input: &str) -> EvaluationResult {
    match Measurement::read(mass_input, height_input) {
        (Some(mass_kg), Some(height_m)) => evaluate_measurement(Measurement::new(mass_kg, height_m)),
        _ => {
            debug!(mass_input, height_input, "input did not read as numbers");
            Rejection::NotPositive.into()
        }
    }
}

/// Evaluates numbers that were already read.
pub fn evaluate_measurement(measurement: Measurement) -> EvaluationResult {
    match validate(measurement) {
        Ok(measurement) => {
            let raw = raw_bmi(&measurement);
            EvaluationResult::Valid {
                bmi: round_half_up(raw),
                category: Category::classify(raw),
            }
        }
        Err(rejection) => {
            debug!(?measurement, %rejection, "measurement rejected");
            rejection.into()
        }
    }
}

pub fn validate(measurement: Measurement) -> Result<Measurement, Rejection> {
    // `!(x > 0.0)` also catches NaN
    if !(measurement.mass_kg > 0.0) || !(measurement.height_m > 0.0) {
        return Err(Rejection::NotPositive);
    }

    let violations: Vec<Violation> = [Field::Mass, Field::Height]
        .into_iter()
        .filter(|field| field.value_of(&measurement) > field.limit())
        .map(|field| Violation {
            field,
            limit: field.limit(),
        })
        .collect();

    if !violations.is_empty() {
        return Err(Rejection::OutOfRange(violations));
    }

    Ok(measurement)
}

fn raw_bmi(measurement: &Measurement) -> f64 {
    measurement.mass_kg / (measurement.height_m * measurement.height_m)
}

/// Rounds a positive value to two decimals, ties going up.
pub fn round_half_up(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn list_fields(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.field.to_string())
        .collect::<Vec<String>>()
        .join(" and ")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
