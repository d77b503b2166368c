//! Turns an [`EvaluationResult`] into the text a user reads.
//!
//! Invalid input is shown inline, out-of-range input as an alert with a
//! title, and a valid result as a single sentence.

use bodyscale_common::config::Locale;
use bodyscale_common::measurement::Field;

use crate::evaluator::{Category, EvaluationResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    Sentence(String),
    Inline(String),
    Alert { title: String, body: String },
}

pub fn render(result: &EvaluationResult, locale: Locale) -> Report {
    match result {
        EvaluationResult::Valid { bmi, category } => {
            Report::Sentence(result_sentence(*bmi, *category, locale))
        }
        EvaluationResult::Invalid { .. } => Report::Inline(invalid_text(locale).to_string()),
        EvaluationResult::OutOfRange { .. } => Report::Alert {
            title: out_of_range_title(locale).to_string(),
            body: limits_text(locale),
        },
    }
}

pub fn result_sentence(bmi: f64, category: Category, locale: Locale) -> String {
    let label = category_label(category, locale);
    match locale {
        Locale::En => format!("Your BMI is {bmi:.2} ({label})"),
        Locale::Es => format!("Tu IMC es {bmi:.2} ({label})"),
    }
}

pub fn category_label(category: Category, locale: Locale) -> &'static str {
    match (locale, category) {
        (Locale::En, Category::Underweight) => "Underweight",
        (Locale::En, Category::Normal) => "Normal",
        (Locale::En, Category::Overweight) => "Overweight",
        (Locale::En, Category::Obese) => "Obese",
        (Locale::Es, Category::Underweight) => "Bajo peso",
        (Locale::Es, Category::Normal) => "Normal",
        (Locale::Es, Category::Overweight) => "Sobrepeso",
        (Locale::Es, Category::Obese) => "Obesidad",
    }
}

pub fn field_label(field: Field, locale: Locale) -> &'static str {
    match (locale, field) {
        (Locale::En, Field::Mass) => "Weight",
        (Locale::En, Field::Height) => "Height",
        (Locale::Es, Field::Mass) => "Peso",
        (Locale::Es, Field::Height) => "Altura",
    }
}

fn invalid_text(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Please enter valid values.",
        Locale::Es => "Por favor ingresa valores válidos.",
    }
}

fn out_of_range_title(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Values out of range",
        Locale::Es => "Valores fuera de rango",
    }
}

/// The alert always states both maximums, whichever field was exceeded.
fn limits_text(locale: Locale) -> String {
    let (mass, height) = (Field::Mass, Field::Height);
    match locale {
        Locale::En => format!(
            "Max weight: {} {}. Max height: {} {}.",
            mass.limit(),
            mass.unit(),
            height.limit(),
            height.unit()
        ),
        Locale::Es => format!(
            "Peso máximo: {} {}. Altura máxima: {} {}.",
            mass.limit(),
            mass.unit(),
            height.limit(),
            height.unit()
        ),
    }
}

impl Report {
    /// Flattens the report into one line, alerts as `title: body`.
    pub fn to_line(&self) -> String {
        match self {
            Report::Sentence(text) | Report::Inline(text) => text.clone(),
            Report::Alert { title, body } => format!("{title}: {body}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate;

    #[test]
    fn renders_valid_result_as_sentence() {
        assert_eq!(
            render(&evaluate("70", "1.9"), Locale::En),
            Report::Sentence("Your BMI is 19.39 (Normal)".into())
        );
        assert_eq!(
            render(&evaluate("56", "2.0"), Locale::Es),
            Report::Sentence("Tu IMC es 14.00 (Bajo peso)".into())
        );
        assert_eq!(
            render(&evaluate("120", "1.8"), Locale::Es),
            Report::Sentence("Tu IMC es 37.04 (Obesidad)".into())
        );
    }

    #[test]
    fn renders_invalid_inline() {
        assert_eq!(
            render(&evaluate("abc", "1.75"), Locale::Es),
            Report::Inline("Por favor ingresa valores válidos.".into())
        );
    }

    #[test]
    fn renders_out_of_range_as_alert() {
        let report = render(&evaluate("301", "1.75"), Locale::Es);
        assert_eq!(
            report,
            Report::Alert {
                title: "Valores fuera de rango".into(),
                body: "Peso máximo: 300 kg. Altura máxima: 2.5 m.".into(),
            }
        );
        assert_eq!(
            render(&evaluate("70", "2.6"), Locale::En).to_line(),
            "Values out of range: Max weight: 300 kg. Max height: 2.5 m."
        );
    }

    #[test]
    fn every_category_has_a_label() {
        for category in Category::ALL {
            for locale in [Locale::En, Locale::Es] {
                assert!(!category_label(category, locale).is_empty());
            }
        }
    }
}
