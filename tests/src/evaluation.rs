use bodyscale_common::config::Locale;
use bodyscale_common::measurement::{Field, Measurement, read_decimal};
use bodyscale_core::evaluator::{self, Category, EvaluationResult, Violation};
use bodyscale_core::report::{self, Report};

/// Values as a user would type them on a phone keyboard.
#[test]
fn typed_inputs_end_to_end() {
    let cases: &[(&str, &str, &str)] = &[
        ("70", "1.75", "Your BMI is 22.86 (Normal)"),
        ("70kg", "1.75m", "Your BMI is 22.86 (Normal)"),
        (" 45 ", " 1.70", "Your BMI is 15.57 (Underweight)"),
        ("85.5", "1.80", "Your BMI is 26.39 (Overweight)"),
        ("300", "2.5", "Your BMI is 48.00 (Obese)"),
    ];

    for (mass, height, expected) in cases {
        let result = evaluator::evaluate(mass, height);
        assert_eq!(
            report::render(&result, Locale::En),
            Report::Sentence(expected.to_string()),
            "{mass} / {height}"
        );
    }
}

/// A comma decimal separator only keeps the integer part, which usually
/// turns a height into something far too small to be plausible, yet valid.
#[test]
fn comma_separator_reads_integer_part() {
    assert_eq!(read_decimal("1,75"), Some(1.0));
    assert_eq!(
        evaluator::evaluate("70", "1,75"),
        EvaluationResult::Valid { bmi: 70.0, category: Category::Obese }
    );
}

#[test]
fn parsed_and_raw_paths_agree() {
    let pairs = [("70", "1.9"), ("56", "2.0"), ("100", "1.83"), ("120", "1.8"), ("0", "1.5"), ("301", "1")];

    for (mass, height) in pairs {
        let (Some(m), Some(h)) = Measurement::read(mass, height) else {
            panic!("{mass} / {height} should read");
        };
        assert_eq!(
            evaluator::evaluate(mass, height),
            evaluator::evaluate_measurement(Measurement::new(m, h))
        );
    }
}

#[test]
fn infinity_is_out_of_range_not_invalid() {
    assert_eq!(
        evaluator::evaluate("Infinity", "1.7"),
        EvaluationResult::OutOfRange {
            violations: vec![Violation { field: Field::Mass, limit: 300.0 }]
        }
    );
}

#[test]
fn spanish_out_of_range_alert() {
    let result = evaluator::evaluate("70", "2.6");
    let Report::Alert { title, body } = report::render(&result, Locale::Es) else {
        panic!("expected an alert");
    };
    assert_eq!(title, "Valores fuera de rango");
    assert_eq!(body, "Peso máximo: 300 kg. Altura máxima: 2.5 m.");
}

#[test]
fn evaluation_is_safe_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let mass = format!("{}", 50 + i * 10);
                evaluator::evaluate(&mass, "1.8")
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let mass = format!("{}", 50 + i * 10);
        assert_eq!(handle.join().unwrap(), evaluator::evaluate(&mass, "1.8"));
    }
}
