use std::io::{self, BufRead};

use bodyscale_common::config::Config;
use bodyscale_common::measurement::Field;
use bodyscale_core::evaluator::{self, EvaluationResult};
use bodyscale_core::report;

use crate::bprint;
use crate::commands::bmi;
use crate::terminal::print;

pub fn interactive(cfg: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let evaluated: usize = run(stdin.lock(), cfg)?.len();

    if cfg.quiet == 0 && !cfg.json {
        print::end_of_program();
    }
    tracing::debug!(evaluated, "interactive session finished");
    Ok(())
}

/// Evaluates pairs of lines (mass, then height) until EOF or an empty mass line.
pub fn run<R: BufRead>(input: R, cfg: &Config) -> anyhow::Result<Vec<EvaluationResult>> {
    let mut lines = input.lines();
    let mut results: Vec<EvaluationResult> = Vec::new();

    loop {
        prompt(Field::Mass, cfg);
        let Some(mass) = lines.next().transpose()? else {
            break;
        };
        if mass.trim().is_empty() {
            break;
        }

        prompt(Field::Height, cfg);
        let Some(height) = lines.next().transpose()? else {
            break;
        };

        let result = evaluator::evaluate(&mass, &height);
        if cfg.json {
            print::json(&result)?;
        } else {
            bmi::show(&result, cfg);
            bprint!();
        }
        results.push(result);
    }

    Ok(results)
}

fn prompt(field: Field, cfg: &Config) {
    if cfg.json || cfg.quiet > 1 {
        return;
    }
    let label = report::field_label(field, cfg.locale);
    print::print_status(format!("{label} ({}):", field.unit()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bodyscale_core::evaluator::Category;

    fn quiet() -> Config {
        Config { quiet: 2, ..Config::default() }
    }

    #[test]
    fn evaluates_pairs_until_blank_line() {
        let input = "70\n1.9\n\n120\n1.8\n";
        let results = run(input.as_bytes(), &quiet()).unwrap();

        assert_eq!(
            results,
            vec![EvaluationResult::Valid { bmi: 19.39, category: Category::Normal }]
        );
    }

    #[test]
    fn stops_at_eof_and_keeps_invalid_results() {
        let input = "abc\n1.75\n301\n1.75\n70";
        let results = run(input.as_bytes(), &quiet()).unwrap();

        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], EvaluationResult::Invalid { .. }));
        assert!(matches!(results[1], EvaluationResult::OutOfRange { .. }));
    }
}
