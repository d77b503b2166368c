use bodyscale_common::config::Config;
use bodyscale_core::evaluator::{self, EvaluationResult};
use bodyscale_core::report;

use crate::terminal::print;

pub fn bmi(mass: &str, height: &str, cfg: &Config) -> anyhow::Result<()> {
    let result: EvaluationResult = evaluator::evaluate(mass, height);

    if cfg.json {
        return print::json(&result);
    }

    show(&result, cfg);
    Ok(())
}

/// Prints one result the way every calculator command does.
pub fn show(result: &EvaluationResult, cfg: &Config) {
    let category = match result {
        EvaluationResult::Valid { category, .. } => Some(*category),
        _ => None,
    };
    let rendered = report::render(result, cfg.locale);
    print::report(&rendered, category, cfg.quiet);
}
