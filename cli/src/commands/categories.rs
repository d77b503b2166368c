use bodyscale_common::config::Config;
use bodyscale_core::evaluator::Category;
use bodyscale_core::report;
use colored::*;
use serde::Serialize;

use crate::terminal::print;

#[derive(Serialize)]
struct Band {
    category: Category,
    label: &'static str,
    /// Inclusive. Absent for the lowest band.
    from: Option<f64>,
    /// Exclusive. Absent for the highest band.
    to: Option<f64>,
}

fn bands(cfg: &Config) -> Vec<Band> {
    Category::ALL
        .into_iter()
        .map(|category| Band {
            category,
            label: report::category_label(category, cfg.locale),
            from: Some(category.lower_bound()).filter(|b| b.is_finite()),
            to: Some(category.upper_bound()).filter(|b| b.is_finite()),
        })
        .collect()
}

pub fn categories(cfg: &Config) -> anyhow::Result<()> {
    let bands = bands(cfg);

    if cfg.json {
        return print::json(&bands);
    }

    let key_width: usize = bands.iter().map(|b| b.label.len()).max().unwrap_or(0);
    for band in &bands {
        let range: String = match (band.from, band.to) {
            (None, Some(to)) => format!("below {to}"),
            (Some(from), Some(to)) => format!("{from} to {to}"),
            (Some(from), None) => format!("{from} and above"),
            (None, None) => String::from("any"),
        };
        let value: ColoredString = range.color(print::category_color(band.category));
        print::aligned_line(band.label, key_width, value);
    }
    Ok(())
}
