use std::fmt::Display;

use bodyscale_core::evaluator::Category;
use bodyscale_core::report::Report;
use colored::*;
use serde::Serialize;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{banner, colors};

pub const TOTAL_WIDTH: usize = 64;

/// Target the formatter prints verbatim, without a level symbol.
pub const PRINT_TARGET: &str = "bodyscale::print";

#[macro_export]
macro_rules! bprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ BODYSCALE v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).bright_black();

    print(&format!("{}{}{}", sep, text, sep));
    banner::print();
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn aligned_line<V>(key: &str, key_width: usize, value: V)
where
    V: Display + WithDefaultColor,
{
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

pub fn category_color(category: Category) -> Color {
    match category {
        Category::Underweight => colors::UNDERWEIGHT,
        Category::Normal => colors::NORMAL,
        Category::Overweight => colors::OVERWEIGHT,
        Category::Obese => colors::OBESE,
    }
}

/// Shows a notification box: a title line followed by its message lines.
pub fn alert(title: &str, body: &str) {
    let bar: ColoredString = "│".color(colors::SEPARATOR);
    print(&format!("{} {}", "┌".color(colors::SEPARATOR), title.color(colors::ACCENT).bold()));
    for line in body.lines() {
        print(&format!("{} {}", bar, line.color(colors::TEXT_DEFAULT)));
    }
    print(&format!("{}", "└".color(colors::SEPARATOR)));
}

/// Prints a rendered result, colored by category when it has one.
pub fn report(report: &Report, category: Option<Category>, q_level: u8) {
    match report {
        Report::Sentence(text) => {
            let color = category.map(category_color).unwrap_or(colors::TEXT_DEFAULT);
            let text: ColoredString = text.color(color).bold();
            match q_level {
                0 => {
                    fat_separator();
                    centerln(&format!("{}", text));
                    fat_separator();
                }
                _ => print(&format!("{}", text)),
            }
        }
        Report::Inline(text) => print_status(text.yellow().to_string()),
        Report::Alert { title, body } => alert(title, body),
    }
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

/// Writes `data` to stdout as a pretty JSON document, bypassing the logger.
pub fn json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&JsonOut { ok: true, data })?);
    Ok(())
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
