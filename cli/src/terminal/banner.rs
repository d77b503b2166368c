use colored::*;

use crate::terminal::{colors, print};

const TAGLINE: &str = "mass ÷ height² → index";

pub fn print() {
    print::centerln(&format!("{}", TAGLINE.color(colors::SEPARATOR).italic()));
}
