use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const UNDERWEIGHT: Color = Color::BrightBlue;
pub const NORMAL: Color = Color::BrightGreen;
pub const OVERWEIGHT: Color = Color::Yellow;
pub const OBESE: Color = Color::BrightRed;
