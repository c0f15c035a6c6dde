use colored::Color;

pub const PRIMARY: Color = Color::TrueColor {
    r: 111,
    g: 194,
    b: 255,
};
pub const ACCENT: Color = Color::TrueColor {
    r: 255,
    g: 196,
    b: 87,
};
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const WIN: Color = Color::BrightGreen;
pub const LOSS: Color = Color::BrightRed;
