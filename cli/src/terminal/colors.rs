use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::BrightMagenta;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const PRICE: Color = Color::BrightYellow;
pub const AVAILABLE: Color = Color::BrightGreen;
pub const RENTED: Color = Color::BrightRed;
