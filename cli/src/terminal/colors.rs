use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 95, g: 215, b: 175 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 175, b: 95 };
pub const SEPARATOR: Color = Color::TrueColor { r: 108, g: 108, b: 108 };
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 208, g: 208, b: 208 };
pub const IPV4_ADDR: Color = Color::TrueColor { r: 135, g: 175, b: 255 };
pub const IPV6_ADDR: Color = Color::TrueColor { r: 175, g: 135, b: 255 };
pub const ELAPSED: Color = Color::TrueColor { r: 175, g: 215, b: 95 };
