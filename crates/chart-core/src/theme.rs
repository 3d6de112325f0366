// File: crates/chart-core/src/theme.rs
// Summary: Resolved color roles for chart rendering, with light/dark presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// 8-bit RGBA color, backend-neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            3 => {
                let mut it = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some(Self::from_rgb(it.next()??, it.next()??, it.next()??))
            }
            6 => Some(Self::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => None,
        }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Opacity in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }

    /// `#rrggbb` without alpha; pair with [`Color::opacity`] for SVG attributes.
    pub fn to_hex_rgb(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| format!("invalid color '{s}'"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub label: Color,
    pub muted: Color,
    pub primary: Color,
    pub bar: Color,
    pub bullish: Color,
    pub bearish: Color,
    pub point_fill: Color,
    pub tab_indicator: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            grid: Color::from_rgb(40, 40, 45),
            label: Color::from_rgb(235, 235, 245),
            muted: Color::from_rgb(150, 150, 160),
            primary: Color::from_rgb(99, 102, 241),
            bar: Color::from_rgb(129, 140, 248),
            bullish: Color::from_rgb(40, 200, 120),
            bearish: Color::from_rgb(220, 80, 80),
            point_fill: Color::from_rgb(18, 18, 20),
            tab_indicator: Color::from_rgb(99, 102, 241),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_rgb(250, 250, 252),
            grid: Color::from_rgb(230, 230, 235),
            label: Color::from_rgb(20, 20, 30),
            muted: Color::from_rgb(100, 100, 110),
            primary: Color::from_rgb(79, 70, 229),
            bar: Color::from_rgb(99, 102, 241),
            bullish: Color::from_rgb(20, 160, 90),
            bearish: Color::from_rgb(200, 60, 60),
            point_fill: Color::from_rgb(255, 255, 255),
            tab_indicator: Color::from_rgb(79, 70, 229),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_rgb(0x00, 0x00, 0x00),
            grid: Color::from_rgb(0x22, 0x22, 0x22),
            label: Color::from_rgb(0xff, 0xff, 0xff),
            muted: Color::from_rgb(0xcc, 0xcc, 0xcc),
            primary: Color::from_rgb(0x00, 0xff, 0xff),
            bar: Color::from_rgb(0x00, 0xaa, 0xff),
            bullish: Color::from_rgb(0x00, 0xff, 0x00),
            bearish: Color::from_rgb(0xff, 0x00, 0x00),
            point_fill: Color::from_rgb(0x00, 0x00, 0x00),
            tab_indicator: Color::from_rgb(0xff, 0xff, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Color::from_hex("#fff"), Some(Color::from_rgb(255, 255, 255)));
        assert_eq!(Color::from_hex("10b981"), Some(Color::from_rgb(0x10, 0xb9, 0x81)));
        assert_eq!(Color::from_hex("#10b98180").map(|c| c.a), Some(0x80));
        assert_eq!(Color::from_hex("#12345"), None);
    }

    #[test]
    fn unknown_theme_falls_back() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("sepia").name, "light");
    }
}
