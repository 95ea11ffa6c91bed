//! Color values stored in themes.
//!
//! [`Color`] is what theme lookups hand back. A lookup that cannot find its
//! target does not fail; it returns [`Color::invalid`], which renders as an
//! empty CSS value so a missing palette entry simply drops the declaration.
//!
//! ## Supported Formats
//!
//! - **Integer**: `0xRRGGBB` via [`Color::from_int`]
//! - **Hex**: `#RGB`, `#RRGGBB`, `#RRGGBBAA`
//! - **RGB**: `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! - **Special**: `transparent`
//!
//! ```
//! use themekit::types::Color;
//!
//! let primary = Color::parse("#6200ee").unwrap();
//! assert_eq!(primary.to_string(), "#6200ee");
//! assert_eq!(primary.alpha(0.5).to_string(), "rgba(98, 0, 238, 0.5)");
//! ```

use std::fmt;

use nom::{
    IResult,
    bytes::complete::take_while_m_n,
    combinator::{all_consuming, map_res},
    sequence::tuple,
};

use crate::error::{Result, ThemeError};

/// An RGBA color, or the invalid sentinel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
    valid: bool,
}

impl Default for Color {
    /// The default color is the invalid sentinel.
    fn default() -> Self {
        Self::invalid()
    }
}

impl Color {
    /// Returns the sentinel produced when a color cannot be resolved.
    pub const fn invalid() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0.0,
            valid: false,
        }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r,
            g,
            b,
            a,
            valid: true,
        }
    }

    /// Returns a fully transparent black.
    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0.0)
    }

    /// Builds an opaque color from a `0xRRGGBB` integer.
    ///
    /// Bits above the low 24 are ignored.
    pub const fn from_int(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the color as a `0xRRGGBB` integer, dropping alpha.
    pub fn to_int(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Returns a copy with the given alpha. The invalid color stays invalid.
    pub fn alpha(&self, a: f32) -> Self {
        if !self.valid {
            return *self;
        }
        Self {
            a: a.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Parses a CSS color string.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ThemeError::InvalidColor("empty color string".to_string()));
        }

        let lower = input.to_ascii_lowercase();
        if lower == "transparent" {
            return Ok(Self::transparent());
        }
        if let Some(body) = lower.strip_prefix('#') {
            return parse_hex_body(body);
        }
        if lower.starts_with("rgb") {
            return parse_rgb_func(&lower);
        }

        Err(ThemeError::InvalidColor(input.to_string()))
    }

    /// Relative luminance as WCAG defines it: 0.0 for black, 1.0 for white.
    pub fn luminance(&self) -> f32 {
        const WEIGHTS: [f32; 3] = [0.2126, 0.7152, 0.0722];

        [self.r, self.g, self.b]
            .into_iter()
            .zip(WEIGHTS)
            .map(|(channel, weight)| {
                let c = channel as f32 / 255.0;
                let linear = if c <= 0.03928 {
                    c / 12.92
                } else {
                    ((c + 0.055) / 1.055).powf(2.4)
                };
                linear * weight
            })
            .sum()
    }

    /// WCAG contrast ratio between two colors, from 1.0 up to 21.0.
    pub fn contrast(&self, other: &Color) -> f32 {
        let (l1, l2) = (self.luminance(), other.luminance());
        (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
    }

    /// Black or white, whichever reads better on top of this color.
    pub fn contrast_text(&self) -> Self {
        const BLACK: Color = Color::rgb(0, 0, 0);
        const WHITE: Color = Color::rgb(255, 255, 255);

        if self.contrast(&WHITE) >= self.contrast(&BLACK) {
            WHITE
        } else {
            BLACK
        }
    }
}

impl fmt::Display for Color {
    /// Writes the CSS form. Invalid colors write nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return Ok(());
        }
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_int(value)
    }
}

/// Converts a `#RRGGBB` (or `#RGB`) string to its integer value.
///
/// The leading `#` is optional.
pub fn hex_color_to_int(hex: &str) -> Result<u32> {
    let body = hex.trim().trim_start_matches('#');
    match body.len() {
        3 | 6 => parse_hex_body(body).map(|color| color.to_int()),
        _ => Err(ThemeError::InvalidColor(hex.to_string())),
    }
}

fn hex_pair(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), |s| {
        u8::from_str_radix(s, 16)
    })(input)
}

/// A single hex digit, widened so `f` becomes `ff`.
fn hex_digit(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(1, 1, |c: char| c.is_ascii_hexdigit()), |s| {
        u8::from_str_radix(s, 16).map(|d| d * 17)
    })(input)
}

fn parse_hex_body(body: &str) -> Result<Color> {
    let parsed = match body.len() {
        3 => all_consuming(tuple((hex_digit, hex_digit, hex_digit)))(body)
            .map(|(_, (r, g, b))| Color::rgb(r, g, b)),
        6 => all_consuming(tuple((hex_pair, hex_pair, hex_pair)))(body)
            .map(|(_, (r, g, b))| Color::rgb(r, g, b)),
        8 => all_consuming(tuple((hex_pair, hex_pair, hex_pair, hex_pair)))(body)
            .map(|(_, (r, g, b, a))| Color::rgba(r, g, b, a as f32 / 255.0)),
        n => {
            return Err(ThemeError::InvalidColor(format!(
                "invalid hex color length: {n}"
            )));
        }
    };
    parsed.map_err(|_| ThemeError::InvalidColor(format!("#{body}")))
}

fn parse_rgb_func(input: &str) -> Result<Color> {
    let (start, end) = match (input.find('('), input.rfind(')')) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => return Err(ThemeError::InvalidColor(input.to_string())),
    };

    let parts: Vec<&str> = input[start + 1..end].split(',').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) {
        return Err(ThemeError::InvalidColor(format!(
            "rgb requires 3 or 4 components: {input}"
        )));
    }

    let channel = |s: &str| {
        s.parse::<u8>()
            .map_err(|_| ThemeError::InvalidColor(format!("invalid channel: {s}")))
    };
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = match parts.get(3) {
        Some(s) => s
            .parse::<f32>()
            .map_err(|_| ThemeError::InvalidColor(format!("invalid alpha: {s}")))?,
        None => 1.0,
    };

    Ok(Color::rgba(r, g, b, a))
}
