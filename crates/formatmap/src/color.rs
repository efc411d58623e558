//! Color parsing and formatting for property sets.
//!
//! Colors are written in themes and settings files as one of:
//!
//! - a basic color name: `black`, `red`, `green`, `yellow`, `blue`,
//!   `magenta`, `cyan`, `white`
//! - an ANSI 256-color index, as a number or string: `33`, `"208"`
//! - a hex triplet: `"#3366ff"` or `"#36f"`, mapped to the nearest
//!   256-color index

use console::Color;
use std::fmt;

/// Error returned when a color string cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    pub input: String,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid color '{}': expected a color name, an ANSI index (0-255) or #rrggbb",
            self.input
        )
    }
}

impl std::error::Error for ColorParseError {}

/// Parses a color in any of the accepted notations.
///
/// # Example
///
/// ```rust
/// use console::Color;
/// use formatmap::parse_color;
///
/// assert_eq!(parse_color("blue").unwrap(), Color::Blue);
/// assert_eq!(parse_color("208").unwrap(), Color::Color256(208));
/// assert_eq!(parse_color("#ff0000").unwrap(), Color::Color256(196));
/// assert!(parse_color("ultraviolet").is_err());
/// ```
pub fn parse_color(input: &str) -> Result<Color, ColorParseError> {
    let trimmed = input.trim();
    let err = || ColorParseError {
        input: input.to_string(),
    };

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex)
            .map(|rgb| Color::Color256(rgb_to_ansi256(rgb)))
            .ok_or_else(err);
    }

    if let Ok(index) = trimmed.parse::<u8>() {
        return Ok(Color::Color256(index));
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "white" => Ok(Color::White),
        _ => Err(err()),
    }
}

/// Formats a color in the notation [`parse_color`] accepts.
pub fn color_name(color: Color) -> String {
    match color {
        Color::Black => "black".to_string(),
        Color::Red => "red".to_string(),
        Color::Green => "green".to_string(),
        Color::Yellow => "yellow".to_string(),
        Color::Blue => "blue".to_string(),
        Color::Magenta => "magenta".to_string(),
        Color::Cyan => "cyan".to_string(),
        Color::White => "white".to_string(),
        Color::Color256(index) => index.to_string(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<_>>()?;
    match digits.as_slice() {
        [r, g, b] => Some((r * 17, g * 17, b * 17)),
        [r1, r0, g1, g0, b1, b0] => Some((r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0)),
        _ => None,
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Grays use the 24-step grayscale ramp; everything else lands in the
/// 6x6x6 color cube.
///
/// ```rust
/// use formatmap::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r != g || g != b {
        let level = |channel: u8| (u16::from(channel) * 5 / 255) as u8;
        return 16 + 36 * level(r) + 6 * level(g) + level(b);
    }
    match r {
        0..=7 => 16,
        249..=u8::MAX => 231,
        _ => 232 + ((u16::from(r) - 8) * 24 / 247) as u8,
    }
}

/// Serde adapter for `Option<Color>` fields.
pub(crate) mod serde_opt {
    use console::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawColor {
        Index(u8),
        Text(String),
    }

    pub fn serialize<S: Serializer>(
        color: &Option<Color>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match color {
            Some(color) => serializer.serialize_str(&super::color_name(*color)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Color>, D::Error> {
        match Option::<RawColor>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawColor::Index(index)) => Ok(Some(Color::Color256(index))),
            Some(RawColor::Text(text)) => super::parse_color(&text)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_case_insensitive() {
        assert_eq!(parse_color("Red").unwrap(), Color::Red);
        assert_eq!(parse_color(" cyan ").unwrap(), Color::Cyan);
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_color("0").unwrap(), Color::Color256(0));
        assert_eq!(parse_color("255").unwrap(), Color::Color256(255));
        assert!(parse_color("256").is_err());
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_color("#00ff00").unwrap(), Color::Color256(46));
        assert_eq!(parse_color("#f00").unwrap(), Color::Color256(196));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gggggg").is_err());
    }

    #[test]
    fn test_color_name_parses_back() {
        for color in [Color::Black, Color::Magenta, Color::Color256(42)] {
            assert_eq!(parse_color(&color_name(color)).unwrap(), color);
        }
    }

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256((128, 128, 128)), 243);
    }

    #[test]
    fn test_error_display_mentions_input() {
        let err = parse_color("mauve").unwrap_err();
        assert!(err.to_string().contains("mauve"));
    }
}
