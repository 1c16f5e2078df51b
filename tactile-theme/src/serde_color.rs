//! Serde helpers encoding [Color] as a `#rrggbb` / `#rrggbbaa` hex string.

use serde::{Deserialize, Deserializer, Serializer};
use vello::peniko::Color;

/// Serialize a [Color] as a hex string.
pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let [r, g, b, a] = color.components.map(|c| (c * 255.0).round() as u8);
    let hex = if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    };
    serializer.serialize_str(&hex)
}

/// Deserialize a [Color] from a hex string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let hex = String::deserialize(deserializer)?;
    parse_hex_color(&hex).map_err(Error::custom)
}

fn parse_hex_color(hex: &str) -> Result<Color, String> {
    let hex = hex.trim_start_matches('#');

    let byte_at = |i: usize| {
        u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .map_err(|_| format!("invalid hex digit in color '{hex}'"))
    };

    match hex.len() {
        6 => Ok(Color::from_rgb8(byte_at(0)?, byte_at(1)?, byte_at(2)?)),
        8 => Ok(Color::from_rgba8(
            byte_at(0)?,
            byte_at(1)?,
            byte_at(2)?,
            byte_at(3)?,
        )),
        _ => Err(format!(
            "hex color must have 6 or 8 digits, got '{hex}'"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_opaque_and_translucent() {
        let opaque = parse_hex_color("#34c759").unwrap();
        assert_eq!(opaque.components, Color::from_rgb8(0x34, 0xc7, 0x59).components);

        let translucent = parse_hex_color("80808080").unwrap();
        assert_eq!(
            translucent.components,
            Color::from_rgba8(0x80, 0x80, 0x80, 0x80).components,
        );

        assert!(parse_hex_color("#123").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
    }
}
