use vello::peniko::Color;

use crate::serde_color;

/// The named colors a built-in theme is assembled from.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ThemePalette {
    /// Core accent color used across widgets.
    #[serde(with = "serde_color")]
    pub primary: Color,
    /// Lighter variant of the primary color.
    #[serde(with = "serde_color")]
    pub primary_light: Color,
    /// Darker variant of the primary color.
    #[serde(with = "serde_color")]
    pub primary_dark: Color,
    /// Secondary accent color.
    #[serde(with = "serde_color")]
    pub accent: Color,
    /// Confirmation color, used for controls in their "on" state.
    #[serde(with = "serde_color")]
    pub positive: Color,
    /// Default background color.
    #[serde(with = "serde_color")]
    pub background: Color,
    /// Alternate background used for raised surfaces.
    #[serde(with = "serde_color")]
    pub background_alt: Color,
    /// Main text color.
    #[serde(with = "serde_color")]
    pub text: Color,
    /// Muted text color for secondary labels.
    #[serde(with = "serde_color")]
    pub text_muted: Color,
    /// Border color for separators and outlines.
    #[serde(with = "serde_color")]
    pub border: Color,
}

impl ThemePalette {
    /// Standard palette for the light built-in theme.
    pub fn daylight() -> Self {
        Self {
            primary: Color::from_rgb8(0, 122, 255),
            primary_light: Color::from_rgb8(64, 156, 255),
            primary_dark: Color::from_rgb8(0, 88, 208),
            accent: Color::from_rgb8(88, 86, 214),
            positive: Color::from_rgb8(52, 199, 89),
            background: Color::from_rgb8(255, 255, 255),
            background_alt: Color::from_rgb8(242, 242, 247),
            text: Color::from_rgb8(0, 0, 0),
            text_muted: Color::from_rgb8(142, 142, 147),
            border: Color::from_rgb8(199, 199, 204),
        }
    }

    /// Standard palette for the dark built-in theme.
    pub fn midnight() -> Self {
        Self {
            primary: Color::from_rgb8(10, 132, 255),
            primary_light: Color::from_rgb8(64, 156, 255),
            primary_dark: Color::from_rgb8(0, 94, 190),
            accent: Color::from_rgb8(94, 92, 230),
            positive: Color::from_rgb8(48, 209, 88),
            background: Color::from_rgb8(28, 28, 30),
            background_alt: Color::from_rgb8(44, 44, 46),
            text: Color::from_rgb8(229, 229, 234),
            text_muted: Color::from_rgb8(142, 142, 147),
            border: Color::from_rgb8(84, 84, 88),
        }
    }
}

/// Trait for types capable of exposing a [ThemePalette].
pub trait ProvidesPalette {
    /// Obtain the palette reference.
    fn palette(&self) -> &ThemePalette;
}
