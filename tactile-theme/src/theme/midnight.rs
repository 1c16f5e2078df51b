use vello::peniko::Color;

use crate::globals::Globals;
use crate::id::WidgetId;
use crate::properties::ThemeProperty;
use crate::theme::palette::{ProvidesPalette, ThemePalette};
use crate::theme::Theme;

/// A high-contrast dark theme.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MidnightTheme {
    globals: Globals,
    palette: ThemePalette,
}

impl MidnightTheme {
    /// Create the Midnight theme.
    pub fn new() -> Self {
        Self {
            globals: Globals {
                invert_text_color: true,
                text_color_override: None,
            },
            palette: ThemePalette::midnight(),
        }
    }
}

impl Default for MidnightTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvidesPalette for MidnightTheme {
    fn palette(&self) -> &ThemePalette {
        &self.palette
    }
}

impl Theme for MidnightTheme {
    fn get_property(&self, id: WidgetId, property: &ThemeProperty) -> Option<Color> {
        let palette = &self.palette;

        match id.namespace() {
            "tactile-widgets" => match id.id() {
                "StyledButton" => match property {
                    ThemeProperty::ColorIdle => Some(palette.primary),
                    ThemeProperty::ColorPressed => Some(palette.primary_dark),
                    ThemeProperty::ColorHovered => Some(palette.primary_light),
                    ThemeProperty::ColorTitle => Some(palette.text),
                    _ => None,
                },
                "RadioButton" => match property {
                    ThemeProperty::ColorOn => Some(palette.positive),
                    ThemeProperty::ColorOff => Some(palette.text_muted),
                    ThemeProperty::ColorDisabled => Some(palette.border),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        }
    }

    fn get_default_property(&self, property: &ThemeProperty) -> Option<Color> {
        match property {
            ThemeProperty::Color | ThemeProperty::ColorText => Some(self.palette.text),
            ThemeProperty::ColorInvert | ThemeProperty::ColorBackground => {
                Some(self.palette.background)
            },
            ThemeProperty::ColorBorder => Some(self.palette.border),
            ThemeProperty::ColorDisabled => Some(self.palette.border),
            _ => None,
        }
    }

    fn window_background(&self) -> Color {
        self.palette.background
    }

    fn globals(&self) -> &Globals {
        &self.globals
    }

    fn globals_mut(&mut self) -> &mut Globals {
        &mut self.globals
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("tactile-theme", "MidnightTheme")
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
