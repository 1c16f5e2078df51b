use vello::peniko::Color;

use crate::globals::Globals;
use crate::id::WidgetId;
use crate::properties::ThemeProperty;
use crate::theme::palette::{ProvidesPalette, ThemePalette};
use crate::theme::Theme;

/// A clean light theme with a cool blue accent.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum DaylightTheme {
    /// Use [DaylightTheme::light] to use the light Daylight theme.
    Light(DaylightThemeData),
}

/// Data for the Daylight theme.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DaylightThemeData {
    globals: Globals,
    palette: ThemePalette,
}

impl DaylightTheme {
    /// The light Daylight theme.
    pub fn light() -> Self {
        Self::Light(DaylightThemeData {
            globals: Globals::default(),
            palette: ThemePalette::daylight(),
        })
    }

    fn data(&self) -> &DaylightThemeData {
        match self {
            DaylightTheme::Light(data) => data,
        }
    }

    fn data_mut(&mut self) -> &mut DaylightThemeData {
        match self {
            DaylightTheme::Light(data) => data,
        }
    }
}

impl Default for DaylightTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl ProvidesPalette for DaylightTheme {
    fn palette(&self) -> &ThemePalette {
        &self.data().palette
    }
}

impl Theme for DaylightTheme {
    fn get_property(&self, id: WidgetId, property: &ThemeProperty) -> Option<Color> {
        let palette = &self.data().palette;

        match id.namespace() {
            "tactile-widgets" => match id.id() {
                "StyledButton" => match property {
                    ThemeProperty::ColorIdle => Some(palette.primary),
                    ThemeProperty::ColorPressed => Some(palette.primary_dark),
                    ThemeProperty::ColorHovered => Some(palette.primary_light),
                    ThemeProperty::ColorTitle => Some(palette.background),
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

    fn window_background(&self) -> Color {
        self.data().palette.background
    }

    fn globals(&self) -> &Globals {
        &self.data().globals
    }

    fn globals_mut(&mut self) -> &mut Globals {
        &mut self.data_mut().globals
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("tactile-theme", "DaylightTheme")
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
