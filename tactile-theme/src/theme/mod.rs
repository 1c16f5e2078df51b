//! The theme system.
//!
//! A [Theme] answers typed [ThemeProperty] lookups per widget type and
//! carries the [Globals] shared by all widgets. Two themes ship with the
//! kit: [daylight::DaylightTheme] and [midnight::MidnightTheme]. Widgets
//! always pair a lookup with a built-in fallback, so a theme only needs to
//! answer for the widgets it wants to restyle.

use vello::peniko::Color;

use crate::globals::Globals;
use crate::id::WidgetId;
use crate::properties::ThemeProperty;

/// The light built-in theme.
pub mod daylight;
/// The dark built-in theme.
pub mod midnight;
/// The shared palette type behind the built-in themes.
pub mod palette;

/// Base trait for all themes.
pub trait Theme {
    /// Return the color of the given property for the given widget, or
    /// [None] if this theme does not style it.
    fn get_property(&self, id: WidgetId, property: &ThemeProperty) -> Option<Color>;

    /// Get a default property value for when widget-specific styles are not
    /// available.
    fn get_default_property(&self, property: &ThemeProperty) -> Option<Color> {
        match property {
            ThemeProperty::Color | ThemeProperty::ColorText => Some(Color::from_rgb8(0, 0, 0)),
            ThemeProperty::ColorInvert | ThemeProperty::ColorBackground => {
                Some(Color::from_rgb8(255, 255, 255))
            },
            ThemeProperty::ColorBorder => Some(Color::from_rgb8(200, 200, 200)),
            ThemeProperty::ColorIdle => Some(Color::from_rgb8(200, 200, 200)),
            ThemeProperty::ColorHovered => Some(Color::from_rgb8(180, 180, 180)),
            ThemeProperty::ColorPressed => Some(Color::from_rgb8(160, 160, 160)),
            ThemeProperty::ColorDisabled => Some(Color::from_rgb8(150, 150, 150)),
            _ => None,
        }
    }

    /// Get the background color of the window.
    fn window_background(&self) -> Color;

    /// Get global style values.
    fn globals(&self) -> &Globals;

    /// Get mutable global style values.
    fn globals_mut(&mut self) -> &mut Globals;

    /// Get the widget ID for this theme (for identification purposes).
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("tactile-theme", "UnknownTheme")
    }

    /// Get a reference to this theme as Any for downcasting.
    fn as_any(&self) -> &dyn std::any::Any;
}

#[cfg(test)]
mod tests {
    use super::daylight::DaylightTheme;
    use super::midnight::MidnightTheme;
    use super::*;

    fn radio_id() -> WidgetId {
        WidgetId::new("tactile-widgets", "RadioButton")
    }

    #[test]
    fn built_in_themes_style_the_controls() {
        let daylight = DaylightTheme::light();
        let midnight = MidnightTheme::new();

        for theme in [&daylight as &dyn Theme, &midnight as &dyn Theme] {
            assert!(theme
                .get_property(radio_id(), &ThemeProperty::ColorOn)
                .is_some());
            assert!(theme
                .get_property(radio_id(), &ThemeProperty::ColorDisabled)
                .is_some());
            assert!(theme
                .get_property(
                    WidgetId::new("tactile-widgets", "StyledButton"),
                    &ThemeProperty::ColorIdle,
                )
                .is_some());
        }
    }

    #[test]
    fn unknown_widgets_fall_through_to_defaults() {
        let theme = DaylightTheme::light();
        let id = WidgetId::new("third-party", "Dial");

        assert!(theme.get_property(id, &ThemeProperty::ColorOn).is_none());
        assert_eq!(
            theme
                .get_default_property(&ThemeProperty::ColorDisabled)
                .map(|c| c.components),
            Some(Color::from_rgb8(150, 150, 150).components),
        );
    }

    #[test]
    fn window_backgrounds_differ_between_built_ins() {
        let daylight = DaylightTheme::light();
        let midnight = MidnightTheme::new();
        assert_ne!(
            daylight.window_background().components,
            midnight.window_background().components,
        );
    }
}
