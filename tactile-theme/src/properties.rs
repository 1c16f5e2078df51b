//! Typed property keys for theme lookups.

/// A typed key identifying one themable property of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeProperty {
    // Common properties
    /// The main color of the widget.
    Color,
    /// The main color on inverted surfaces.
    ColorInvert,
    /// The background color.
    ColorBackground,
    /// The border color.
    ColorBorder,
    /// The text color.
    ColorText,

    // Button-specific properties
    /// The color of a button when idle.
    ColorIdle,
    /// The color of a button while pressed.
    ColorPressed,
    /// The color of a button while hovered.
    ColorHovered,
    /// The title color of a button.
    ColorTitle,

    // Toggle-control-specific properties
    /// The color of a toggle control in its "on" state.
    ColorOn,
    /// The color of a toggle control in its "off" state.
    ColorOff,
    /// The color of a control that does not respond to input.
    ColorDisabled,
}
