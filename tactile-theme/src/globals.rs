//! Global theme values shared by all widgets.

use vello::peniko::Color;

/// Theme-wide settings that affect every widget.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
pub struct Globals {
    /// Render text in the inverted (light-on-dark) color.
    ///
    /// Set by container widgets around their children when the child sits on
    /// a filled surface, e.g. a label inside a solid button.
    pub invert_text_color: bool,

    /// Exact text color the current container asks its children to use,
    /// taking precedence over [invert_text_color](Globals::invert_text_color).
    ///
    /// Transient render-pass state, so it is not part of a serialized theme.
    #[serde(skip)]
    pub text_color_override: Option<Color>,
}
