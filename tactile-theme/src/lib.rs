#![warn(missing_docs)]

//! Theming for the tactile control kit => See the `tactile` crate.
//!
//! Provides widget identification, the [Theme](theme::Theme) trait, the
//! built-in light and dark themes and the theme configuration loader.

/// Contains the [WidgetId](id::WidgetId) identifier.
pub mod id;

/// Contains global theme values shared by all widgets.
pub mod globals;

/// Contains the typed theme property keys.
pub mod properties;

/// Contains the [Theme](theme::Theme) trait and the built-in themes.
pub mod theme;

/// Contains the theme configuration loader.
pub mod config;

/// Contains the theming error types.
pub mod error;

/// Contains serde helpers for hex-encoded colors.
pub mod serde_color;
