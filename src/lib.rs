#![warn(missing_docs)]

//! Touch-first custom interface controls for Rust UIs.

pub use nalgebra as math;
pub use vello::peniko as color;

pub use tactile_core as core;
pub use tactile_theme as theme;
pub use tactile_widgets as widgets;

/// A "prelude" for users of the tactile control kit.
///
/// Importing this module brings into scope the most common types
/// needed to embed the controls in a host application.
///
/// ```rust
/// use tactile::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::app::context::AppContext;
    pub use crate::core::app::feedback::{
        HapticDriver, HapticEngine, ImpactStyle, SharedHapticEngine,
    };
    pub use crate::core::app::info::{AppInfo, TouchEvent};
    pub use crate::core::app::update::{Update, UpdateManager};
    pub use crate::core::layout::*;
    pub use crate::core::reference::Ref;
    pub use crate::core::signal::{fixed::FixedSignal, state::StateSignal, *};
    pub use crate::core::widget::{Widget, WidgetChildExt, WidgetLayoutExt};

    // Theme
    pub use crate::theme::id::WidgetId;
    pub use crate::theme::theme::{daylight::DaylightTheme, midnight::MidnightTheme, Theme};

    // Math
    pub use nalgebra::Vector2;

    // Color
    pub use crate::core::vg::*;

    // Widgets
    pub use crate::widgets::radio_button::{RadioButton, RadioButtonState};
    pub use crate::widgets::styled_button::{StyledButton, StyledButtonState};
}
