#![warn(missing_docs)]

//! Core library for tactile => See the `tactile` crate.
//!
//! Contains the widget capability surface the controls are written against:
//! input state, redraw scheduling, signals, layout and drawing types.

pub use vello as vg;

/// Contains useful types for interacting with winit.
pub mod window {
    pub use winit::event::*;
    pub use winit::keyboard::*;
}

/// Contains app-facing functionality: input state, redraw flags, haptics.
pub mod app;

/// Contains useful types and functions for layout interaction.
pub mod layout;

/// Contains the signal system for reactive properties.
pub mod signal;

/// Contains the [reference::Ref] for representing a reference to a value.
pub mod reference;

/// Contains the core widget functionalities.
pub mod widget;
