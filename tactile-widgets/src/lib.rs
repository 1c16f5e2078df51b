#![warn(missing_docs)]

//! Widget library for tactile => See the `tactile` crate.
//!
//! Contains the custom interface controls of the kit.

/// Contains the [styled_button::StyledButton] widget.
pub mod styled_button;

/// Contains the [radio_button::RadioButton] widget.
pub mod radio_button;
