use nalgebra::Vector2;
use winit::event::{ElementState, MouseButton, TouchPhase};
use winit::keyboard::ModifiersState;

use crate::app::feedback::{HapticEngine, SharedHapticEngine};
use std::sync::{Arc, Mutex};

/// A single touch contact reported by the host for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// Stable identifier of the finger across a gesture.
    pub finger: u64,
    /// The phase of the contact.
    pub phase: TouchPhase,
    /// The contact location in window coordinates.
    pub location: Vector2<f64>,
}

/// The application information container.
///
/// Hosts fill this in from their event loop each frame; widgets consume it
/// in [Widget::update](crate::widget::Widget::update). Pointer-button and
/// touch events are both carried so the same control works with a mouse and
/// on a touch screen.
pub struct AppInfo {
    /// The position of the cursor. If [None], the cursor left the window.
    pub cursor_pos: Option<Vector2<f64>>,
    /// The fired mouse button events.
    pub buttons: Vec<(MouseButton, ElementState)>,
    /// The fired touch events.
    pub touches: Vec<TouchEvent>,
    /// Current modifier keys state.
    pub modifiers: ModifiersState,
    /// The size of the window.
    pub size: Vector2<f64>,
    /// The haptic feedback engine of the application.
    pub haptics: SharedHapticEngine,
}

impl AppInfo {
    /// Reset the application information for a new frame.
    pub fn reset(&mut self) {
        self.buttons.clear();
        self.touches.clear();
    }
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            cursor_pos: None,
            buttons: Vec::with_capacity(2),
            touches: Vec::with_capacity(2),
            modifiers: ModifiersState::default(),
            size: Vector2::new(0.0, 0.0),
            haptics: Arc::new(Mutex::new(HapticEngine::noop())),
        }
    }
}
