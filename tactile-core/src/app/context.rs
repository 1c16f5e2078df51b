use crate::app::update::{Update, UpdateManager};

/// The application context for managing the application lifecycle.
///
/// Cloneable handle passed to widgets during `update` and `render`. It
/// carries the [UpdateManager] so code outside the widget's own update pass
/// (signal listeners, host callbacks) can schedule work for the next frame.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    update: UpdateManager,
}

impl AppContext {
    /// Create a new application context using the given [UpdateManager].
    pub fn new(update: UpdateManager) -> Self {
        Self { update }
    }

    /// Get the [UpdateManager] of the application.
    pub fn update(&self) -> UpdateManager {
        self.update.clone()
    }

    /// Schedule a redraw for the next frame.
    pub fn request_redraw(&self) {
        self.update.insert(Update::DRAW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_redraw_sets_draw_flag() {
        let context = AppContext::default();
        context.request_redraw();
        assert_eq!(context.update().take(), Update::DRAW);
    }
}
