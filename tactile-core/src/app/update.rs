use bitflags::bitflags;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

bitflags! {
    /// Bitflags describing what the application should re-run after a widget
    /// reported a change.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Update: u8 {
        /// Re-evaluate the widget tree.
        const EVAL = 1 << 0;
        /// Redraw the scene.
        const DRAW = 1 << 1;
        /// Recompute the layout tree.
        const LAYOUT = 1 << 2;
        /// Force a full evaluation, layout and draw pass.
        const FORCE = 1 << 3;
    }
}

/// A cloneable handle to the pending [Update] flags of a running application.
///
/// Widgets return [Update] values from their `update` method; hosts and
/// signal listeners can additionally push flags through this manager from
/// outside the widget tree.
#[derive(Debug, Clone, Default)]
pub struct UpdateManager {
    flags: Arc<AtomicU8>,
}

impl UpdateManager {
    /// Create a new manager with no pending flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the given flags into the pending set.
    pub fn insert(&self, update: Update) {
        self.flags.fetch_or(update.bits(), Ordering::AcqRel);
    }

    /// Read the pending flags without clearing them.
    pub fn get(&self) -> Update {
        Update::from_bits_truncate(self.flags.load(Ordering::Acquire))
    }

    /// Drain the pending flags, returning what was set.
    pub fn take(&self) -> Update {
        Update::from_bits_truncate(self.flags.swap(0, Ordering::AcqRel))
    }

    /// Whether no flags are pending.
    pub fn is_empty(&self) -> bool {
        self.flags.load(Ordering::Acquire) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manager_accumulates_and_drains() {
        let manager = UpdateManager::new();
        assert!(manager.is_empty());

        manager.insert(Update::DRAW);
        manager.insert(Update::LAYOUT);
        assert_eq!(manager.get(), Update::DRAW | Update::LAYOUT);

        let cloned = manager.clone();
        assert_eq!(cloned.take(), Update::DRAW | Update::LAYOUT);
        assert!(manager.is_empty());
    }
}
