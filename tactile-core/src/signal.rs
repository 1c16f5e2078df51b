//! Reactive properties for widgets.
//!
//! A [Signal] holds a value, hands out [Ref]s to it and notifies listeners
//! when it changes. Widget properties that hosts may want to drive or
//! observe are declared as [MaybeSignal], which accepts either a plain value
//! or a signal.

pub use crate::reference::Ref;
use std::rc::Rc;

/// Contains the [StateSignal](state::StateSignal).
pub mod state;

/// Contains the [FixedSignal](fixed::FixedSignal).
pub mod fixed;

/// A listener invoked with the new value whenever a signal changes.
pub type Listener<T> = Rc<dyn Fn(Ref<'_, T>)>;

/// A boxed signal.
pub type BoxedSignal<T> = Box<dyn Signal<T>>;

/// A value that can be read, written and observed.
pub trait Signal<T: 'static> {
    /// Get the current value.
    fn get(&self) -> Ref<'_, T>;

    /// Replace the value and notify listeners.
    fn set(&self, value: T);

    /// Register a listener invoked on every change.
    fn listen(&self, listener: Listener<T>);

    /// Notify all listeners with the current value.
    fn notify(&self);

    /// Clone the signal into a box.
    fn dyn_clone(&self) -> BoxedSignal<T>;
}

/// A widget property that is either a plain value or a signal.
///
/// Plain values are cheap and sufficient for properties set once at
/// construction; signals allow the host to mutate and observe the property
/// while the widget is live.
pub enum MaybeSignal<T: 'static> {
    /// A plain, non-reactive value.
    Value(T),
    /// A reactive signal.
    Signal(BoxedSignal<T>),
}

impl<T: 'static> MaybeSignal<T> {
    /// Wrap a plain value.
    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Wrap a signal.
    pub fn signal(signal: impl Signal<T> + 'static) -> Self {
        Self::Signal(Box::new(signal))
    }

    /// Get the current value.
    pub fn get(&self) -> Ref<'_, T> {
        match self {
            Self::Value(value) => Ref::Borrowed(value),
            Self::Signal(signal) => signal.get(),
        }
    }

    /// Get the underlying signal, if this property is reactive.
    pub fn as_signal(&self) -> Option<&BoxedSignal<T>> {
        match self {
            Self::Value(_) => None,
            Self::Signal(signal) => Some(signal),
        }
    }
}

impl<T: Clone + 'static> Clone for MaybeSignal<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value.clone()),
            Self::Signal(signal) => Self::Signal(signal.dyn_clone()),
        }
    }
}

impl<T: 'static> From<T> for MaybeSignal<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: 'static> From<state::StateSignal<T>> for MaybeSignal<T> {
    fn from(signal: state::StateSignal<T>) -> Self {
        Self::signal(signal)
    }
}

impl<T: Send + Sync + 'static> From<fixed::FixedSignal<T>> for MaybeSignal<T> {
    fn from(signal: fixed::FixedSignal<T>) -> Self {
        Self::signal(signal)
    }
}

#[cfg(test)]
mod tests {
    use super::state::StateSignal;
    use super::*;
    use std::cell::Cell;

    #[test]
    fn maybe_signal_from_value_is_not_reactive() {
        let style: MaybeSignal<u32> = 7.into();
        assert_eq!(*style.get(), 7);
        assert!(style.as_signal().is_none());
    }

    #[test]
    fn maybe_signal_from_signal_shares_state() {
        let state = StateSignal::new(false);
        let property: MaybeSignal<bool> = state.clone().into();

        state.set(true);
        assert!(*property.get());

        property.as_signal().unwrap().set(false);
        assert!(!*state.get());
    }

    #[test]
    fn listeners_run_on_set() {
        let hits = Rc::new(Cell::new(0));
        let state = StateSignal::new(1);

        let observed = hits.clone();
        state.listen(Rc::new(move |value: Ref<'_, i32>| {
            assert_eq!(*value, 2);
            observed.set(observed.get() + 1);
        }));

        state.set(2);
        assert_eq!(hits.get(), 1);
    }
}
