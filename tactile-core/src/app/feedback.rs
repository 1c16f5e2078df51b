//! Haptic feedback with prepare/impact semantics.
//!
//! A control that wants to pulse on interaction prepares the engine when the
//! interaction starts and fires the prepared pulse when it completes. The
//! [PreparedImpact] handle is consumed by [HapticEngine::impact], so a
//! prepared pulse fires at most once; dropping the handle discards it.

use std::sync::{Arc, Mutex};

/// The strength of a haptic pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    /// A subtle tap, used for small state changes like toggles.
    Light,
    /// A medium tap.
    Medium,
    /// A pronounced tap.
    Heavy,
}

/// Platform integration point for haptic hardware.
///
/// Hosts with a vibration engine install a driver when building the engine;
/// everything else runs on [NullHapticDriver].
pub trait HapticDriver: Send {
    /// Wake the hardware so a following impact fires with minimal latency.
    fn prepare(&mut self, style: ImpactStyle);

    /// Fire a single pulse of the given strength.
    fn impact(&mut self, style: ImpactStyle);
}

/// Driver used when the host platform has no haptic hardware.
#[derive(Debug, Default)]
pub struct NullHapticDriver;

impl HapticDriver for NullHapticDriver {
    fn prepare(&mut self, style: ImpactStyle) {
        log::trace!("haptics unavailable, prepare({style:?}) ignored");
    }

    fn impact(&mut self, style: ImpactStyle) {
        log::trace!("haptics unavailable, impact({style:?}) ignored");
    }
}

/// A prepared haptic pulse.
///
/// Obtained from [HapticEngine::prepare] and consumed by
/// [HapticEngine::impact]. Dropping the handle discards the preparation
/// without firing.
#[derive(Debug)]
#[must_use = "a prepared pulse does nothing unless fired or dropped on purpose"]
pub struct PreparedImpact {
    style: ImpactStyle,
}

impl PreparedImpact {
    /// The strength this pulse was prepared with.
    pub fn style(&self) -> ImpactStyle {
        self.style
    }
}

/// The haptic feedback engine of an application.
pub struct HapticEngine {
    driver: Box<dyn HapticDriver>,
}

impl HapticEngine {
    /// Create an engine backed by the given driver.
    pub fn new(driver: impl HapticDriver + 'static) -> Self {
        Self {
            driver: Box::new(driver),
        }
    }

    /// Create an engine that discards all pulses.
    pub fn noop() -> Self {
        Self::new(NullHapticDriver)
    }

    /// Ready the hardware for an upcoming pulse and hand out its handle.
    pub fn prepare(&mut self, style: ImpactStyle) -> PreparedImpact {
        self.driver.prepare(style);
        PreparedImpact { style }
    }

    /// Fire a prepared pulse, consuming its handle.
    pub fn impact(&mut self, prepared: PreparedImpact) {
        log::debug!("haptic impact: {:?}", prepared.style);
        self.driver.impact(prepared.style);
    }
}

impl Default for HapticEngine {
    fn default() -> Self {
        Self::noop()
    }
}

/// A shared handle to the application's [HapticEngine].
pub type SharedHapticEngine = Arc<Mutex<HapticEngine>>;

/// Create a shared engine backed by the given driver.
pub fn shared_engine(driver: impl HapticDriver + 'static) -> SharedHapticEngine {
    Arc::new(Mutex::new(HapticEngine::new(driver)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingDriver {
        prepares: Arc<Mutex<Vec<ImpactStyle>>>,
        impacts: Arc<Mutex<Vec<ImpactStyle>>>,
    }

    impl HapticDriver for CountingDriver {
        fn prepare(&mut self, style: ImpactStyle) {
            self.prepares.lock().unwrap().push(style);
        }

        fn impact(&mut self, style: ImpactStyle) {
            self.impacts.lock().unwrap().push(style);
        }
    }

    #[test]
    fn prepared_pulse_fires_once() {
        let impacts = Arc::new(Mutex::new(Vec::new()));
        let driver = CountingDriver {
            prepares: Arc::new(Mutex::new(Vec::new())),
            impacts: impacts.clone(),
        };

        let mut engine = HapticEngine::new(driver);
        let prepared = engine.prepare(ImpactStyle::Light);
        engine.impact(prepared);

        assert_eq!(*impacts.lock().unwrap(), vec![ImpactStyle::Light]);
        // `prepared` has been moved; a second impact needs a new preparation.
    }

    #[test]
    fn dropping_prepared_pulse_discards_it() {
        let impacts = Arc::new(Mutex::new(Vec::new()));
        let prepares = Arc::new(Mutex::new(Vec::new()));
        let driver = CountingDriver {
            prepares: prepares.clone(),
            impacts: impacts.clone(),
        };

        let mut engine = HapticEngine::new(driver);
        drop(engine.prepare(ImpactStyle::Medium));

        assert_eq!(*prepares.lock().unwrap(), vec![ImpactStyle::Medium]);
        assert!(impacts.lock().unwrap().is_empty());
    }
}
