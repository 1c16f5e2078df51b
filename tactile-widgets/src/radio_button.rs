use nalgebra::Vector2;
use tactile_core::app::context::AppContext;
use tactile_core::app::feedback::{ImpactStyle, PreparedImpact, SharedHapticEngine};
use tactile_core::app::info::AppInfo;
use tactile_core::app::update::Update;
use tactile_core::layout::{Dimension, LayoutNode, LayoutStyle, StyleNode};
use tactile_core::signal::state::StateSignal;
use tactile_core::signal::{MaybeSignal, Signal};
use tactile_core::vg::kurbo::{Affine, Ellipse, Rect, Stroke};
use tactile_core::vg::peniko::{Brush, Color, Fill};
use tactile_core::vg::Scene;
use tactile_core::widget::{Widget, WidgetLayoutExt};
use tactile_core::window::{ElementState, MouseButton, TouchPhase};
use tactile_theme::id::WidgetId;
use tactile_theme::properties::ThemeProperty;
use tactile_theme::theme::Theme;

/// The preferred size reported to the layout container, independent of the
/// drawn circle diameter.
pub const INTRINSIC_SIZE: f64 = 40.0;

/// Default diameter of the drawn circle.
pub const DEFAULT_DIAMETER: f64 = 20.0;

/// Default stroke width of the outline circle.
pub const DEFAULT_BORDER_WIDTH: f64 = 2.0;

/// Margin between the outline circle and the inner dot.
const DOT_INSET: f64 = 4.0;

/// Represents the transient visual state of a radio button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioButtonState {
    /// Radio button is in its default state.
    Idle,
    /// Mouse cursor is hovering over the radio button.
    Hovered,
    /// A pointer or finger is pressed down on the radio button.
    Pressed,
}

/// A toggling radio-button control drawn as a circle with an inner dot.
///
/// Releasing a press on an enabled control flips its on/off state, notifies
/// observers and, when [with_haptic_feedback](RadioButton::with_haptic_feedback)
/// is set, fires the haptic pulse prepared when the press began.
///
/// The render color follows a fixed precedence: disabled controls draw in
/// the disabled color no matter what, off controls in the off color, and on
/// controls in the custom primary color if one is set, otherwise in the
/// theme's "on" color.
///
/// ### Theming
/// Styling the radio button requires the following properties:
/// - `ColorOn` - The color of the control when on.
/// - `ColorOff` - The color of the control when off.
/// - `ColorDisabled` - The color of the control when it ignores input.
pub struct RadioButton {
    /// The off/on state. On by default.
    on: StateSignal<bool>,
    /// Whether the control responds to input.
    enabled: bool,
    /// Override for the "on" render color.
    primary_color: Option<Color>,
    /// Diameter of the drawn circle.
    radio_button_size: f64,
    /// Stroke width of the outline circle.
    border_width: f64,
    /// Fire a haptic pulse when a press completes.
    use_haptic_feedback: bool,
    /// Callback for user-driven toggles.
    on_changed: Option<Box<dyn Fn(bool) + Send + Sync>>,
    /// Current visual state.
    state: RadioButtonState,
    /// Pulse prepared when the current press began.
    prepared_pulse: Option<PreparedImpact>,
    /// The finger the current press belongs to, if it came from a touch.
    pressed_finger: Option<u64>,
    /// Redraw work scheduled by direct property writes.
    pending: Update,
    /// Layout styling.
    layout_style: MaybeSignal<LayoutStyle>,
}

impl RadioButton {
    /// Create a new radio button with its default state: on, enabled, no
    /// custom color, haptics off.
    pub fn new() -> Self {
        Self {
            on: StateSignal::new(true),
            enabled: true,
            primary_color: None,
            radio_button_size: DEFAULT_DIAMETER,
            border_width: DEFAULT_BORDER_WIDTH,
            use_haptic_feedback: false,
            on_changed: None,
            state: RadioButtonState::Idle,
            prepared_pulse: None,
            pressed_finger: None,
            pending: Update::empty(),
            layout_style: MaybeSignal::value(LayoutStyle {
                size: Vector2::new(
                    Dimension::length(INTRINSIC_SIZE as f32),
                    Dimension::length(INTRINSIC_SIZE as f32),
                ),
                ..Default::default()
            }),
        }
    }

    /// Set the initial on/off state.
    pub fn with_on(self, on: bool) -> Self {
        self.on.set(on);
        self
    }

    /// Set whether the control responds to input.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the custom "on" color.
    pub fn with_primary_color(mut self, color: impl Into<Option<Color>>) -> Self {
        self.primary_color = color.into();
        self
    }

    /// Set the diameter of the drawn circle.
    pub fn with_radio_button_size(mut self, diameter: f64) -> Self {
        self.radio_button_size = diameter;
        self
    }

    /// Set the stroke width of the outline circle.
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = width;
        self
    }

    /// Enable or disable the haptic pulse on press completion.
    pub fn with_haptic_feedback(mut self, use_haptic_feedback: bool) -> Self {
        self.use_haptic_feedback = use_haptic_feedback;
        self
    }

    /// Set a callback for user-driven toggles.
    ///
    /// The callback fires exactly once per completed press; direct writes
    /// through the setters never invoke it.
    pub fn with_on_changed<F>(mut self, callback: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_changed = Some(Box::new(callback));
        self
    }

    /// The on/off state as a signal, for hosts that want to observe or
    /// drive it.
    ///
    /// The signal notifies its listeners on every write, user-driven or
    /// not; the value-changed callback is reserved for user interaction.
    pub fn on(&self) -> &StateSignal<bool> {
        &self.on
    }

    /// Whether the control is currently on.
    pub fn is_on(&self) -> bool {
        *self.on.get()
    }

    /// Whether the control responds to input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The current visual state.
    pub fn state(&self) -> RadioButtonState {
        self.state
    }

    /// The preferred size reported to the layout container.
    pub fn intrinsic_size(&self) -> Vector2<f64> {
        Vector2::new(INTRINSIC_SIZE, INTRINSIC_SIZE)
    }

    /// Set the on/off state, scheduling a redraw.
    pub fn set_on(&mut self, on: bool) {
        self.on.set(on);
        self.pending |= Update::DRAW;
    }

    /// Set whether the control responds to input, scheduling a redraw.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.state = RadioButtonState::Idle;
            self.prepared_pulse = None;
            self.pressed_finger = None;
        }
        self.pending |= Update::DRAW;
    }

    /// Set or clear the custom "on" color, scheduling a redraw.
    pub fn set_primary_color(&mut self, color: impl Into<Option<Color>>) {
        self.primary_color = color.into();
        self.pending |= Update::DRAW;
    }

    /// Set the diameter of the drawn circle, scheduling a redraw.
    pub fn set_radio_button_size(&mut self, diameter: f64) {
        self.radio_button_size = diameter;
        self.pending |= Update::DRAW;
    }

    /// Set the stroke width of the outline circle, scheduling a redraw.
    pub fn set_border_width(&mut self, width: f64) {
        self.border_width = width;
        self.pending |= Update::DRAW;
    }

    /// Enable or disable the haptic pulse on press completion.
    pub fn set_use_haptic_feedback(&mut self, use_haptic_feedback: bool) {
        self.use_haptic_feedback = use_haptic_feedback;
        self.pending |= Update::DRAW;
    }

    /// The single color used for both stroke and fill of the current draw
    /// pass.
    pub fn render_color(&self, theme: &dyn Theme) -> Color {
        if !self.enabled {
            theme
                .get_property(self.widget_id(), &ThemeProperty::ColorDisabled)
                .unwrap_or_else(|| Color::from_rgb8(170, 170, 170))
        } else if !self.is_on() {
            theme
                .get_property(self.widget_id(), &ThemeProperty::ColorOff)
                .unwrap_or_else(|| Color::from_rgb8(85, 85, 85))
        } else if let Some(color) = self.primary_color {
            color
        } else {
            theme
                .get_property(self.widget_id(), &ThemeProperty::ColorOn)
                .unwrap_or_else(|| Color::from_rgb8(0, 255, 0))
        }
    }

    /// Compute the outline circle's bounding rect (inset so the stroke stays
    /// inside the control's bounds) and the inner dot's bounding rect.
    fn radio_rects(bounds: Rect, diameter: f64, border_width: f64) -> (Rect, Rect) {
        let dx = (bounds.width() - diameter + border_width) / 2.0;
        let dy = (bounds.height() - diameter + border_width) / 2.0;
        let outer = Rect::new(
            bounds.x0 + dx,
            bounds.y0 + dy,
            bounds.x1 - dx,
            bounds.y1 - dy,
        );
        let inner = outer.inset(-DOT_INSET);
        (outer, inner)
    }

    fn bounds(layout: &LayoutNode) -> Rect {
        Rect::new(
            layout.layout.location.x as f64,
            layout.layout.location.y as f64,
            (layout.layout.location.x + layout.layout.size.width) as f64,
            (layout.layout.location.y + layout.layout.size.height) as f64,
        )
    }

    fn hit_test(layout: &LayoutNode, point: Vector2<f64>) -> bool {
        let rect = Self::bounds(layout);
        point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
    }

    /// A press started on the control: ready the haptic engine without
    /// touching the on/off state.
    fn begin_press(&mut self, haptics: &SharedHapticEngine) {
        self.state = RadioButtonState::Pressed;
        if let Ok(mut engine) = haptics.lock() {
            self.prepared_pulse = Some(engine.prepare(ImpactStyle::Light));
        }
    }

    /// A press completed. Toggles and notifies when it ended on the
    /// control; the prepared pulse is consumed either way.
    fn finish_press(&mut self, released_in_bounds: bool, haptics: &SharedHapticEngine) -> Update {
        let prepared = self.prepared_pulse.take();
        self.pressed_finger = None;

        if !released_in_bounds {
            self.state = RadioButtonState::Idle;
            return Update::DRAW;
        }
        self.state = RadioButtonState::Hovered;

        let on = !self.is_on();
        self.on.set(on);
        log::trace!("radio button toggled to {on}");

        if let Some(callback) = &self.on_changed {
            callback(on);
        }

        if self.use_haptic_feedback {
            if let (Some(pulse), Ok(mut engine)) = (prepared, haptics.lock()) {
                engine.impact(pulse);
            }
        }

        Update::DRAW
    }

    fn abandon_press(&mut self) {
        self.state = RadioButtonState::Idle;
        self.prepared_pulse = None;
        self.pressed_finger = None;
    }
}

impl WidgetLayoutExt for RadioButton {
    fn set_layout_style(&mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>) {
        self.layout_style = layout_style.into();
    }
}

impl Widget for RadioButton {
    fn render(
        &mut self,
        scene: &mut Scene,
        theme: &mut dyn Theme,
        layout_node: &LayoutNode,
        _: &mut AppInfo,
        _: AppContext,
    ) {
        let color = self.render_color(theme);
        let (outer, inner) =
            Self::radio_rects(Self::bounds(layout_node), self.radio_button_size, self.border_width);

        scene.stroke(
            &Stroke::new(self.border_width),
            Affine::default(),
            &Brush::Solid(color),
            None,
            &Ellipse::from_rect(outer),
        );

        if self.is_on() {
            scene.fill(
                Fill::NonZero,
                Affine::default(),
                &Brush::Solid(color),
                None,
                &Ellipse::from_rect(inner),
            );
        }
    }

    fn layout_style(&self) -> StyleNode {
        StyleNode {
            style: self.layout_style.get().clone(),
            children: Vec::new(),
        }
    }

    fn update(&mut self, layout: &LayoutNode, _: AppContext, info: &mut AppInfo) -> Update {
        let mut update = std::mem::take(&mut self.pending);
        let old_state = self.state;

        // Hover tracking follows the mouse; touches have no hover phase.
        if let Some(cursor) = info.cursor_pos {
            if self.enabled && self.state != RadioButtonState::Pressed {
                self.state = if Self::hit_test(layout, cursor) {
                    RadioButtonState::Hovered
                } else {
                    RadioButtonState::Idle
                };
            }
        } else if self.state == RadioButtonState::Hovered {
            self.state = RadioButtonState::Idle;
        }

        if self.enabled {
            let haptics = info.haptics.clone();

            for (button, element_state) in &info.buttons {
                if *button != MouseButton::Left {
                    continue;
                }
                match element_state {
                    ElementState::Pressed => {
                        let in_bounds = info
                            .cursor_pos
                            .map(|cursor| Self::hit_test(layout, cursor))
                            .unwrap_or(false);
                        if in_bounds {
                            self.begin_press(&haptics);
                        }
                    },
                    ElementState::Released => {
                        if self.state == RadioButtonState::Pressed && self.pressed_finger.is_none()
                        {
                            let in_bounds = info
                                .cursor_pos
                                .map(|cursor| Self::hit_test(layout, cursor))
                                .unwrap_or(false);
                            update |= self.finish_press(in_bounds, &haptics);
                        }
                    },
                }
            }

            for touch in &info.touches {
                match touch.phase {
                    TouchPhase::Started => {
                        if Self::hit_test(layout, touch.location) {
                            self.pressed_finger = Some(touch.finger);
                            self.begin_press(&haptics);
                        }
                    },
                    TouchPhase::Ended => {
                        if self.pressed_finger == Some(touch.finger) {
                            let in_bounds = Self::hit_test(layout, touch.location);
                            update |= self.finish_press(in_bounds, &haptics);
                            self.state = RadioButtonState::Idle;
                        }
                    },
                    TouchPhase::Cancelled => {
                        if self.pressed_finger == Some(touch.finger) {
                            self.abandon_press();
                        }
                    },
                    TouchPhase::Moved => {},
                }
            }
        }

        if old_state != self.state {
            update |= Update::DRAW;
        }

        update
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("tactile-widgets", "RadioButton")
    }
}

impl Default for RadioButton {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tactile_core::app::feedback::{shared_engine, HapticDriver};
    use tactile_core::app::info::TouchEvent;
    use tactile_core::signal::{Listener, Ref};
    use tactile_theme::globals::Globals;
    use tactile_theme::theme::daylight::DaylightTheme;

    /// Theme with no opinions, so the control's fallback colors apply.
    struct PlainTheme(Globals);

    impl Theme for PlainTheme {
        fn get_property(&self, _: WidgetId, _: &ThemeProperty) -> Option<Color> {
            None
        }

        fn window_background(&self) -> Color {
            Color::from_rgb8(255, 255, 255)
        }

        fn globals(&self) -> &Globals {
            &self.0
        }

        fn globals_mut(&mut self) -> &mut Globals {
            &mut self.0
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    fn plain_theme() -> PlainTheme {
        PlainTheme(Globals::default())
    }

    #[derive(Default)]
    struct CountingDriver {
        impacts: Arc<Mutex<Vec<ImpactStyle>>>,
    }

    impl HapticDriver for CountingDriver {
        fn prepare(&mut self, _: ImpactStyle) {}

        fn impact(&mut self, style: ImpactStyle) {
            self.impacts.lock().unwrap().push(style);
        }
    }

    fn node() -> LayoutNode {
        LayoutNode::leaf(0.0, 0.0, 40.0, 40.0)
    }

    fn center() -> Vector2<f64> {
        Vector2::new(20.0, 20.0)
    }

    fn click(radio: &mut RadioButton, layout: &LayoutNode, info: &mut AppInfo) -> Update {
        info.cursor_pos = Some(center());

        info.buttons = vec![(MouseButton::Left, ElementState::Pressed)];
        let pressed = radio.update(layout, AppContext::default(), info);

        info.buttons = vec![(MouseButton::Left, ElementState::Released)];
        let released = radio.update(layout, AppContext::default(), info);

        info.reset();
        pressed | released
    }

    fn tap(radio: &mut RadioButton, layout: &LayoutNode, info: &mut AppInfo) -> Update {
        info.touches = vec![TouchEvent {
            finger: 0,
            phase: TouchPhase::Started,
            location: center(),
        }];
        let started = radio.update(layout, AppContext::default(), info);

        info.touches = vec![TouchEvent {
            finger: 0,
            phase: TouchPhase::Ended,
            location: center(),
        }];
        let ended = radio.update(layout, AppContext::default(), info);

        info.reset();
        started | ended
    }

    #[test]
    fn both_construction_paths_share_defaults() {
        for radio in [RadioButton::new(), RadioButton::default()] {
            assert!(radio.is_on());
            assert!(radio.is_enabled());
            assert_eq!(radio.state(), RadioButtonState::Idle);
        }
    }

    #[test]
    fn render_color_precedence() {
        let theme = plain_theme();
        let custom = Color::from_rgb8(200, 0, 200);

        let mut radio = RadioButton::new().with_primary_color(custom);

        // Disabled wins over everything.
        radio.set_enabled(false);
        assert_eq!(
            radio.render_color(&theme).components,
            Color::from_rgb8(170, 170, 170).components,
        );

        // Off wins over the custom color.
        radio.set_enabled(true);
        radio.set_on(false);
        assert_eq!(
            radio.render_color(&theme).components,
            Color::from_rgb8(85, 85, 85).components,
        );

        // On with a custom color uses it.
        radio.set_on(true);
        assert_eq!(radio.render_color(&theme).components, custom.components);

        // Clearing the custom color reverts to the default "on" color.
        radio.set_primary_color(None);
        assert_eq!(
            radio.render_color(&theme).components,
            Color::from_rgb8(0, 255, 0).components,
        );
    }

    #[test]
    fn themes_can_restyle_the_on_color() {
        let theme = DaylightTheme::light();
        let radio = RadioButton::new();
        assert_eq!(
            radio.render_color(&theme).components,
            Color::from_rgb8(52, 199, 89).components,
        );

        // The per-widget override still outranks the theme.
        let custom = Color::from_rgb8(1, 2, 3);
        let radio = radio.with_primary_color(custom);
        assert_eq!(radio.render_color(&theme).components, custom.components);
    }

    #[test]
    fn click_toggles_and_notifies_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let observed = calls.clone();
        let mut radio = RadioButton::new().with_on_changed(move |on| {
            assert!(!on);
            observed.fetch_add(1, Ordering::SeqCst);
        });

        let layout = node();
        let mut info = AppInfo::default();
        let update = click(&mut radio, &layout, &mut info);

        assert!(!radio.is_on());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(update.contains(Update::DRAW));

        // A second click flips it back.
        radio = radio.with_on_changed({
            let observed = calls.clone();
            move |_| {
                observed.fetch_add(1, Ordering::SeqCst);
            }
        });
        click(&mut radio, &layout, &mut info);
        assert!(radio.is_on());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn disabled_control_ignores_interaction() {
        let calls = Arc::new(AtomicUsize::new(0));
        let observed = calls.clone();
        let mut radio = RadioButton::new().with_enabled(false).with_on_changed(move |_| {
            observed.fetch_add(1, Ordering::SeqCst);
        });

        let layout = node();
        let mut info = AppInfo::default();
        click(&mut radio, &layout, &mut info);
        tap(&mut radio, &layout, &mut info);

        assert!(radio.is_on());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn tap_fires_one_haptic_pulse_when_enabled() {
        let impacts = Arc::new(Mutex::new(Vec::new()));
        let driver = CountingDriver {
            impacts: impacts.clone(),
        };

        let mut radio = RadioButton::new().with_haptic_feedback(true);
        let layout = node();
        let mut info = AppInfo {
            haptics: shared_engine(driver),
            ..Default::default()
        };

        tap(&mut radio, &layout, &mut info);

        assert!(!radio.is_on());
        assert_eq!(*impacts.lock().unwrap(), vec![ImpactStyle::Light]);
    }

    #[test]
    fn prepared_pulse_is_discarded_without_opt_in() {
        let impacts = Arc::new(Mutex::new(Vec::new()));
        let driver = CountingDriver {
            impacts: impacts.clone(),
        };

        let mut radio = RadioButton::new();
        let layout = node();
        let mut info = AppInfo {
            haptics: shared_engine(driver),
            ..Default::default()
        };

        tap(&mut radio, &layout, &mut info);

        assert!(!radio.is_on());
        assert!(impacts.lock().unwrap().is_empty());
    }

    #[test]
    fn release_outside_bounds_does_not_toggle() {
        let mut radio = RadioButton::new();
        let layout = node();
        let mut info = AppInfo::default();

        info.touches = vec![TouchEvent {
            finger: 3,
            phase: TouchPhase::Started,
            location: center(),
        }];
        radio.update(&layout, AppContext::default(), &mut info);

        info.touches = vec![TouchEvent {
            finger: 3,
            phase: TouchPhase::Ended,
            location: Vector2::new(200.0, 200.0),
        }];
        radio.update(&layout, AppContext::default(), &mut info);

        assert!(radio.is_on());
        assert_eq!(radio.state(), RadioButtonState::Idle);
    }

    #[test]
    fn direct_writes_schedule_redraw_without_notifying() {
        let calls = Arc::new(AtomicUsize::new(0));
        let observed = calls.clone();
        let mut radio = RadioButton::new().with_on_changed(move |_| {
            observed.fetch_add(1, Ordering::SeqCst);
        });

        let redraws = Rc::new(std::cell::Cell::new(0));
        let seen = redraws.clone();
        let listener: Listener<bool> = Rc::new(move |_: Ref<'_, bool>| seen.set(seen.get() + 1));
        radio.on().listen(listener);

        radio.set_on(false);
        radio.set_primary_color(Color::from_rgb8(9, 9, 9));

        // The signal observed the write, the value-changed callback did not.
        assert_eq!(redraws.get(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        // The scheduled redraw surfaces on the next update pass.
        let layout = node();
        let mut info = AppInfo::default();
        let update = radio.update(&layout, AppContext::default(), &mut info);
        assert!(update.contains(Update::DRAW));
    }

    #[test]
    fn preferred_size_is_fixed() {
        let mut radio = RadioButton::new();
        radio.set_radio_button_size(100.0);
        radio.set_border_width(12.0);

        assert_eq!(radio.intrinsic_size(), Vector2::new(40.0, 40.0));
        let style = radio.layout_style();
        assert_eq!(style.style.size.x, Dimension::length(40.0));
        assert_eq!(style.style.size.y, Dimension::length(40.0));
    }

    #[test]
    fn circle_geometry_matches_the_inset_rule() {
        let bounds = Rect::new(0.0, 0.0, 40.0, 40.0);
        let (outer, inner) = RadioButton::radio_rects(bounds, 20.0, 2.0);

        // (40 - 20 + 2) / 2 = 11 units of inset per side.
        assert_eq!(outer, Rect::new(11.0, 11.0, 29.0, 29.0));
        // The dot sits a further 4 units in.
        assert_eq!(inner, Rect::new(15.0, 15.0, 25.0, 25.0));
    }
}
