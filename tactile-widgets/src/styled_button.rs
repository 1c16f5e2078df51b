use tactile_core::app::context::AppContext;
use tactile_core::app::info::AppInfo;
use tactile_core::app::update::Update;
use tactile_core::layout;
use tactile_core::layout::{LayoutNode, LayoutStyle, LengthPercentage, StyleNode};
use tactile_core::signal::MaybeSignal;
use tactile_core::vg::kurbo::{Affine, Rect, RoundedRect, RoundedRectRadii, Vec2};
use tactile_core::vg::peniko::{Brush, Color, Fill};
use tactile_core::vg::Scene;
use tactile_core::widget::{BoxedWidget, Widget, WidgetChildExt, WidgetLayoutExt};
use tactile_core::window::{ElementState, MouseButton, TouchPhase};
use tactile_theme::id::WidgetId;
use tactile_theme::theme::Theme;

/// Corner radius applied by the style preset.
pub const PRESET_CORNER_RADIUS: f64 = 2.0;

/// Background fill applied by the style preset.
pub const PRESET_BACKGROUND: Color = Color::from_rgb8(0, 0, 255);

/// Label color applied by the style preset.
pub const PRESET_TITLE_COLOR: Color = Color::WHITE;

/// The internal state of the button.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum StyledButtonState {
    /// The button is idling (inactive).
    Idle,
    /// The cursor is hovering over the button.
    Hovered,
    /// A pointer or finger is pressed down on the button.
    Pressed,
    /// The press was just released on the button. This is when the
    /// `on_pressed` update fires.
    Released,
}

/// A pressable area with a child label widget and a fixed visual style.
///
/// Construction unconditionally applies the preset (rounded corners, solid
/// blue background, light label color) and
/// [apply_style](StyledButton::apply_style) re-applies it over any later
/// changes to the style fields. During the child render pass the label color
/// is published through the theme globals, so theme-driven labels come out
/// in the preset color.
pub struct StyledButton {
    child: BoxedWidget,
    /// Corner radius of the background. Overwritten by `apply_style`.
    pub corner_radius: f64,
    /// Background fill. Overwritten by `apply_style`.
    pub background: Color,
    /// Label color for the child widget. Overwritten by `apply_style`.
    pub title_color: Color,
    state: StyledButtonState,
    on_pressed: MaybeSignal<Update>,
    pressed_finger: Option<u64>,
    layout_style: MaybeSignal<LayoutStyle>,
}

impl StyledButton {
    /// Create a new button around the given label widget, with the style
    /// preset applied.
    pub fn new(child: impl Widget + 'static) -> Self {
        let mut button = Self {
            child: Box::new(child),
            corner_radius: 0.0,
            background: Color::TRANSPARENT,
            title_color: Color::TRANSPARENT,
            state: StyledButtonState::Idle,
            on_pressed: MaybeSignal::value(Update::empty()),
            pressed_finger: None,
            layout_style: LayoutStyle {
                padding: layout::Rect::<LengthPercentage> {
                    left: LengthPercentage::length(12.0),
                    right: LengthPercentage::length(12.0),
                    top: LengthPercentage::length(6.0),
                    bottom: LengthPercentage::length(6.0),
                },
                ..Default::default()
            }
            .into(),
        };
        button.apply_style();
        button
    }

    /// Customize the button.
    ///
    /// Overwrites the style fields with the preset. Safe to call any number
    /// of times; construction calls it once.
    pub fn apply_style(&mut self) {
        self.corner_radius = PRESET_CORNER_RADIUS;
        self.background = PRESET_BACKGROUND;
        self.title_color = PRESET_TITLE_COLOR;
    }

    /// Sets the update to report when the button is pressed.
    pub fn with_on_pressed(mut self, on_pressed: impl Into<MaybeSignal<Update>>) -> Self {
        self.on_pressed = on_pressed.into();
        self
    }

    /// The current interaction state.
    pub fn state(&self) -> StyledButtonState {
        self.state
    }

    fn bounds(layout: &LayoutNode) -> Rect {
        Rect::new(
            layout.layout.location.x as f64,
            layout.layout.location.y as f64,
            (layout.layout.location.x + layout.layout.size.width) as f64,
            (layout.layout.location.y + layout.layout.size.height) as f64,
        )
    }

    fn hit_test(layout: &LayoutNode, x: f64, y: f64) -> bool {
        let rect = Self::bounds(layout);
        x >= rect.x0 && x <= rect.x1 && y >= rect.y0 && y <= rect.y1
    }
}

impl WidgetChildExt for StyledButton {
    fn set_child(&mut self, child: impl Widget + 'static) {
        self.child = Box::new(child);
    }
}

impl WidgetLayoutExt for StyledButton {
    fn set_layout_style(&mut self, layout_style: impl Into<MaybeSignal<LayoutStyle>>) {
        self.layout_style = layout_style.into();
    }
}

impl Widget for StyledButton {
    fn render(
        &mut self,
        scene: &mut Scene,
        theme: &mut dyn Theme,
        layout_node: &LayoutNode,
        info: &mut AppInfo,
        context: AppContext,
    ) {
        let rounded = RoundedRect::from_rect(
            Self::bounds(layout_node),
            RoundedRectRadii::from_single_radius(self.corner_radius),
        );

        scene.fill(
            Fill::NonZero,
            Affine::default(),
            &Brush::Solid(self.background),
            None,
            &rounded,
        );

        // Render the label on the filled surface in the preset color.
        if let Some(child_layout) = layout_node.children.first() {
            let previous_override = theme.globals().text_color_override;
            theme.globals_mut().invert_text_color = true;
            theme.globals_mut().text_color_override = Some(self.title_color);

            let mut child_scene = Scene::new();
            self.child
                .render(&mut child_scene, theme, child_layout, info, context);

            scene.append(
                &child_scene,
                Some(Affine::translate(Vec2::new(
                    layout_node.layout.location.x as f64,
                    layout_node.layout.location.y as f64,
                ))),
            );

            theme.globals_mut().invert_text_color = false;
            theme.globals_mut().text_color_override = previous_override;
        }
    }

    fn layout_style(&self) -> StyleNode {
        StyleNode {
            style: self.layout_style.get().clone(),
            children: vec![self.child.layout_style()],
        }
    }

    fn update(&mut self, layout: &LayoutNode, context: AppContext, info: &mut AppInfo) -> Update {
        let mut update = Update::empty();
        let old_state = self.state;

        // Hover follows the mouse; a held press sticks until release.
        if let Some(cursor) = info.cursor_pos {
            if Self::hit_test(layout, cursor.x, cursor.y) {
                if self.state != StyledButtonState::Pressed {
                    self.state = StyledButtonState::Hovered;
                }

                for (button, element_state) in &info.buttons {
                    if *button != MouseButton::Left {
                        continue;
                    }
                    match element_state {
                        ElementState::Pressed => {
                            self.state = StyledButtonState::Pressed;
                        },
                        ElementState::Released => {
                            if self.state == StyledButtonState::Pressed
                                && self.pressed_finger.is_none()
                            {
                                self.state = StyledButtonState::Released;
                                update |= *self.on_pressed.get();
                            }
                        },
                    }
                }
            } else if self.state != StyledButtonState::Pressed {
                self.state = StyledButtonState::Idle;
            }
        } else if self.pressed_finger.is_none() {
            self.state = StyledButtonState::Idle;
        }

        for touch in &info.touches {
            match touch.phase {
                TouchPhase::Started => {
                    if Self::hit_test(layout, touch.location.x, touch.location.y) {
                        self.pressed_finger = Some(touch.finger);
                        self.state = StyledButtonState::Pressed;
                    }
                },
                TouchPhase::Ended => {
                    if self.pressed_finger == Some(touch.finger) {
                        self.pressed_finger = None;
                        if Self::hit_test(layout, touch.location.x, touch.location.y) {
                            self.state = StyledButtonState::Released;
                            update |= *self.on_pressed.get();
                        } else {
                            self.state = StyledButtonState::Idle;
                        }
                    }
                },
                TouchPhase::Cancelled => {
                    if self.pressed_finger == Some(touch.finger) {
                        self.pressed_finger = None;
                        self.state = StyledButtonState::Idle;
                    }
                },
                TouchPhase::Moved => {},
            }
        }

        update |= self.child.update(
            layout.children.first().unwrap_or(layout),
            context,
            info,
        );

        if old_state != self.state {
            update |= Update::DRAW;
        }

        update
    }

    fn widget_id(&self) -> WidgetId {
        WidgetId::new("tactile-widgets", "StyledButton")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactile_core::app::info::TouchEvent;
    use nalgebra::Vector2;

    /// Minimal stand-in for a host label widget.
    struct NullLabel;

    impl Widget for NullLabel {
        fn render(&mut self, _: &mut Scene, _: &mut dyn Theme, _: &LayoutNode, _: &mut AppInfo, _: AppContext) {}

        fn layout_style(&self) -> StyleNode {
            StyleNode::default()
        }

        fn update(&mut self, _: &LayoutNode, _: AppContext, _: &mut AppInfo) -> Update {
            Update::empty()
        }

        fn widget_id(&self) -> WidgetId {
            WidgetId::new("tactile-widgets-tests", "NullLabel")
        }
    }

    fn node() -> LayoutNode {
        LayoutNode::leaf(0.0, 0.0, 80.0, 30.0)
    }

    #[test]
    fn construction_applies_the_preset() {
        let button = StyledButton::new(NullLabel);
        assert_eq!(button.corner_radius, PRESET_CORNER_RADIUS);
        assert_eq!(button.background.components, PRESET_BACKGROUND.components);
        assert_eq!(button.title_color.components, PRESET_TITLE_COLOR.components);
    }

    #[test]
    fn apply_style_overrides_prior_configuration() {
        let mut button = StyledButton::new(NullLabel);
        button.corner_radius = 12.0;
        button.background = Color::from_rgb8(255, 0, 0);

        button.apply_style();
        button.apply_style();

        assert_eq!(button.corner_radius, PRESET_CORNER_RADIUS);
        assert_eq!(button.background.components, PRESET_BACKGROUND.components);
    }

    #[test]
    fn press_fires_on_release_only() {
        let mut button = StyledButton::new(NullLabel).with_on_pressed(Update::FORCE);
        let layout = node();
        let mut info = AppInfo {
            cursor_pos: Some(Vector2::new(10.0, 10.0)),
            ..Default::default()
        };

        info.buttons = vec![(MouseButton::Left, ElementState::Pressed)];
        let pressed = button.update(&layout, AppContext::default(), &mut info);
        assert!(!pressed.contains(Update::FORCE));
        assert_eq!(button.state(), StyledButtonState::Pressed);

        info.buttons = vec![(MouseButton::Left, ElementState::Released)];
        let released = button.update(&layout, AppContext::default(), &mut info);
        assert!(released.contains(Update::FORCE));
        assert_eq!(button.state(), StyledButtonState::Released);
    }

    #[test]
    fn tap_fires_like_a_click() {
        let mut button = StyledButton::new(NullLabel).with_on_pressed(Update::FORCE);
        let layout = node();
        let mut info = AppInfo::default();

        info.touches = vec![TouchEvent {
            finger: 1,
            phase: TouchPhase::Started,
            location: Vector2::new(10.0, 10.0),
        }];
        button.update(&layout, AppContext::default(), &mut info);

        info.touches = vec![TouchEvent {
            finger: 1,
            phase: TouchPhase::Ended,
            location: Vector2::new(10.0, 10.0),
        }];
        let released = button.update(&layout, AppContext::default(), &mut info);
        assert!(released.contains(Update::FORCE));
    }
}
