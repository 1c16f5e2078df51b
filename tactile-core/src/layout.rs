//! Layout types for widgets.
//!
//! Widgets describe their preferred layout with a [LayoutStyle] and receive
//! the computed result as a [LayoutNode]. The underlying engine is `taffy`;
//! its style vocabulary is re-exported here so hosts and widgets share one
//! set of types.

use nalgebra::Vector2;

pub use taffy::geometry::{Point, Rect, Size};
pub use taffy::style::{
    AlignContent, AlignItems, Dimension, FlexDirection, JustifyContent, LengthPercentage,
    LengthPercentageAuto,
};
pub use taffy::Style;

/// The computed placement of a widget, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// The top-left corner of the widget.
    pub location: Point<f32>,
    /// The computed size of the widget.
    pub size: Size<f32>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            location: Point { x: 0.0, y: 0.0 },
            size: Size {
                width: 0.0,
                height: 0.0,
            },
        }
    }
}

/// The layout style of a widget, converted into a [taffy::Style] by the
/// host's layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStyle {
    /// The preferred size of the widget.
    pub size: Vector2<Dimension>,
    /// The margin around the widget.
    pub margin: Rect<LengthPercentageAuto>,
    /// The padding inside the widget.
    pub padding: Rect<LengthPercentage>,
    /// The flex direction for child layout.
    pub flex_direction: FlexDirection,
    /// Cross-axis alignment of children.
    pub align_items: Option<AlignItems>,
    /// The gap between children.
    pub gap: Size<LengthPercentage>,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            size: Vector2::new(Dimension::auto(), Dimension::auto()),
            margin: Rect {
                left: LengthPercentageAuto::length(0.0),
                right: LengthPercentageAuto::length(0.0),
                top: LengthPercentageAuto::length(0.0),
                bottom: LengthPercentageAuto::length(0.0),
            },
            padding: Rect {
                left: LengthPercentage::length(0.0),
                right: LengthPercentage::length(0.0),
                top: LengthPercentage::length(0.0),
                bottom: LengthPercentage::length(0.0),
            },
            flex_direction: FlexDirection::Row,
            align_items: None,
            gap: Size {
                width: LengthPercentage::length(0.0),
                height: LengthPercentage::length(0.0),
            },
        }
    }
}

impl From<&LayoutStyle> for Style {
    fn from(style: &LayoutStyle) -> Self {
        Style {
            size: Size {
                width: style.size.x,
                height: style.size.y,
            },
            margin: style.margin,
            padding: style.padding,
            flex_direction: style.flex_direction,
            align_items: style.align_items,
            gap: style.gap,
            ..Default::default()
        }
    }
}

/// A node in the style tree handed to the layout pass.
#[derive(Debug, Clone, Default)]
pub struct StyleNode {
    /// The layout style of this node.
    pub style: LayoutStyle,
    /// The styles of the child widgets.
    pub children: Vec<StyleNode>,
}

/// A node in the computed layout tree handed back to widgets.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    /// The computed layout of this node.
    pub layout: Layout,
    /// The computed layouts of the child widgets.
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// A childless node with the given bounds, for hosts that place widgets
    /// directly.
    pub fn leaf(x: f32, y: f32, width: f32, height: f32) -> Self {
        let mut layout = Layout::default();
        layout.location = Point { x, y };
        layout.size = Size { width, height };
        Self {
            layout,
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_conversion_carries_box_model() {
        let style = LayoutStyle {
            size: Vector2::new(Dimension::length(40.0), Dimension::length(40.0)),
            padding: Rect {
                left: LengthPercentage::length(4.0),
                right: LengthPercentage::length(4.0),
                top: LengthPercentage::length(2.0),
                bottom: LengthPercentage::length(2.0),
            },
            ..Default::default()
        };

        let taffy_style = Style::from(&style);
        assert_eq!(taffy_style.size.width, Dimension::length(40.0));
        assert_eq!(taffy_style.padding.left, LengthPercentage::length(4.0));
        assert_eq!(taffy_style.flex_direction, FlexDirection::Row);
    }

    #[test]
    fn leaf_node_carries_bounds() {
        let node = LayoutNode::leaf(10.0, 20.0, 40.0, 40.0);
        assert_eq!(node.layout.location.x, 10.0);
        assert_eq!(node.layout.size.height, 40.0);
        assert!(node.children.is_empty());
    }
}
