//! Widget identifiers for the theming system.
//!
//! A [WidgetId] names a widget *type*, not an instance. It pairs a
//! namespace (the providing crate) with the widget type name, so themes can
//! style widgets from several libraries without name collisions.

use std::fmt::{Debug, Display, Formatter};

/// An identifier for a widget type in the theming system.
///
/// ```
/// let id = tactile_theme::id::WidgetId::new("tactile-widgets", "RadioButton");
/// assert_eq!(id.namespace(), "tactile-widgets");
/// assert_eq!(id.id(), "RadioButton");
/// ```
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct WidgetId {
    namespace: String,
    id: String,
}

impl WidgetId {
    /// Create a new widget id by a namespace and custom id.
    /// The namespace should be the crate name and the id should be the widget type name.
    pub fn new(namespace: impl ToString, id: impl ToString) -> Self {
        Self {
            namespace: namespace.to_string(),
            id: id.to_string(),
        }
    }

    /// Returns the namespace of the widget id.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the actual widget id.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Display for WidgetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.id)
    }
}
