/// Contains the application information structure.
pub mod info;

/// Contains the update mode bitflag.
pub mod update;

/// Contains the [AppContext](context::AppContext) structure for access to the application lifecycle.
pub mod context;

/// Contains the haptic feedback engine.
pub mod feedback;
