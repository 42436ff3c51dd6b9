//! Core value types for declarative actions: layout flags, argument values,
//! enable modes, and resumable work handles.

/// Resumable work handles and future aliases.
pub mod future;
/// Layout bitflags, presets, and resolved sizing.
pub mod layout;
/// Environment enable modes.
pub mod mode;
/// Untyped values.
pub mod value;

pub use future::{BoxFutureLocal, ResumableHandle};
pub use layout::{ButtonLayout, HeightModifier, LayoutFlags, LayoutMetrics, LayoutPreset, Position, WidthModifier};
pub use mode::EnableMode;
pub use value::Value;
