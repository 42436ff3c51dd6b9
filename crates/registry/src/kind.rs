//! Stable textual keys naming each marker kind.
//!
//! Registries and diagnostics refer to markers by these keys rather than by
//! type, so new kinds can be added without touching existing handlers.

pub const ACTION: &str = "Button";

pub const ENABLE_IF: &str = "EnableIf";
pub const DISABLE_IF: &str = "DisableIf";
pub const SHOW_IF: &str = "ShowIf";
pub const HIDE_IF: &str = "HideIf";

pub const MIN_VALUE: &str = "MinValue";
pub const MAX_VALUE: &str = "MaxValue";
pub const REQUIRED: &str = "Required";
pub const VALIDATE_INPUT: &str = "ValidateInput";
