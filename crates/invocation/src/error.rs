/// Reasons a single declaration could not be evaluated, bound, or invoked.
///
/// None of these are fatal: the dispatcher reports them as diagnostics and
/// moves on to the next declaration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvocationError {
	/// An enable or visibility marker lists no condition names.
	#[error("{kind} needs a valid boolean condition field, property or method name to work")]
	NoConditionsSpecified { kind: String },

	/// A condition name does not resolve to a boolean member.
	#[error("condition {name:?} is not a boolean field, property or method")]
	UnresolvedCondition { name: String },

	/// A field-attached action does not name the method it invokes.
	#[error("failed to display the {label} action: an action on a field must provide the method name")]
	MissingTarget { label: String },

	/// The declared target does not match any callable on the target.
	#[error("can't find the method: {name}")]
	UnresolvedMethod { name: String },

	/// Declared arguments cannot be reconciled with the formal parameters.
	#[error("unmatched parameters length: target method takes {expected}, action declares {declared} (no value for parameter {index})")]
	UnmatchedParameterCount { declared: usize, expected: usize, index: usize },

	/// The host reported a failure while running the callable.
	#[error("{callable} failed: {message}")]
	CallFailed { callable: String, message: String },
}

/// Errors loading engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("config parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// A layout metric is non-positive, non-finite, or out of range.
	#[error("invalid value for {field}: {value} ({expected})")]
	InvalidMetric {
		field: &'static str,
		value: f32,
		expected: &'static str,
	},
}
