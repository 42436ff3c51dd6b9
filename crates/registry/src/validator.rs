//! Field validator markers.

use crate::kind;

/// A validation requirement attached to a field.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatorMarker {
	/// Numeric field must not be below `min`.
	MinValue { min: f64 },
	/// Numeric field must not exceed `max`.
	MaxValue { max: f64 },
	/// Field must hold a non-empty value.
	Required { message: Option<String> },
	/// A boolean callback taking the field value must return true.
	ValidateInput { callback: String, message: Option<String> },
}

impl ValidatorMarker {
	pub const fn key(&self) -> &'static str {
		match self {
			Self::MinValue { .. } => kind::MIN_VALUE,
			Self::MaxValue { .. } => kind::MAX_VALUE,
			Self::Required { .. } => kind::REQUIRED,
			Self::ValidateInput { .. } => kind::VALIDATE_INPUT,
		}
	}

	pub fn min_value(min: impl Into<f64>) -> Self {
		Self::MinValue { min: min.into() }
	}

	pub fn max_value(max: impl Into<f64>) -> Self {
		Self::MaxValue { max: max.into() }
	}

	pub fn required() -> Self {
		Self::Required { message: None }
	}

	pub fn validate_input(callback: impl Into<String>, message: Option<&str>) -> Self {
		Self::ValidateInput {
			callback: callback.into(),
			message: message.map(str::to_string),
		}
	}
}
