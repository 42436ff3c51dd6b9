//! Field validators routed through the kind registry.

use tessera_primitives::Value;
use tessera_registry::{ActionDeclaration, HandlerRegistry, HandlerRegistryBuilder, RegistryError, ValidatorMarker, kind};

use crate::binder::bind;
use crate::error::InvocationError;
use crate::host::ActionTarget;
use crate::signature::CallResult;


/// Registry of field validators keyed by marker kind.
pub type ValidatorRegistry = HandlerRegistry<dyn Validator>;

/// The field a validator is checking.
#[derive(Debug, Clone, Copy)]
pub struct ValidationSubject<'a> {
	pub field: &'a str,
	pub value: &'a Value,
}

/// Checks a field against one validator marker.
pub trait Validator {
	fn validate(
		&self,
		marker: &ValidatorMarker,
		subject: ValidationSubject<'_>,
		target: &mut dyn ActionTarget,
	) -> Result<(), ValidationError>;
}

/// Why a field failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
	#[error("{field} must be at least {min}, found {value}")]
	BelowMinimum { field: String, min: f64, value: f64 },

	#[error("{field} must be at most {max}, found {value}")]
	AboveMaximum { field: String, max: f64, value: f64 },

	#[error("{kind} can be used only on numeric fields, {field} is {type_name}")]
	NotNumeric {
		kind: &'static str,
		field: String,
		type_name: &'static str,
	},

	#[error("{0}")]
	Rejected(String),

	#[error("{callback} must return a boolean")]
	NonBooleanCallback { callback: String },

	#[error(transparent)]
	Callback(#[from] InvocationError),

	/// A handler received a marker of a kind it was not registered for.
	#[error("handler for {expected} received a {found} marker")]
	KindMismatch { expected: &'static str, found: &'static str },
}

/// Lower bound on numeric fields.
#[derive(Debug, Default)]
pub struct MinValueValidator;

impl Validator for MinValueValidator {
	fn validate(&self, marker: &ValidatorMarker, subject: ValidationSubject<'_>, _: &mut dyn ActionTarget) -> Result<(), ValidationError> {
		let ValidatorMarker::MinValue { min } = *marker else {
			return Err(mismatch(kind::MIN_VALUE, marker));
		};
		let value = numeric(kind::MIN_VALUE, subject)?;
		if value < min {
			return Err(ValidationError::BelowMinimum {
				field: subject.field.to_string(),
				min,
				value,
			});
		}
		Ok(())
	}
}

/// Upper bound on numeric fields.
#[derive(Debug, Default)]
pub struct MaxValueValidator;

impl Validator for MaxValueValidator {
	fn validate(&self, marker: &ValidatorMarker, subject: ValidationSubject<'_>, _: &mut dyn ActionTarget) -> Result<(), ValidationError> {
		let ValidatorMarker::MaxValue { max } = *marker else {
			return Err(mismatch(kind::MAX_VALUE, marker));
		};
		let value = numeric(kind::MAX_VALUE, subject)?;
		if value > max {
			return Err(ValidationError::AboveMaximum {
				field: subject.field.to_string(),
				max,
				value,
			});
		}
		Ok(())
	}
}

/// Rejects nil and empty values.
#[derive(Debug, Default)]
pub struct RequiredValidator;

impl Validator for RequiredValidator {
	fn validate(&self, marker: &ValidatorMarker, subject: ValidationSubject<'_>, _: &mut dyn ActionTarget) -> Result<(), ValidationError> {
		let ValidatorMarker::Required { message } = marker else {
			return Err(mismatch(kind::REQUIRED, marker));
		};
		let missing = match subject.value {
			Value::Nil => true,
			Value::String(s) => s.is_empty(),
			Value::List(items) => items.is_empty(),
			_ => false,
		};
		if missing {
			let message = message.clone().unwrap_or_else(|| format!("{} is required", subject.field));
			return Err(ValidationError::Rejected(message));
		}
		Ok(())
	}
}

/// Calls a boolean callback with the field value.
///
/// The callback may take the value as its only parameter or take nothing.
#[derive(Debug, Default)]
pub struct ValidateInputValidator;

impl Validator for ValidateInputValidator {
	fn validate(&self, marker: &ValidatorMarker, subject: ValidationSubject<'_>, target: &mut dyn ActionTarget) -> Result<(), ValidationError> {
		let ValidatorMarker::ValidateInput { callback, message } = marker else {
			return Err(mismatch(kind::VALIDATE_INPUT, marker));
		};
		let signature = target
			.signature(callback)
			.ok_or_else(|| InvocationError::UnresolvedMethod { name: callback.clone() })?;
		let args = bind(&ActionDeclaration::with_args([]), &signature, Some(subject.value))?;

		let result = target.call(callback, args).map_err(|message| InvocationError::CallFailed {
			callable: callback.clone(),
			message,
		})?;
		match result {
			CallResult::Returned(Value::Bool(true)) => Ok(()),
			CallResult::Returned(Value::Bool(false)) => {
				let message = message.clone().unwrap_or_else(|| format!("{} is not valid", subject.field));
				Err(ValidationError::Rejected(message))
			}
			_ => Err(ValidationError::NonBooleanCallback { callback: callback.clone() }),
		}
	}
}

fn numeric(kind: &'static str, subject: ValidationSubject<'_>) -> Result<f64, ValidationError> {
	subject.value.as_number().ok_or_else(|| ValidationError::NotNumeric {
		kind,
		field: subject.field.to_string(),
		type_name: subject.value.type_name(),
	})
}

fn mismatch(expected: &'static str, marker: &ValidatorMarker) -> ValidationError {
	ValidationError::KindMismatch {
		expected,
		found: marker.key(),
	}
}

/// Registers the builtin validators.
pub fn register_builtin_validators(builder: &mut HandlerRegistryBuilder<dyn Validator>) -> Result<(), RegistryError> {
	builder
		.register(kind::MIN_VALUE, Box::new(MinValueValidator))?
		.register(kind::MAX_VALUE, Box::new(MaxValueValidator))?
		.register(kind::REQUIRED, Box::new(RequiredValidator))?
		.register(kind::VALIDATE_INPUT, Box::new(ValidateInputValidator))?;
	Ok(())
}

/// A registry holding only the builtin validators.
pub fn default_validators() -> Result<ValidatorRegistry, RegistryError> {
	let mut builder = ValidatorRegistry::builder();
	register_builtin_validators(&mut builder)?;
	Ok(builder.build())
}
