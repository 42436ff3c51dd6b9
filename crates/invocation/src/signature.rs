//! Callable signatures, bound arguments, and call results.

use std::ops::Deref;

use tessera_primitives::{ResumableHandle, Value};

/// One formal parameter of a callable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Parameter {
	pub default: Option<Value>,
}

impl Parameter {
	/// A parameter the caller must supply.
	pub fn required() -> Self {
		Self { default: None }
	}

	pub fn with_default(value: impl Into<Value>) -> Self {
		Self {
			default: Some(value.into()),
		}
	}

	pub fn has_default(&self) -> bool {
		self.default.is_some()
	}
}

/// Formal parameter list of a callable, as reported by the host.
///
/// Obtained fresh for each resolution; hosts may redefine members between
/// passes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallableSignature {
	pub params: Vec<Parameter>,
	/// Whether calling produces a [`ResumableHandle`] rather than finishing.
	pub resumable: bool,
}

impl CallableSignature {
	pub fn new(params: impl IntoIterator<Item = Parameter>) -> Self {
		Self {
			params: params.into_iter().collect(),
			resumable: false,
		}
	}

	/// A signature whose callable returns resumable work.
	pub fn resumable(params: impl IntoIterator<Item = Parameter>) -> Self {
		Self {
			params: params.into_iter().collect(),
			resumable: true,
		}
	}

	pub fn arity(&self) -> usize {
		self.params.len()
	}
}

/// Concrete argument vector for one invocation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundArguments(Vec<Value>);

impl Deref for BoundArguments {
	type Target = [Value];

	fn deref(&self) -> &[Value] {
		&self.0
	}
}

impl From<Vec<Value>> for BoundArguments {
	fn from(values: Vec<Value>) -> Self {
		Self(values)
	}
}

impl FromIterator<Value> for BoundArguments {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// What a callable produced.
#[derive(Debug)]
pub enum CallResult {
	/// The call finished, optionally with a value.
	Returned(Value),
	/// The call started work that continues after returning.
	Resumable(ResumableHandle),
}
