//! Host boundary.
//!
//! The engine never introspects, renders, schedules, or persists anything
//! itself. Those concerns live behind the traits in this module:
//!
//! * [`ActionTarget`] enumerates members, resolves conditions and
//!   signatures, reads field values, and performs calls.
//! * [`Environment`] reports whether live execution is in progress.
//! * [`Scheduler`] takes ownership of resumable work.
//! * [`PersistenceSink`] receives "mark dirty" notifications.
//! * [`DiagnosticSink`] receives warnings and errors.
//! * [`Activation`] reports which actions the user triggered this pass.

use std::fmt;
use std::rc::Rc;

use tessera_primitives::{ResumableHandle, Value};
use tessera_registry::{ActionDeclaration, ConditionMarker, Marker, ValidatorMarker};

use crate::signature::{BoundArguments, CallResult, CallableSignature};

/// Resolves condition names to their current boolean values.
pub trait ConditionSource {
	/// Returns `None` when `name` is not a boolean field, property, or
	/// zero-argument method.
	fn condition(&self, name: &str) -> Option<bool>;
}

/// An object whose members carry declarative markers.
pub trait ActionTarget: ConditionSource {
	/// Name used in diagnostics and persistence notifications.
	fn name(&self) -> &str;

	/// Declared members in declaration order.
	///
	/// Hosts should hand out the same shared slice across passes so derived
	/// labels stay cached.
	fn members(&self) -> Rc<[Member]>;

	/// Current signature of the callable `name`, if one exists.
	fn signature(&self, name: &str) -> Option<CallableSignature>;

	/// Current value of the field `name`.
	fn field_value(&self, name: &str) -> Option<Value>;

	/// Invokes `name` with `args`. An `Err` carries the host's failure message.
	fn call(&mut self, name: &str, args: BoundArguments) -> Result<CallResult, String>;
}

/// Whether live execution is in progress.
pub trait Environment {
	fn is_executing(&self) -> bool;
}

/// Takes ownership of resumable work and drives it to completion.
pub trait Scheduler {
	fn schedule(&mut self, handle: ResumableHandle);
}

/// One-way "this target's state needs persisting" notification.
pub trait PersistenceSink {
	fn mark_dirty(&mut self, target: &str);
}

/// Receives diagnostics. Must not fail back into the engine.
pub trait DiagnosticSink {
	fn report(&mut self, diagnostic: Diagnostic);
}

/// Reports which declarations were triggered during this pass.
pub trait Activation {
	/// Returns true if the `index`th action declaration on `member` was
	/// triggered.
	fn activated(&self, member: &str, index: usize) -> bool;
}

/// Everything the dispatcher needs from the host besides the target itself.
pub trait Host: Environment + Scheduler + PersistenceSink + DiagnosticSink + Activation {}

impl<T> Host for T where T: Environment + Scheduler + PersistenceSink + DiagnosticSink + Activation {}

/// Whether a member is a field or a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
	/// A field; its actions name the method they call.
	Field,
	/// A method; its actions call the method itself. Its signature is looked
	/// up through [`ActionTarget::signature`] on every dispatch.
	Method,
}

/// A declared member and its markers.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
	pub name: String,
	pub kind: MemberKind,
	pub markers: Vec<Marker>,
}

impl Member {
	pub fn field(name: impl Into<String>, markers: impl IntoIterator<Item = Marker>) -> Self {
		Self {
			name: name.into(),
			kind: MemberKind::Field,
			markers: markers.into_iter().collect(),
		}
	}

	pub fn method(name: impl Into<String>, markers: impl IntoIterator<Item = Marker>) -> Self {
		Self {
			name: name.into(),
			kind: MemberKind::Method,
			markers: markers.into_iter().collect(),
		}
	}

	pub fn is_field(&self) -> bool {
		matches!(self.kind, MemberKind::Field)
	}

	/// Action declarations in declaration order.
	pub fn actions(&self) -> impl Iterator<Item = &ActionDeclaration> {
		self.markers.iter().filter_map(Marker::as_action)
	}

	pub fn conditions(&self) -> impl Iterator<Item = &ConditionMarker> {
		self.markers.iter().filter_map(Marker::as_condition)
	}

	pub fn validators(&self) -> impl Iterator<Item = &ValidatorMarker> {
		self.markers.iter().filter_map(Marker::as_validator)
	}
}

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
	Warning,
	Error,
}

/// A structured warning or error about one marker on one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	pub severity: Severity,
	/// Kind key of the offending marker.
	pub kind: String,
	pub member: String,
	pub message: String,
}

impl Diagnostic {
	pub fn warning(kind: impl Into<String>, member: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Warning,
			kind: kind.into(),
			member: member.into(),
			message: message.into(),
		}
	}

	pub fn error(kind: impl Into<String>, member: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			severity: Severity::Error,
			kind: kind.into(),
			member: member.into(),
			message: message.into(),
		}
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {}: {}", self.kind, self.member, self.message)
	}
}
