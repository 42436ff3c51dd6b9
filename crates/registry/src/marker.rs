//! Markers attached to host members.

use crate::condition::ConditionMarker;
use crate::declaration::ActionDeclaration;
use crate::kind;
use crate::validator::ValidatorMarker;

/// One declarative marker on a field or method.
#[derive(Debug, Clone, PartialEq)]
pub enum Marker {
	Action(ActionDeclaration),
	Condition(ConditionMarker),
	Validator(ValidatorMarker),
	/// A marker this engine carries but never acts on (for example a help
	/// box or a tooltip).
	Informational { kind: String },
}

impl Marker {
	/// Stable textual key of this marker's kind.
	pub fn kind_key(&self) -> &str {
		match self {
			Self::Action(_) => kind::ACTION,
			Self::Condition(marker) => marker.kind.key(),
			Self::Validator(marker) => marker.key(),
			Self::Informational { kind } => kind,
		}
	}

	pub fn as_action(&self) -> Option<&ActionDeclaration> {
		match self {
			Self::Action(decl) => Some(decl),
			_ => None,
		}
	}

	pub fn as_condition(&self) -> Option<&ConditionMarker> {
		match self {
			Self::Condition(marker) => Some(marker),
			_ => None,
		}
	}

	pub fn as_validator(&self) -> Option<&ValidatorMarker> {
		match self {
			Self::Validator(marker) => Some(marker),
			_ => None,
		}
	}
}

impl From<ActionDeclaration> for Marker {
	fn from(decl: ActionDeclaration) -> Self {
		Self::Action(decl)
	}
}

impl From<ConditionMarker> for Marker {
	fn from(marker: ConditionMarker) -> Self {
		Self::Condition(marker)
	}
}

impl From<ValidatorMarker> for Marker {
	fn from(marker: ValidatorMarker) -> Self {
		Self::Validator(marker)
	}
}
