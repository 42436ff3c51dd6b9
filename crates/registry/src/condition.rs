//! Enable and visibility conditions.

use crate::kind;

/// How several condition values are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConditionOperator {
	/// All conditions must hold.
	#[default]
	And,
	/// At least one condition must hold.
	Or,
}

impl ConditionOperator {
	pub fn combine(self, values: &[bool]) -> bool {
		match self {
			Self::And => values.iter().all(|&v| v),
			Self::Or => values.iter().any(|&v| v),
		}
	}
}

/// Named boolean members combined into one decision.
///
/// Names refer to fields, properties, or zero-argument methods on the target.
/// A spec is resolved from scratch on every evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConditionSpec {
	pub names: Vec<String>,
	pub operator: ConditionOperator,
	pub inverted: bool,
}

impl ConditionSpec {
	/// A single condition.
	pub fn one(name: impl Into<String>) -> Self {
		Self {
			names: vec![name.into()],
			..Self::default()
		}
	}

	/// Several conditions joined with `operator`.
	pub fn many<I, S>(operator: ConditionOperator, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			names: names.into_iter().map(Into::into).collect(),
			operator,
			inverted: false,
		}
	}

	pub fn inverted(mut self) -> Self {
		self.inverted = !self.inverted;
		self
	}

	/// Combines already-resolved values and applies inversion.
	pub fn apply(&self, values: &[bool]) -> bool {
		self.operator.combine(values) != self.inverted
	}
}

/// What a condition marker controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
	EnableIf,
	DisableIf,
	ShowIf,
	HideIf,
}

impl ConditionKind {
	pub const fn key(self) -> &'static str {
		match self {
			Self::EnableIf => kind::ENABLE_IF,
			Self::DisableIf => kind::DISABLE_IF,
			Self::ShowIf => kind::SHOW_IF,
			Self::HideIf => kind::HIDE_IF,
		}
	}

	/// Returns true for markers controlling visibility rather than enablement.
	pub const fn is_visibility(self) -> bool {
		matches!(self, Self::ShowIf | Self::HideIf)
	}

	const fn is_negative(self) -> bool {
		matches!(self, Self::DisableIf | Self::HideIf)
	}
}

/// A condition marker attached to a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionMarker {
	pub kind: ConditionKind,
	pub spec: ConditionSpec,
}

impl ConditionMarker {
	/// Builds a marker; negative kinds flip the spec's inversion.
	pub fn new(kind: ConditionKind, spec: ConditionSpec) -> Self {
		let spec = if kind.is_negative() { spec.inverted() } else { spec };
		Self { kind, spec }
	}

	pub fn enable_if(spec: ConditionSpec) -> Self {
		Self::new(ConditionKind::EnableIf, spec)
	}

	pub fn disable_if(spec: ConditionSpec) -> Self {
		Self::new(ConditionKind::DisableIf, spec)
	}

	pub fn show_if(spec: ConditionSpec) -> Self {
		Self::new(ConditionKind::ShowIf, spec)
	}

	pub fn hide_if(spec: ConditionSpec) -> Self {
		Self::new(ConditionKind::HideIf, spec)
	}
}
