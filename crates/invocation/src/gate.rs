//! Enable gating.

use tessera_primitives::EnableMode;


/// Why an action was disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenyReason {
	/// An enable condition did not hold (or could not be evaluated).
	Condition,
	/// The enable mode forbids the current environment.
	EnableMode(EnableMode),
	/// Resumable work cannot start outside live execution.
	ResumableOutsideExecution,
}

/// Outcome of the gating step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateDecision {
	Enabled,
	Denied(DenyReason),
}

impl GateDecision {
	pub fn is_enabled(self) -> bool {
		matches!(self, Self::Enabled)
	}
}

/// Inputs to the gating step for one declaration.
#[derive(Debug, Clone, Copy)]
pub struct GateInput {
	/// Result of the enable conditions on the member (true when it has none).
	pub condition: bool,
	pub enable_mode: EnableMode,
	/// Whether the target callable returns resumable work.
	pub resumable: bool,
	/// The environment's "currently executing" flag.
	pub executing: bool,
}

/// Decides whether an action is enabled.
///
/// Equivalent to `condition && enable_mode.allows(executing)`, with resumable
/// callables additionally forced off while not executing.
pub fn gate(input: GateInput) -> GateDecision {
	if !input.condition {
		return GateDecision::Denied(DenyReason::Condition);
	}
	if !input.enable_mode.allows(input.executing) {
		return GateDecision::Denied(DenyReason::EnableMode(input.enable_mode));
	}
	if input.resumable && !input.executing {
		return GateDecision::Denied(DenyReason::ResumableOutsideExecution);
	}
	GateDecision::Enabled
}
