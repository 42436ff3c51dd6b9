//! Per-declaration dispatch reports.

use tessera_primitives::ButtonLayout;

use crate::error::InvocationError;
use crate::gate::DenyReason;

/// Where one declaration ended up during a pass.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationStatus {
	/// Enabled and ready, but not triggered this pass.
	Idle,
	/// Triggered, invoked, and finished.
	Completed,
	/// Triggered and invoked; resumable work was handed to the scheduler.
	Suspended,
	/// Not enabled.
	Disabled(DenyReason),
	/// The member is hidden.
	Hidden,
	/// Could not be resolved, bound, or invoked.
	Failed(InvocationError),
}

impl InvocationStatus {
	/// Short tag for tracing.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Idle => "idle",
			Self::Completed => "completed",
			Self::Suspended => "suspended",
			Self::Disabled(_) => "disabled",
			Self::Hidden => "hidden",
			Self::Failed(_) => "failed",
		}
	}
}

/// Report for one action declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationOutcome {
	pub member: String,
	/// Index among the member's action declarations.
	pub index: usize,
	pub label: String,
	pub layout: ButtonLayout,
	pub status: InvocationStatus,
}
