//! Per-member processing and action dispatch.
//!
//! Each action declaration moves through gating, binding, and invocation on
//! its own. A failure in one declaration becomes a diagnostic plus a
//! [`InvocationStatus::Failed`] report; the remaining declarations on the
//! member, and the remaining members, are processed regardless.

use tessera_primitives::{ButtonLayout, LayoutFlags};
use tessera_registry::{ActionDeclaration, RegistryError, kind};
use tracing::{debug, trace, trace_span, warn};

use crate::binder::bind;
use crate::condition::evaluate;
use crate::config::EngineConfig;
use crate::error::InvocationError;
use crate::gate::{GateDecision, GateInput, gate};
use crate::host::{ActionTarget, Diagnostic, Host, Member, MemberKind};
use crate::outcome::{InvocationOutcome, InvocationStatus};
use crate::signature::{CallResult, CallableSignature};
use crate::validate::{ValidationSubject, ValidatorRegistry, default_validators};


/// Resolves and dispatches declarative actions on a target.
///
/// Built once at startup and shared by reference.
#[derive(Debug)]
pub struct Engine {
	config: EngineConfig,
	validators: ValidatorRegistry,
}

impl Engine {
	pub fn new(config: EngineConfig, validators: ValidatorRegistry) -> Self {
		Self { config, validators }
	}

	/// An engine using the builtin validators.
	pub fn with_builtin_validators(config: EngineConfig) -> Result<Self, RegistryError> {
		Ok(Self::new(config, default_validators()?))
	}

	pub fn validators(&self) -> &ValidatorRegistry {
		&self.validators
	}

	/// Processes every member of `target` in declaration order.
	pub fn process<H>(&self, target: &mut dyn ActionTarget, host: &mut H) -> Vec<InvocationOutcome>
	where
		H: Host + ?Sized,
	{
		self.process_members(target, host, None)
	}

	/// Like [`process`](Self::process), but method-attached actions are only
	/// reported when their layout intersects `pass`.
	///
	/// Hosts drawing methods in several passes (for example a top and a bottom
	/// section) call this once per pass. Field-attached actions are placed
	/// around their field instead; see [`FieldLayoutPlan`](crate::FieldLayoutPlan).
	pub fn process_pass<H>(&self, target: &mut dyn ActionTarget, host: &mut H, pass: LayoutFlags) -> Vec<InvocationOutcome>
	where
		H: Host + ?Sized,
	{
		self.process_members(target, host, Some(pass))
	}

	fn process_members<H>(&self, target: &mut dyn ActionTarget, host: &mut H, pass: Option<LayoutFlags>) -> Vec<InvocationOutcome>
	where
		H: Host + ?Sized,
	{
		let members = target.members();
		let mut outcomes = Vec::new();
		for member in members.iter() {
			self.process_member(target, host, member, pass, &mut outcomes);
		}
		outcomes
	}

	fn process_member<H>(
		&self,
		target: &mut dyn ActionTarget,
		host: &mut H,
		member: &Member,
		pass: Option<LayoutFlags>,
		outcomes: &mut Vec<InvocationOutcome>,
	) where
		H: Host + ?Sized,
	{
		let span = trace_span!("member", target = target.name(), member = %member.name);
		let _guard = span.enter();

		let visible = self.conditions_hold(&*target, host, member, true);
		trace!(visible, "visibility resolved");

		if visible && member.is_field() {
			self.validate_field(target, host, member);
		}

		for (index, decl) in member.actions().enumerate() {
			if let Some(pass) = pass
				&& !member.is_field()
				&& !decl.drawn_in(pass)
			{
				continue;
			}

			let label = decl.display_label(&member.name, self.config.labels.style).to_string();
			let layout = ButtonLayout::resolve(decl.layout(), &self.config.layout);

			let span = trace_span!("action", index, label = %label);
			let _guard = span.enter();

			let status = if visible {
				self.dispatch(target, host, member, index, decl, &label)
			} else {
				InvocationStatus::Hidden
			};
			trace!(status = status.name(), "action resolved");

			outcomes.push(InvocationOutcome {
				member: member.name.clone(),
				index,
				label,
				layout,
				status,
			});
		}
	}

	/// Runs every registered validator on a field.
	///
	/// Validator markers whose kind has no registered handler are skipped.
	fn validate_field<H>(&self, target: &mut dyn ActionTarget, host: &mut H, member: &Member)
	where
		H: Host + ?Sized,
	{
		if member.validators().next().is_none() {
			return;
		}
		let Some(value) = target.field_value(&member.name) else {
			trace!("field has no readable value; skipping validators");
			return;
		};

		for marker in member.validators() {
			let Some(validator) = self.validators.resolve(marker.key()) else {
				trace!(kind = marker.key(), "no validator registered");
				continue;
			};
			let subject = ValidationSubject {
				field: &member.name,
				value: &value,
			};
			if let Err(err) = validator.validate(marker, subject, &mut *target) {
				report(host, Diagnostic::warning(marker.key(), &member.name, err.to_string()));
			}
		}
	}

	/// Evaluates the member's visibility (`visibility == true`) or enable
	/// conditions. A member without such conditions passes.
	///
	/// All markers are evaluated, so every malformed one is reported; a marker
	/// that fails to evaluate counts as not satisfied.
	fn conditions_hold<H>(&self, target: &dyn ActionTarget, host: &mut H, member: &Member, visibility: bool) -> bool
	where
		H: Host + ?Sized,
	{
		member
			.conditions()
			.filter(|marker| marker.kind.is_visibility() == visibility)
			.map(|marker| match evaluate(target, marker.kind.key(), &marker.spec) {
				Ok(value) => value,
				Err(err) => {
					report(host, Diagnostic::warning(marker.kind.key(), &member.name, err.to_string()));
					false
				}
			})
			.fold(true, |all, value| all && value)
	}

	/// Gates, binds, and invokes one declaration.
	fn dispatch<H>(
		&self,
		target: &mut dyn ActionTarget,
		host: &mut H,
		member: &Member,
		index: usize,
		decl: &ActionDeclaration,
		label: &str,
	) -> InvocationStatus
	where
		H: Host + ?Sized,
	{
		let (callable, signature) = match resolve_callable(&*target, member, decl, label) {
			Ok(resolved) => resolved,
			Err(err) => return fail(host, member, err),
		};

		let executing = host.is_executing();
		let decision = gate(GateInput {
			condition: self.conditions_hold(&*target, host, member, false),
			enable_mode: decl.enable_mode(),
			resumable: signature.resumable,
			executing,
		});
		trace!(?decision, executing, "gated");
		if let GateDecision::Denied(reason) = decision {
			return InvocationStatus::Disabled(reason);
		}

		if !host.activated(&member.name, index) {
			return InvocationStatus::Idle;
		}

		let bound_value = match member.kind {
			MemberKind::Field => target.field_value(&member.name),
			MemberKind::Method => None,
		};
		let args = match bind(decl, &signature, bound_value.as_ref()) {
			Ok(args) => args,
			Err(err) => return fail(host, member, err),
		};
		trace!(callable = %callable, args = args.len(), "bound");

		match target.call(&callable, args) {
			Ok(CallResult::Resumable(handle)) if executing => {
				debug!(callable = %callable, "handing resumable work to scheduler");
				host.schedule(handle);
				InvocationStatus::Suspended
			}
			Ok(result) => {
				if let CallResult::Resumable(handle) = result {
					warn!(callable = %callable, handle = handle.label(), "resumable result outside execution; dropping it");
				}
				if !executing {
					host.mark_dirty(target.name());
				}
				debug!(callable = %callable, "action completed");
				InvocationStatus::Completed
			}
			Err(message) => fail(host, member, InvocationError::CallFailed { callable, message }),
		}
	}
}

/// Finds the callable a declaration invokes and its current signature.
///
/// Method-attached actions call their own method. Field-attached actions
/// call the method named by the declaration's target.
fn resolve_callable(
	target: &dyn ActionTarget,
	member: &Member,
	decl: &ActionDeclaration,
	label: &str,
) -> Result<(String, CallableSignature), InvocationError> {
	let name = match member.kind {
		MemberKind::Method => member.name.as_str(),
		MemberKind::Field => decl
			.target()
			.ok_or_else(|| InvocationError::MissingTarget { label: label.to_string() })?,
	};
	let signature = target
		.signature(name)
		.ok_or_else(|| InvocationError::UnresolvedMethod { name: name.to_string() })?;
	Ok((name.to_string(), signature))
}

fn fail<H>(host: &mut H, member: &Member, err: InvocationError) -> InvocationStatus
where
	H: Host + ?Sized,
{
	report(host, Diagnostic::error(kind::ACTION, &member.name, err.to_string()));
	InvocationStatus::Failed(err)
}

fn report<H>(host: &mut H, diagnostic: Diagnostic)
where
	H: Host + ?Sized,
{
	warn!(kind = %diagnostic.kind, member = %diagnostic.member, "{}", diagnostic.message);
	host.report(diagnostic);
}
