//! Resolution and dispatch of declarative actions.
//!
//! A host describes its objects through [`ActionTarget`] and its environment
//! through [`Host`]. For every member the [`Engine`] runs field validators,
//! evaluates visibility and enable conditions, binds declared arguments to
//! the target callable's parameters, and invokes it when the host reports the
//! action as triggered.
//!
//! The building blocks are usable on their own: [`evaluate`] for condition
//! specs, [`bind`] for argument reconciliation, and [`gate`] for the enable
//! decision.

pub mod binder;
pub mod condition;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod gate;
pub mod host;
pub mod outcome;
pub mod plan;
pub mod signature;
pub mod validate;

pub use binder::bind;
pub use condition::evaluate;
pub use config::{EngineConfig, LabelConfig};
pub use dispatch::Engine;
pub use error::{ConfigError, InvocationError};
pub use gate::{DenyReason, GateDecision, GateInput, gate};
pub use host::{
	Activation, ActionTarget, ConditionSource, Diagnostic, DiagnosticSink, Environment, Host, Member, MemberKind,
	PersistenceSink, Scheduler, Severity,
};
pub use outcome::{InvocationOutcome, InvocationStatus};
pub use plan::FieldLayoutPlan;
pub use signature::{BoundArguments, CallResult, CallableSignature, Parameter};
pub use validate::{
	MaxValueValidator, MinValueValidator, RequiredValidator, ValidateInputValidator, ValidationError, ValidationSubject,
	Validator, ValidatorRegistry, default_validators, register_builtin_validators,
};

#[cfg(test)]
mod test_support;
