use tessera_primitives::Value;
use tessera_registry::ActionDeclaration;

use super::bind;
use crate::error::InvocationError;
use crate::signature::{BoundArguments, CallableSignature, Parameter};

fn decl(args: impl IntoIterator<Item = Value>) -> ActionDeclaration {
	ActionDeclaration::named("Target", args)
}

fn values(items: impl IntoIterator<Item = Value>) -> BoundArguments {
	items.into_iter().collect()
}

#[test]
fn exact_arity_uses_declared_arguments() {
	let sig = CallableSignature::new([Parameter::required()]);
	let bound = bind(&decl([Value::from("zzz")]), &sig, Some(&Value::from(9))).unwrap();
	assert_eq!(bound, values([Value::from("zzz")]));
}

#[test]
fn no_parameters_no_arguments() {
	let bound = bind(&decl([]), &CallableSignature::default(), None).unwrap();
	assert!(bound.is_empty());
}

#[test]
fn two_required_without_arguments_fail() {
	let sig = CallableSignature::new([Parameter::required(), Parameter::required()]);
	assert_eq!(
		bind(&decl([]), &sig, None),
		Err(InvocationError::UnmatchedParameterCount {
			declared: 0,
			expected: 2,
			index: 0,
		})
	);
}

#[test]
fn bound_value_fills_first_parameter() {
	let sig = CallableSignature::new([Parameter::required()]);
	let bound = bind(&decl([]), &sig, Some(&Value::from(7))).unwrap();
	assert_eq!(bound, values([Value::from(7)]));
}

#[test]
fn bound_value_never_fills_later_parameters() {
	let sig = CallableSignature::new([Parameter::with_default(5), Parameter::required()]);
	assert_eq!(
		bind(&decl([Value::from(1)]), &sig, None),
		Err(InvocationError::UnmatchedParameterCount {
			declared: 1,
			expected: 2,
			index: 1,
		})
	);
	assert_eq!(
		bind(&decl([Value::from(1)]), &sig, Some(&Value::from(3))),
		Err(InvocationError::UnmatchedParameterCount {
			declared: 1,
			expected: 2,
			index: 1,
		})
	);
}

#[test]
fn default_wins_over_bound_value() {
	let sig = CallableSignature::new([Parameter::with_default(5)]);
	let bound = bind(&decl([]), &sig, Some(&Value::from(3))).unwrap();
	assert_eq!(bound, values([Value::from(5)]));
}

#[test]
fn declared_then_defaults() {
	let sig = CallableSignature::new([
		Parameter::required(),
		Parameter::with_default("suffix"),
		Parameter::with_default(false),
	]);
	let bound = bind(&decl([Value::from("prefix")]), &sig, None).unwrap();
	assert_eq!(
		bound,
		values([Value::from("prefix"), Value::from("suffix"), Value::from(false)])
	);
}

#[test]
fn surplus_declared_arguments_are_dropped() {
	let sig = CallableSignature::new([Parameter::required()]);
	let bound = bind(&decl([Value::from(1), Value::from(2)]), &sig, None).unwrap();
	assert_eq!(bound, values([Value::from(1)]));
}
