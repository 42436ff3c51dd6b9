use std::collections::HashMap;

use rstest::rstest;
use tessera_registry::{ConditionOperator, ConditionSpec};

use super::evaluate;
use crate::error::InvocationError;
use crate::host::ConditionSource;

struct Conditions(HashMap<&'static str, bool>);

impl ConditionSource for Conditions {
	fn condition(&self, name: &str) -> Option<bool> {
		self.0.get(name).copied()
	}
}

fn conditions(pairs: &[(&'static str, bool)]) -> Conditions {
	Conditions(pairs.iter().copied().collect())
}

#[test]
fn empty_names_fail() {
	let source = conditions(&[]);
	let err = evaluate(&source, "EnableIf", &ConditionSpec::default()).unwrap_err();
	assert_eq!(err, InvocationError::NoConditionsSpecified { kind: "EnableIf".into() });
	assert_eq!(
		err.to_string(),
		"EnableIf needs a valid boolean condition field, property or method name to work"
	);
}

#[rstest]
#[case(ConditionOperator::Or, false, true)]
#[case(ConditionOperator::Or, true, false)]
#[case(ConditionOperator::And, false, false)]
#[case(ConditionOperator::And, true, true)]
fn combines_then_inverts(#[case] operator: ConditionOperator, #[case] inverted: bool, #[case] expected: bool) {
	let source = conditions(&[("a", false), ("b", true)]);
	let mut spec = ConditionSpec::many(operator, ["a", "b"]);
	spec.inverted = inverted;
	assert_eq!(evaluate(&source, "ShowIf", &spec), Ok(expected));
}

#[test]
fn unresolved_name_is_reported() {
	let source = conditions(&[("a", true)]);
	let spec = ConditionSpec::many(ConditionOperator::Or, ["a", "missing"]);
	assert_eq!(
		evaluate(&source, "EnableIf", &spec),
		Err(InvocationError::UnresolvedCondition { name: "missing".into() })
	);
}

#[test]
fn reads_current_state() {
	let mut source = conditions(&[("ready", false)]);
	let spec = ConditionSpec::one("ready");
	assert_eq!(evaluate(&source, "EnableIf", &spec), Ok(false));
	source.0.insert("ready", true);
	assert_eq!(evaluate(&source, "EnableIf", &spec), Ok(true));
}
