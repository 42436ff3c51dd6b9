//! Condition evaluation against live target state.

use tessera_registry::ConditionSpec;

use crate::error::InvocationError;
use crate::host::ConditionSource;

#[cfg(test)]
mod tests;

/// Evaluates `spec` against `source`.
///
/// Every name is looked up before the values are combined, so an unresolvable
/// name fails the whole evaluation regardless of its position. `kind` names
/// the marker carrying the spec and is only used for the
/// [`InvocationError::NoConditionsSpecified`] error.
pub fn evaluate<S>(source: &S, kind: &str, spec: &ConditionSpec) -> Result<bool, InvocationError>
where
	S: ConditionSource + ?Sized,
{
	if spec.names.is_empty() {
		return Err(InvocationError::NoConditionsSpecified { kind: kind.to_string() });
	}

	let values = spec
		.names
		.iter()
		.map(|name| {
			source
				.condition(name)
				.ok_or_else(|| InvocationError::UnresolvedCondition { name: name.clone() })
		})
		.collect::<Result<Vec<_>, _>>()?;

	Ok(spec.apply(&values))
}
