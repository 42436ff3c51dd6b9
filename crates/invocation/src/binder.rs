//! Reconciles declared arguments with a callable's formal parameters.

use tessera_primitives::Value;
use tessera_registry::ActionDeclaration;

use crate::error::InvocationError;
use crate::signature::{BoundArguments, CallableSignature};

#[cfg(test)]
mod tests;

/// Produces the argument vector for calling `signature` on behalf of
/// `declaration`.
///
/// When the declared argument count matches the parameter count the declared
/// arguments are used as-is. Otherwise each parameter takes, in order of
/// preference: the declared argument at its index, its default value, or, for
/// the first parameter only, `bound_value` (the current value of the field
/// the action is attached to).
pub fn bind(
	declaration: &ActionDeclaration,
	signature: &CallableSignature,
	bound_value: Option<&Value>,
) -> Result<BoundArguments, InvocationError> {
	let declared = declaration.arguments();
	let expected = signature.arity();

	if declared.len() == expected {
		return Ok(declared.to_vec().into());
	}

	signature
		.params
		.iter()
		.enumerate()
		.map(|(index, param)| {
			if let Some(arg) = declared.get(index) {
				Ok(arg.clone())
			} else if let Some(default) = &param.default {
				Ok(default.clone())
			} else if let (0, Some(value)) = (index, bound_value) {
				Ok(value.clone())
			} else {
				Err(InvocationError::UnmatchedParameterCount {
					declared: declared.len(),
					expected,
					index,
				})
			}
		})
		.collect()
}
