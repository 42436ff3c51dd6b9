//! Environment modes an action may be restricted to.

/// When a declarative action may be invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnableMode {
	/// Invocable both while editing and while executing.
	#[default]
	Always,
	/// Invocable only outside live execution.
	EditModeOnly,
	/// Invocable only during live execution.
	RuntimeOnly,
}

impl EnableMode {
	/// Returns true if this mode permits invocation given the environment's
	/// "currently executing" flag.
	pub const fn allows(self, executing: bool) -> bool {
		match self {
			Self::Always => true,
			Self::EditModeOnly => !executing,
			Self::RuntimeOnly => executing,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::EnableMode;

	#[test]
	fn allows_matrix() {
		assert!(EnableMode::Always.allows(true));
		assert!(EnableMode::Always.allows(false));
		assert!(EnableMode::EditModeOnly.allows(false));
		assert!(!EnableMode::EditModeOnly.allows(true));
		assert!(EnableMode::RuntimeOnly.allows(true));
		assert!(!EnableMode::RuntimeOnly.allows(false));
	}
}
