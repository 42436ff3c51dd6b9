/// Errors raised while building a handler registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// The same kind key was registered twice.
	#[error("duplicate handler for marker kind {kind:?}")]
	DuplicateKind { kind: Box<str> },
}
