//! Kind-keyed handler lookup.
//!
//! A [`HandlerRegistry`] is assembled once at startup with a
//! [`HandlerRegistryBuilder`] and is read-only afterwards. Consumers receive it
//! by reference; there is no process-wide instance.

use rustc_hash::FxHashMap as HashMap;

use crate::error::RegistryError;


/// Frozen map from marker kind key to handler.
pub struct HandlerRegistry<H: ?Sized> {
	by_kind: HashMap<Box<str>, Box<H>>,
	kind_order: Vec<Box<str>>,
}

impl<H: ?Sized> HandlerRegistry<H> {
	pub fn builder() -> HandlerRegistryBuilder<H> {
		HandlerRegistryBuilder::default()
	}

	/// An empty registry; every kind resolves to `None`.
	pub fn empty() -> Self {
		Self::builder().build()
	}

	/// Looks up the handler for `kind`.
	///
	/// `None` means no handler exists for this kind, which is expected for
	/// purely informational markers.
	#[inline]
	pub fn resolve(&self, kind: &str) -> Option<&H> {
		self.by_kind.get(kind).map(|handler| &**handler)
	}

	pub fn contains(&self, kind: &str) -> bool {
		self.by_kind.contains_key(kind)
	}

	/// Registered kind keys, in registration order.
	pub fn kinds(&self) -> impl Iterator<Item = &str> {
		self.kind_order.iter().map(|kind| &**kind)
	}

	pub fn len(&self) -> usize {
		self.kind_order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.kind_order.is_empty()
	}
}

impl<H: ?Sized> std::fmt::Debug for HandlerRegistry<H> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HandlerRegistry").field("kinds", &self.kind_order).finish()
	}
}

/// Collects handlers before the registry is frozen.
pub struct HandlerRegistryBuilder<H: ?Sized> {
	by_kind: HashMap<Box<str>, Box<H>>,
	kind_order: Vec<Box<str>>,
}

impl<H: ?Sized> Default for HandlerRegistryBuilder<H> {
	fn default() -> Self {
		Self {
			by_kind: HashMap::default(),
			kind_order: Vec::new(),
		}
	}
}

impl<H: ?Sized> HandlerRegistryBuilder<H> {
	/// Registers `handler` for `kind`.
	///
	/// Each kind has exactly one handler; registering a kind twice fails and
	/// leaves the first handler in place.
	pub fn register(&mut self, kind: impl Into<Box<str>>, handler: Box<H>) -> Result<&mut Self, RegistryError> {
		let kind = kind.into();
		if self.by_kind.contains_key(&kind) {
			return Err(RegistryError::DuplicateKind { kind });
		}
		self.kind_order.push(kind.clone());
		self.by_kind.insert(kind, handler);
		Ok(self)
	}

	pub fn build(self) -> HandlerRegistry<H> {
		HandlerRegistry {
			by_kind: self.by_kind,
			kind_order: self.kind_order,
		}
	}
}
