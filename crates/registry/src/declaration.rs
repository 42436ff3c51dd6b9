//! Canonical action declarations.
//!
//! Every way of writing an action marker (a bare argument list, one string
//! naming both label and target, an explicit label/target pair, with or
//! without layout and enable mode) is funneled through
//! [`ActionDeclarationBuilder`], so equivalent inputs always produce the same
//! record. A label alone does not name a target; only the single-string shape
//! sets both.

use std::cell::OnceCell;

use tessera_primitives::{EnableMode, LayoutFlags, LayoutPreset, Value};

use crate::label::LabelStyle;


/// One declarative action attached to a field or method.
#[derive(Debug, Clone)]
pub struct ActionDeclaration {
	label: Option<String>,
	target: Option<String>,
	arguments: Vec<Value>,
	layout: LayoutFlags,
	enable_mode: EnableMode,
	display_label: OnceCell<String>,
}

impl ActionDeclaration {
	pub fn builder() -> ActionDeclarationBuilder {
		ActionDeclarationBuilder::default()
	}

	/// An unlabeled action passing `args`.
	pub fn with_args(args: impl IntoIterator<Item = Value>) -> Self {
		Self::builder().args(args).build()
	}

	/// An action whose label and target are the same string.
	pub fn named(label_and_target: impl Into<String>, args: impl IntoIterator<Item = Value>) -> Self {
		let name = label_and_target.into();
		Self::builder().label(name.clone()).target(name).args(args).build()
	}

	/// Like [`named`](Self::named), with explicit layout.
	pub fn named_with_layout(
		label_and_target: impl Into<String>,
		layout: impl Into<LayoutFlags>,
		args: impl IntoIterator<Item = Value>,
	) -> Self {
		let name = label_and_target.into();
		Self::builder()
			.label(name.clone())
			.target(name)
			.layout(layout)
			.args(args)
			.build()
	}

	/// An action with independently optional label and target.
	pub fn labeled(label: Option<&str>, target: Option<&str>, args: impl IntoIterator<Item = Value>) -> Self {
		Self::labeled_with_mode(label, target, LayoutPreset::Default, EnableMode::Always, args)
	}

	/// Like [`labeled`](Self::labeled), with explicit layout.
	pub fn labeled_with_layout(
		label: Option<&str>,
		target: Option<&str>,
		layout: impl Into<LayoutFlags>,
		args: impl IntoIterator<Item = Value>,
	) -> Self {
		Self::labeled_with_mode(label, target, layout, EnableMode::Always, args)
	}

	/// The most explicit construction shape; all others reduce to this one.
	pub fn labeled_with_mode(
		label: Option<&str>,
		target: Option<&str>,
		layout: impl Into<LayoutFlags>,
		enable_mode: EnableMode,
		args: impl IntoIterator<Item = Value>,
	) -> Self {
		let mut builder = Self::builder().layout(layout).enable_mode(enable_mode).args(args);
		if let Some(label) = label {
			builder = builder.label(label);
		}
		if let Some(target) = target {
			builder = builder.target(target);
		}
		builder.build()
	}

	/// The declared label, back-filled from the target name when absent.
	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	/// Name of the callable this action invokes.
	///
	/// Method-attached actions invoke their own method and ignore this. A
	/// field-attached action without one cannot be invoked.
	pub fn target(&self) -> Option<&str> {
		self.target.as_deref()
	}

	pub fn arguments(&self) -> &[Value] {
		&self.arguments
	}

	pub fn layout(&self) -> LayoutFlags {
		self.layout
	}

	pub fn enable_mode(&self) -> EnableMode {
		self.enable_mode
	}

	/// Label to display for this action.
	///
	/// Uses the declared label when present. Otherwise the label is derived
	/// from `member_name` on first call and cached for the lifetime of this
	/// declaration.
	pub fn display_label(&self, member_name: &str, style: LabelStyle) -> &str {
		match &self.label {
			Some(label) => label,
			None => self.display_label.get_or_init(|| style.apply(member_name)),
		}
	}

	/// Returns true if this action is drawn in a layout pass requesting `pass`.
	pub fn drawn_in(&self, pass: LayoutFlags) -> bool {
		self.layout.has_flag(pass)
	}
}

// The derived label cache is not part of a declaration's identity.
impl PartialEq for ActionDeclaration {
	fn eq(&self, other: &Self) -> bool {
		self.label == other.label
			&& self.target == other.target
			&& self.arguments == other.arguments
			&& self.layout == other.layout
			&& self.enable_mode == other.enable_mode
	}
}

/// Builder converging every construction shape on one [`ActionDeclaration`].
#[derive(Debug, Clone, Default)]
pub struct ActionDeclarationBuilder {
	label: Option<String>,
	target: Option<String>,
	arguments: Vec<Value>,
	layout: Option<LayoutFlags>,
	enable_mode: EnableMode,
}

impl ActionDeclarationBuilder {
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn target(mut self, target: impl Into<String>) -> Self {
		self.target = Some(target.into());
		self
	}

	pub fn arg(mut self, arg: impl Into<Value>) -> Self {
		self.arguments.push(arg.into());
		self
	}

	pub fn args(mut self, args: impl IntoIterator<Item = Value>) -> Self {
		self.arguments.extend(args);
		self
	}

	pub fn layout(mut self, layout: impl Into<LayoutFlags>) -> Self {
		self.layout = Some(layout.into());
		self
	}

	pub fn enable_mode(mut self, mode: EnableMode) -> Self {
		self.enable_mode = mode;
		self
	}

	/// Normalizes and freezes the declaration.
	///
	/// Empty strings count as absent. A missing label is taken from the
	/// target; a missing target stays missing.
	pub fn build(self) -> ActionDeclaration {
		let target = self.target.filter(|s| !s.is_empty());
		let label = self.label.filter(|s| !s.is_empty()).or_else(|| target.clone());

		ActionDeclaration {
			label,
			target,
			arguments: self.arguments,
			layout: self.layout.unwrap_or_default(),
			enable_mode: self.enable_mode,
			display_label: OnceCell::new(),
		}
	}
}
