//! Placement of field-attached actions around their field.

use tessera_primitives::Position;

use crate::host::Member;

/// Action indices grouped by where they are drawn relative to a field.
///
/// Indices refer to the member's action declarations and keep declaration
/// order inside each group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldLayoutPlan {
	/// Drawn before the field.
	pub on_top: Vec<usize>,
	/// Drawn after the field, in the field's own row.
	pub along_side: Vec<usize>,
	/// Drawn after the field's row.
	pub at_bottom: Vec<usize>,
}

impl FieldLayoutPlan {
	pub fn for_member(member: &Member) -> Self {
		let mut plan = Self::default();
		for (index, decl) in member.actions().enumerate() {
			match decl.layout().position() {
				Position::OnTop => plan.on_top.push(index),
				Position::AlongSide => plan.along_side.push(index),
				Position::AtBottom => plan.at_bottom.push(index),
			}
		}
		plan
	}

	/// Whether the field shares its row with actions.
	///
	/// The row is opened once no matter how many actions sit along side.
	pub fn opens_row(&self) -> bool {
		!self.along_side.is_empty()
	}

	/// Indices in drawing order: top, row, bottom.
	pub fn drawing_order(&self) -> impl Iterator<Item = usize> + '_ {
		self.on_top.iter().chain(&self.along_side).chain(&self.at_bottom).copied()
	}
}
