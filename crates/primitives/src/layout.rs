//! Layout flags for declarative actions.
//!
//! A [`LayoutFlags`] value carries bits on three independent axes: where the
//! action sits relative to its member, how tall it is, and how wide it is.
//! Resolution always works from the raw bits; presets are only shorthands for
//! a fixed union of one bit per axis.

use serde::Deserialize;


bitflags::bitflags! {
	/// Position, height, and width bits of a declarative action.
	///
	/// More than one bit of an axis may be set. The `*_modifier` and
	/// [`position`](LayoutFlags::position) resolvers apply a fixed check order
	/// so that conflicting bits always resolve the same way.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct LayoutFlags: u8 {
		/// Drawn before the owning member.
		const ON_TOP = 1 << 0;
		/// Drawn after the owning member.
		const AT_BOTTOM = 1 << 1;
		/// Drawn in the same row as the owning member.
		const ALONG_SIDE = 1 << 2;

		/// Intrinsic single-line height.
		const SINGLE_LINE_HEIGHT = 1 << 3;
		/// Two lines tall.
		const DOUBLE_LINE_HEIGHT = 1 << 4;
		/// Three lines tall.
		const TRIPLE_LINE_HEIGHT = 1 << 5;

		/// Full available width.
		const FULL_WIDTH = 1 << 6;
		/// Half of the available width, centered.
		const HALF_WIDTH = 1 << 7;

		const POSITION = Self::ON_TOP.bits() | Self::AT_BOTTOM.bits() | Self::ALONG_SIDE.bits();
		const HEIGHT = Self::SINGLE_LINE_HEIGHT.bits() | Self::DOUBLE_LINE_HEIGHT.bits() | Self::TRIPLE_LINE_HEIGHT.bits();
		const WIDTH = Self::FULL_WIDTH.bits() | Self::HALF_WIDTH.bits();
	}
}

impl Default for LayoutFlags {
	fn default() -> Self {
		LayoutPreset::Default.flags()
	}
}

impl LayoutFlags {
	/// Returns true if any bit of `test` is set in `self`.
	#[inline]
	pub const fn has_flag(self, test: LayoutFlags) -> bool {
		self.intersects(test)
	}

	/// Resolves the position axis.
	///
	/// Checks `ON_TOP`, then `AT_BOTTOM`, then `ALONG_SIDE`; the first set bit
	/// wins. With no position bit set the action sits at the bottom.
	pub const fn position(self) -> Position {
		if self.has_flag(Self::ON_TOP) {
			Position::OnTop
		} else if self.has_flag(Self::AT_BOTTOM) {
			Position::AtBottom
		} else if self.has_flag(Self::ALONG_SIDE) {
			Position::AlongSide
		} else {
			Position::AtBottom
		}
	}

	/// Resolves the height axis.
	///
	/// `DOUBLE_LINE_HEIGHT` is checked before `TRIPLE_LINE_HEIGHT`. Returns
	/// `None` when the caller should use intrinsic single-line sizing.
	pub const fn height_modifier(self) -> Option<HeightModifier> {
		if self.has_flag(Self::DOUBLE_LINE_HEIGHT) {
			Some(HeightModifier::DoubleLine)
		} else if self.has_flag(Self::TRIPLE_LINE_HEIGHT) {
			Some(HeightModifier::TripleLine)
		} else {
			None
		}
	}

	/// Resolves the width axis. Only `HALF_WIDTH` produces a modifier.
	pub const fn width_modifier(self) -> Option<WidthModifier> {
		if self.has_flag(Self::HALF_WIDTH) {
			Some(WidthModifier::Half)
		} else {
			None
		}
	}
}

impl From<LayoutPreset> for LayoutFlags {
	fn from(preset: LayoutPreset) -> Self {
		preset.flags()
	}
}

impl From<Position> for LayoutFlags {
	fn from(position: Position) -> Self {
		position.flag()
	}
}

/// Named unions of one bit per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutPreset {
	/// Bottom, single line, full width.
	#[default]
	Default,
	/// Bottom, single line, half width.
	MiniBottom,
	/// Top, single line, half width.
	MiniTop,
	/// Bottom, double line, half width.
	FatBottom,
	/// Bottom, triple line, full width.
	Big,
}

impl LayoutPreset {
	/// Every preset, in declaration order.
	pub const ALL: [LayoutPreset; 5] = [Self::Default, Self::MiniBottom, Self::MiniTop, Self::FatBottom, Self::Big];

	/// Returns the constituent bits of this preset.
	pub const fn flags(self) -> LayoutFlags {
		match self {
			Self::Default => LayoutFlags::AT_BOTTOM
				.union(LayoutFlags::SINGLE_LINE_HEIGHT)
				.union(LayoutFlags::FULL_WIDTH),
			Self::MiniBottom => LayoutFlags::AT_BOTTOM
				.union(LayoutFlags::SINGLE_LINE_HEIGHT)
				.union(LayoutFlags::HALF_WIDTH),
			Self::MiniTop => LayoutFlags::ON_TOP
				.union(LayoutFlags::SINGLE_LINE_HEIGHT)
				.union(LayoutFlags::HALF_WIDTH),
			Self::FatBottom => LayoutFlags::AT_BOTTOM
				.union(LayoutFlags::DOUBLE_LINE_HEIGHT)
				.union(LayoutFlags::HALF_WIDTH),
			Self::Big => LayoutFlags::AT_BOTTOM
				.union(LayoutFlags::TRIPLE_LINE_HEIGHT)
				.union(LayoutFlags::FULL_WIDTH),
		}
	}
}

/// Resolved position of an action relative to its member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
	/// Before the member.
	OnTop,
	/// After the member.
	AtBottom,
	/// In the member's row.
	AlongSide,
}

impl Position {
	/// Returns the bit for this position.
	pub const fn flag(self) -> LayoutFlags {
		match self {
			Self::OnTop => LayoutFlags::ON_TOP,
			Self::AtBottom => LayoutFlags::AT_BOTTOM,
			Self::AlongSide => LayoutFlags::ALONG_SIDE,
		}
	}
}

/// Explicit height override; absent means intrinsic single-line height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeightModifier {
	DoubleLine,
	TripleLine,
}

impl HeightModifier {
	/// Number of lines this modifier spans.
	pub const fn lines(self) -> u8 {
		match self {
			Self::DoubleLine => 2,
			Self::TripleLine => 3,
		}
	}
}

/// Explicit width override; absent means full width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthModifier {
	Half,
}

/// Host metrics used to turn modifiers into concrete sizes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutMetrics {
	/// Height of one line of controls.
	pub single_line_height: f32,
	/// Width of the surface actions are laid out in.
	pub view_width: f32,
	/// Fraction of `view_width` used by [`WidthModifier::Half`].
	pub half_width_ratio: f32,
}

impl Default for LayoutMetrics {
	fn default() -> Self {
		Self {
			single_line_height: 18.0,
			view_width: 400.0,
			half_width_ratio: 0.5,
		}
	}
}

impl LayoutMetrics {
	pub fn height(&self, modifier: HeightModifier) -> f32 {
		self.single_line_height * f32::from(modifier.lines())
	}

	pub fn width(&self, modifier: WidthModifier) -> f32 {
		match modifier {
			WidthModifier::Half => self.view_width * self.half_width_ratio,
		}
	}
}

/// Concrete placement of one action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonLayout {
	pub position: Position,
	/// Explicit height, or `None` for intrinsic sizing.
	pub height: Option<f32>,
	/// Explicit width, or `None` for full width.
	pub width: Option<f32>,
	/// Whether the action is centered in its row.
	pub centered: bool,
}

impl ButtonLayout {
	/// Resolves `flags` against `metrics`.
	///
	/// Actions in the member's own row keep intrinsic sizing; size modifiers
	/// only apply to actions drawn on their own line. A width override centers
	/// the action.
	pub fn resolve(flags: LayoutFlags, metrics: &LayoutMetrics) -> Self {
		let position = flags.position();
		if position == Position::AlongSide {
			return Self {
				position,
				height: None,
				width: None,
				centered: false,
			};
		}

		let width = flags.width_modifier().map(|m| metrics.width(m));
		Self {
			position,
			height: flags.height_modifier().map(|m| metrics.height(m)),
			width,
			centered: width.is_some(),
		}
	}
}
