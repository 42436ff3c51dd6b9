//! Display labels derived from member names.

use heck::ToTitleCase;
use serde::Deserialize;


/// How a missing label is derived from a member name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
	/// Strip field prefixes and split into title-cased words.
	#[default]
	Nicify,
	/// Use the member name as written.
	Verbatim,
}

impl LabelStyle {
	pub fn apply(self, member_name: &str) -> String {
		match self {
			Self::Nicify => nicify(member_name),
			Self::Verbatim => member_name.to_string(),
		}
	}
}

/// Turns an identifier into a human-readable label.
///
/// `IncrementMyInt` becomes `Increment My Int`; a leading `m_` or `_` is
/// dropped first.
pub fn nicify(name: &str) -> String {
	let trimmed = name.strip_prefix("m_").unwrap_or(name).trim_start_matches('_');
	if trimmed.is_empty() {
		return name.to_string();
	}
	trimmed.to_title_case()
}
