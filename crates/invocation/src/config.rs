//! Engine configuration.
//!
//! Configuration is format-neutral data with TOML loading on top. Every field
//! has a default, so an empty document is a valid configuration.

use serde::Deserialize;
use tessera_primitives::LayoutMetrics;
use tessera_registry::LabelStyle;

use crate::error::ConfigError;


/// Label derivation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelConfig {
	pub style: LabelStyle,
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
	pub layout: LayoutMetrics,
	pub labels: LabelConfig,
}

impl EngineConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(src)?;
		config.validate()?;
		Ok(config)
	}

	/// Checks that layout metrics are usable.
	pub fn validate(&self) -> Result<(), ConfigError> {
		let metrics = &self.layout;
		positive("layout.single_line_height", metrics.single_line_height)?;
		positive("layout.view_width", metrics.view_width)?;
		positive("layout.half_width_ratio", metrics.half_width_ratio)?;
		if metrics.half_width_ratio > 1.0 {
			return Err(ConfigError::InvalidMetric {
				field: "layout.half_width_ratio",
				value: metrics.half_width_ratio,
				expected: "at most 1.0",
			});
		}
		Ok(())
	}
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
	if value.is_finite() && value > 0.0 {
		Ok(())
	} else {
		Err(ConfigError::InvalidMetric {
			field,
			value,
			expected: "a positive finite number",
		})
	}
}
