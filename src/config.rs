//! Runtime configuration.
//!
//! The host page may embed a JSON block
//! `<script id="visualizer-config" type="application/json">…</script>`;
//! every field is optional and falls back to the defaults below.

use log::{Level, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::algorithm::DEFAULT_ENDPOINT;

/// Id of the `<script>` element holding the page's configuration JSON.
pub const CONFIG_ELEMENT_ID: &str = "visualizer-config";

/// Problems with the embedded config block.
#[derive(Error, Debug)]
pub enum ConfigError {
	/// The block is not valid JSON for [`VisualizerConfig`].
	#[error("invalid visualizer config: {0}")]
	Parse(#[from] serde_json::Error),

	/// `log_level` names no [`Level`].
	#[error("unknown log level `{0}`")]
	LogLevel(String),
}

/// Page-level settings of the visualizer.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VisualizerConfig {
	/// Endpoint of the algorithm service.
	#[serde(default = "default_api_url")]
	pub api_url: String,

	/// Maximum console log level, e.g. `"info"`.
	#[serde(default = "default_log_level")]
	pub log_level: String,

	/// Surface size used when the canvas container reports no size.
	#[serde(default = "default_fallback_width")]
	pub fallback_width: f64,

	/// See `fallback_width`.
	#[serde(default = "default_fallback_height")]
	pub fallback_height: f64,

	/// Base drawing colors.
	#[serde(default)]
	pub palette: Palette,
}

impl Default for VisualizerConfig {
	fn default() -> Self {
		Self {
			api_url: default_api_url(),
			log_level: default_log_level(),
			fallback_width: default_fallback_width(),
			fallback_height: default_fallback_height(),
			palette: Palette::default(),
		}
	}
}

fn default_api_url() -> String {
	DEFAULT_ENDPOINT.to_string()
}

fn default_log_level() -> String {
	"debug".to_string()
}

fn default_fallback_width() -> f64 {
	800.0
}

fn default_fallback_height() -> f64 {
	600.0
}

/// Colors and sizes of the base graph, before any algorithm overlay.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Palette {
	/// Canvas fill.
	pub background: String,
	/// Node circle fill.
	pub node_fill: String,
	/// Node circle radius in pixels.
	pub node_radius: f64,
	/// Color of the letter inside a node.
	pub node_label: String,
	/// Color of the info text above a node.
	pub info_text: String,
	/// Edge line color.
	pub edge_stroke: String,
	/// Edge line width in pixels.
	pub edge_width: f64,
	/// Color of edge weight labels.
	pub weight_text: String,
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			background: "#0f172a".into(),
			node_fill: "#60a5fa".into(),
			node_radius: 24.0,
			node_label: "#ffffff".into(),
			info_text: "#fbbf24".into(),
			edge_stroke: "#94a3b8".into(),
			edge_width: 3.0,
			weight_text: "#e2e8f0".into(),
		}
	}
}

impl VisualizerConfig {
	/// Parses a config block and checks its log level.
	pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_str(raw)?;
		config.level()?;
		Ok(config)
	}

	/// The configured log level.
	pub fn level(&self) -> Result<Level, ConfigError> {
		self.log_level
			.parse()
			.map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
	}

	/// Reads the embedded config block of the current page.
	///
	/// A missing block yields the defaults; a malformed one is reported and
	/// also yields the defaults.
	pub fn from_document() -> Self {
		let raw = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
			.and_then(|el| el.text_content());
		match raw {
			Some(raw) => Self::from_json_str(&raw).unwrap_or_else(|e| {
				warn!("{e}; using defaults");
				Self::default()
			}),
			None => Self::default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_is_all_defaults() {
		assert_eq!(
			VisualizerConfig::from_json_str("{}").unwrap(),
			VisualizerConfig::default()
		);
	}

	#[test]
	fn partial_palette_keeps_other_defaults() {
		let config = VisualizerConfig::from_json_str(
			r##"{"api_url": "http://localhost:5000/api/run_algorithm", "palette": {"edge_width": 2}}"##,
		)
		.unwrap();
		assert_eq!(config.api_url, "http://localhost:5000/api/run_algorithm");
		assert_eq!(config.palette.edge_width, 2.0);
		assert_eq!(config.palette.node_fill, "#60a5fa");
	}

	#[test]
	fn rejects_bad_level_and_bad_json() {
		assert!(matches!(
			VisualizerConfig::from_json_str(r#"{"log_level": "loud"}"#),
			Err(ConfigError::LogLevel(_))
		));
		assert!(matches!(
			VisualizerConfig::from_json_str("{"),
			Err(ConfigError::Parse(_))
		));
	}

	#[test]
	fn level_parses_case_insensitively() {
		let config = VisualizerConfig {
			log_level: "WARN".into(),
			..Default::default()
		};
		assert_eq!(config.level().unwrap(), Level::Warn);
	}
}
