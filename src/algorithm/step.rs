use std::collections::BTreeMap;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

use crate::graph::{EdgeKey, NodeId};

/// Visual state of one node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeVisual {
	/// Fill color.
	pub color: String,
	/// Info text shown above the node, e.g. a tentative distance.
	#[serde(default)]
	pub text: String,
}

/// Visual state of one edge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeVisual {
	/// Stroke color.
	pub color: String,
	/// Stroke width in pixels.
	pub width: f64,
}

/// One frame of algorithm progress.
///
/// Only the listed nodes and edges change when the step is applied;
/// everything else keeps whatever the previous steps left behind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualizationStep {
	/// Node changes keyed by id.
	#[serde(default, deserialize_with = "lenient_keys")]
	pub nodes: BTreeMap<NodeId, NodeVisual>,
	/// Edge changes keyed by `"u-v"`.
	#[serde(default, deserialize_with = "lenient_keys")]
	pub edges: BTreeMap<EdgeKey, EdgeVisual>,
	/// Status line for this frame.
	#[serde(default)]
	pub message: String,
}

/// Keys that don't parse name nothing that could be drawn, so they are
/// dropped instead of failing the whole response.
fn lenient_keys<'de, D, K, V>(deserializer: D) -> Result<BTreeMap<K, V>, D::Error>
where
	D: Deserializer<'de>,
	K: ParseKey + Ord,
	V: Deserialize<'de>,
{
	let raw = BTreeMap::<String, V>::deserialize(deserializer)?;
	Ok(raw
		.into_iter()
		.filter_map(|(key, value)| match K::parse_key(&key) {
			Some(key) => Some((key, value)),
			None => {
				warn!("ignoring step entry with unrecognised key `{key}`");
				None
			}
		})
		.collect())
}

trait ParseKey: Sized {
	fn parse_key(raw: &str) -> Option<Self>;
}

impl ParseKey for NodeId {
	fn parse_key(raw: &str) -> Option<Self> {
		raw.trim().parse().ok().map(NodeId)
	}
}

impl ParseKey for EdgeKey {
	fn parse_key(raw: &str) -> Option<Self> {
		EdgeKey::from_str(raw).ok()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_service_frame() {
		let raw = r##"{
			"nodes": {"0": {"color": "#f59e0b", "text": "0"}, "2": {"color": "#60a5fa", "text": "∞"}},
			"edges": {"0-1": {"color": "#facc15", "width": 3}},
			"message": "Starting Dijkstra's Algorithm from node A."
		}"##;
		let step: VisualizationStep = serde_json::from_str(raw).unwrap();
		assert_eq!(step.nodes[&NodeId(2)].text, "∞");
		let key = EdgeKey::new(NodeId(1), NodeId(0));
		assert_eq!(step.edges[&key].width, 3.0);
		assert!(step.message.starts_with("Starting"));
	}

	#[test]
	fn missing_sections_default_to_empty() {
		let step: VisualizationStep = serde_json::from_str(r#"{"message": "done"}"#).unwrap();
		assert!(step.nodes.is_empty() && step.edges.is_empty());
	}

	#[test]
	fn unrecognised_keys_are_skipped() {
		let raw = r##"{
			"nodes": {"1": {"color": "#4f46e5", "text": "2"}, "node-3": {"color": "#000", "text": ""}},
			"edges": {"edge-0-1": {"color": "#facc15", "width": 3}, "1-2": {"color": "#10b981", "width": 5}},
			"message": "Edge B-C added to MST. Cost: 2."
		}"##;
		let step: VisualizationStep = serde_json::from_str(raw).unwrap();
		assert_eq!(step.nodes.keys().copied().collect::<Vec<_>>(), [NodeId(1)]);
		assert_eq!(
			step.edges.keys().copied().collect::<Vec<_>>(),
			[EdgeKey::new(NodeId(1), NodeId(2))]
		);
	}
}
