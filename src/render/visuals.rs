use std::collections::BTreeMap;

use super::sink::RenderSink;
use crate::algorithm::{EdgeVisual, NodeVisual};
use crate::config::Palette;
use crate::graph::{EdgeKey, Graph, NodeId};

/// Retained visual state of the drawn graph.
///
/// Only nodes and edges that exist in the graph are tracked; updates naming
/// anything else are dropped, the same way a painter would find no shape to
/// restyle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualState {
	nodes: BTreeMap<NodeId, NodeVisual>,
	edges: BTreeMap<EdgeKey, EdgeVisual>,
	base_node: NodeVisual,
	base_edge: EdgeVisual,
	message: String,
}

impl VisualState {
	/// Every node and edge of `graph` in its base style.
	pub fn new(graph: &Graph, palette: &Palette) -> Self {
		let base_node = NodeVisual {
			color: palette.node_fill.clone(),
			text: String::new(),
		};
		let base_edge = EdgeVisual {
			color: palette.edge_stroke.clone(),
			width: palette.edge_width,
		};
		Self {
			nodes: graph.nodes().map(|id| (id, base_node.clone())).collect(),
			edges: graph
				.edges()
				.iter()
				.map(|e| (e.key(), base_edge.clone()))
				.collect(),
			base_node,
			base_edge,
			message: String::new(),
		}
	}

	/// Current style of a node.
	pub fn node(&self, id: NodeId) -> Option<&NodeVisual> {
		self.nodes.get(&id)
	}

	/// Current style of an edge.
	pub fn edge(&self, key: EdgeKey) -> Option<&EdgeVisual> {
		self.edges.get(&key)
	}

	/// Status text of the last applied step.
	pub fn message(&self) -> &str {
		&self.message
	}

	/// `true` when no overlay is showing.
	pub fn is_base(&self) -> bool {
		self.nodes.values().all(|n| *n == self.base_node)
			&& self.edges.values().all(|e| *e == self.base_edge)
	}
}

impl RenderSink for VisualState {
	fn set_node_state(&mut self, id: NodeId, state: &NodeVisual) {
		if let Some(slot) = self.nodes.get_mut(&id) {
			slot.clone_from(state);
		}
	}

	fn set_edge_state(&mut self, key: EdgeKey, state: &EdgeVisual) {
		if let Some(slot) = self.edges.get_mut(&key) {
			slot.clone_from(state);
		}
	}

	fn set_message(&mut self, message: &str) {
		message.clone_into(&mut self.message);
	}

	fn clear_overlay(&mut self) {
		for node in self.nodes.values_mut() {
			node.clone_from(&self.base_node);
		}
		for edge in self.edges.values_mut() {
			edge.clone_from(&self.base_edge);
		}
	}
}
