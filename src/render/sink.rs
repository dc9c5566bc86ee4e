use crate::algorithm::{EdgeVisual, NodeVisual};
use crate::graph::{EdgeKey, NodeId};

/// Consumer of visual state changes.
///
/// Playback only ever talks to this trait, so the core can be driven
/// without any rendering technology present.
pub trait RenderSink {
	/// Sets fill color and info text of a node.
	fn set_node_state(&mut self, id: NodeId, state: &NodeVisual);

	/// Sets stroke color and width of an edge.
	fn set_edge_state(&mut self, key: EdgeKey, state: &EdgeVisual);

	/// Replaces the status line.
	fn set_message(&mut self, message: &str);

	/// Drops every algorithm overlay and shows the base graph again.
	fn clear_overlay(&mut self);
}
