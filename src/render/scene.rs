use super::visuals::VisualState;
use crate::config::Palette;
use crate::graph::{EdgeKey, Graph, NodeId};
use crate::layout::LayoutPoint;

/// Vertical offset of an edge's weight label above its midpoint.
const WEIGHT_LABEL_LIFT: f64 = 8.0;
/// Baseline nudge that centres a node's letter in its circle.
const LETTER_BASELINE: f64 = 6.0;
/// Gap between a node's circle and its info text.
const INFO_GAP: f64 = 8.0;

/// A line between two nodes with its weight label.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneEdge {
	/// Visual identity shared by parallel edges.
	pub key: EdgeKey,
	/// Centre of the source node.
	pub from: LayoutPoint,
	/// Centre of the target node.
	pub to: LayoutPoint,
	/// Stroke color.
	pub color: String,
	/// Stroke width.
	pub width: f64,
	/// Weight label text.
	pub weight: String,
	/// Anchor of the weight label.
	pub weight_at: LayoutPoint,
}

/// A node circle with its letter and info text.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
	/// Node the circle belongs to.
	pub id: NodeId,
	/// Circle centre.
	pub center: LayoutPoint,
	/// Circle radius.
	pub radius: f64,
	/// Circle fill.
	pub fill: String,
	/// The node's letter.
	pub letter: String,
	/// Anchor of the letter.
	pub letter_at: LayoutPoint,
	/// Info text, often empty.
	pub info: String,
	/// Anchor of the info text, above the circle.
	pub info_at: LayoutPoint,
}

/// Everything a painter needs for one frame, in paint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	/// Painted first.
	pub edges: Vec<SceneEdge>,
	/// Painted over the edges.
	pub nodes: Vec<SceneNode>,
}

impl Scene {
	/// `true` when there is no graph to paint.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

/// Turns the drawn graph and its current visual state into paint instructions.
///
/// Edges come first, in input order, so nodes sit on top and the later of two
/// parallel edges is the one that shows.
pub fn compose(
	graph: &Graph,
	layout: &[LayoutPoint],
	visuals: &VisualState,
	palette: &Palette,
) -> Scene {
	let point = |id: NodeId| layout.get(id.index()).copied().unwrap_or_default();

	let edges = graph
		.edges()
		.iter()
		.map(|edge| {
			let (from, to) = (point(edge.from), point(edge.to));
			let key = edge.key();
			let (color, width) = match visuals.edge(key) {
				Some(v) => (v.color.clone(), v.width),
				None => (palette.edge_stroke.clone(), palette.edge_width),
			};
			SceneEdge {
				key,
				from,
				to,
				color,
				width,
				weight: edge.weight.to_string(),
				weight_at: LayoutPoint {
					x: (from.x + to.x) / 2.0,
					y: (from.y + to.y) / 2.0 - WEIGHT_LABEL_LIFT,
				},
			}
		})
		.collect();

	let radius = palette.node_radius;
	let nodes = graph
		.nodes()
		.map(|id| {
			let center = point(id);
			let (fill, info) = match visuals.node(id) {
				Some(v) => (v.color.clone(), v.text.clone()),
				None => (palette.node_fill.clone(), String::new()),
			};
			SceneNode {
				id,
				center,
				radius,
				fill,
				letter: graph
					.labels()
					.label_of(id)
					.map(String::from)
					.unwrap_or_default(),
				letter_at: LayoutPoint {
					x: center.x,
					y: center.y + LETTER_BASELINE,
				},
				info,
				info_at: LayoutPoint {
					x: center.x,
					y: center.y - radius - INFO_GAP,
				},
			}
		})
		.collect();

	Scene { edges, nodes }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::algorithm::{EdgeVisual, NodeVisual};
	use crate::graph::{EdgeRow, build_graph};
	use crate::layout::circular;
	use crate::render::RenderSink;

	#[test]
	fn reflects_visual_state() {
		let graph = build_graph(
			3,
			&[EdgeRow::new("A", "B", "4"), EdgeRow::new("B", "C", "2")],
		)
		.unwrap();
		let palette = Palette::default();
		let layout = circular(3, 400.0, 300.0);
		let mut visuals = VisualState::new(&graph, &palette);
		visuals.set_node_state(
			NodeId(2),
			&NodeVisual {
				color: "#f59e0b".into(),
				text: "6".into(),
			},
		);
		visuals.set_edge_state(
			EdgeKey::new(NodeId(1), NodeId(2)),
			&EdgeVisual {
				color: "#10b981".into(),
				width: 5.0,
			},
		);

		let scene = compose(&graph, &layout, &visuals, &palette);
		assert_eq!(scene.nodes.len(), 3);
		assert_eq!(scene.nodes[2].letter, "C");
		assert_eq!(scene.nodes[2].info, "6");
		assert_eq!(scene.nodes[0].fill, palette.node_fill);
		assert_eq!(scene.nodes[0].center, layout[0]);
		assert_eq!(scene.edges[1].width, 5.0);
		assert_eq!(scene.edges[0].weight, "4");
		assert_eq!(
			scene.edges[0].weight_at.y,
			(layout[0].y + layout[1].y) / 2.0 - WEIGHT_LABEL_LIFT
		);
	}
}
