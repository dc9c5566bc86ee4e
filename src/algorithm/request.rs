use serde::Serialize;

use super::error::RunError;
use super::kind::AlgorithmKind;
use crate::graph::{Graph, NodeId};

/// Body of `POST /api/run_algorithm`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunRequest {
	/// Algorithm the service should run.
	pub algorithm: AlgorithmKind,
	/// The graph to run it on.
	pub graph: GraphPayload,
}

/// Graph section of a [`RunRequest`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphPayload {
	/// Node ids `0..N`.
	pub nodes: Vec<NodeId>,
	/// `[u, v, w]` triples in input order.
	pub edges: Vec<[u64; 3]>,
	/// Resolved start node, omitted from the JSON when absent.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub start_node: Option<NodeId>,
}

/// Builds the request for `kind` over `graph`.
///
/// The start label is resolved whenever it names a node, even for
/// algorithms that ignore it; it is only mandatory for those that need it.
pub fn build_request(
	kind: AlgorithmKind,
	graph: &Graph,
	start_label: &str,
) -> Result<RunRequest, RunError> {
	let start_node = graph.labels().resolve(start_label);
	if start_node.is_none() && kind.requires_start_node() {
		return Err(RunError::MissingStartNode {
			last: graph.labels().last_label(),
		});
	}
	Ok(RunRequest {
		algorithm: kind,
		graph: GraphPayload {
			nodes: graph.nodes().collect(),
			edges: graph.edges().iter().map(|e| e.as_triple()).collect(),
			start_node,
		},
	})
}
