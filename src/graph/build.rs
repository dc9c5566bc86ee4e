use std::num::IntErrorKind;

use log::debug;

use super::error::GraphError;
use super::types::{
	Edge, EdgeRow, Graph, LabelMap, MAX_EDGES, MAX_NODES, MIN_EDGES, MIN_NODES,
};

/// Produces the label mapping for `count` nodes.
pub fn define_nodes(count: usize) -> Result<LabelMap, GraphError> {
	if !(MIN_NODES..=MAX_NODES).contains(&count) {
		return Err(GraphError::NodeCountOutOfRange { count });
	}
	Ok(LabelMap::with_len(count))
}

/// Checks the number of edge rows to generate.
pub fn check_edge_count(count: usize) -> Result<usize, GraphError> {
	if !(MIN_EDGES..=MAX_EDGES).contains(&count) {
		return Err(GraphError::EdgeCountOutOfRange { count });
	}
	Ok(count)
}

/// Validates a single edge row. `ordinal` is the 0-based row position.
///
/// Checks run in a fixed order: blank fields, unknown labels, weight, self-loop.
/// Only the first failure is reported.
pub fn parse_edge(
	labels: &LabelMap,
	from: &str,
	to: &str,
	weight: &str,
	ordinal: usize,
) -> Result<Edge, GraphError> {
	let row = ordinal + 1;
	let (from, to, weight) = (from.trim(), to.trim(), weight.trim());
	if from.is_empty() || to.is_empty() || weight.is_empty() {
		return Err(GraphError::MissingField { row });
	}

	let (Some(from_id), Some(to_id)) = (labels.resolve(from), labels.resolve(to)) else {
		return Err(GraphError::UnknownNode {
			row,
			last: labels.last_label(),
		});
	};

	let weight = match weight.parse::<u64>() {
		Ok(w) if w > 0 => w,
		Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
			return Err(GraphError::WeightTooLarge {
				row,
				input: weight.to_string(),
			});
		}
		_ => {
			return Err(GraphError::InvalidWeight {
				row,
				input: weight.to_string(),
			});
		}
	};

	if from_id == to_id {
		return Err(GraphError::SelfLoop { row });
	}

	Ok(Edge {
		from: from_id,
		to: to_id,
		weight,
	})
}

/// Builds a complete graph or returns the first invalid row.
///
/// Nothing is produced unless every row validates.
pub fn build_graph(node_count: usize, rows: &[EdgeRow]) -> Result<Graph, GraphError> {
	let labels = define_nodes(node_count)?;
	let edges = rows
		.iter()
		.enumerate()
		.map(|(i, r)| parse_edge(&labels, &r.from, &r.to, &r.weight, i))
		.collect::<Result<Vec<_>, _>>()?;
	debug!("built graph: {} nodes, {} edges", node_count, edges.len());
	Ok(Graph::new(labels, edges))
}
