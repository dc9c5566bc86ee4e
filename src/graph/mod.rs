//! Graph input model: label mapping, edge validation and the validated graph.

mod build;
mod error;
mod types;

pub use build::{build_graph, check_edge_count, define_nodes, parse_edge};
pub use error::GraphError;
pub use types::{
	Edge, EdgeKey, EdgeRow, Graph, LabelMap, MAX_EDGES, MAX_NODES, MIN_EDGES, MIN_NODES, NodeId,
};
