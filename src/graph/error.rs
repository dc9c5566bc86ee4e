use thiserror::Error;

use super::types::{MAX_EDGES, MAX_NODES, MIN_EDGES, MIN_NODES};

/// Reasons a graph definition is rejected.
///
/// Row numbers are 1-based, matching the `E1:`, `E2:` captions of the input form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
	/// Vertex count outside `[MIN_NODES, MAX_NODES]`.
	#[error("Please enter between {} and {} nodes.", MIN_NODES, MAX_NODES)]
	NodeCountOutOfRange {
		/// Count as entered.
		count: usize,
	},

	/// Edge count outside `[MIN_EDGES, MAX_EDGES]`.
	#[error("Please enter between {} and {} edges.", MIN_EDGES, MAX_EDGES)]
	EdgeCountOutOfRange {
		/// Count as entered.
		count: usize,
	},

	/// One of From, To or Weight was left blank.
	#[error("Edge {row} has empty fields. Please fill in all fields (From, To, Weight).")]
	MissingField {
		/// 1-based row.
		row: usize,
	},

	/// A label that does not name a node of the current graph.
	#[error("Invalid node letter in edge {row}. Use letters A-{last}.")]
	UnknownNode {
		/// 1-based row.
		row: usize,
		/// Highest valid letter.
		last: char,
	},

	/// Weight is not a positive integer.
	#[error(
		"Invalid weight in edge {row}. Weight must be a positive integer (you entered: \"{input}\")."
	)]
	InvalidWeight {
		/// 1-based row.
		row: usize,
		/// Weight text as entered.
		input: String,
	},

	/// Weight is a positive integer beyond `u64::MAX`.
	#[error(
		"Weight in edge {row} is too large (you entered: \"{input}\"). The maximum is {}.",
		u64::MAX
	)]
	WeightTooLarge {
		/// 1-based row.
		row: usize,
		/// Weight text as entered.
		input: String,
	},

	/// From and To name the same node.
	#[error("Self-loop detected in edge {row}. From and To nodes cannot be the same.")]
	SelfLoop {
		/// 1-based row.
		row: usize,
	},
}

impl GraphError {
	/// 1-based row of the offending edge, if the error concerns one.
	pub fn row(&self) -> Option<usize> {
		match self {
			Self::MissingField { row }
			| Self::UnknownNode { row, .. }
			| Self::InvalidWeight { row, .. }
			| Self::WeightTooLarge { row, .. }
			| Self::SelfLoop { row } => Some(*row),
			Self::NodeCountOutOfRange { .. } | Self::EdgeCountOutOfRange { .. } => None,
		}
	}
}
