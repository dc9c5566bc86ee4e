use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Algorithms the service knows how to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
	/// Single-source shortest paths, non-negative weights.
	#[default]
	Dijkstra,
	/// Single-source shortest paths with negative-cycle detection.
	BellmanFord,
	/// Minimum spanning tree by sorted edges.
	Kruskal,
	/// Minimum spanning tree grown from one node.
	Prim,
}

impl AlgorithmKind {
	/// Every algorithm, in menu order.
	pub const ALL: [AlgorithmKind; 4] = [
		AlgorithmKind::Dijkstra,
		AlgorithmKind::BellmanFord,
		AlgorithmKind::Kruskal,
		AlgorithmKind::Prim,
	];

	/// Wire name, also used as the `<option>` value.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Dijkstra => "dijkstra",
			Self::BellmanFord => "bellman-ford",
			Self::Kruskal => "kruskal",
			Self::Prim => "prim",
		}
	}

	/// Single-source shortest path variants need a start node.
	pub fn requires_start_node(self) -> bool {
		matches!(self, Self::Dijkstra | Self::BellmanFord)
	}

	/// Title shown in the info panel.
	pub fn display_name(self) -> &'static str {
		match self {
			Self::Dijkstra => "Dijkstra's Algorithm",
			Self::BellmanFord => "Bellman-Ford Algorithm",
			Self::Kruskal => "Kruskal's Algorithm",
			Self::Prim => "Prim's Algorithm",
		}
	}

	/// One-paragraph summary for the info panel.
	pub fn description(self) -> &'static str {
		match self {
			Self::Dijkstra => {
				"Finds the shortest path from a starting node to all other nodes in a weighted graph. Works with non-negative edge weights only."
			}
			Self::BellmanFord => {
				"Finds the shortest paths from a single source. Slower than Dijkstra's but can handle negative edge weights and detect negative cycles."
			}
			Self::Kruskal => {
				"Finds a Minimum Spanning Tree (MST) for a weighted, undirected graph. Sorts all edges and adds them to the MST if they don't form a cycle."
			}
			Self::Prim => {
				"Finds a Minimum Spanning Tree (MST). Starts from an arbitrary node and grows the MST by adding the cheapest connection from a known to an unknown vertex."
			}
		}
	}

	/// Time and space bounds.
	pub fn complexity(self) -> &'static str {
		match self {
			Self::Dijkstra => "Time: O(E log V) | Space: O(V)",
			Self::BellmanFord => "Time: O(V × E) | Space: O(V)",
			Self::Kruskal => "Time: O(E log E) | Space: O(V + E)",
			Self::Prim => "Time: O(E log V) | Space: O(V + E)",
		}
	}
}

impl fmt::Display for AlgorithmKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for AlgorithmKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|k| k.as_str() == s)
			.ok_or_else(|| format!("unknown algorithm `{s}`"))
	}
}
