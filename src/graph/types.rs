use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Smallest vertex count a graph may be defined with.
pub const MIN_NODES: usize = 2;
/// Largest vertex count; one node per letter of the alphabet.
pub const MAX_NODES: usize = 26;
/// Smallest number of edge rows the input form generates.
pub const MIN_EDGES: usize = 1;
/// Largest number of edge rows the input form generates.
pub const MAX_EDGES: usize = 50;

/// Index of a vertex in the current graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
	/// Position of the node, `0` for `A`.
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Bijection between node ids `0..N` and the letters `A..`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelMap {
	len: usize,
}

impl LabelMap {
	pub(super) fn with_len(len: usize) -> Self {
		Self { len }
	}

	/// Number of nodes in the mapping.
	pub fn len(&self) -> usize {
		self.len
	}

	/// `true` for a mapping with no nodes.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Letter of `id`, or `None` if the id is out of range.
	pub fn label_of(&self, id: NodeId) -> Option<char> {
		(id.0 < self.len).then(|| (b'A' + id.0 as u8) as char)
	}

	/// Resolves a typed label. Surrounding whitespace and case are ignored,
	/// anything longer than one letter never resolves.
	pub fn resolve(&self, label: &str) -> Option<NodeId> {
		let mut chars = label.trim().chars();
		let letter = chars.next()?.to_ascii_uppercase();
		if chars.next().is_some() || !letter.is_ascii_uppercase() {
			return None;
		}
		let id = (letter as u8 - b'A') as usize;
		(id < self.len).then_some(NodeId(id))
	}

	/// Letter of the highest id, used in "A-<last>" hints.
	pub fn last_label(&self) -> char {
		match self.len {
			0 => 'A',
			n => (b'A' + (n - 1) as u8) as char,
		}
	}

	/// Every node id in ascending order.
	pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
		(0..self.len).map(NodeId)
	}
}

/// Undirected identity of an edge: the ordered pair `(min, max)`.
///
/// On the wire this is the string `"u-v"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
	lo: NodeId,
	hi: NodeId,
}

impl EdgeKey {
	/// Key of the edge between `a` and `b`, in either order.
	pub fn new(a: NodeId, b: NodeId) -> Self {
		Self {
			lo: a.min(b),
			hi: a.max(b),
		}
	}

	/// Lower and higher endpoint.
	pub fn endpoints(&self) -> (NodeId, NodeId) {
		(self.lo, self.hi)
	}
}

impl fmt::Display for EdgeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.lo, self.hi)
	}
}

impl std::str::FromStr for EdgeKey {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (a, b) = s
			.split_once('-')
			.ok_or_else(|| format!("edge key `{s}` is not of the form u-v"))?;
		let parse = |part: &str| {
			part.trim()
				.parse::<usize>()
				.map(NodeId)
				.map_err(|_| format!("edge key `{s}` has a non-numeric endpoint"))
		};
		Ok(Self::new(parse(a)?, parse(b)?))
	}
}

impl Serialize for EdgeKey {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for EdgeKey {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		raw.parse().map_err(de::Error::custom)
	}
}

/// A validated, weighted edge. Endpoints are distinct and in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	/// Endpoint typed in the From column.
	pub from: NodeId,
	/// Endpoint typed in the To column.
	pub to: NodeId,
	/// Positive weight.
	pub weight: u64,
}

impl Edge {
	/// Undirected identity of this edge.
	pub fn key(&self) -> EdgeKey {
		EdgeKey::new(self.from, self.to)
	}

	/// `[u, v, w]` triple as sent to the algorithm service.
	pub fn as_triple(&self) -> [u64; 3] {
		[self.from.0 as u64, self.to.0 as u64, self.weight]
	}
}

/// One row of the edge input form, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeRow {
	/// From label.
	pub from: String,
	/// To label.
	pub to: String,
	/// Weight text.
	pub weight: String,
}

impl EdgeRow {
	/// Row with the given field texts.
	pub fn new(from: impl Into<String>, to: impl Into<String>, weight: impl Into<String>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
			weight: weight.into(),
		}
	}
}

/// A fully validated graph. Built only by [`super::build_graph`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
	labels: LabelMap,
	edges: Vec<Edge>,
}

impl Graph {
	pub(super) fn new(labels: LabelMap, edges: Vec<Edge>) -> Self {
		Self { labels, edges }
	}

	/// Label mapping of the graph's nodes.
	pub fn labels(&self) -> &LabelMap {
		&self.labels
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.labels.len()
	}

	/// Node ids `0..N`.
	pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
		self.labels.ids()
	}

	/// Edges in input order, parallel duplicates included.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// `true` if `id` names a node of this graph.
	pub fn contains_node(&self, id: NodeId) -> bool {
		id.0 < self.labels.len()
	}
}
