//! The active graph session.
//!
//! A session owns everything derived from the current graph definition:
//! the graph itself, its layout, its visual state and the loaded playback.
//! Redrawing replaces all of it at once.

use log::{error, info, warn};

use crate::algorithm::{
	AlgorithmKind, AlgorithmRunError, RunError, RunRequest, VisualizationStep, build_request,
};
use crate::config::Palette;
use crate::graph::{EdgeRow, Graph, GraphError, build_graph, check_edge_count, define_nodes};
use crate::layout::{LayoutPoint, Surface, circular};
use crate::playback::Playback;
use crate::render::{RenderSink, Scene, VisualState, compose};

/// Status line of a fresh session.
pub const WELCOME: &str =
	"Welcome! Set the number of nodes and edges, then click 'Define Edges' to begin.";
/// Status line after a run that returned nothing to show.
pub const NO_STEPS: &str = "Algorithm produced no steps or an error occurred.";

/// Identifies the graph a run was started for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunTicket {
	generation: u64,
}

/// One graph definition and everything derived from it.
#[derive(Clone, Debug)]
pub struct Session {
	palette: Palette,
	graph: Option<Graph>,
	layout: Vec<LayoutPoint>,
	visuals: VisualState,
	playback: Playback,
	generation: u64,
	running: bool,
}

impl Default for Session {
	fn default() -> Self {
		Self::new(Palette::default())
	}
}

impl Session {
	/// Empty session showing the welcome line.
	pub fn new(palette: Palette) -> Self {
		let mut session = Self {
			palette,
			graph: None,
			layout: Vec::new(),
			visuals: VisualState::default(),
			playback: Playback::new(),
			generation: 0,
			running: false,
		};
		session.report(WELCOME);
		session
	}

	/// Checks both counts before the edge input rows are generated.
	pub fn define_edges(&mut self, vertex_count: usize, edge_count: usize) -> Result<usize, GraphError> {
		let checked = define_nodes(vertex_count).and_then(|_| check_edge_count(edge_count));
		match checked {
			Ok(rows) => {
				self.report(
					"Edge inputs generated. Fill in node letters (A, B, C...) and weights, then click 'Generate Graph'.",
				);
				Ok(rows)
			}
			Err(e) => {
				self.report(&format!("Error: {e}"));
				Err(e)
			}
		}
	}

	/// Validates `rows` and, only if every row is valid, replaces the drawn graph.
	///
	/// On failure nothing is drawn and any previous graph is discarded.
	pub fn draw(&mut self, vertex_count: usize, rows: &[EdgeRow], surface: Surface) -> Result<(), GraphError> {
		self.generation += 1;
		self.playback.clear();
		match build_graph(vertex_count, rows) {
			Ok(graph) => {
				self.layout = circular(graph.node_count(), surface.width, surface.height);
				self.visuals = VisualState::new(&graph, &self.palette);
				info!(
					"drew graph: {} nodes, {} edges on {}x{}",
					graph.node_count(),
					graph.edges().len(),
					surface.width,
					surface.height
				);
				self.report(&format!(
					"Graph generated successfully with {} edges! Select an algorithm and click 'Run Algorithm'.",
					graph.edges().len()
				));
				self.graph = Some(graph);
				Ok(())
			}
			Err(e) => {
				warn!("graph rejected: {e}");
				self.graph = None;
				self.layout.clear();
				self.visuals = VisualState::default();
				self.report(&format!("Error: {e}"));
				Err(e)
			}
		}
	}

	/// Builds the request for a run and marks it in flight.
	///
	/// Only one run may be outstanding; a second call is rejected until
	/// [`Session::finish_run`] is called.
	pub fn begin_run(&mut self, kind: AlgorithmKind, start_label: &str) -> Result<(RunTicket, RunRequest), RunError> {
		if self.running {
			return Err(RunError::AlreadyRunning);
		}
		let Some(graph) = &self.graph else {
			self.report(&format!("Error: {}", RunError::NoGraph));
			return Err(RunError::NoGraph);
		};
		let request = match build_request(kind, graph, start_label) {
			Ok(request) => request,
			Err(e) => {
				self.report(&format!("Error: {e}"));
				return Err(e);
			}
		};
		self.running = true;
		self.report(&format!("Running {}...", kind.display_name()));
		Ok((
			RunTicket {
				generation: self.generation,
			},
			request,
		))
	}

	/// Records the outcome of a run started with `ticket`.
	///
	/// Results for a graph that has since been redrawn are dropped. Returns
	/// `true` when playback was loaded.
	pub fn finish_run(
		&mut self,
		ticket: RunTicket,
		result: Result<Vec<VisualizationStep>, AlgorithmRunError>,
	) -> bool {
		self.running = false;
		if ticket.generation != self.generation {
			warn!("discarding result of a run for a graph that is no longer drawn");
			return false;
		}
		match result {
			Ok(steps) => {
				let count = steps.len();
				if self.playback.load(steps, &mut self.visuals) {
					info!("playback ready with {count} steps");
					true
				} else {
					self.report(NO_STEPS);
					false
				}
			}
			Err(e) => {
				error!("algorithm run failed: {e}");
				self.report(&format!("Error: {e}"));
				false
			}
		}
	}

	/// Jumps to step `index`; see [`Playback::seek`].
	pub fn seek(&mut self, index: i64) -> bool {
		self.playback.seek(index, &mut self.visuals)
	}

	/// Shows the following step.
	pub fn next(&mut self) -> bool {
		self.playback.next(&mut self.visuals)
	}

	/// Shows the preceding step.
	pub fn prev(&mut self) -> bool {
		self.playback.prev(&mut self.visuals)
	}

	/// Drops the loaded steps and shows the plain graph again.
	pub fn reset(&mut self) -> bool {
		if self.graph.is_none() {
			return false;
		}
		self.playback.reset(&mut self.visuals);
		self.report("Visualization reset. Run an algorithm to start.");
		true
	}

	/// The drawn graph, if any.
	pub fn graph(&self) -> Option<&Graph> {
		self.graph.as_ref()
	}

	/// Node positions, indexed by node id.
	pub fn layout(&self) -> &[LayoutPoint] {
		&self.layout
	}

	/// Current styles.
	pub fn visuals(&self) -> &VisualState {
		&self.visuals
	}

	/// Loaded steps.
	pub fn playback(&self) -> &Playback {
		&self.playback
	}

	/// Base colors.
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Text of the status line.
	pub fn status(&self) -> &str {
		self.visuals.message()
	}

	/// `true` while a run is in flight.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// A graph is drawn and nothing is in flight.
	pub fn can_run(&self) -> bool {
		self.graph.is_some() && !self.running
	}

	/// Enables the Previous button.
	pub fn can_prev(&self) -> bool {
		self.playback.can_prev()
	}

	/// Enables the Next button.
	pub fn can_next(&self) -> bool {
		self.playback.can_next()
	}

	/// Enables the Reset button.
	pub fn can_reset(&self) -> bool {
		!self.playback.is_empty()
	}

	/// Paint instructions for the current state; empty without a graph.
	pub fn scene(&self) -> Scene {
		match &self.graph {
			Some(graph) => compose(graph, &self.layout, &self.visuals, &self.palette),
			None => Scene::default(),
		}
	}

	fn report(&mut self, message: &str) {
		self.visuals.set_message(message);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn surface() -> Surface {
		Surface::new(400.0, 300.0)
	}

	fn drawn() -> Session {
		let mut session = Session::default();
		session
			.draw(
				3,
				&[EdgeRow::new("A", "B", "4"), EdgeRow::new("B", "C", "2")],
				surface(),
			)
			.unwrap();
		session
	}

	fn steps(n: usize) -> Vec<VisualizationStep> {
		(0..n)
			.map(|i| VisualizationStep {
				message: format!("step {i}"),
				..Default::default()
			})
			.collect()
	}

	#[test]
	fn starts_with_welcome() {
		let session = Session::default();
		assert_eq!(session.status(), WELCOME);
		assert!(!session.can_run());
		assert!(session.scene().is_empty());
	}

	#[test]
	fn define_edges_reports_range_errors() {
		let mut session = Session::default();
		assert_eq!(session.define_edges(3, 2), Ok(2));
		assert!(session.define_edges(27, 2).is_err());
		assert_eq!(session.status(), "Error: Please enter between 2 and 26 nodes.");
		assert!(session.define_edges(3, 51).is_err());
		assert_eq!(session.status(), "Error: Please enter between 1 and 50 edges.");
	}

	#[test]
	fn failed_draw_discards_previous_graph() {
		let mut session = drawn();
		let err = session
			.draw(3, &[EdgeRow::new("A", "B", "")], surface())
			.unwrap_err();
		assert_eq!(err, GraphError::MissingField { row: 1 });
		assert!(session.graph().is_none());
		assert!(session.layout().is_empty());
		assert!(!session.can_run());
		assert!(session.status().contains("Edge 1 has empty fields"));
	}

	#[test]
	fn only_one_run_in_flight() {
		let mut session = drawn();
		let (ticket, _) = session.begin_run(AlgorithmKind::Kruskal, "").unwrap();
		assert!(!session.can_run());
		assert_eq!(
			session.begin_run(AlgorithmKind::Kruskal, "").unwrap_err(),
			RunError::AlreadyRunning
		);
		session.finish_run(ticket, Ok(steps(3)));
		assert!(session.can_run());
		assert_eq!(session.status(), "step 0");
	}

	#[test]
	fn missing_start_node_blocks_run() {
		let mut session = drawn();
		let err = session.begin_run(AlgorithmKind::Dijkstra, "").unwrap_err();
		assert_eq!(err, RunError::MissingStartNode { last: 'C' });
		assert!(session.can_run());
		assert_eq!(session.status(), "Error: Please enter a valid start node (A-C).");
	}

	#[test]
	fn failures_leave_playback_empty() {
		let mut session = drawn();
		let (ticket, _) = session.begin_run(AlgorithmKind::Prim, "").unwrap();
		assert!(!session.finish_run(ticket, Ok(Vec::new())));
		assert!(session.playback().is_empty());
		assert_eq!(session.status(), NO_STEPS);

		let (ticket, _) = session.begin_run(AlgorithmKind::Prim, "").unwrap();
		let failed = Err(AlgorithmRunError::Service("Algorithm not found".into()));
		assert!(!session.finish_run(ticket, failed));
		assert!(session.playback().is_empty());
		assert_eq!(session.status(), "Error: Server error: Algorithm not found");
		assert!(session.can_run());
	}

	#[test]
	fn stale_results_are_dropped() {
		let mut session = drawn();
		let (ticket, _) = session.begin_run(AlgorithmKind::Kruskal, "").unwrap();
		session
			.draw(2, &[EdgeRow::new("A", "B", "1")], surface())
			.unwrap();
		assert!(!session.can_run());
		assert!(!session.finish_run(ticket, Ok(steps(2))));
		assert!(session.playback().is_empty());
		assert!(session.can_run());
	}

	#[test]
	fn reset_returns_to_base_graph() {
		let mut session = drawn();
		let (ticket, _) = session.begin_run(AlgorithmKind::Kruskal, "").unwrap();
		session.finish_run(ticket, Ok(steps(2)));
		assert!(session.can_reset());
		assert!(session.reset());
		assert!(session.playback().is_empty());
		assert!(session.visuals().is_base());
		assert!(!session.can_reset());
		assert_eq!(
			session.status(),
			"Visualization reset. Run an algorithm to start."
		);
	}
}
