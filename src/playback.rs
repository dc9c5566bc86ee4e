//! Step-by-step playback over a received step sequence.
//!
//! There is no timer: the index only moves when a caller asks it to.

use log::debug;

use crate::algorithm::VisualizationStep;
use crate::render::RenderSink;

/// The loaded steps and the index of the one on screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Playback {
	steps: Vec<VisualizationStep>,
	current: usize,
}

impl Playback {
	/// Empty playback.
	pub fn new() -> Self {
		Self::default()
	}

	/// `true` while no steps are loaded.
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}

	/// Number of loaded steps.
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// Current index, or `None` when empty.
	pub fn current_index(&self) -> Option<usize> {
		(!self.steps.is_empty()).then_some(self.current)
	}

	/// The step on screen.
	pub fn current_step(&self) -> Option<&VisualizationStep> {
		self.steps.get(self.current)
	}

	/// Highest valid index, the slider's upper bound.
	pub fn last_index(&self) -> Option<usize> {
		self.steps.len().checked_sub(1)
	}

	/// Replaces the sequence and shows step 0.
	///
	/// An empty sequence changes nothing and returns `false`.
	pub fn load(&mut self, steps: Vec<VisualizationStep>, sink: &mut impl RenderSink) -> bool {
		if steps.is_empty() {
			return false;
		}
		debug!("playback loaded {} steps", steps.len());
		self.steps = steps;
		self.current = 0;
		self.apply_current(sink);
		true
	}

	/// Jumps to `index`. Out-of-range indices are ignored.
	pub fn seek(&mut self, index: i64, sink: &mut impl RenderSink) -> bool {
		let Ok(index) = usize::try_from(index) else {
			return false;
		};
		if index >= self.steps.len() {
			return false;
		}
		self.current = index;
		self.apply_current(sink);
		true
	}

	/// Moves one step forward; `false` at the last step.
	pub fn next(&mut self, sink: &mut impl RenderSink) -> bool {
		self.seek(self.current as i64 + 1, sink)
	}

	/// Moves one step back; `false` at step 0.
	pub fn prev(&mut self, sink: &mut impl RenderSink) -> bool {
		self.seek(self.current as i64 - 1, sink)
	}

	/// Drops the sequence and restores the base graph.
	pub fn reset(&mut self, sink: &mut impl RenderSink) {
		self.steps.clear();
		self.current = 0;
		sink.clear_overlay();
	}

	/// Drops the sequence without touching any sink, for when the graph
	/// itself is being replaced.
	pub fn clear(&mut self) {
		self.steps.clear();
		self.current = 0;
	}

	/// Whether [`Playback::prev`] would move.
	pub fn can_prev(&self) -> bool {
		!self.steps.is_empty() && self.current > 0
	}

	/// Whether [`Playback::next`] would move.
	pub fn can_next(&self) -> bool {
		!self.steps.is_empty() && self.current + 1 < self.steps.len()
	}

	/// Counter text, `Step 0 / 0` when empty.
	pub fn position(&self) -> String {
		format!(
			"Step {} / {}",
			self.current_index().unwrap_or(0),
			self.last_index().unwrap_or(0)
		)
	}

	fn apply_current(&self, sink: &mut impl RenderSink) {
		debug!("applying step {}/{}", self.current, self.steps.len());
		if let Some(step) = self.steps.get(self.current) {
			apply_step(step, sink);
		}
	}
}

/// Pushes a step's deltas into `sink`. Nodes and edges the step does not
/// mention are left untouched.
pub fn apply_step(step: &VisualizationStep, sink: &mut impl RenderSink) {
	for (&id, state) in &step.nodes {
		sink.set_node_state(id, state);
	}
	for (&key, state) in &step.edges {
		sink.set_edge_state(key, state);
	}
	sink.set_message(&step.message);
}
