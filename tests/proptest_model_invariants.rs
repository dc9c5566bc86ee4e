//! Property-based invariants of the graph model, layout and playback.
//!
//! Verifies:
//! 1. define_nodes(N) is a bijection between 0..N and the first N letters
//! 2. define_nodes rejects every count outside [2, 26]
//! 3. parse_edge reports a blank field before anything else
//! 4. layout is repeatable and node 0 sits at the top of the circle
//! 5. any sequence of playback moves keeps the index in range
//! 6. applying a step leaves unmentioned nodes as they were

use std::f64::consts::FRAC_PI_2;

use graph_algo_visualizer::algorithm::{NodeVisual, VisualizationStep};
use graph_algo_visualizer::config::Palette;
use graph_algo_visualizer::graph::{
	EdgeRow, GraphError, NodeId, build_graph, define_nodes, parse_edge,
};
use graph_algo_visualizer::layout::{angle_of, circular};
use graph_algo_visualizer::playback::{Playback, apply_step};
use graph_algo_visualizer::render::{RenderSink, VisualState};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_field() -> impl Strategy<Value = String> {
	prop_oneof![
		Just(String::new()),
		"[A-Z]",
		"[a-z]",
		"-?[0-9]{1,3}",
		"[ -~]{0,4}",
	]
}

#[derive(Clone, Debug)]
enum Move {
	Next,
	Prev,
	Seek(i64),
}

fn arb_move() -> impl Strategy<Value = Move> {
	prop_oneof![
		Just(Move::Next),
		Just(Move::Prev),
		(-3i64..12).prop_map(Move::Seek),
	]
}

fn steps(n: usize) -> Vec<VisualizationStep> {
	(0..n)
		.map(|i| VisualizationStep {
			message: format!("step {i}"),
			..Default::default()
		})
		.collect()
}

// ── Properties ────────────────────────────────────────────────────────

proptest! {
	#[test]
	fn labels_are_a_bijection(n in 2usize..=26) {
		let labels = define_nodes(n).unwrap();
		prop_assert_eq!(labels.len(), n);
		for id in labels.ids() {
			let letter = labels.label_of(id).unwrap();
			prop_assert_eq!(letter, (b'A' + id.index() as u8) as char);
			prop_assert_eq!(labels.resolve(&letter.to_string()), Some(id));
		}
		prop_assert_eq!(labels.label_of(NodeId(n)), None);
	}

	#[test]
	fn out_of_range_counts_rejected(n in prop_oneof![0usize..2, 27usize..10_000]) {
		prop_assert_eq!(define_nodes(n), Err(GraphError::NodeCountOutOfRange { count: n }));
	}

	#[test]
	fn blank_field_reported_first(
		from in arb_field(),
		to in arb_field(),
		weight in arb_field(),
		blank in 0usize..3,
		ordinal in 0usize..50,
	) {
		let labels = define_nodes(4).unwrap();
		let mut fields = [from, to, weight];
		fields[blank] = "  ".to_string();
		prop_assert_eq!(
			parse_edge(&labels, &fields[0], &fields[1], &fields[2], ordinal),
			Err(GraphError::MissingField { row: ordinal + 1 })
		);
	}

	#[test]
	fn layout_is_repeatable(n in 2usize..=26, w in 10.0f64..2000.0, h in 10.0f64..2000.0) {
		let first = circular(n, w, h);
		prop_assert_eq!(&first, &circular(n, w, h));
		prop_assert_eq!(first.len(), n);
		prop_assert_eq!(angle_of(0, n), -FRAC_PI_2);
		prop_assert!((first[0].x - w / 2.0).abs() < 1e-9);
		prop_assert!(first[0].y < h / 2.0);
	}

	#[test]
	fn playback_index_stays_in_range(
		len in 1usize..8,
		moves in proptest::collection::vec(arb_move(), 0..40),
	) {
		let graph = build_graph(2, &[EdgeRow::new("A", "B", "1")]).unwrap();
		let mut sink = VisualState::new(&graph, &Palette::default());
		let mut playback = Playback::new();
		prop_assert!(playback.load(steps(len), &mut sink));

		for m in moves {
			let before = playback.current_index().unwrap();
			let moved = match m {
				Move::Next => playback.next(&mut sink),
				Move::Prev => playback.prev(&mut sink),
				Move::Seek(i) => playback.seek(i, &mut sink),
			};
			let after = playback.current_index().unwrap();
			prop_assert!(after < len);
			if !moved {
				prop_assert_eq!(before, after);
			}
			prop_assert_eq!(playback.can_prev(), after > 0);
			prop_assert_eq!(playback.can_next(), after + 1 < len);
			prop_assert_eq!(sink.message(), format!("step {after}"));
		}
	}

	#[test]
	fn unmentioned_nodes_keep_their_state(mentioned in proptest::collection::btree_set(0usize..5, 0..5)) {
		let rows = [EdgeRow::new("A", "B", "1")];
		let graph = build_graph(5, &rows).unwrap();
		let mut visuals = VisualState::new(&graph, &Palette::default());

		let earlier = NodeVisual { color: "#4f46e5".into(), text: "7".into() };
		for id in graph.nodes() {
			visuals.set_node_state(id, &earlier);
		}

		let mut step = VisualizationStep::default();
		for &i in &mentioned {
			step.nodes.insert(NodeId(i), NodeVisual { color: "#f59e0b".into(), text: "1".into() });
		}
		apply_step(&step, &mut visuals);

		for id in graph.nodes() {
			let shown = visuals.node(id).unwrap();
			if mentioned.contains(&id.index()) {
				prop_assert_eq!(shown.text.as_str(), "1");
			} else {
				prop_assert_eq!(shown, &earlier);
			}
		}
	}
}
