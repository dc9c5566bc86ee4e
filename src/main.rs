//! Browser entry point: reads the page config, starts logging and mounts
//! the visualizer.

// The remaining dependencies are used by the library.
#![allow(unused_crate_dependencies)]

use graph_algo_visualizer::config::VisualizerConfig;
use graph_algo_visualizer::{App, init_logging};
use leptos::prelude::*;
use log::Level;

fn main() {
	let config = VisualizerConfig::from_document();
	init_logging(config.level().unwrap_or(Level::Debug));

	leptos::mount::mount_to_body(move || view! { <App config=config /> })
}
