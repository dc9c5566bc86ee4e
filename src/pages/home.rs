use leptos::prelude::*;

use crate::algorithm::AlgorithmClient;
use crate::components::controls::{AlgorithmPanel, GraphForm, PlaybackBar};
use crate::components::graph_canvas::GraphCanvas;
use crate::config::VisualizerConfig;
use crate::layout::Surface;
use crate::session::Session;

/// Visualizer page: inputs on the left, the graph and its playback on the right.
#[component]
pub fn Home() -> impl IntoView {
	let config = use_context::<VisualizerConfig>().unwrap_or_default();
	let fallback = Surface::new(config.fallback_width, config.fallback_height);

	let session = RwSignal::new(Session::new(config.palette.clone()));
	let surface = RwSignal::new(fallback);
	let scene = Memo::new(move |_| session.with(Session::scene));
	let client = AlgorithmClient::new(config.api_url.clone());

	view! {
		<div class="visualizer">
			<aside class="sidebar">
				<h1>"Graph Algorithm Visualizer"</h1>
				<GraphForm session=session surface=surface />
				<AlgorithmPanel session=session client=client />
			</aside>
			<main class="stage">
				<div class="canvas-container">
					<GraphCanvas
						scene=scene
						surface=surface
						palette=config.palette.clone()
						fallback=fallback
					/>
				</div>
				<PlaybackBar session=session />
			</main>
		</div>
	}
}
