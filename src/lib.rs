//! Graph algorithm visualizer: define a weighted graph, lay it out on a
//! circle, and step through the frames an algorithm service sends back.
//!
//! Everything outside `components` and `pages` is plain Rust and runs
//! without a browser.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

pub mod algorithm;
pub mod config;
pub mod graph;
pub mod layout;
pub mod playback;
pub mod render;
pub mod session;

// Modules
mod components;
mod pages;

// Top-Level pages
use crate::config::VisualizerConfig;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging(level: Level) {
	let _ = console_log::init_with_level(level);
	console_error_panic_hook::set_once();
	info!("Logging initialized at {level}");
}

/// An app router which renders the visualizer and handles 404's
#[component]
pub fn App(
	/// Settings read from the host page.
	config: VisualizerConfig,
) -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(config);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Graph Algorithm Visualizer" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
