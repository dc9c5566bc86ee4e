use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::render;
use crate::config::Palette;
use crate::layout::Surface;
use crate::render::Scene;

/// Canvas that repaints whenever the scene or its size changes.
///
/// The measured container size is written back to `surface` so the next
/// layout can use it.
#[component]
pub fn GraphCanvas(
	#[prop(into)] scene: Signal<Scene>,
	surface: RwSignal<Surface>,
	palette: Palette,
	fallback: Surface,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		surface.set(measure(&canvas, fallback));

		if resize_cb.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			surface.set(measure(&canvas, fallback));
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	});

	Effect::new(move |_| {
		let (scene, size) = (scene.get(), surface.get());
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(size.width as u32);
		canvas.set_height(size.height as u32);

		let Ok(Some(ctx)) = canvas.get_context("2d") else {
			warn!("2d canvas context unavailable");
			return;
		};
		let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};
		render::render(&scene, &palette, size, &ctx);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-canvas"
			style="display: block;"
		/>
	}
}

fn measure(canvas: &HtmlCanvasElement, fallback: Surface) -> Surface {
	let (w, h) = canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((0.0, 0.0));
	Surface::new(
		if w > 0.0 { w } else { fallback.width },
		if h > 0.0 { h } else { fallback.height },
	)
}
