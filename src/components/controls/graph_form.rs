use leptos::prelude::*;
use log::debug;

use super::parse_count;
use crate::graph::{EdgeRow, MAX_EDGES, MAX_NODES, MIN_EDGES, MIN_NODES};
use crate::layout::Surface;
use crate::session::Session;

/// Vertex/edge counts, the generated edge rows, and the draw button.
#[component]
pub fn GraphForm(session: RwSignal<Session>, surface: RwSignal<Surface>) -> impl IntoView {
	let vertices = RwSignal::new(String::from("5"));
	let edge_count = RwSignal::new(String::from("6"));
	let rows = RwSignal::new(Vec::<EdgeRow>::new());
	let row_count = Memo::new(move |_| rows.with(Vec::len));

	let on_define = move |_| {
		let (v, e) = (
			parse_count(&vertices.get_untracked()),
			parse_count(&edge_count.get_untracked()),
		);
		if let Some(Ok(n)) = session.try_update(|s| s.define_edges(v, e)) {
			rows.set(vec![EdgeRow::default(); n]);
		}
	};

	let on_draw = move |_| {
		let v = parse_count(&vertices.get_untracked());
		let size = surface.get_untracked();
		rows.with_untracked(|rows| {
			session.update(|s| {
				if let Err(e) = s.draw(v, rows, size) {
					debug!("draw rejected: {e}");
				}
			});
		});
	};

	view! {
		<section class="panel graph-form">
			<div class="count-inputs">
				<label>
					"Vertices"
					<input
						type="number"
						min=MIN_NODES.to_string()
						max=MAX_NODES.to_string()
						prop:value=move || vertices.get()
						on:input=move |ev| vertices.set(event_target_value(&ev))
					/>
				</label>
				<label>
					"Edges"
					<input
						type="number"
						min=MIN_EDGES.to_string()
						max=MAX_EDGES.to_string()
						prop:value=move || edge_count.get()
						on:input=move |ev| edge_count.set(event_target_value(&ev))
					/>
				</label>
				<button on:click=on_define>"Define Edges"</button>
			</div>
			<div class="edge-inputs">
				{move || {
					(0..row_count.get())
						.map(|i| view! { <EdgeRowInput index=i rows=rows /> })
						.collect_view()
				}}
			</div>
			<button on:click=on_draw disabled=move || row_count.get() == 0>
				"Generate Graph"
			</button>
		</section>
	}
}

#[derive(Clone, Copy)]
enum Field {
	From,
	To,
	Weight,
}

impl Field {
	fn get(self, row: &EdgeRow) -> &String {
		match self {
			Self::From => &row.from,
			Self::To => &row.to,
			Self::Weight => &row.weight,
		}
	}

	fn get_mut(self, row: &mut EdgeRow) -> &mut String {
		match self {
			Self::From => &mut row.from,
			Self::To => &mut row.to,
			Self::Weight => &mut row.weight,
		}
	}
}

#[component]
fn EdgeRowInput(index: usize, rows: RwSignal<Vec<EdgeRow>>) -> impl IntoView {
	let value = move |field: Field| {
		move || {
			rows.with(|r| r.get(index).map(|row| field.get(row).clone()))
				.unwrap_or_default()
		}
	};
	let edit = move |field: Field| {
		move |ev: web_sys::Event| {
			let mut text = event_target_value(&ev);
			if !matches!(field, Field::Weight) {
				text = text.to_uppercase();
			}
			rows.update(|r| {
				if let Some(row) = r.get_mut(index) {
					*field.get_mut(row) = text;
				}
			});
		}
	};

	view! {
		<div class="edge-input-row">
			<span>{format!("E{}:", index + 1)}</span>
			<input
				type="text"
				class="edge-from"
				placeholder="From"
				maxlength="1"
				prop:value=value(Field::From)
				on:input=edit(Field::From)
			/>
			<input
				type="text"
				class="edge-to"
				placeholder="To"
				maxlength="1"
				prop:value=value(Field::To)
				on:input=edit(Field::To)
			/>
			<input
				type="number"
				class="edge-weight"
				placeholder="Weight"
				min="1"
				step="1"
				prop:value=value(Field::Weight)
				on:input=edit(Field::Weight)
			/>
		</div>
	}
}
