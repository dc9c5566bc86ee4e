use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;

use crate::algorithm::{AlgorithmClient, AlgorithmKind};
use crate::session::Session;

/// Algorithm selector, its description, the optional start node, and the run button.
#[component]
pub fn AlgorithmPanel(session: RwSignal<Session>, client: AlgorithmClient) -> impl IntoView {
	let algorithm = RwSignal::new(AlgorithmKind::default());
	let start = RwSignal::new(String::new());

	let on_run = move |_| {
		let kind = algorithm.get_untracked();
		let label = start.get_untracked();
		let Some(Ok((ticket, request))) = session.try_update(|s| s.begin_run(kind, &label)) else {
			return;
		};
		let client = client.clone();
		spawn_local(async move {
			let result = client.submit(&request).await;
			session.update(|s| {
				if s.finish_run(ticket, result) {
					info!("{} ready to step through", kind.display_name());
				}
			});
		});
	};

	view! {
		<section class="panel algorithm-panel">
			<label>
				"Algorithm"
				<select
					prop:value=move || algorithm.get().as_str()
					on:change=move |ev| {
						if let Ok(kind) = event_target_value(&ev).parse() {
							algorithm.set(kind);
						}
					}
				>
					{AlgorithmKind::ALL
						.into_iter()
						.map(|kind| view! { <option value=kind.as_str()>{kind.display_name()}</option> })
						.collect_view()}
				</select>
			</label>
			<div class="algo-info-box">
				{move || {
					let kind = algorithm.get();
					view! {
						<h3>{kind.display_name()}</h3>
						<p>{kind.description()}</p>
						<code>{kind.complexity()}</code>
					}
				}}
			</div>
			<Show when=move || algorithm.get().requires_start_node()>
				<label class="start-node-group">
					"Start Node"
					<input
						type="text"
						maxlength="1"
						placeholder="A"
						prop:value=move || start.get()
						on:input=move |ev| start.set(event_target_value(&ev).to_uppercase())
					/>
				</label>
			</Show>
			<button on:click=on_run disabled=move || session.with(|s| !s.can_run())>
				{move || if session.with(Session::is_running) { "Running..." } else { "Run Algorithm" }}
			</button>
		</section>
	}
}
