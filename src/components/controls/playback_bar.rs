use leptos::prelude::*;

use crate::session::Session;

/// Step buttons, timeline slider, step counter and the status line.
#[component]
pub fn PlaybackBar(session: RwSignal<Session>) -> impl IntoView {
	let empty = move || session.with(|s| s.playback().is_empty());

	view! {
		<section class="panel playback-bar">
			<div class="step-controls">
				<button
					on:click=move |_| session.update(|s| {
						s.prev();
					})
					disabled=move || session.with(|s| !s.can_prev())
				>
					"Previous"
				</button>
				<button
					on:click=move |_| session.update(|s| {
						s.next();
					})
					disabled=move || session.with(|s| !s.can_next())
				>
					"Next"
				</button>
				<button
					on:click=move |_| session.update(|s| {
						s.reset();
					})
					disabled=move || session.with(|s| !s.can_reset())
				>
					"Reset"
				</button>
			</div>
			<input
				type="range"
				class="timeline-slider"
				min="0"
				prop:max=move || {
					session.with(|s| s.playback().last_index().unwrap_or(0).to_string())
				}
				prop:value=move || {
					session.with(|s| s.playback().current_index().unwrap_or(0).to_string())
				}
				disabled=empty
				on:input=move |ev| {
					if let Ok(index) = event_target_value(&ev).parse::<i64>() {
						session.update(|s| {
							s.seek(index);
						});
					}
				}
			/>
			<span class="step-counter">{move || session.with(|s| s.playback().position())}</span>
			<p class="message-box">{move || session.with(|s| s.status().to_string())}</p>
		</section>
	}
}
