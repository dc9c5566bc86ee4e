//! Form controls around the canvas.

mod algorithm_panel;
mod graph_form;
mod playback_bar;

pub use algorithm_panel::AlgorithmPanel;
pub use graph_form::GraphForm;
pub use playback_bar::PlaybackBar;

/// Count inputs that do not parse count as zero, which every range check rejects.
fn parse_count(raw: &str) -> usize {
	raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
	use super::parse_count;

	#[test]
	fn unparsable_counts_are_zero() {
		assert_eq!(parse_count(" 5 "), 5);
		assert_eq!(parse_count(""), 0);
		assert_eq!(parse_count("-2"), 0);
		assert_eq!(parse_count("four"), 0);
	}
}
