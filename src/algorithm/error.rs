use thiserror::Error;

/// Reasons a run cannot be started.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError {
	/// No graph is drawn yet.
	#[error("Please generate a graph first.")]
	NoGraph,

	/// A previous run has not finished.
	#[error("An algorithm is already running.")]
	AlreadyRunning,

	/// The chosen algorithm needs a start node and the input names none.
	#[error("Please enter a valid start node (A-{last}).")]
	MissingStartNode {
		/// Highest valid letter.
		last: char,
	},
}

/// Failure of a submitted run. Never retried; the user has to run again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmRunError {
	/// The request never produced a response.
	#[error("Request failed: {0}")]
	Transport(String),

	/// Non-2xx status, with the service's `error` text or the status text.
	#[error("Server error: {message}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Human-readable reason.
		message: String,
	},

	/// A 2xx body that carries an `error` field.
	#[error("Server error: {0}")]
	Service(String),

	/// The body was not a step sequence.
	#[error("Malformed response: {0}")]
	Decode(String),
}
