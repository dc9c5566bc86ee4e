use gloo_net::http::Request;
use log::{debug, info, warn};
use serde_json::Value;

use super::error::AlgorithmRunError;
use super::request::RunRequest;
use super::step::VisualizationStep;

/// Default path of the algorithm service.
pub const DEFAULT_ENDPOINT: &str = "/api/run_algorithm";

/// Talks to the external algorithm service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgorithmClient {
	endpoint: String,
}

impl Default for AlgorithmClient {
	fn default() -> Self {
		Self::new(DEFAULT_ENDPOINT)
	}
}

impl AlgorithmClient {
	/// Client posting to `endpoint`.
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
		}
	}

	/// URL requests are posted to.
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// Sends `request` and waits for the step sequence.
	///
	/// There is no timeout: if the service never answers the future never resolves.
	pub async fn submit(
		&self,
		request: &RunRequest,
	) -> Result<Vec<VisualizationStep>, AlgorithmRunError> {
		info!("POST {} ({})", self.endpoint, request.algorithm);
		let response = Request::post(&self.endpoint)
			.json(request)
			.map_err(|e| AlgorithmRunError::Transport(e.to_string()))?
			.send()
			.await
			.map_err(|e| AlgorithmRunError::Transport(e.to_string()))?;

		let status = response.status();
		debug!("response status: {}", status);
		let body = response
			.text()
			.await
			.map_err(|e| AlgorithmRunError::Transport(e.to_string()))?;
		parse_response(status, &response.status_text(), &body)
	}
}

/// Interprets a service response.
///
/// Any non-2xx status and any body carrying an `error` field is a failure.
/// A successful empty array is returned as-is; deciding what "no steps"
/// means is left to the caller.
pub fn parse_response(
	status: u16,
	status_text: &str,
	body: &str,
) -> Result<Vec<VisualizationStep>, AlgorithmRunError> {
	let parsed = serde_json::from_str::<Value>(body);

	if !(200..300).contains(&status) {
		let message = parsed
			.ok()
			.as_ref()
			.and_then(error_field)
			.unwrap_or_else(|| status_text.to_string());
		warn!("algorithm service returned {}: {}", status, message);
		return Err(AlgorithmRunError::Status { status, message });
	}

	let value = parsed.map_err(|e| AlgorithmRunError::Decode(e.to_string()))?;
	if let Some(message) = error_field(&value) {
		warn!("algorithm service reported: {}", message);
		return Err(AlgorithmRunError::Service(message));
	}
	let steps: Vec<VisualizationStep> =
		serde_json::from_value(value).map_err(|e| AlgorithmRunError::Decode(e.to_string()))?;
	info!("received {} steps", steps.len());
	Ok(steps)
}

fn error_field(value: &Value) -> Option<String> {
	match value.get("error")? {
		Value::Null => None,
		Value::String(s) => Some(s.clone()),
		other => Some(other.to_string()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TWO_STEPS: &str = r##"[
		{"nodes": {"0": {"color": "#60a5fa", "text": ""}}, "edges": {}, "message": "Graph initialized."},
		{"nodes": {}, "edges": {"0-1": {"color": "#10b981", "width": 5}}, "message": "Edge A-B added to MST. Cost: 4."}
	]"##;

	#[test]
	fn success_yields_steps_in_order() {
		let steps = parse_response(200, "OK", TWO_STEPS).unwrap();
		assert_eq!(steps.len(), 2);
		assert_eq!(steps[0].message, "Graph initialized.");
		assert!(steps[1].nodes.is_empty());
	}

	#[test]
	fn empty_array_is_not_an_error() {
		assert_eq!(parse_response(200, "OK", "[]"), Ok(Vec::new()));
	}

	#[test]
	fn non_success_prefers_service_error_text() {
		let err = parse_response(400, "Bad Request", r#"{"error": "Algorithm not found"}"#)
			.unwrap_err();
		assert_eq!(err.to_string(), "Server error: Algorithm not found");

		let err = parse_response(502, "Bad Gateway", "<html>").unwrap_err();
		assert_eq!(
			err,
			AlgorithmRunError::Status {
				status: 502,
				message: "Bad Gateway".into()
			}
		);
	}

	#[test]
	fn error_body_with_success_status_fails() {
		let err = parse_response(200, "OK", r#"{"error": "boom"}"#).unwrap_err();
		assert_eq!(err, AlgorithmRunError::Service("boom".into()));
	}

	#[test]
	fn unrecognised_step_keys_do_not_fail_the_run() {
		let body = r##"[
			{"nodes": {}, "edges": {"edge-0-1": {"color": "#facc15", "width": 3}, "0-1": {"color": "#10b981", "width": 5}}, "message": "Edge A-B added to MST. Cost: 4."}
		]"##;
		let steps = parse_response(200, "OK", body).unwrap();
		assert_eq!(steps[0].edges.len(), 1);
		assert_eq!(steps[0].message, "Edge A-B added to MST. Cost: 4.");
	}

	#[test]
	fn garbage_is_a_decode_error() {
		assert!(matches!(
			parse_response(200, "OK", "not json"),
			Err(AlgorithmRunError::Decode(_))
		));
		assert!(matches!(
			parse_response(200, "OK", r#"{"steps": []}"#),
			Err(AlgorithmRunError::Decode(_))
		));
	}
}
