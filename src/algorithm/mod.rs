//! Request building and response decoding for the external algorithm service.

mod client;
mod error;
mod kind;
mod request;
mod step;

pub use client::{AlgorithmClient, DEFAULT_ENDPOINT, parse_response};
pub use error::{AlgorithmRunError, RunError};
pub use kind::AlgorithmKind;
pub use request::{GraphPayload, RunRequest, build_request};
pub use step::{EdgeVisual, NodeVisual, VisualizationStep};
