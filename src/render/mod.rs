//! Render sink interface and the pure scene built from it.

mod scene;
mod sink;
mod visuals;

pub use scene::{Scene, SceneEdge, SceneNode, compose};
pub use sink::RenderSink;
pub use visuals::VisualState;
