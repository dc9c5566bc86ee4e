//! Deterministic circular placement of nodes.

use std::f64::consts::{FRAC_PI_2, PI};

/// Fraction of the shorter surface side used as the circle radius.
pub const RADIUS_FACTOR: f64 = 0.38;

/// A position on the surface, origin top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutPoint {
	/// Horizontal offset.
	pub x: f64,
	/// Vertical offset, growing downwards.
	pub y: f64,
}

/// Size of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
	/// Width in pixels.
	pub width: f64,
	/// Height in pixels.
	pub height: f64,
}

impl Surface {
	/// Surface of the given size.
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// Angle of node `i` out of `n`; node 0 sits at the top.
pub fn angle_of(i: usize, n: usize) -> f64 {
	(i as f64 / n as f64) * 2.0 * PI - FRAC_PI_2
}

/// Places `node_count` nodes evenly on a circle centred on the surface.
///
/// The result is indexed by node id and depends only on the arguments.
pub fn circular(node_count: usize, width: f64, height: f64) -> Vec<LayoutPoint> {
	let radius = width.min(height) * RADIUS_FACTOR;
	let (cx, cy) = (width / 2.0, height / 2.0);
	(0..node_count)
		.map(|i| {
			let angle = angle_of(i, node_count);
			LayoutPoint {
				x: cx + radius * angle.cos(),
				y: cy + radius * angle.sin(),
			}
		})
		.collect()
}
