use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::config::Palette;
use crate::layout::Surface;
use crate::render::Scene;

pub fn render(scene: &Scene, palette: &Palette, size: Surface, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&palette.background);
	ctx.fill_rect(0.0, 0.0, size.width, size.height);
	ctx.set_text_align("center");
	draw_edges(scene, palette, ctx);
	draw_nodes(scene, palette, ctx);
}

fn draw_edges(scene: &Scene, palette: &Palette, ctx: &CanvasRenderingContext2d) {
	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.set_line_cap("round");
	for edge in &scene.edges {
		ctx.set_stroke_style_str(&edge.color);
		ctx.set_line_width(edge.width);
		ctx.begin_path();
		ctx.move_to(edge.from.x, edge.from.y);
		ctx.line_to(edge.to.x, edge.to.y);
		ctx.stroke();
	}

	// Weights go on top of every line so crossings don't hide them.
	ctx.set_font("bold 14px sans-serif");
	ctx.set_fill_style_str(&palette.weight_text);
	for edge in &scene.edges {
		let _ = ctx.fill_text(&edge.weight, edge.weight_at.x, edge.weight_at.y);
	}
}

fn draw_nodes(scene: &Scene, palette: &Palette, ctx: &CanvasRenderingContext2d) {
	for node in &scene.nodes {
		let (x, y) = (node.center.x, node.center.y);
		ctx.begin_path();
		let _ = ctx.arc(x, y, node.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&node.fill);
		ctx.fill();
		ctx.set_stroke_style_str(&palette.background);
		ctx.set_line_width(2.0);
		ctx.stroke();

		ctx.set_font("bold 18px sans-serif");
		ctx.set_fill_style_str(&palette.node_label);
		let _ = ctx.fill_text(&node.letter, node.letter_at.x, node.letter_at.y);

		if !node.info.is_empty() {
			ctx.set_font("14px sans-serif");
			ctx.set_fill_style_str(&palette.info_text);
			let _ = ctx.fill_text(&node.info, node.info_at.x, node.info_at.y);
		}
	}
}
