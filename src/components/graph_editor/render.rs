use super::config::EditorConfig;
use super::graph::GraphStore;
use super::state::EditorState;
use super::surface::Surface;
use super::types::{Point2D, Segment};

const OUTLINE_WIDTH: f64 = 1.2;
const OUTLINE_RATIO: f64 = 0.6;
const FILL_RATIO: f64 = 0.4;

/// Options for drawing a point marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointStyle<'a> {
	/// Marker diameter in world units.
	pub size: f64,
	/// Marker fill.
	pub color: &'a str,
	/// Color of the outline ring and fill dot.
	pub highlight: &'a str,
	/// Inner ring, used for the selected point.
	pub outline: bool,
	/// Inner dot, used for the hovered point.
	pub fill: bool,
}

impl Default for PointStyle<'static> {
	fn default() -> Self {
		Self {
			size: 18.0,
			color: "black",
			highlight: "yellow",
			outline: false,
			fill: false,
		}
	}
}

impl<'a> PointStyle<'a> {
	/// Base marker style for the given configuration.
	pub fn from_config(config: &'a EditorConfig) -> Self {
		Self {
			size: config.point_size,
			color: config.point_color,
			highlight: config.highlight_color,
			outline: false,
			fill: false,
		}
	}

	/// Same style with the outline ring.
	pub fn outlined(self) -> Self {
		Self {
			outline: true,
			..self
		}
	}

	/// Same style with the fill dot.
	pub fn filled(self) -> Self {
		Self { fill: true, ..self }
	}
}

/// Options for stroking a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentStyle<'a> {
	/// Line width in world units.
	pub width: f64,
	/// Stroke color.
	pub color: &'a str,
	/// Empty for a solid line.
	pub dash: &'a [f64],
}

impl Default for SegmentStyle<'static> {
	fn default() -> Self {
		Self {
			width: 2.0,
			color: "black",
			dash: &[],
		}
	}
}

impl<'a> SegmentStyle<'a> {
	/// Solid style for committed segments.
	pub fn from_config(config: &'a EditorConfig) -> Self {
		Self {
			width: config.segment_width,
			color: config.segment_color,
			dash: &[],
		}
	}

	/// Dashed style for the pending connection.
	pub fn preview(config: &'a EditorConfig) -> Self {
		Self {
			width: config.segment_width,
			color: config.preview_color,
			dash: config.preview_dash,
		}
	}
}

impl Point2D {
	/// Draws the marker centered on this point.
	pub fn draw<S: Surface>(&self, surface: &mut S, style: &PointStyle) {
		let rad = style.size / 2.0;

		surface.begin_path();
		surface.set_fill_color(style.color);
		surface.circle(self.x, self.y, rad);
		surface.fill();

		if style.outline {
			surface.begin_path();
			surface.set_line_width(OUTLINE_WIDTH);
			surface.set_stroke_color(style.highlight);
			surface.circle(self.x, self.y, rad * OUTLINE_RATIO);
			surface.stroke();
		}
		if style.fill {
			surface.begin_path();
			surface.circle(self.x, self.y, rad * FILL_RATIO);
			surface.set_fill_color(style.highlight);
			surface.fill();
		}
	}
}

impl Segment {
	/// Strokes the segment between its endpoints' current positions.
	/// Nothing is drawn if either endpoint is gone.
	pub fn draw<G: GraphStore, S: Surface>(
		&self,
		graph: &G,
		surface: &mut S,
		style: &SegmentStyle,
	) {
		if let (Some(a), Some(b)) = (graph.point(self.a), graph.point(self.b)) {
			draw_line(surface, a, b, style);
		}
	}
}

/// Strokes a straight line, restoring a solid dash afterwards.
pub fn draw_line<S: Surface>(
	surface: &mut S,
	from: Point2D,
	to: Point2D,
	style: &SegmentStyle,
) {
	surface.begin_path();
	surface.set_line_width(style.width);
	surface.set_stroke_color(style.color);
	surface.set_line_dash(style.dash);
	surface.move_to(from.x, from.y);
	surface.line_to(to.x, to.y);
	surface.stroke();
	if !style.dash.is_empty() {
		surface.set_line_dash(&[]);
	}
}

/// One full frame: clear, transform, graph, then selection and hover feedback.
///
/// Reads state only.
pub fn render<G: GraphStore, S: Surface>(state: &EditorState<G>, surface: &mut S) {
	state.viewport.begin_frame(surface);
	state.viewport.apply_transform(surface);

	let point_style = PointStyle::from_config(&state.config);
	state
		.graph
		.draw(surface, &point_style, &SegmentStyle::from_config(&state.config));

	let ui = &state.interaction;
	let selected = ui.selected.and_then(|id| state.graph.point(id));
	let hovered = ui.hovered.and_then(|id| state.graph.point(id));

	// The preview would trail the point being dragged.
	if !ui.dragging {
		if let (Some(sel), Some(pointer)) = (selected, ui.pointer_world) {
			let target = hovered.unwrap_or(pointer);
			draw_line(surface, sel, target, &SegmentStyle::preview(&state.config));
			sel.draw(surface, &point_style.outlined());
		}
	}

	if ui.hovered != ui.selected {
		if let Some(h) = hovered {
			h.draw(surface, &point_style.filled());
		}
	}
}
