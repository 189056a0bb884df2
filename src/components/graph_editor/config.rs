/// Tunables for the editor. `Default` gives the stock behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	/// Smallest zoom a wheel step may reach.
	pub zoom_min: f64,
	/// Largest zoom a wheel step may reach.
	pub zoom_max: f64,
	/// Multiplier applied per wheel notch.
	pub zoom_step: f64,
	/// Hover hit-test radius, world units.
	pub hover_radius: f64,
	/// Tighter radius re-checked on click before a new point is created.
	pub snap_radius: f64,
	/// Point marker diameter, world units.
	pub point_size: f64,
	/// Marker fill.
	pub point_color: &'static str,
	/// Committed segment stroke.
	pub segment_color: &'static str,
	/// Segment width, world units.
	pub segment_width: f64,
	/// Selection ring and hover dot.
	pub highlight_color: &'static str,
	/// Pending connection stroke.
	pub preview_color: &'static str,
	/// Pending connection dash pattern.
	pub preview_dash: &'static [f64],
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			zoom_min: 0.5,
			zoom_max: 5.0,
			zoom_step: 1.1,
			hover_radius: 17.0,
			snap_radius: 8.0,
			point_size: 18.0,
			point_color: "black",
			segment_color: "black",
			segment_width: 2.0,
			highlight_color: "yellow",
			preview_color: "gray",
			preview_dash: &[3.0, 3.0],
		}
	}
}
