use super::config::EditorConfig;
use super::surface::{Surface, Transform};
use super::types::Point2D;

#[derive(Clone, Copy, Debug, PartialEq)]
struct ZoomLimits {
	min: f64,
	max: f64,
	step: f64,
}

/// Pan/zoom state mapping screen pixels to world coordinates.
///
/// `screen = world * zoom + offset`. Zoom always stays within the configured
/// bounds; the offset is unbounded.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
	zoom: f64,
	offset_x: f64,
	offset_y: f64,
	limits: ZoomLimits,
	/// Last screen position of an active pan gesture.
	pan_anchor: Option<(f64, f64)>,
}

impl Viewport {
	/// Unit zoom, zero offset.
	pub fn new(config: &EditorConfig) -> Self {
		Self {
			zoom: 1.0,
			offset_x: 0.0,
			offset_y: 0.0,
			limits: ZoomLimits {
				min: config.zoom_min,
				max: config.zoom_max,
				step: config.zoom_step,
			},
			pan_anchor: None,
		}
	}

	/// Current zoom factor.
	pub fn zoom(&self) -> f64 {
		self.zoom
	}

	/// Current screen-space offset.
	pub fn offset(&self) -> (f64, f64) {
		(self.offset_x, self.offset_y)
	}

	/// Screen pixels to world coordinates.
	pub fn to_world(&self, screen_x: f64, screen_y: f64) -> Point2D {
		Point2D::new(
			(screen_x - self.offset_x) / self.zoom,
			(screen_y - self.offset_y) / self.zoom,
		)
	}

	/// Resets to the identity transform and clears the whole visible area.
	pub fn begin_frame<S: Surface>(&self, surface: &mut S) {
		surface.set_transform(Transform::IDENTITY);
		let (w, h) = surface.size();
		surface.clear_rect(0.0, 0.0, w, h);
	}

	/// Makes subsequent draw calls take world coordinates.
	pub fn apply_transform<S: Surface>(&self, surface: &mut S) {
		surface.set_transform(Transform {
			scale: self.zoom,
			translate_x: self.offset_x,
			translate_y: self.offset_y,
		});
	}

	/// Shifts the view by a screen-pixel delta, independent of zoom.
	pub fn pan(&mut self, dx: f64, dy: f64) {
		self.offset_x += dx;
		self.offset_y += dy;
	}

	/// Steps the zoom in (`direction > 0`) or out (`direction < 0`) around a
	/// screen point, keeping the world point under it fixed.
	///
	/// A step that would leave the zoom bounds is dropped. Returns whether
	/// anything changed.
	pub fn zoom_at(&mut self, screen_x: f64, screen_y: f64, direction: i32) -> bool {
		let new_zoom = match direction.signum() {
			1 => self.zoom * self.limits.step,
			-1 => self.zoom / self.limits.step,
			_ => return false,
		};
		if !(self.limits.min..=self.limits.max).contains(&new_zoom) {
			return false;
		}

		let ratio = new_zoom / self.zoom;
		self.offset_x = screen_x - (screen_x - self.offset_x) * ratio;
		self.offset_y = screen_y - (screen_y - self.offset_y) * ratio;
		self.zoom = new_zoom;
		true
	}

	/// Starts a pan gesture anchored at a screen position.
	pub fn begin_pan(&mut self, screen_x: f64, screen_y: f64) {
		self.pan_anchor = Some((screen_x, screen_y));
	}

	/// Follows the pointer during a pan gesture. Returns false when no gesture is active.
	pub fn drag_pan(&mut self, screen_x: f64, screen_y: f64) -> bool {
		let Some((last_x, last_y)) = self.pan_anchor else {
			return false;
		};
		self.pan(screen_x - last_x, screen_y - last_y);
		self.pan_anchor = Some((screen_x, screen_y));
		true
	}

	/// Ends any active pan gesture.
	pub fn end_pan(&mut self) {
		self.pan_anchor = None;
	}

	/// Whether a pan gesture is in progress.
	pub fn is_panning(&self) -> bool {
		self.pan_anchor.is_some()
	}
}

impl Default for Viewport {
	fn default() -> Self {
		Self::new(&EditorConfig::default())
	}
}
