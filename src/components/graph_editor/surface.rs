use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::error::EditorError;

/// Uniform scale followed by a translation, the only transforms the editor issues.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
	/// Uniform scale.
	pub scale: f64,
	/// Horizontal translation, device pixels.
	pub translate_x: f64,
	/// Vertical translation, device pixels.
	pub translate_y: f64,
}

impl Transform {
	/// No scale, no translation.
	pub const IDENTITY: Transform = Transform {
		scale: 1.0,
		translate_x: 0.0,
		translate_y: 0.0,
	};
}

/// The drawing primitives the editor needs from a 2D context.
pub trait Surface {
	/// Visible area in device pixels.
	fn size(&self) -> (f64, f64);
	/// Replaces the active transform.
	fn set_transform(&mut self, transform: Transform);
	/// Erases a rectangle to transparent.
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
	/// Starts a new path.
	fn begin_path(&mut self);
	/// Adds a full circle to the current path.
	fn circle(&mut self, x: f64, y: f64, radius: f64);
	/// Starts a subpath.
	fn move_to(&mut self, x: f64, y: f64);
	/// Extends the subpath with a straight line.
	fn line_to(&mut self, x: f64, y: f64);
	/// CSS color used by [`Surface::fill`].
	fn set_fill_color(&mut self, color: &str);
	/// CSS color used by [`Surface::stroke`].
	fn set_stroke_color(&mut self, color: &str);
	/// Stroke width in current units.
	fn set_line_width(&mut self, width: f64);
	/// An empty pattern draws solid lines.
	fn set_line_dash(&mut self, pattern: &[f64]);
	/// Fills the current path.
	fn fill(&mut self);
	/// Strokes the current path.
	fn stroke(&mut self);
}

/// [`Surface`] backed by a browser canvas.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Takes the canvas' 2D context.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, EditorError> {
		let ctx = canvas
			.get_context("2d")
			.map_err(|e| EditorError::Context(format!("{e:?}")))?
			.ok_or_else(|| EditorError::Context("2d context not supported".into()))?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|e| EditorError::Context(format!("{e:?}")))?;
		Ok(Self { canvas, ctx })
	}

	/// Sets the backing store size in device pixels.
	pub fn resize(&self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
	}
}

impl Surface for CanvasSurface {
	fn size(&self) -> (f64, f64) {
		(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn set_transform(&mut self, t: Transform) {
		let _ = self
			.ctx
			.set_transform(t.scale, 0.0, 0.0, t.scale, t.translate_x, t.translate_y);
	}

	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		self.ctx.clear_rect(x, y, width, height);
	}

	fn begin_path(&mut self) {
		self.ctx.begin_path();
	}

	fn circle(&mut self, x: f64, y: f64, radius: f64) {
		let _ = self.ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	}

	fn move_to(&mut self, x: f64, y: f64) {
		self.ctx.move_to(x, y);
	}

	fn line_to(&mut self, x: f64, y: f64) {
		self.ctx.line_to(x, y);
	}

	fn set_fill_color(&mut self, color: &str) {
		self.ctx.set_fill_style_str(color);
	}

	fn set_stroke_color(&mut self, color: &str) {
		self.ctx.set_stroke_style_str(color);
	}

	fn set_line_width(&mut self, width: f64) {
		self.ctx.set_line_width(width);
	}

	fn set_line_dash(&mut self, pattern: &[f64]) {
		let segments: js_sys::Array = pattern.iter().map(|v| JsValue::from_f64(*v)).collect();
		let _ = self.ctx.set_line_dash(&segments);
	}

	fn fill(&mut self) {
		self.ctx.fill();
	}

	fn stroke(&mut self) {
		self.ctx.stroke();
	}
}
