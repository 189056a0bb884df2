use web_sys::{HtmlCanvasElement, MouseEvent, WheelEvent};

/// Which pointer button an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
	/// Usually the left button.
	Primary,
	/// Usually the wheel button.
	Auxiliary,
	/// Usually the right button.
	Secondary,
	/// Any other DOM button code.
	Other(i16),
}

impl From<i16> for PointerButton {
	fn from(button: i16) -> Self {
		match button {
			0 => Self::Primary,
			1 => Self::Auxiliary,
			2 => Self::Secondary,
			other => Self::Other(other),
		}
	}
}

/// A pointer press in canvas screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
	/// Screen x.
	pub x: f64,
	/// Screen y.
	pub y: f64,
	/// Button pressed.
	pub button: PointerButton,
	/// Modifier that turns a primary press into a pan (Alt).
	pub pan_modifier: bool,
}

impl PointerInput {
	/// A press without the pan modifier.
	pub fn new(x: f64, y: f64, button: PointerButton) -> Self {
		Self {
			x,
			y,
			button,
			pan_modifier: false,
		}
	}

	/// Sets the pan modifier flag.
	pub fn with_pan_modifier(self, pan_modifier: bool) -> Self {
		Self {
			pan_modifier,
			..self
		}
	}

	/// Whether this press starts a pan gesture instead of an edit.
	pub fn starts_pan(&self) -> bool {
		match self.button {
			PointerButton::Auxiliary => true,
			PointerButton::Primary => self.pan_modifier,
			_ => false,
		}
	}

	/// Reads a DOM mouse event relative to the canvas.
	pub fn from_mouse_event(ev: &MouseEvent, canvas: &HtmlCanvasElement) -> Self {
		let (x, y) = canvas_position(ev, canvas);
		Self::new(x, y, ev.button().into()).with_pan_modifier(ev.alt_key())
	}
}

/// A wheel notch in canvas screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
	/// Screen x.
	pub x: f64,
	/// Screen y.
	pub y: f64,
	/// Vertical scroll delta; negative means scrolling up.
	pub delta_y: f64,
}

impl WheelInput {
	/// Positive zooms in, negative zooms out, zero leaves the view alone.
	pub fn zoom_direction(&self) -> i32 {
		if self.delta_y < 0.0 {
			1
		} else if self.delta_y > 0.0 {
			-1
		} else {
			0
		}
	}

	/// Reads a DOM wheel event relative to the canvas.
	pub fn from_wheel_event(ev: &WheelEvent, canvas: &HtmlCanvasElement) -> Self {
		let (x, y) = canvas_position(ev, canvas);
		Self {
			x,
			y,
			delta_y: ev.delta_y(),
		}
	}
}

/// Client coordinates relative to the canvas' top-left corner.
pub fn canvas_position(ev: &MouseEvent, canvas: &HtmlCanvasElement) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}
