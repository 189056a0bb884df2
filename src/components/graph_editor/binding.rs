use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::error::EditorError;
use super::input::{PointerInput, WheelInput, canvas_position};
use super::render;
use super::state::EditorState;
use super::surface::CanvasSurface;

/// Editor state together with the canvas it paints.
pub struct Session {
	/// Graph, viewport and interaction state.
	pub state: EditorState,
	/// Canvas being painted.
	pub surface: CanvasSurface,
}

impl Session {
	/// Draws a full frame of the current state.
	pub fn repaint(&mut self) {
		render::render(&self.state, &mut self.surface);
	}

	fn dispatch(&mut self, handler: impl FnOnce(&mut EditorState) -> bool) {
		if handler(&mut self.state) {
			self.repaint();
		}
	}
}

struct Listener {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

/// DOM listeners feeding a [`Session`]. Dropping the binding removes them.
pub struct CanvasBinding {
	listeners: Vec<Listener>,
}

impl CanvasBinding {
	/// Wires pointer, wheel and context-menu events on `canvas` into the session.
	pub fn attach(
		canvas: &HtmlCanvasElement,
		session: Rc<RefCell<Session>>,
	) -> Result<Self, EditorError> {
		let mut binding = Self {
			listeners: Vec::new(),
		};
		let target: &EventTarget = canvas.as_ref();

		binding.listen(
			target,
			"mousedown",
			mouse_handler(canvas, &session, |state, ev, canvas| {
				let input = PointerInput::from_mouse_event(ev, canvas);
				if input.starts_pan() {
					ev.prevent_default();
				}
				state.on_pointer_down(input)
			}),
		)?;
		binding.listen(
			target,
			"mousemove",
			mouse_handler(canvas, &session, |state, ev, canvas| {
				let (x, y) = canvas_position(ev, canvas);
				state.on_pointer_move(x, y)
			}),
		)?;
		binding.listen(
			target,
			"mouseup",
			mouse_handler(canvas, &session, |state, _, _| state.on_pointer_up()),
		)?;
		binding.listen(
			target,
			"mouseleave",
			mouse_handler(canvas, &session, |state, _, _| state.on_pointer_leave()),
		)?;

		let (wheel_canvas, wheel_session) = (canvas.clone(), session.clone());
		binding.listen(
			target,
			"wheel",
			Closure::new(move |ev: Event| {
				let Some(ev) = ev.dyn_ref::<WheelEvent>() else {
					return;
				};
				ev.prevent_default();
				let input = WheelInput::from_wheel_event(ev, &wheel_canvas);
				with_session(&wheel_session, |s| s.dispatch(|state| state.on_wheel(input)));
			}),
		)?;

		// Right click deletes; keep the browser menu out of the way.
		binding.listen(
			target,
			"contextmenu",
			Closure::new(|ev: Event| ev.prevent_default()),
		)?;

		info!("Graph editor attached ({} listeners)", binding.listeners.len());
		Ok(binding)
	}

	/// Keeps the canvas sized to the window and repaints after each resize.
	pub fn watch_window_resize(
		&mut self,
		window: &Window,
		session: Rc<RefCell<Session>>,
	) -> Result<(), EditorError> {
		let win = window.clone();
		self.listen(
			window.as_ref(),
			"resize",
			Closure::new(move |_: Event| {
				let Some((w, h)) = window_size(&win) else {
					return;
				};
				with_session(&session, |s| {
					s.surface.resize(w, h);
					s.repaint();
				});
			}),
		)
	}

	/// Removes every listener this binding registered.
	pub fn detach(mut self) {
		info!("Graph editor detached ({} listeners)", self.listeners.len());
		self.remove_listeners();
	}

	fn remove_listeners(&mut self) {
		for l in self.listeners.drain(..) {
			let _ = l
				.target
				.remove_event_listener_with_callback(l.event, l.callback.as_ref().unchecked_ref());
		}
	}

	fn listen(
		&mut self,
		target: &EventTarget,
		event: &'static str,
		callback: Closure<dyn FnMut(Event)>,
	) -> Result<(), EditorError> {
		target
			.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
			.map_err(|e| EditorError::Listener {
				event,
				reason: format!("{e:?}"),
			})?;
		self.listeners.push(Listener {
			target: target.clone(),
			event,
			callback,
		});
		Ok(())
	}
}

impl Drop for CanvasBinding {
	fn drop(&mut self) {
		self.remove_listeners();
	}
}

/// Inner window size in CSS pixels.
pub fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn with_session(session: &Rc<RefCell<Session>>, f: impl FnOnce(&mut Session)) {
	match session.try_borrow_mut() {
		Ok(mut s) => f(&mut s),
		Err(_) => warn!("Graph editor busy, dropping event"),
	}
}

fn mouse_handler(
	canvas: &HtmlCanvasElement,
	session: &Rc<RefCell<Session>>,
	handler: impl Fn(&mut EditorState, &MouseEvent, &HtmlCanvasElement) -> bool + 'static,
) -> Closure<dyn FnMut(Event)> {
	let (canvas, session) = (canvas.clone(), session.clone());
	Closure::new(move |ev: Event| {
		let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
			return;
		};
		with_session(&session, |s| s.dispatch(|state| handler(state, ev, &canvas)));
	})
}
