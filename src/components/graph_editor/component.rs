use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use web_sys::{HtmlCanvasElement, Window};

use super::binding::{CanvasBinding, Session, window_size};
use super::config::EditorConfig;
use super::error::EditorError;
use super::graph::Graph;
use super::state::EditorState;
use super::surface::CanvasSurface;
use super::types::GraphData;

/// Canvas-hosted point/segment editor.
///
/// Click to add or pick points (consecutive picks are joined), drag to move,
/// right click to delete. Middle drag or Alt+drag pans, the wheel zooms.
#[component]
pub fn GraphEditorCanvas(
	/// Graph shown when the editor starts.
	#[prop(into)]
	data: Signal<GraphData>,
	#[prop(optional)] config: EditorConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let binding: Rc<RefCell<Option<CanvasBinding>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		if let Some(previous) = binding.borrow_mut().take() {
			previous.detach();
		}
		let size = (fullscreen, width, height);
		match start(&canvas, &data.get(), config.clone(), size) {
			Ok(b) => *binding.borrow_mut() = Some(b),
			Err(e) => error!("Graph editor failed to start: {e}"),
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-editor-canvas"
			style="display: block; cursor: crosshair;"
		/>
	}
}

fn start(
	canvas: &HtmlCanvasElement,
	data: &GraphData,
	config: EditorConfig,
	(fullscreen, width, height): (bool, Option<f64>, Option<f64>),
) -> Result<CanvasBinding, EditorError> {
	let window = web_sys::window().ok_or(EditorError::NoWindow)?;
	let surface = CanvasSurface::new(canvas.clone())?;
	let (w, h) = canvas_size(&window, canvas, fullscreen, width, height);
	surface.resize(w, h);

	let mut state = EditorState::new(Graph::new(), config);
	state.load(data);
	info!(
		"Graph editor loaded {} points, {} segments",
		state.graph.point_count(),
		state.graph.segment_count()
	);

	let session = Rc::new(RefCell::new(Session { state, surface }));
	session.borrow_mut().repaint();

	let mut binding = CanvasBinding::attach(canvas, session.clone())?;
	if fullscreen {
		binding.watch_window_resize(&window, session)?;
	}
	Ok(binding)
}

fn canvas_size(
	window: &Window,
	canvas: &HtmlCanvasElement,
	fullscreen: bool,
	width: Option<f64>,
	height: Option<f64>,
) -> (f64, f64) {
	if fullscreen {
		if let Some(size) = window_size(window) {
			return size;
		}
	}
	(
		width.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0)
		}),
		height.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_height() as f64)
				.unwrap_or(600.0)
		}),
	)
}
