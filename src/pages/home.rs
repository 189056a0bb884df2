use leptos::prelude::*;

use crate::components::graph_editor::{GraphData, GraphEditorCanvas, Point2D};

/// A short zigzag path so the canvas is not blank on first load.
fn generate_sample_data(n: usize) -> GraphData {
	let points = (0..n)
		.map(|i| {
			let y = if i % 2 == 0 { 200.0 } else { 300.0 };
			Point2D::new(150.0 + 120.0 * i as f64, y)
		})
		.collect();
	let segments = (1..n).map(|i| (i - 1, i)).collect();
	GraphData { points, segments }
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph_data = Signal::derive(move || generate_sample_data(5));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<GraphEditorCanvas data=graph_data fullscreen=true />
				<div class="graph-overlay">
					<h1>"Graph Editor"</h1>
					<p class="subtitle">
						"Click to add points. Drag to move. Right click to delete. Middle drag or Alt+drag to pan. Scroll to zoom."
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
