use log::debug;

use super::config::EditorConfig;
use super::graph::{Graph, GraphStore, nearest_point};
use super::input::{PointerButton, PointerInput, WheelInput};
use super::types::{GraphData, Point2D, PointId, Segment};
use super::viewport::Viewport;

/// Transient UI state. `dragging` is only ever set together with `selected`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
	/// Point the next click connects from.
	pub selected: Option<PointId>,
	/// Nearest point under the pointer.
	pub hovered: Option<PointId>,
	/// Last known pointer position, world space.
	pub pointer_world: Option<Point2D>,
	/// Primary button held after a press that selected a point.
	pub dragging: bool,
}

/// Turns pointer input into graph edits.
///
/// Every `on_*` handler returns whether the canvas needs repainting; the host
/// runs [`render`](super::render::render) whenever it does.
pub struct EditorState<G: GraphStore = Graph> {
	/// Points and segments being edited.
	pub graph: G,
	/// Pan and zoom.
	pub viewport: Viewport,
	/// Selection, hover and drag.
	pub interaction: InteractionState,
	/// Radii, zoom bounds and colors.
	pub config: EditorConfig,
}

impl Default for EditorState<Graph> {
	fn default() -> Self {
		Self::new(Graph::new(), EditorConfig::default())
	}
}

impl EditorState<Graph> {
	/// Replaces the graph with seed data and drops any selection.
	pub fn load(&mut self, data: &GraphData) {
		self.graph = Graph::from_data(data);
		self.interaction = InteractionState::default();
	}
}

impl<G: GraphStore> EditorState<G> {
	/// Wraps a graph with a fresh viewport and no selection.
	pub fn new(graph: G, config: EditorConfig) -> Self {
		Self {
			graph,
			viewport: Viewport::new(&config),
			interaction: InteractionState::default(),
			config,
		}
	}

	/// Primary press selects, creates and connects points and arms a drag.
	/// Secondary press deletes the point under the pointer, or deselects.
	pub fn on_pointer_down(&mut self, input: PointerInput) -> bool {
		if input.starts_pan() {
			self.viewport.begin_pan(input.x, input.y);
			return false;
		}

		let pointer = self.viewport.to_world(input.x, input.y);
		self.interaction.pointer_world = Some(pointer);

		match input.button {
			PointerButton::Primary => {
				let target = match self.click_target(pointer) {
					Some(id) => id,
					None => self.graph.add_point(pointer),
				};
				self.select(target);
				self.interaction.dragging = true;
				true
			}
			PointerButton::Secondary => {
				self.delete();
				true
			}
			_ => false,
		}
	}

	/// Pans if a pan gesture is active, refreshes hover, and moves the
	/// selected point while dragging.
	pub fn on_pointer_move(&mut self, screen_x: f64, screen_y: f64) -> bool {
		self.viewport.drag_pan(screen_x, screen_y);

		let pointer = self.viewport.to_world(screen_x, screen_y);
		self.interaction.pointer_world = Some(pointer);
		self.interaction.hovered =
			nearest_point(self.graph.points(), pointer, self.config.hover_radius);

		if self.interaction.dragging {
			let moved = self
				.interaction
				.selected
				.is_some_and(|id| self.graph.set_position(id, pointer));
			if !moved {
				self.interaction.dragging = false;
			}
		}
		true
	}

	/// Ends a drag or pan. The selection stays.
	pub fn on_pointer_up(&mut self) -> bool {
		self.viewport.end_pan();
		self.interaction.dragging = false;
		true
	}

	/// The pointer left the canvas: end gestures and forget where it was.
	pub fn on_pointer_leave(&mut self) -> bool {
		self.viewport.end_pan();
		self.interaction.dragging = false;
		self.interaction.hovered = None;
		self.interaction.pointer_world = None;
		true
	}

	/// Zooms around the cursor; repaints only if the zoom changed.
	pub fn on_wheel(&mut self, input: WheelInput) -> bool {
		self.viewport.zoom_at(input.x, input.y, input.zoom_direction())
	}

	/// Hovered point if it still exists, else anything within the snap radius
	/// of the press, so a click next to a point never stacks a new one on it.
	fn click_target(&self, pointer: Point2D) -> Option<PointId> {
		self.interaction
			.hovered
			.filter(|id| self.graph.contains(*id))
			.or_else(|| nearest_point(self.graph.points(), pointer, self.config.snap_radius))
	}

	/// Connects the current selection to `id`, then selects `id`.
	fn select(&mut self, id: PointId) {
		if let Some(prev) = self.interaction.selected {
			if prev != id && !self.graph.try_add_segment(Segment::new(prev, id)) {
				debug!("No new segment {:?}-{:?}", prev, id);
			}
		}
		self.interaction.selected = Some(id);
	}

	/// Removes the hovered point, or only deselects when nothing is hovered.
	fn delete(&mut self) {
		match self.interaction.hovered.filter(|id| self.graph.contains(*id)) {
			Some(id) => {
				self.graph.remove_point(id);
				self.interaction.selected = None;
				self.interaction.hovered = None;
			}
			None => self.interaction.selected = None,
		}
		self.interaction.dragging = false;
	}
}

#[cfg(test)]
mod tests {
	use approx::assert_relative_eq;

	use super::*;

	fn press(state: &mut EditorState, x: f64, y: f64, button: PointerButton) -> bool {
		state.on_pointer_down(PointerInput::new(x, y, button))
	}

	fn click(state: &mut EditorState, x: f64, y: f64) {
		state.on_pointer_move(x, y);
		press(state, x, y, PointerButton::Primary);
		state.on_pointer_up();
	}

	fn at(state: &EditorState, id: Option<PointId>) -> Point2D {
		id.and_then(|id| state.graph.point(id)).unwrap()
	}

	#[test]
	fn click_on_empty_canvas_creates_and_selects() {
		let mut state = EditorState::default();
		click(&mut state, 100.0, 100.0);

		assert_eq!(state.graph.point_count(), 1);
		assert_eq!(at(&state, state.interaction.selected), Point2D::new(100.0, 100.0));
		assert!(!state.interaction.dragging);
	}

	#[test]
	fn clicking_empty_space_with_selection_extends_path() {
		let mut state = EditorState::default();
		click(&mut state, 100.0, 100.0);
		let a = state.interaction.selected.unwrap();
		click(&mut state, 200.0, 100.0);
		let b = state.interaction.selected.unwrap();

		assert_ne!(a, b);
		assert_eq!(state.graph.point(b), Some(Point2D::new(200.0, 100.0)));
		assert_eq!(state.graph.segments().collect::<Vec<_>>(), vec![Segment::new(a, b)]);
	}

	#[test]
	fn clicking_existing_point_reuses_it_without_duplicate_segment() {
		let mut state = EditorState::default();
		click(&mut state, 100.0, 100.0);
		let a = state.interaction.selected.unwrap();
		click(&mut state, 200.0, 100.0);
		let b = state.interaction.selected.unwrap();

		click(&mut state, 100.0, 100.0);
		assert_eq!(state.interaction.selected, Some(a));
		click(&mut state, 200.0, 100.0);

		assert_eq!(state.interaction.selected, Some(b));
		assert_eq!(state.graph.point_count(), 2);
		assert_eq!(state.graph.segment_count(), 1);
	}

	#[test]
	fn press_without_move_snaps_to_nearby_point() {
		let mut state = EditorState::default();
		click(&mut state, 100.0, 100.0);
		let a = state.interaction.selected.unwrap();
		state.on_pointer_leave();

		press(&mut state, 104.0, 97.0, PointerButton::Primary);
		assert_eq!(state.interaction.selected, Some(a));
		assert_eq!(state.graph.point_count(), 1);
		assert_eq!(state.graph.segment_count(), 0);
	}

	#[test]
	fn press_outside_snap_radius_without_hover_creates_point() {
		let mut state = EditorState::default();
		click(&mut state, 100.0, 100.0);
		state.on_pointer_leave();

		press(&mut state, 112.0, 100.0, PointerButton::Primary);
		assert_eq!(state.graph.point_count(), 2);
		assert_eq!(state.graph.segment_count(), 1);
	}

	#[test]
	fn right_click_on_point_removes_it_and_its_segments() {
		let mut state = EditorState::default();
		click(&mut state, 100.0, 100.0);
		let a = state.interaction.selected.unwrap();
		click(&mut state, 200.0, 100.0);
		let b = state.interaction.selected.unwrap();
		click(&mut state, 300.0, 100.0);

		state.on_pointer_move(200.0, 100.0);
		assert_eq!(state.interaction.hovered, Some(b));
		assert!(press(&mut state, 200.0, 100.0, PointerButton::Secondary));

		assert!(!state.graph.contains(b));
		assert!(state.graph.contains(a));
		assert_eq!(state.graph.segment_count(), 0);
		assert_eq!(state.interaction.selected, None);
		assert_eq!(state.interaction.hovered, None);
	}

	#[test]
	fn right_click_on_empty_space_deselects() {
		let mut state = EditorState::default();
		click(&mut state, 100.0, 100.0);
		state.on_pointer_move(400.0, 400.0);

		press(&mut state, 400.0, 400.0, PointerButton::Secondary);
		assert_eq!(state.interaction.selected, None);
		assert_eq!(state.graph.point_count(), 1);

		// Next click starts a fresh path.
		click(&mut state, 400.0, 400.0);
		assert_eq!(state.graph.segment_count(), 0);
	}

	#[test]
	fn right_click_without_hover_only_deselects() {
		let mut state = EditorState::default();
		state.on_pointer_move(400.0, 400.0);
		press(&mut state, 100.0, 100.0, PointerButton::Primary);
		state.on_pointer_up();
		assert_eq!(state.interaction.hovered, None);

		assert!(press(&mut state, 100.0, 100.0, PointerButton::Secondary));
		assert_eq!(state.graph.point_count(), 1);
		assert_eq!(state.interaction.selected, None);
		assert!(!state.interaction.dragging);
	}

	#[test]
	fn drag_moves_the_same_point_live() {
		let mut state = EditorState::default();
		click(&mut state, 100.0, 100.0);
		let a = state.interaction.selected.unwrap();
		click(&mut state, 200.0, 100.0);

		state.on_pointer_move(100.0, 100.0);
		press(&mut state, 100.0, 100.0, PointerButton::Primary);
		assert!(state.interaction.dragging);
		for i in 1..=5 {
			state.on_pointer_move(100.0 + i as f64 * 7.0, 100.0 - i as f64 * 3.0);
			let expected = Point2D::new(100.0 + i as f64 * 7.0, 100.0 - i as f64 * 3.0);
			assert_eq!(state.graph.point(a), Some(expected));
		}
		state.on_pointer_up();

		assert!(!state.interaction.dragging);
		assert_eq!(state.interaction.selected, Some(a));
		assert_eq!(state.graph.point_count(), 2);
		assert_eq!(state.graph.segment_count(), 1);

		state.on_pointer_move(500.0, 500.0);
		assert_eq!(state.graph.point(a), Some(Point2D::new(135.0, 85.0)));
	}

	#[test]
	fn drag_without_selection_is_a_noop() {
		let mut state = EditorState::default();
		click(&mut state, 100.0, 100.0);
		state.interaction.selected = None;
		state.interaction.dragging = true;

		assert!(state.on_pointer_move(150.0, 150.0));
		assert!(!state.interaction.dragging);
		let (_, p) = state.graph.points().next().unwrap();
		assert_eq!(p, Point2D::new(100.0, 100.0));
	}

	#[test]
	fn hover_respects_world_radius() {
		let mut state = EditorState::default();
		click(&mut state, 100.0, 100.0);
		let a = state.interaction.selected;

		state.on_pointer_move(116.0, 100.0);
		assert_eq!(state.interaction.hovered, a);
		state.on_pointer_move(117.0, 100.0);
		assert_eq!(state.interaction.hovered, None);
	}

	#[test]
	fn clicks_map_through_pan_and_zoom() {
		let mut state = EditorState::default();
		state.on_wheel(WheelInput {
			x: 0.0,
			y: 0.0,
			delta_y: -100.0,
		});
		state.viewport.pan(20.0, 10.0);

		click(&mut state, 130.0, 120.0);
		let p = at(&state, state.interaction.selected);
		assert_relative_eq!(p.x, 100.0, epsilon = 1e-9);
		assert_relative_eq!(p.y, 100.0, epsilon = 1e-9);
	}

	#[test]
	fn middle_button_pans_without_editing() {
		let mut state = EditorState::default();
		assert!(!press(&mut state, 50.0, 50.0, PointerButton::Auxiliary));
		state.on_pointer_move(80.0, 40.0);
		state.on_pointer_up();

		assert_eq!(state.viewport.offset(), (30.0, -10.0));
		assert_eq!(state.graph.point_count(), 0);
		assert_eq!(state.interaction.pointer_world, Some(Point2D::new(50.0, 50.0)));

		state.on_pointer_move(90.0, 40.0);
		assert_eq!(state.viewport.offset(), (30.0, -10.0));
	}

	#[test]
	fn alt_primary_pans() {
		let mut state = EditorState::default();
		let input = PointerInput::new(10.0, 10.0, PointerButton::Primary).with_pan_modifier(true);
		state.on_pointer_down(input);
		state.on_pointer_move(25.0, 10.0);
		state.on_pointer_up();

		assert_eq!(state.viewport.offset(), (15.0, 0.0));
		assert_eq!(state.graph.point_count(), 0);
		assert_eq!(state.interaction.selected, None);
	}

	#[test]
	fn wheel_zoom_to_cursor_and_clamp() {
		let mut state = EditorState::default();
		let wheel = |delta_y| WheelInput {
			x: 150.0,
			y: 150.0,
			delta_y,
		};
		let before = state.viewport.to_world(150.0, 150.0);
		assert!(state.on_wheel(wheel(-1.0)));
		assert_relative_eq!(state.viewport.zoom(), 1.1);
		let after = state.viewport.to_world(150.0, 150.0);
		assert_relative_eq!(before.x, after.x, epsilon = 1e-9);
		assert_relative_eq!(before.y, after.y, epsilon = 1e-9);

		while state.on_wheel(wheel(1.0)) {}
		assert!(state.viewport.zoom() >= 0.5);
		assert!(!state.on_wheel(wheel(0.0)));
	}

	#[test]
	fn leave_ends_drag_and_clears_pointer() {
		let mut state = EditorState::default();
		state.on_pointer_move(100.0, 100.0);
		press(&mut state, 100.0, 100.0, PointerButton::Primary);
		state.on_pointer_move(100.0, 101.0);

		state.on_pointer_leave();
		assert!(!state.interaction.dragging);
		assert_eq!(state.interaction.pointer_world, None);
		assert_eq!(state.interaction.hovered, None);
		assert!(state.interaction.selected.is_some());
	}

	#[test]
	fn load_replaces_graph_and_resets_interaction() {
		let mut state = EditorState::default();
		click(&mut state, 10.0, 10.0);
		state.load(&GraphData {
			points: vec![Point2D::new(0.0, 0.0), Point2D::new(50.0, 0.0)],
			segments: vec![(0, 1)],
		});

		assert_eq!(state.interaction, InteractionState::default());
		assert_eq!(state.graph.point_count(), 2);
		assert_eq!(state.graph.segment_count(), 1);
	}

	#[test]
	fn other_buttons_are_ignored() {
		let mut state = EditorState::default();
		assert!(!press(&mut state, 10.0, 10.0, PointerButton::Other(3)));
		assert_eq!(state.graph.point_count(), 0);
	}
}
