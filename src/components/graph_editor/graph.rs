use indexmap::{IndexMap, IndexSet};
use log::{debug, warn};

use super::render::{PointStyle, SegmentStyle};
use super::surface::Surface;
use super::types::{GraphData, Point2D, PointId, Segment};

/// What the editor needs from whatever holds the points and segments.
///
/// Implementations must keep every segment's endpoints inside the point set,
/// and never hold two equal segments or a self-loop.
pub trait GraphStore {
	/// Inserts a point and returns its fresh handle.
	fn add_point(&mut self, point: Point2D) -> PointId;

	/// Removes the point and every segment touching it.
	fn remove_point(&mut self, id: PointId) -> Option<Point2D>;

	/// Returns false, leaving the store untouched, for duplicates, self-loops
	/// and segments with a missing endpoint.
	fn try_add_segment(&mut self, segment: Segment) -> bool;

	/// Moves a point in place. Its handle stays valid.
	fn set_position(&mut self, id: PointId, position: Point2D) -> bool;

	/// Current position of a point, `None` once removed.
	fn point(&self, id: PointId) -> Option<Point2D>;

	/// Whether the handle still refers to a point.
	fn contains(&self, id: PointId) -> bool {
		self.point(id).is_some()
	}

	/// Points in insertion order.
	fn points(&self) -> impl Iterator<Item = (PointId, Point2D)> + '_;

	/// Segments in insertion order.
	fn segments(&self) -> impl Iterator<Item = Segment> + '_;

	/// Segments first so point markers are never covered by lines.
	fn draw<S: Surface>(&self, surface: &mut S, point: &PointStyle, segment: &SegmentStyle)
	where
		Self: Sized,
	{
		for s in self.segments() {
			s.draw(self, surface, segment);
		}
		for (_, p) in self.points() {
			p.draw(surface, point);
		}
	}
}

/// Closest point strictly within `threshold` of `target`.
///
/// Ties go to the earliest point in iteration order.
pub fn nearest_point<I>(points: I, target: Point2D, threshold: f64) -> Option<PointId>
where
	I: IntoIterator<Item = (PointId, Point2D)>,
{
	let mut best: Option<(PointId, f64)> = None;
	for (id, p) in points {
		let d = p.distance(target);
		if d < threshold && best.is_none_or(|(_, bd)| d < bd) {
			best = Some((id, d));
		}
	}
	best.map(|(id, _)| id)
}

/// Arena-backed [`GraphStore`]. Handles are never reused.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	points: IndexMap<PointId, Point2D>,
	segments: IndexSet<Segment>,
	next_id: u32,
}

impl Graph {
	/// An empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a graph from seed data, skipping segments that would break the
	/// store invariants.
	pub fn from_data(data: &GraphData) -> Self {
		let mut graph = Self::new();
		let ids: Vec<PointId> = data.points.iter().map(|p| graph.add_point(*p)).collect();
		for &(a, b) in &data.segments {
			let accepted = match (ids.get(a), ids.get(b)) {
				(Some(&a), Some(&b)) => graph.try_add_segment(Segment::new(a, b)),
				_ => false,
			};
			if !accepted {
				warn!("Skipping seed segment {a}-{b}");
			}
		}
		graph
	}

	/// Removes one segment, leaving its endpoints in place.
	pub fn remove_segment(&mut self, segment: &Segment) -> bool {
		self.segments.shift_remove(segment)
	}

	/// Number of points.
	pub fn point_count(&self) -> usize {
		self.points.len()
	}

	/// Number of segments.
	pub fn segment_count(&self) -> usize {
		self.segments.len()
	}

	/// True when there are no points (and so no segments).
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// Drops every point and segment. Handles already issued stay retired.
	pub fn clear(&mut self) {
		debug!("Clearing {} points, {} segments", self.points.len(), self.segments.len());
		self.points.clear();
		self.segments.clear();
	}
}

impl GraphStore for Graph {
	fn add_point(&mut self, point: Point2D) -> PointId {
		let id = PointId(self.next_id);
		self.next_id += 1;
		self.points.insert(id, point);
		debug!("Added point {:?} at ({}, {})", id, point.x, point.y);
		id
	}

	fn remove_point(&mut self, id: PointId) -> Option<Point2D> {
		let removed = self.points.shift_remove(&id)?;
		let before = self.segments.len();
		self.segments.retain(|s| !s.includes(id));
		debug!(
			"Removed point {:?} and {} segment(s)",
			id,
			before - self.segments.len()
		);
		Some(removed)
	}

	fn try_add_segment(&mut self, segment: Segment) -> bool {
		if segment.is_self_loop()
			|| !self.points.contains_key(&segment.a)
			|| !self.points.contains_key(&segment.b)
		{
			return false;
		}
		let added = self.segments.insert(segment);
		if added {
			debug!("Added segment {:?}-{:?}", segment.a, segment.b);
		} else {
			debug!("Segment {:?}-{:?} already exists", segment.a, segment.b);
		}
		added
	}

	fn set_position(&mut self, id: PointId, position: Point2D) -> bool {
		match self.points.get_mut(&id) {
			Some(p) => {
				*p = position;
				true
			}
			None => false,
		}
	}

	fn point(&self, id: PointId) -> Option<Point2D> {
		self.points.get(&id).copied()
	}

	fn points(&self) -> impl Iterator<Item = (PointId, Point2D)> + '_ {
		self.points.iter().map(|(id, p)| (*id, *p))
	}

	fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
		self.segments.iter().copied()
	}
}
