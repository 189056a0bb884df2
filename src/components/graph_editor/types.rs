use std::hash::{Hash, Hasher};

/// A position in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
	/// Horizontal, grows rightwards.
	pub x: f64,
	/// Vertical, grows downwards.
	pub y: f64,
}

impl Point2D {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance.
	pub fn distance(&self, other: Point2D) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}

/// Stable handle to a point owned by a graph store.
///
/// Selection, hover and drag track points by handle, never by coordinates:
/// two points sitting at the same position are still different points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub(crate) u32);

/// An undirected connection between two points.
///
/// `Segment::new(a, b) == Segment::new(b, a)`; hashing agrees with that.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
	/// One endpoint.
	pub a: PointId,
	/// The other endpoint.
	pub b: PointId,
}

impl Segment {
	/// Segment between `a` and `b`, in either order.
	pub const fn new(a: PointId, b: PointId) -> Self {
		Self { a, b }
	}

	/// Both ends on the same point.
	pub fn is_self_loop(&self) -> bool {
		self.a == self.b
	}

	/// Whether `id` is one of the endpoints.
	pub fn includes(&self, id: PointId) -> bool {
		self.a == id || self.b == id
	}

	fn ordered(&self) -> (PointId, PointId) {
		if self.a <= self.b {
			(self.a, self.b)
		} else {
			(self.b, self.a)
		}
	}
}

impl PartialEq for Segment {
	fn eq(&self, other: &Self) -> bool {
		self.ordered() == other.ordered()
	}
}

impl Eq for Segment {}

impl Hash for Segment {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.ordered().hash(state);
	}
}

/// Seed graph handed to the editor from outside.
///
/// Segments refer to points by their index in `points`.
#[derive(Clone, Debug, Default)]
pub struct GraphData {
	/// Point positions.
	pub points: Vec<Point2D>,
	/// Index pairs into `points`.
	pub segments: Vec<(usize, usize)>,
}
