mod binding;
mod component;
mod config;
mod error;
mod graph;
mod input;
mod render;
mod state;
mod surface;
mod types;
mod viewport;

pub use binding::{CanvasBinding, Session};
pub use component::GraphEditorCanvas;
pub use config::EditorConfig;
pub use error::EditorError;
pub use graph::{Graph, GraphStore, nearest_point};
pub use input::{PointerButton, PointerInput, WheelInput};
pub use render::{PointStyle, SegmentStyle, draw_line, render};
pub use state::{EditorState, InteractionState};
pub use surface::{CanvasSurface, Surface, Transform};
pub use types::{GraphData, Point2D, PointId, Segment};
pub use viewport::Viewport;
