use thiserror::Error;

/// Failures at the boundary with the browser. The editing core itself never fails.
#[derive(Debug, Error)]
pub enum EditorError {
	/// `window` is not available.
	#[error("no browser window")]
	NoWindow,
	/// The canvas refused a 2D context.
	#[error("2d rendering context unavailable: {0}")]
	Context(String),
	/// `addEventListener` threw.
	#[error("failed to register `{event}` listener: {reason}")]
	Listener {
		/// DOM event name.
		event: &'static str,
		/// What the browser reported.
		reason: String,
	},
}
