//! Rendering contract and the graph render pass.
//!
//! ## Modules
//!
//! - `surface` - `TextMeasure` / `DrawingSurface` traits hosts implement
//! - `canvas` - draws nodes and connections from a `Graph`
//! - `recording` - a surface that records commands, for headless hosts and tests

mod canvas;
mod recording;
mod surface;

pub use canvas::{render_graph, render_node};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{DrawingSurface, TextMeasure, TextMetrics};
