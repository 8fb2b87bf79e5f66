//! Wireboard - the interaction engine of a node-graph editor canvas.
//!
//! Users create nodes, select them by click or box, drag them around and
//! draw wires between their ports. The crate owns the interaction logic;
//! hosts supply input, a clock, a drawing surface and optionally a scene
//! graph.
//!
//! ## Modules
//!
//! - `editor` - `Editor` facade: logic tick, click, render pass
//! - `modes` - mode controller and the idle/grab/box-select/connect modes
//! - `graph` - nodes, ports, connections and their geometry
//! - `selection` - click and box selection
//! - `input` - logical buttons/axes and the `InputSource` trait
//! - `debounce` - per-button debounce gates and clocks
//! - `render` - drawing-surface traits, the graph render pass, a recording surface
//! - `geometry`, `spatial_index`, `scene` - vector math, R-tree hit-testing, positions
//! - `settings`, `error`, `constants`, `perf` - configuration and support code

pub mod constants;
pub mod debounce;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod input;
pub mod modes;
pub mod perf;
pub mod render;
pub mod scene;
pub mod selection;
pub mod settings;
pub mod spatial_index;

pub use editor::{CursorStyle, Editor, EditorContext, SharedEditor};
pub use settings::EditorSettings;
