//! Editor-wide constants.
//!
//! Centralizes magic numbers and default values so the settings defaults,
//! the graph model and the render pass agree on them.

// ============================================================================
// Timing
// ============================================================================

/// Fixed logic tick rate (ticks per second)
pub const DEFAULT_TICK_RATE_HZ: u32 = 15;

/// Default debounce interval in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

/// Debounce interval for the grab-node button
pub const GRAB_DEBOUNCE_MS: u64 = 250;

/// Debounce interval for the create-node button
pub const CREATE_DEBOUNCE_MS: u64 = 200;

/// Debounce interval for the delete-node button
pub const DELETE_DEBOUNCE_MS: u64 = 200;

/// Debounce interval for the connect button
pub const CONNECT_DEBOUNCE_MS: u64 = 200;

/// Debounce interval for the box-select button
pub const BOX_SELECT_DEBOUNCE_MS: u64 = 100;

// ============================================================================
// Node Defaults
// ============================================================================

/// Title drawn on freshly created nodes
pub const DEFAULT_NODE_TITLE: &str = "Node";

/// Padding around node content in pixels
pub const DEFAULT_NODE_PADDING: f32 = 20.0;

/// Node size before its first measurement
pub const UNMEASURED_NODE_SIZE: (f32, f32) = (20.0, 20.0);

/// Number of ports created on each side of a default node
pub const DEFAULT_PORTS_PER_SIDE: usize = 3;

/// Node body fill color
pub const NODE_BACKGROUND: &str = "#242424";

/// Node title, port label and selection outline color
pub const NODE_FOREGROUND: &str = "#ffffff";

// ============================================================================
// Overlays
// ============================================================================

/// Stroke color of the box-select rectangle
pub const SELECTION_BOX_COLOR: &str = "white";

/// Dash pattern of the box-select rectangle (dash, gap)
pub const SELECTION_BOX_DASH: [f32; 2] = [5.0, 3.0];

/// Stroke color of connection wires
pub const CONNECTION_COLOR: &str = "#ffffff";

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "wireboard";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";
