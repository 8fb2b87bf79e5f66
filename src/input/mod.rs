//! Polled input - the logical buttons and axes the editor reads each tick.
//!
//! ## Architecture
//!
//! The editor never sees raw device events. Hosts map keys, mouse buttons
//! and mouse motion onto five logical buttons and two logical axes, and the
//! editor polls them through [`InputSource`]:
//!
//! - buttons are *levels* ("is it held now"); debounce gates turn them into edges
//! - axes are continuous values summed into the grab move-vector every frame
//!
//! ## Modules
//!
//! - `polled` - `PolledInput`, a plain state holder hosts write into

mod polled;

pub use polled::PolledInput;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Button {
    GrabNode,
    CreateNode,
    BoxSelect,
    DeleteNode,
    Connect,
}

impl Button {
    pub const ALL: [Button; 5] = [
        Button::GrabNode,
        Button::CreateNode,
        Button::BoxSelect,
        Button::DeleteNode,
        Button::Connect,
    ];

    /// Stable binding id, e.g. `"grab-node"`.
    pub fn id(self) -> &'static str {
        match self {
            Button::GrabNode => "grab-node",
            Button::CreateNode => "create-node",
            Button::BoxSelect => "box-select",
            Button::DeleteNode => "delete-node",
            Button::Connect => "connect",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Logical axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    MoveX,
    MoveY,
}

impl Axis {
    pub fn id(self) -> &'static str {
        match self {
            Axis::MoveX => "move-x",
            Axis::MoveY => "move-y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Query interface over whatever device layer the host uses.
pub trait InputSource {
    /// Returns true while the button is held.
    fn button_active(&self, button: Button) -> bool;

    /// Current value of the axis (e.g. mouse delta since last frame).
    fn axis_value(&self, axis: Axis) -> f32;
}
