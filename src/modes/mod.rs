//! Interaction modes - the editor's explicit state machine.
//!
//! Each mode is a [`Mode`] implementation registered with a
//! [`ModeController`] under a [`ModeId`]. Exactly one mode is current; the
//! controller drives its hooks from the logic tick and the render pass.
//!
//! ## State Transitions
//!
//! ```text
//! Any          -> Grabbing       (grab-node fires)
//! Any          -> BoxSelecting   (box-select fires)
//! Any          -> Connecting     (connect fires)
//! Connecting   -> Idle           (start over empty space, cancelled: no on_end)
//! Grabbing     -> Idle           (click)
//! BoxSelecting -> Idle           (click, selects the dragged box)
//! Connecting   -> Idle           (click, finalizes or discards the wire)
//! ```
//!
//! While idle, create-node and delete-node act directly on the graph and a
//! click selects instead of switching.
//!
//! ## Modules
//!
//! - `controller` - registration, `switch` and per-tick dispatch
//! - `grab` - moves selected nodes by the accumulated move-vector
//! - `box_select` - rubber-band selection with a dashed overlay
//! - `connect` - drags a pending connection from node to node

mod box_select;
mod connect;
mod controller;
mod grab;

pub use box_select::BoxSelectMode;
pub use connect::ConnectMode;
pub use controller::ModeController;
pub use grab::GrabMode;

use crate::render::DrawingSurface;
use std::fmt;

/// Identifier of a registered mode. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModeId {
    #[default]
    Idle,
    Grabbing,
    BoxSelecting,
    Connecting,
}

impl ModeId {
    pub const ALL: [ModeId; 4] = [
        ModeId::Idle,
        ModeId::Grabbing,
        ModeId::BoxSelecting,
        ModeId::Connecting,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModeId::Idle => "idle",
            ModeId::Grabbing => "grabbing",
            ModeId::BoxSelecting => "box-selecting",
            ModeId::Connecting => "connecting",
        }
    }
}

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the controller should do after a mode's `on_start` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeFlow {
    /// Stay in the mode that just started.
    Continue,
    /// Abort the mode that just started and switch to the given mode
    /// without running the aborted mode's `on_end`.
    Cancel(ModeId),
}

/// Hooks a mode can implement. All default to no-ops.
///
/// Hooks get the shared context `C` but never the controller, so a mode
/// cannot start a transition from inside a transition. A mode that needs to
/// bail out of `on_start` returns [`ModeFlow::Cancel`] instead.
pub trait Mode<C> {
    /// The mode became current. `previous` is the mode that was left.
    fn on_start(&mut self, _ctx: &mut C, _previous: ModeId) -> ModeFlow {
        ModeFlow::Continue
    }

    /// Called once per logic tick while current.
    fn on_update(&mut self, _ctx: &mut C) {}

    /// The mode is being left for `next`. Skipped on cancellation.
    fn on_end(&mut self, _ctx: &mut C, _next: ModeId) {}

    /// Whether [`Mode::on_render`] draws anything.
    fn has_overlay(&self) -> bool {
        false
    }

    /// Draw mode-specific overlays on top of the graph.
    fn on_render(&self, _ctx: &C, _surface: &mut dyn DrawingSurface) {}
}

/// The waiting state. Implements no hooks.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleMode;

impl<C> Mode<C> for IdleMode {}
