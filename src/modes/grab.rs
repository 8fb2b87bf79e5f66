//! Grabbing mode: moves the selected nodes by the accumulated move axes.

use super::{Mode, ModeFlow, ModeId};
use crate::editor::{CursorStyle, EditorContext};
use crate::geometry::Vec2;
use tracing::trace;

/// Moves every selected node by the move-vector accumulated since the last
/// tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrabMode;

impl Mode<EditorContext> for GrabMode {
    fn on_start(&mut self, ctx: &mut EditorContext, _previous: ModeId) -> ModeFlow {
        ctx.move_vector = Vec2::ZERO;
        ctx.cursor_style = CursorStyle::Move;
        ModeFlow::Continue
    }

    fn on_update(&mut self, ctx: &mut EditorContext) {
        let delta = std::mem::take(&mut ctx.move_vector);
        let moved = ctx.graph.translate_selected(delta);
        if moved > 0 {
            trace!(dx = delta.x, dy = delta.y, moved, "grab");
        }
    }

    fn on_end(&mut self, ctx: &mut EditorContext, _next: ModeId) {
        ctx.move_vector = Vec2::ZERO;
        ctx.cursor_style = CursorStyle::Default;
    }
}
