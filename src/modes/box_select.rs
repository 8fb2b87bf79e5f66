//! Box-select mode: rubber-band selection with a dashed overlay.

use super::{Mode, ModeFlow, ModeId};
use crate::constants::SELECTION_BOX_DASH;
use crate::editor::EditorContext;
use crate::geometry::{Rect, Vec2};
use crate::render::DrawingSurface;
use crate::selection::select_in_box;
use tracing::debug;

/// Rubber-band selection between the cursor at start and the live cursor.
#[derive(Debug, Clone)]
pub struct BoxSelectMode {
    start: Vec2,
    end: Vec2,
    color: String,
}

impl BoxSelectMode {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            start: Vec2::ZERO,
            end: Vec2::ZERO,
            color: color.into(),
        }
    }

    /// The dragged rectangle, normalized.
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.start, self.end)
    }
}

impl Mode<EditorContext> for BoxSelectMode {
    fn on_start(&mut self, ctx: &mut EditorContext, _previous: ModeId) -> ModeFlow {
        self.start = ctx.cursor;
        self.end = ctx.cursor;
        ModeFlow::Continue
    }

    fn on_update(&mut self, ctx: &mut EditorContext) {
        self.end = ctx.cursor;
    }

    fn on_end(&mut self, ctx: &mut EditorContext, _next: ModeId) {
        self.end = ctx.cursor;
        let rect = self.rect();
        let selected = select_in_box(&mut ctx.graph, rect.origin, rect.size);
        debug!(selected, "box select finished");
    }

    fn has_overlay(&self) -> bool {
        true
    }

    fn on_render(&self, _ctx: &EditorContext, surface: &mut dyn DrawingSurface) {
        surface.set_stroke_style(&self.color);
        surface.set_line_dash(&SELECTION_BOX_DASH);
        surface.stroke_rect(self.rect());
    }
}
