//! Connecting mode: drags a pending wire from one node to another.

use super::{Mode, ModeFlow, ModeId};
use crate::editor::EditorContext;
use crate::graph::ConnectionId;
use tracing::debug;

/// Drags a pending connection from the node under the cursor at start to
/// the node under the cursor at end.
#[derive(Debug, Clone, Default)]
pub struct ConnectMode {
    pending: Option<ConnectionId>,
}

impl ConnectMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<ConnectionId> {
        self.pending
    }
}

impl Mode<EditorContext> for ConnectMode {
    fn on_start(&mut self, ctx: &mut EditorContext, _previous: ModeId) -> ModeFlow {
        self.pending = None;
        let Some(from) = ctx.graph.node_at(ctx.cursor) else {
            debug!(x = ctx.cursor.x, y = ctx.cursor.y, "connect started over empty space");
            return ModeFlow::Cancel(ModeId::Idle);
        };
        match ctx.graph.create_connection(from) {
            Some(id) => {
                ctx.graph.set_floating_endpoint(id, ctx.cursor);
                self.pending = Some(id);
                ModeFlow::Continue
            }
            None => ModeFlow::Cancel(ModeId::Idle),
        }
    }

    fn on_update(&mut self, ctx: &mut EditorContext) {
        if let Some(id) = self.pending {
            ctx.graph.set_floating_endpoint(id, ctx.cursor);
        }
    }

    fn on_end(&mut self, ctx: &mut EditorContext, _next: ModeId) {
        let Some(id) = self.pending.take() else {
            return;
        };
        let target = ctx.graph.node_at(ctx.cursor);
        ctx.graph.finalize_or_discard_connection(id, target);
    }
}
