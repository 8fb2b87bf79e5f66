//! Editor facade - the logic tick, click handling and the render pass.
//!
//! ## Drivers
//!
//! Hosts drive an [`Editor`] from two periodic loops:
//!
//! - the logic tick ([`Editor::tick`]) at `tick_rate_hz`, which polls the
//!   buttons through their debounce gates and advances the mode controller
//! - the render pass ([`Editor::render`]) once per display frame, which draws
//!   the graph and the mode overlay and accumulates the move axes
//!
//! Both take `&mut self`. Hosts running them on separate threads share the
//! editor as a [`SharedEditor`] so that every mutation goes through one lock.

use crate::debounce::{Clock, DebounceGate};
use crate::geometry::Vec2;
use crate::graph::{Connection, Graph, Node, NodeId};
use crate::input::{Axis, Button, InputSource};
use crate::modes::{BoxSelectMode, ConnectMode, GrabMode, IdleMode, ModeController, ModeId};
use crate::profile_scope;
use crate::render::{DrawingSurface, render_graph};
use crate::scene::SceneGraph;
use crate::selection::select_at;
use crate::settings::EditorSettings;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Cursor the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Move,
}

/// State shared by every mode hook.
pub struct EditorContext {
    pub graph: Graph,
    /// Last known cursor position in canvas coordinates
    pub cursor: Vec2,
    /// Axis movement accumulated by render passes, consumed by grabbing
    pub move_vector: Vec2,
    pub cursor_style: CursorStyle,
}

impl EditorContext {
    pub fn new(settings: &EditorSettings) -> Self {
        Self::with_graph(Graph::new(settings.node.clone(), settings.seed))
    }

    pub fn with_graph(graph: Graph) -> Self {
        Self {
            graph,
            cursor: Vec2::ZERO,
            move_vector: Vec2::ZERO,
            cursor_style: CursorStyle::Default,
        }
    }
}

/// Editor behind a lock, for hosts with separate tick and render threads.
pub type SharedEditor<I> = Arc<Mutex<Editor<I>>>;

pub struct Editor<I> {
    input: I,
    clock: Box<dyn Clock>,
    ctx: EditorContext,
    modes: ModeController<EditorContext>,
    gates: HashMap<Button, DebounceGate>,
}

impl<I: InputSource> Editor<I> {
    pub fn new(settings: &EditorSettings, input: I, clock: impl Clock + 'static) -> Self {
        Self::with_context(settings, EditorContext::new(settings), input, clock)
    }

    /// Build an editor whose node positions live in a host scene graph.
    pub fn with_scene(
        settings: &EditorSettings,
        scene: Box<dyn SceneGraph>,
        input: I,
        clock: impl Clock + 'static,
    ) -> Self {
        let graph = Graph::with_scene(settings.node.clone(), scene, settings.seed);
        Self::with_context(settings, EditorContext::with_graph(graph), input, clock)
    }

    fn with_context(settings: &EditorSettings, ctx: EditorContext, input: I, clock: impl Clock + 'static) -> Self {
        let modes = ModeController::new()
            .with(ModeId::Idle, IdleMode)
            .with(ModeId::Grabbing, GrabMode)
            .with(ModeId::BoxSelecting, BoxSelectMode::new(settings.selection_color.clone()))
            .with(ModeId::Connecting, ConnectMode::new());

        let gates = Button::ALL
            .into_iter()
            .map(|button| (button, DebounceGate::with_interval_ms(settings.debounce.interval_ms(button))))
            .collect();

        info!(tick_rate_hz = settings.tick_rate_hz, seeded = settings.seed.is_some(), "editor ready");

        Self {
            input,
            clock: Box::new(clock),
            ctx,
            modes,
            gates,
        }
    }

    /// Wrap the editor for sharing between a tick thread and a render thread.
    pub fn into_shared(self) -> SharedEditor<I> {
        Arc::new(Mutex::new(self))
    }

    /// True if the button is held and its debounce gate accepts the press.
    fn fires(&mut self, button: Button) -> bool {
        if !self.input.button_active(button) {
            return false;
        }
        let clock = &*self.clock;
        self.gates.get_mut(&button).is_some_and(|gate| gate.poll(clock))
    }

    /// Advance one logic tick.
    ///
    /// The current mode updates first; then, in priority order: grab, the
    /// idle-only create/delete actions, box-select, connect.
    pub fn tick(&mut self) {
        profile_scope!("editor_tick");

        self.modes.update(&mut self.ctx);

        if self.fires(Button::GrabNode) {
            self.modes.switch(&mut self.ctx, ModeId::Grabbing);
        }

        if self.modes.is_current(ModeId::Idle) {
            if self.fires(Button::CreateNode) {
                let at = self.ctx.cursor;
                self.ctx.graph.create_node(at);
            } else if self.fires(Button::DeleteNode) {
                let removed = self.ctx.graph.remove_all_nodes();
                warn!(removed, "delete removed every node");
            }
        }

        if self.fires(Button::BoxSelect) {
            self.modes.switch(&mut self.ctx, ModeId::BoxSelecting);
        }

        if self.fires(Button::Connect) {
            self.modes.switch(&mut self.ctx, ModeId::Connecting);
        }
    }

    /// Handle a primary click at the cursor.
    ///
    /// While idle this selects (exclusively unless `shift` is held); in any
    /// other mode it returns to idle, which completes the active gesture.
    pub fn click(&mut self, shift: bool) {
        if self.modes.is_current(ModeId::Idle) {
            let cursor = self.ctx.cursor;
            select_at(&mut self.ctx.graph, cursor, !shift);
        } else {
            debug!(mode = %self.current_mode(), "click ends mode");
            self.modes.switch(&mut self.ctx, ModeId::Idle);
        }
    }

    /// Draw the graph and the current mode's overlay, then accumulate the
    /// move axes into the move-vector.
    pub fn render(&mut self, surface: &mut dyn DrawingSurface) {
        profile_scope!("editor_render");

        render_graph(&mut self.ctx.graph, surface);
        self.modes.render(&self.ctx, surface);

        self.ctx.move_vector += Vec2::new(
            self.input.axis_value(Axis::MoveX),
            self.input.axis_value(Axis::MoveY),
        );
    }

    pub fn set_cursor(&mut self, p: Vec2) {
        self.ctx.cursor = p;
    }

    pub fn cursor(&self) -> Vec2 {
        self.ctx.cursor
    }

    pub fn current_mode(&self) -> ModeId {
        self.modes.current().unwrap_or_default()
    }

    pub fn cursor_style(&self) -> CursorStyle {
        self.ctx.cursor_style
    }

    pub fn move_vector(&self) -> Vec2 {
        self.ctx.move_vector
    }

    pub fn graph(&self) -> &Graph {
        &self.ctx.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.ctx.graph
    }

    pub fn nodes(&self) -> &[Node] {
        self.ctx.graph.nodes()
    }

    pub fn connections(&self) -> &[Connection] {
        self.ctx.graph.connections()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.ctx.graph.node(id)
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}
