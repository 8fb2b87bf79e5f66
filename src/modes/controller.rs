//! Mode registration and transitions.

use super::{Mode, ModeFlow, ModeId};
use crate::render::DrawingSurface;
use std::collections::HashMap;
use tracing::{debug, warn};

type BoxedMode<C> = Box<dyn Mode<C> + Send>;

/// Owns the registered modes and tracks which one is current.
pub struct ModeController<C> {
    modes: HashMap<ModeId, BoxedMode<C>>,
    /// `None` only while a transition is in progress.
    current: Option<ModeId>,
}

impl<C> ModeController<C> {
    pub fn new() -> Self {
        Self {
            modes: HashMap::new(),
            current: None,
        }
    }

    /// Register a mode. The first mode registered becomes current without
    /// running its `on_start`.
    pub fn add<M>(&mut self, id: ModeId, mode: M)
    where
        M: Mode<C> + Send + 'static,
    {
        if self.modes.insert(id, Box::new(mode)).is_some() {
            warn!(mode = %id, "mode registered twice, replacing");
        }
        if self.modes.len() == 1 && self.current.is_none() {
            self.current = Some(id);
        }
    }

    /// Builder form of [`ModeController::add`].
    pub fn with<M>(mut self, id: ModeId, mode: M) -> Self
    where
        M: Mode<C> + Send + 'static,
    {
        self.add(id, mode);
        self
    }

    pub fn current(&self) -> Option<ModeId> {
        self.current
    }

    pub fn is_current(&self, id: ModeId) -> bool {
        self.current == Some(id)
    }

    pub fn contains(&self, id: ModeId) -> bool {
        self.modes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Leave the current mode for `target`, running `on_end` then `on_start`.
    ///
    /// # Panics
    ///
    /// Panics if `target` was never registered or no mode is current.
    pub fn switch(&mut self, ctx: &mut C, target: ModeId) {
        self.transition(ctx, target, false);
    }

    /// Like [`ModeController::switch`] but skips the outgoing mode's `on_end`.
    pub fn cancel_to(&mut self, ctx: &mut C, target: ModeId) {
        self.transition(ctx, target, true);
    }

    fn transition(&mut self, ctx: &mut C, mut target: ModeId, mut cancel: bool) {
        loop {
            assert!(self.modes.contains_key(&target), "switch to unregistered mode `{target}`");
            let Some(previous) = self.current.take() else {
                panic!("switch to `{target}` while no mode is current");
            };

            if !cancel {
                if let Some(mode) = self.modes.get_mut(&previous) {
                    mode.on_end(ctx, target);
                }
            }

            debug!(from = %previous, to = %target, cancel, "mode switch");
            self.current = Some(target);

            let flow = match self.modes.get_mut(&target) {
                Some(mode) => mode.on_start(ctx, previous),
                None => ModeFlow::Continue,
            };

            match flow {
                ModeFlow::Continue => return,
                ModeFlow::Cancel(next) => {
                    target = next;
                    cancel = true;
                }
            }
        }
    }

    /// Run the current mode's `on_update`.
    pub fn update(&mut self, ctx: &mut C) {
        let Some(current) = self.current else {
            return;
        };
        if let Some(mode) = self.modes.get_mut(&current) {
            mode.on_update(ctx);
        }
    }

    /// Draw the current mode's overlay inside a save/restore pair.
    pub fn render(&self, ctx: &C, surface: &mut dyn DrawingSurface) {
        let Some(mode) = self.current.and_then(|id| self.modes.get(&id)) else {
            return;
        };
        if !mode.has_overlay() {
            return;
        }
        surface.save();
        mode.on_render(ctx, surface);
        surface.restore();
    }
}

impl<C> Default for ModeController<C> {
    fn default() -> Self {
        Self::new()
    }
}
