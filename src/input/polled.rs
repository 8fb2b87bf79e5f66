//! Plain input state that a host writes and the editor reads.

use super::{Axis, Button, InputSource};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct PolledInput {
    held: HashSet<Button>,
    axes: HashMap<Axis, f32>,
}

impl PolledInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) {
        self.held.insert(button);
    }

    pub fn release(&mut self, button: Button) {
        self.held.remove(&button);
    }

    pub fn set_button(&mut self, button: Button, held: bool) {
        if held {
            self.press(button);
        } else {
            self.release(button);
        }
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn set_axis(&mut self, axis: Axis, value: f32) {
        self.axes.insert(axis, value);
    }

    /// Zero every axis (e.g. after the host consumed a mouse delta).
    pub fn clear_axes(&mut self) {
        self.axes.clear();
    }
}

impl InputSource for PolledInput {
    fn button_active(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    fn axis_value(&self, axis: Axis) -> f32 {
        self.axes.get(&axis).copied().unwrap_or(0.0)
    }
}
