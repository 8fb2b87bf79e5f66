//! A drawing surface that records commands instead of drawing them.
//!
//! Used by headless hosts and tests. Text is measured with a fixed advance
//! per character so layouts are reproducible without a font stack.

use super::surface::{DrawingSurface, TextMeasure, TextMetrics};
use crate::geometry::{CubicBezier, Rect, Vec2};
use std::fmt;

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    FillStyle(String),
    StrokeStyle(String),
    LineDash(Vec<f32>),
    FillRect(Rect),
    StrokeRect(Rect),
    FillText { text: String, baseline: Vec2 },
    StrokeBezier(CubicBezier),
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Save => write!(f, "save"),
            DrawCommand::Restore => write!(f, "restore"),
            DrawCommand::FillStyle(c) => write!(f, "fill-style {c}"),
            DrawCommand::StrokeStyle(c) => write!(f, "stroke-style {c}"),
            DrawCommand::LineDash(d) => write!(f, "line-dash {d:?}"),
            DrawCommand::FillRect(r) => write_rect(f, "fill-rect", r),
            DrawCommand::StrokeRect(r) => write_rect(f, "stroke-rect", r),
            DrawCommand::FillText { text, baseline } => {
                write!(f, "fill-text {text:?} {} {}", baseline.x, baseline.y)
            }
            DrawCommand::StrokeBezier(c) => write!(
                f,
                "bezier {} {} -> {} {}",
                c.start.x, c.start.y, c.end.x, c.end.y
            ),
        }
    }
}

fn write_rect(f: &mut fmt::Formatter<'_>, name: &str, r: &Rect) -> fmt::Result {
    write!(f, "{name} {} {} {} {}", r.origin.x, r.origin.y, r.size.x, r.size.y)
}

/// Surface that appends every call to a command list.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    char_width: f32,
    ascent: f32,
    descent: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Fixed metrics: 7px per character, 10px ascent, 2px descent.
    pub fn new() -> Self {
        Self::with_metrics(7.0, 10.0, 2.0)
    }

    pub fn with_metrics(char_width: f32, ascent: f32, descent: f32) -> Self {
        Self {
            char_width,
            ascent,
            descent,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// One command per line, in issue order.
    pub fn transcript(&self) -> String {
        self.commands
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for RecordingSurface {
    fn measure_text(&self, text: &str) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * self.char_width,
            ascent: self.ascent,
            descent: self.descent,
        }
    }
}

impl DrawingSurface for RecordingSurface {
    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillStyle(color.to_string()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::StrokeStyle(color.to_string()));
    }

    fn set_line_dash(&mut self, segments: &[f32]) {
        self.commands.push(DrawCommand::LineDash(segments.to_vec()));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::StrokeRect(rect));
    }

    fn fill_text(&mut self, text: &str, baseline: Vec2) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            baseline,
        });
    }

    fn stroke_bezier(&mut self, curve: &CubicBezier) {
        self.commands.push(DrawCommand::StrokeBezier(*curve));
    }
}
