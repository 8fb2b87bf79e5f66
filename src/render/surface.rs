//! Drawing surface contract.
//!
//! The editor never rasterizes anything itself. It measures text and issues
//! drawing calls through these traits; hosts implement them over a canvas,
//! a GPU painter or a test recorder.

use crate::geometry::{CubicBezier, Rect, Vec2};

/// Measured extent of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    pub width: f32,
    /// Distance from the baseline to the top of the glyphs
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the glyphs
    pub descent: f32,
}

impl TextMetrics {
    /// Full glyph extent, `ascent + descent`. Unlike a plain difference of
    /// the two bounding-box values, this stays positive when both are
    /// measured from the baseline in opposite directions.
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Font metrics query.
pub trait TextMeasure {
    fn measure_text(&self, text: &str) -> TextMetrics;
}

/// Immediate-mode 2D drawing target with canvas-like state.
pub trait DrawingSurface: TextMeasure {
    /// Push the current drawing state (styles, dash pattern).
    fn save(&mut self);

    /// Pop the drawing state pushed by the matching `save`.
    fn restore(&mut self);

    fn set_fill_style(&mut self, color: &str);

    fn set_stroke_style(&mut self, color: &str);

    /// Dash pattern for subsequent strokes. An empty slice means solid.
    fn set_line_dash(&mut self, segments: &[f32]);

    fn fill_rect(&mut self, rect: Rect);

    fn stroke_rect(&mut self, rect: Rect);

    /// Fill text with its baseline starting at `baseline`.
    fn fill_text(&mut self, text: &str, baseline: Vec2);

    fn stroke_bezier(&mut self, curve: &CubicBezier);
}
