// src/render/mod.rs
//
// The drawing surface the widget paints through, and the row painter.
// Coordinates are widget space: origin top-left, y down.

pub mod nannou_canvas;
pub mod recording_canvas;
pub mod rows;

pub use nannou_canvas::NannouCanvas;
pub use recording_canvas::{DrawOp, RecordingCanvas};
pub use rows::draw_rows;

use nannou::color::{rgb8, Rgb8};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintStyle {
    #[default]
    Stroke,
    Fill,
}

/// Paint state shared by every primitive until changed.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawParams {
    pub color: Rgb8,
    pub stroke_weight: f32,
    pub style: PaintStyle,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            color: rgb8(0, 0, 0),
            stroke_weight: 1.0,
            style: PaintStyle::Stroke,
        }
    }
}

pub trait Canvas {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn paint_background(&mut self, color: Rgb8);

    fn set_color(&mut self, color: Rgb8);
    fn set_stroke_width(&mut self, width: f32);
    fn set_style(&mut self, style: PaintStyle);

    /// Pushes the current translation.
    fn save(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    /// Pops back to the last saved translation. Unbalanced restores are ignored.
    fn restore(&mut self);

    /// Axis-aligned rect with its top-left corner at (x, y).
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32);
}
