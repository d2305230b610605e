// src/render/recording_canvas.rs
//
// Canvas that keeps a list of what was drawn, with translations already
// applied. Lets the scene be inspected without a window.

use nannou::color::Rgb8;

use super::{Canvas, DrawParams, PaintStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Background(Rgb8),
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        params: DrawParams,
    },
    Line {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        params: DrawParams,
    },
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    width: f32,
    height: f32,
    origin: (f32, f32),
    saved: Vec<(f32, f32)>,
    params: DrawParams,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn rects(&self, style: PaintStyle) -> Vec<(f32, f32, f32, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { x, y, w, h, params } if params.style == style => {
                    Some((*x, *y, *w, *h))
                }
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(f32, f32, f32, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { x0, y0, x1, y1, .. } => Some((*x0, *y0, *x1, *y1)),
                _ => None,
            })
            .collect()
    }

    /// Depth of unmatched saves; 0 after a balanced frame.
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
        self.saved.clear();
        self.origin = (0.0, 0.0);
        self.params = DrawParams::default();
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn paint_background(&mut self, color: Rgb8) {
        self.ops.push(DrawOp::Background(color));
    }

    fn set_color(&mut self, color: Rgb8) {
        self.params.color = color;
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.params.stroke_weight = width;
    }

    fn set_style(&mut self, style: PaintStyle) {
        self.params.style = style;
    }

    fn save(&mut self) {
        self.saved.push(self.origin);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.origin.0 += dx;
        self.origin.1 += dy;
    }

    fn restore(&mut self) {
        if let Some(origin) = self.saved.pop() {
            self.origin = origin;
        }
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(DrawOp::Rect {
            x: self.origin.0 + x,
            y: self.origin.1 + y,
            w,
            h,
            params: self.params.clone(),
        });
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        let (ox, oy) = self.origin;
        self.ops.push(DrawOp::Line {
            x0: ox + x0,
            y0: oy + y0,
            x1: ox + x1,
            y1: oy + y1,
            params: self.params.clone(),
        });
    }
}
