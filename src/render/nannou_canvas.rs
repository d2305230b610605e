// src/render/nannou_canvas.rs
//
// Canvas over a nannou Draw. nannou puts the origin at the window centre with
// y up, so every point is flipped out of widget space on the way in.

use nannou::prelude::*;

use super::{Canvas, DrawParams, PaintStyle};

pub struct NannouCanvas<'a> {
    draw: &'a Draw,
    size: Vec2,
    origin: Vec2,
    saved: Vec<Vec2>,
    params: DrawParams,
}

impl<'a> NannouCanvas<'a> {
    pub fn new(draw: &'a Draw, width: f32, height: f32) -> Self {
        Self {
            draw,
            size: vec2(width, height),
            origin: Vec2::ZERO,
            saved: Vec::new(),
            params: DrawParams::default(),
        }
    }

    fn to_screen(&self, x: f32, y: f32) -> Point2 {
        let p = self.origin + vec2(x, y);
        pt2(p.x - self.size.x / 2.0, self.size.y / 2.0 - p.y)
    }
}

impl Canvas for NannouCanvas<'_> {
    fn width(&self) -> f32 {
        self.size.x
    }

    fn height(&self) -> f32 {
        self.size.y
    }

    fn paint_background(&mut self, color: Rgb8) {
        self.draw.background().color(color);
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
        self.origin += vec2(dx, dy);
    }

    fn restore(&mut self) {
        if let Some(origin) = self.saved.pop() {
            self.origin = origin;
        }
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let center = self.to_screen(x + w / 2.0, y + h / 2.0);
        let rect = self.draw.rect().xy(center).w_h(w, h);
        match self.params.style {
            PaintStyle::Fill => {
                rect.color(self.params.color);
            }
            PaintStyle::Stroke => {
                rect.no_fill()
                    .stroke(self.params.color)
                    .stroke_weight(self.params.stroke_weight);
            }
        }
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        let start = self.to_screen(x0, y0);
        let end = self.to_screen(x1, y1);
        // lyon has nothing to tessellate for a zero-length line
        if start.distance(end) <= f32::EPSILON {
            return;
        }
        self.draw
            .line()
            .points(start, end)
            .caps_round()
            .color(self.params.color)
            .stroke_weight(self.params.stroke_weight);
    }
}
