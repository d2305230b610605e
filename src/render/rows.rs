// src/render/rows.rs
//
// Paints the column: one row per chain node, each row a strip of outlined
// boxes with the active box filled and sliding.

use crate::animation::scale::{divide_scale, sinify};
use crate::animation::Node;
use crate::constants::{fore_color, BOXES, ROWS, SIZE_FACTOR, STROKE_FACTOR};

use super::{Canvas, PaintStyle};

/// Row geometry derived from the canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    pub row_gap: f32,
    pub box_gap: f32,
    pub box_size: f32,
    pub stroke_weight: f32,
}

impl RowLayout {
    pub fn new(width: f32, height: f32) -> Self {
        let row_gap = height / (ROWS + 1) as f32;
        Self {
            row_gap,
            box_gap: width / (BOXES - 1) as f32,
            box_size: row_gap / SIZE_FACTOR,
            stroke_weight: width.min(height) / STROKE_FACTOR,
        }
    }
}

/// Index of the filled box for a row at `scale`.
pub fn active_box(scale: f32) -> usize {
    let per_box = 1.0 / (BOXES - 1) as f64;
    let index = (sinify(scale) as f64 / per_box).floor().max(0.0) as usize;
    index.min(BOXES - 1)
}

pub fn draw_rows<C: Canvas + ?Sized>(canvas: &mut C, nodes: &[Node]) {
    let layout = RowLayout::new(canvas.width(), canvas.height());
    for node in nodes {
        draw_row(canvas, &layout, node.index, node.state.scale());
    }
}

fn draw_row<C: Canvas + ?Sized>(canvas: &mut C, layout: &RowLayout, i: usize, scale: f32) {
    canvas.set_color(fore_color());
    canvas.set_stroke_width(layout.stroke_weight);
    canvas.save();
    canvas.translate(0.0, layout.row_gap * (i + 1) as f32);

    canvas.set_style(PaintStyle::Stroke);
    for j in 0..BOXES {
        draw_box(canvas, layout, j, 0.0);
    }
    canvas.set_style(PaintStyle::Fill);
    draw_box(canvas, layout, active_box(scale), scale);

    canvas.restore();
}

fn draw_box<C: Canvas + ?Sized>(canvas: &mut C, layout: &RowLayout, j: usize, scale: f32) {
    let sf = sinify(scale);
    let sf1 = divide_scale(sf, 0, 2);
    let sf2 = divide_scale(sf, 1, 2);
    let gap = layout.box_gap;

    canvas.save();
    canvas.translate(j as f32 * gap + gap * sf2, 0.0);
    canvas.draw_rect(0.0, 0.0, layout.box_size, layout.box_size);
    canvas.draw_line(0.0, 0.0, gap * (sf1 - sf2), 0.0);
    canvas.restore();
}
