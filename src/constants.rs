// src/constants.rs
//
// Fixed widget parameters. Not runtime configurable.

use nannou::color::{rgb8, Rgb8};
use std::time::Duration;

/// Number of rows in the column.
pub const ROWS: usize = 5;

/// Boxes laid out along each row.
pub const BOXES: usize = 4;

/// Progress added to the active row's scale on every tick.
pub const SCALE_STEP: f32 = 0.02;

/// Stroke width is `min(w, h) / STROKE_FACTOR`.
pub const STROKE_FACTOR: f32 = 90.0;

/// Box size is `row_gap / SIZE_FACTOR`.
pub const SIZE_FACTOR: f32 = 2.9;

/// Row foreground, #4CAF50.
pub fn fore_color() -> Rgb8 {
    rgb8(0x4C, 0xAF, 0x50)
}

/// Canvas background, #BDBDBD.
pub fn back_color() -> Rgb8 {
    rgb8(0xBD, 0xBD, 0xBD)
}

/// Delay between the end of one tick and the next wake-up.
pub const TICK_DELAY: Duration = Duration::from_millis(20);
