// src/animation/scale.rs
//
// Maps one row's global progress onto per-segment sub-progress.

use std::f64::consts::PI;

pub fn inverse(n: usize) -> f32 {
    1.0 / n as f32
}

/// Progress left over once the first `i` of `n` segments are used up.
pub fn max_scale(value: f32, i: usize, n: usize) -> f32 {
    (value - i as f32 * inverse(n)).max(0.0)
}

/// Sub-progress of segment `i` of `n`: 0 until the segment begins, rising
/// linearly over its 1/n share of `value`, then holding at 1.
pub fn divide_scale(value: f32, i: usize, n: usize) -> f32 {
    inverse(n).min(max_scale(value, i, n)) * n as f32
}

/// Linear [0, 1] progress to a 0 -> 1 -> 0 bounce.
pub fn sinify(value: f32) -> f32 {
    // evaluated in f64 so sinify(1.0) lands on the positive side of zero
    (value as f64 * PI).sin() as f32
}
