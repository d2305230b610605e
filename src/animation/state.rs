// src/animation/state.rs
//
// Per-row progress. A row sits idle at scale 0 or 1; a start sends it on one
// full unit of travel toward the other end.

use crate::constants::SCALE_STEP;

// f32 accumulation of SCALE_STEP lands a hair either side of a whole unit
const COMPLETION_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Idle,
    Advancing,
    Retreating,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Idle => 0.0,
            Direction::Advancing => 1.0,
            Direction::Retreating => -1.0,
        }
    }

    pub fn is_idle(self) -> bool {
        self == Direction::Idle
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationState {
    scale: f32,
    dir: Direction,
    prev_scale: f32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    pub fn prev_scale(&self) -> f32 {
        self.prev_scale
    }

    /// Leaves idle toward the opposite end from `prev_scale`.
    /// Returns true only when the row actually started moving.
    pub fn start_updating(&mut self) -> bool {
        if !self.dir.is_idle() {
            return false;
        }
        debug_assert!(
            self.prev_scale == 0.0 || self.prev_scale == 1.0,
            "idle row settled off a boundary: {}",
            self.prev_scale
        );
        // dir = 1 - 2 * prev_scale
        self.dir = if self.prev_scale < 0.5 {
            Direction::Advancing
        } else {
            Direction::Retreating
        };
        true
    }

    /// One tick. Returns the settled scale once a full unit has been covered.
    pub fn update(&mut self) -> Option<f32> {
        if self.dir.is_idle() {
            return None;
        }
        self.scale += SCALE_STEP * self.dir.sign();
        if (self.scale - self.prev_scale).abs() >= 1.0 - COMPLETION_EPSILON {
            self.scale = self.prev_scale + self.dir.sign();
            self.dir = Direction::Idle;
            self.prev_scale = self.scale;
            return Some(self.prev_scale);
        }
        None
    }
}
