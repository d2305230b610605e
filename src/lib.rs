// src/lib.rs
//
// A column of box rows; each tap bounces one box out along its row, and the
// active row walks down the column and back.

pub mod animation;
pub mod config;
pub mod constants;
pub mod host;
pub mod render;
pub mod views;
