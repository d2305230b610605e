// src/views/mod.rs
//
// Top-level widget state.

pub mod scene;

pub use scene::Scene;
