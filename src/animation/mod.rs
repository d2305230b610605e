// src/animation/mod.rs
//
// Row progress, the row chain, and the tick gate that drives them.

pub mod chain;
pub mod driver;
pub mod scale;
pub mod state;

pub use chain::{BounceDir, BoxSwitch, Node, NodeChain};
pub use driver::AnimationDriver;
pub use state::{AnimationState, Direction};
