// src/animation/chain.rs
//
// The fixed column of rows and the cursor that bounces through it.
// Rows live in one array; neighbours are found by index arithmetic.

use crate::animation::AnimationState;
use crate::constants::ROWS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceDir {
    Forward,
    Backward,
}

impl BounceDir {
    pub fn reversed(self) -> Self {
        match self {
            BounceDir::Forward => BounceDir::Backward,
            BounceDir::Backward => BounceDir::Forward,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Node {
    pub index: usize,
    pub state: AnimationState,
}

impl Node {
    fn new(index: usize) -> Self {
        Self {
            index,
            state: AnimationState::new(),
        }
    }

    pub fn next(&self) -> Option<usize> {
        (self.index + 1 < ROWS).then_some(self.index + 1)
    }

    pub fn prev(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    pub fn neighbor(&self, dir: BounceDir) -> Option<usize> {
        match dir {
            BounceDir::Forward => self.next(),
            BounceDir::Backward => self.prev(),
        }
    }
}

/// Reported by `NodeChain::update` whenever the current row settles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSwitch {
    /// Row that just finished its unit of travel.
    pub settled_row: usize,
    pub settled_scale: f32,
    /// Row the next tap will animate.
    pub current_row: usize,
    /// True when the cursor hit an end and turned around in place.
    pub reversed: bool,
}

#[derive(Debug, Clone)]
pub struct NodeChain {
    nodes: [Node; ROWS],
    current: usize,
    bounce_dir: BounceDir,
}

impl Default for NodeChain {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeChain {
    pub fn new() -> Self {
        Self {
            nodes: std::array::from_fn(Node::new),
            current: 0,
            bounce_dir: BounceDir::Forward,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_node(&self) -> &Node {
        &self.nodes[self.current]
    }

    pub fn bounce_dir(&self) -> BounceDir {
        self.bounce_dir
    }

    /// True while the current row is partway through a unit.
    pub fn in_flight(&self) -> bool {
        !self.current_node().state.dir().is_idle()
    }

    pub fn start_updating(&mut self) -> bool {
        self.nodes[self.current].state.start_updating()
    }

    pub fn update(&mut self) -> Option<BoxSwitch> {
        let node = &mut self.nodes[self.current];
        let settled_scale = node.state.update()?;
        let settled_row = node.index;

        let reversed = match node.neighbor(self.bounce_dir) {
            Some(next) => {
                self.current = next;
                false
            }
            None => {
                self.bounce_dir = self.bounce_dir.reversed();
                true
            }
        };

        Some(BoxSwitch {
            settled_row,
            settled_scale,
            current_row: self.current,
            reversed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_current(chain: &mut NodeChain) -> BoxSwitch {
        assert!(chain.start_updating());
        for _ in 0..1000 {
            if let Some(switch) = chain.update() {
                return switch;
            }
        }
        panic!("current row never settled");
    }

    #[test]
    fn test_neighbors_at_ends() {
        let chain = NodeChain::new();
        let first = &chain.nodes()[0];
        let last = &chain.nodes()[ROWS - 1];

        assert_eq!(first.prev(), None);
        assert_eq!(first.next(), Some(1));
        assert_eq!(last.next(), None);
        assert_eq!(last.prev(), Some(ROWS - 2));
        assert_eq!(last.neighbor(BounceDir::Forward), None);
        assert_eq!(first.neighbor(BounceDir::Backward), None);
    }

    #[test]
    fn test_cursor_bounces_through_rows() {
        let mut chain = NodeChain::new();
        let expected = [
            (1, false),
            (2, false),
            (3, false),
            (4, false),
            (4, true),
            (3, false),
            (2, false),
            (1, false),
            (0, false),
            (0, true),
            (1, false),
        ];

        for (current, reversed) in expected {
            let switch = complete_current(&mut chain);
            assert_eq!(switch.current_row, current);
            assert_eq!(switch.reversed, reversed);
            assert_eq!(chain.current(), current);
        }
        assert_eq!(chain.bounce_dir(), BounceDir::Forward);
    }

    #[test]
    fn test_rows_settle_out_then_back() {
        let mut chain = NodeChain::new();

        // five rows out
        for row in 0..ROWS {
            let switch = complete_current(&mut chain);
            assert_eq!(switch.settled_row, row);
            assert_eq!(switch.settled_scale, 1.0);
        }
        assert_eq!(chain.bounce_dir(), BounceDir::Backward);

        // and five rows back, last row first
        for row in (0..ROWS).rev() {
            let switch = complete_current(&mut chain);
            assert_eq!(switch.settled_row, row);
            assert_eq!(switch.settled_scale, 0.0);
        }
        assert!(chain.nodes().iter().all(|node| node.state.scale() == 0.0));
    }

    #[test]
    fn test_start_only_touches_current_row() {
        let mut chain = NodeChain::new();
        assert!(chain.start_updating());
        assert!(!chain.start_updating());
        chain.update();

        assert!(chain.nodes()[0].state.scale() > 0.0);
        assert!(chain.nodes()[1..].iter().all(|node| node.state.dir().is_idle()));
    }

    #[test]
    fn test_update_without_start_is_none() {
        let mut chain = NodeChain::new();
        assert_eq!(chain.update(), None);
        assert_eq!(chain.current(), 0);
    }
}
