use std::collections::VecDeque;

use rand::{rngs::StdRng, rngs::ThreadRng, Rng};

/// Single seam for every random choice a round makes.
pub trait IndexPicker {
    /// Returns an index in `0..upper`. `upper` is never zero.
    fn pick_index(&mut self, upper: usize) -> usize;
}

impl IndexPicker for ThreadRng {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

impl IndexPicker for StdRng {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// Replays a fixed list of picks, wrapping each into range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    picks: VecDeque<usize>,
}

impl ScriptedPicker {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        ScriptedPicker {
            picks: picks.into_iter().collect(),
        }
    }
}

impl IndexPicker for ScriptedPicker {
    fn pick_index(&mut self, upper: usize) -> usize {
        debug_assert!(upper > 0, "pick_index needs a non-empty range");
        self.picks.pop_front().unwrap_or(0) % upper
    }
}
