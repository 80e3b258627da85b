//! Destination sets produced by the generators.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Square;

/// One flag per board cell; `true` marks a reachable destination.
#[derive(Clone, PartialEq, Eq)]
pub struct MoveSet {
    targets: [bool; BOARD_SIZE],
}

impl Default for MoveSet {
    fn default() -> Self {
        Self {
            targets: [false; BOARD_SIZE],
        }
    }
}

impl MoveSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.targets = [false; BOARD_SIZE];
    }

    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.targets[square as usize] = true;
    }

    #[inline]
    pub fn remove(&mut self, square: Square) {
        self.targets[square as usize] = false;
    }

    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        self.targets
            .get(square as usize)
            .copied()
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.targets.iter().filter(|&&set| set).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.targets.iter().any(|&set| set)
    }

    /// Destinations in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.targets
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(|(square, _)| square as Square)
    }

    pub fn is_subset_of(&self, other: &MoveSet) -> bool {
        self.iter().all(|square| other.contains(square))
    }
}

impl std::fmt::Debug for MoveSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
