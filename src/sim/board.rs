//! Tubes and boards
//!
//! A tube stores its candies top-first: index 0 is the candy a tap picks up.

use serde::{Deserialize, Serialize};

use super::candy::Candy;
use crate::consts::TUBE_CAPACITY;

/// An ordered stack of candies (index 0 = top)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tube {
    pub candies: Vec<Candy>,
}

impl Tube {
    pub fn new(candies: Vec<Candy>) -> Self {
        Self { candies }
    }

    pub fn len(&self) -> usize {
        self.candies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candies.is_empty()
    }

    /// The candy a tap would pick up
    pub fn top(&self) -> Option<Candy> {
        self.candies.first().copied()
    }

    /// Length of the run of candies matching the top one
    pub fn run_len(&self) -> usize {
        match self.top() {
            Some(top) => self.candies.iter().take_while(|&&c| c == top).count(),
            None => 0,
        }
    }

    /// Full tube of a single color
    pub fn is_completed(&self) -> bool {
        match self.top() {
            Some(top) => {
                self.candies.len() == TUBE_CAPACITY && self.candies.iter().all(|&c| c == top)
            }
            None => false,
        }
    }

    pub fn is_full(&self) -> bool {
        self.candies.len() >= TUBE_CAPACITY
    }

    /// Place a candy on top
    pub(crate) fn push_top(&mut self, candy: Candy) {
        self.candies.insert(0, candy);
    }

    /// Remove the top candy
    pub(crate) fn pop_top(&mut self) -> Option<Candy> {
        if self.candies.is_empty() {
            None
        } else {
            Some(self.candies.remove(0))
        }
    }
}

/// Every tube of one level attempt, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub tubes: Vec<Tube>,
}

impl Board {
    pub fn new(tubes: Vec<Tube>) -> Self {
        Self { tubes }
    }

    /// Build a board from raw top-first candy lists
    pub fn from_candies(tubes: Vec<Vec<Candy>>) -> Self {
        Self {
            tubes: tubes.into_iter().map(Tube::new).collect(),
        }
    }

    pub fn tube(&self, index: usize) -> Option<&Tube> {
        self.tubes.get(index)
    }

    pub fn len(&self) -> usize {
        self.tubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tubes.is_empty()
    }

    /// Candies across all tubes (conserved by every move)
    pub fn total_candies(&self) -> usize {
        self.tubes.iter().map(Tube::len).sum()
    }

    pub fn is_complete(&self) -> bool {
        is_complete(self)
    }
}

/// True when every tube is either empty or a full single-color tube
pub fn is_complete(board: &Board) -> bool {
    board
        .tubes
        .iter()
        .all(|tube| tube.is_empty() || tube.is_completed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use Candy::*;

    #[test]
    fn test_run_len() {
        assert_eq!(Tube::new(vec![Red, Red, Blue, Red]).run_len(), 2);
        assert_eq!(Tube::new(vec![Blue]).run_len(), 1);
        assert_eq!(Tube::default().run_len(), 0);
    }

    #[test]
    fn test_tube_completed() {
        assert!(Tube::new(vec![Red; 4]).is_completed());
        assert!(!Tube::new(vec![Red; 3]).is_completed());
        assert!(!Tube::new(vec![Red, Red, Red, Blue]).is_completed());
        assert!(!Tube::default().is_completed());
    }

    #[test]
    fn test_board_complete_with_empty_tubes() {
        let board = Board::from_candies(vec![vec![Red; 4], vec![], vec![Blue; 4], vec![]]);
        assert!(is_complete(&board));
    }

    #[test]
    fn test_board_incomplete_when_partial_or_mixed() {
        let partial = Board::from_candies(vec![vec![Red; 4], vec![Blue; 3], vec![Blue]]);
        assert!(!is_complete(&partial));

        let mixed = Board::from_candies(vec![vec![Red, Red, Blue, Blue], vec![Blue, Blue, Red, Red]]);
        assert!(!is_complete(&mixed));
    }

    #[test]
    fn test_push_pop_top() {
        let mut tube = Tube::new(vec![Blue]);
        tube.push_top(Red);
        assert_eq!(tube.candies, vec![Red, Blue]);
        assert_eq!(tube.pop_top(), Some(Red));
        assert_eq!(tube.pop_top(), Some(Blue));
        assert_eq!(tube.pop_top(), None);
    }
}
