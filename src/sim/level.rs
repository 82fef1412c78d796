//! Procedural level generation
//!
//! A level is a shuffled pool of candies dealt round-robin into tubes.
//! Nothing here checks that the result is solvable.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use thiserror::Error;

use super::board::{Board, Tube};
use super::candy::{Candy, PALETTE};
use crate::consts::{CANDIES_PER_COLOR, MAX_TUBES};

/// Levels are numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid level {level}: levels are numbered from 1")]
pub struct InvalidLevelError {
    pub level: u32,
}

/// Parameters of a level before dealing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelShape {
    pub level: u32,
    pub num_colors: usize,
    pub candies_per_color: usize,
    pub num_tubes: usize,
}

impl LevelShape {
    /// Shape for a level using the first `palette_size` colors
    pub fn for_level(level: u32, palette_size: usize) -> Result<Self, InvalidLevelError> {
        if level == 0 {
            return Err(InvalidLevelError { level });
        }
        let level_usize = level as usize;
        let palette_size = palette_size.clamp(1, PALETTE.len());

        let num_colors = palette_size.min(2 + level_usize / 2);
        // At least one tube per color, so the round-robin deal never overfills a tube
        let num_tubes = (num_colors + (level_usize / 5).max(2))
            .min(MAX_TUBES)
            .max(num_colors);

        Ok(Self {
            level,
            num_colors,
            candies_per_color: CANDIES_PER_COLOR,
            num_tubes,
        })
    }

    pub fn total_candies(&self) -> usize {
        self.num_colors * self.candies_per_color
    }

    /// Unshuffled pool: `candies_per_color` copies of each color in palette order
    pub fn candy_pool(&self) -> Vec<Candy> {
        PALETTE[..self.num_colors]
            .iter()
            .flat_map(|&color| std::iter::repeat_n(color, self.candies_per_color))
            .collect()
    }
}

/// Seeded level generator
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    seed: u64,
    palette_size: usize,
    rng: Pcg32,
}

impl LevelGenerator {
    /// Create a generator with a fixed seed (reproducible boards)
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            palette_size: PALETTE.len(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Restrict levels to the first `palette_size` colors
    pub fn with_palette_size(mut self, palette_size: usize) -> Self {
        self.palette_size = palette_size.clamp(1, PALETTE.len());
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    pub fn shape(&self, level: u32) -> Result<LevelShape, InvalidLevelError> {
        LevelShape::for_level(level, self.palette_size)
    }

    /// Generate the starting board for a level
    pub fn generate(&mut self, level: u32) -> Result<Board, InvalidLevelError> {
        let shape = self.shape(level)?;

        let mut pool = shape.candy_pool();
        pool.shuffle(&mut self.rng);

        let board = Board::new(deal(&pool, shape.num_tubes));
        log::info!(
            "Level {}: colors={}, tubes={}, candies={} (seed {})",
            level,
            shape.num_colors,
            shape.num_tubes,
            board.total_candies(),
            self.seed
        );
        Ok(board)
    }
}

/// Round-robin deal: candy `i` goes to tube `i mod num_tubes`, appended.
fn deal(pool: &[Candy], num_tubes: usize) -> Vec<Tube> {
    let mut tubes = vec![Tube::default(); num_tubes];
    if num_tubes == 0 {
        return tubes;
    }
    for (i, &candy) in pool.iter().enumerate() {
        tubes[i % num_tubes].candies.push(candy);
    }
    tubes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TUBE_CAPACITY;

    #[test]
    fn test_level_one_shape() {
        let shape = LevelShape::for_level(1, PALETTE.len()).unwrap();
        assert_eq!(shape.num_colors, 2);
        assert_eq!(shape.candies_per_color, 4);
        assert_eq!(shape.num_tubes, 4);
    }

    #[test]
    fn test_level_one_board() {
        let board = LevelGenerator::new(7).generate(1).unwrap();
        assert_eq!(board.len(), 4);
        assert_eq!(board.total_candies(), 8);
        for tube in &board.tubes {
            assert_eq!(tube.len(), 2);
        }
    }

    #[test]
    fn test_shape_caps() {
        // Palette runs out at 7 colors, tubes at 10
        let shape = LevelShape::for_level(40, PALETTE.len()).unwrap();
        assert_eq!(shape.num_colors, 7);
        assert_eq!(shape.num_tubes, 10);

        let shape = LevelShape::for_level(12, PALETTE.len()).unwrap();
        assert_eq!(shape.num_colors, 7);
        assert_eq!(shape.num_tubes, 9);
    }

    #[test]
    fn test_level_zero_is_rejected() {
        let err = LevelGenerator::new(1).generate(0).unwrap_err();
        assert_eq!(err, InvalidLevelError { level: 0 });
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = LevelGenerator::new(99999).generate(8).unwrap();
        let b = LevelGenerator::new(99999).generate(8).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_boards_conserve_colors() {
        let mut generator = LevelGenerator::new(42);
        for level in 1..=60 {
            let board = generator.generate(level).unwrap();
            let shape = generator.shape(level).unwrap();
            assert_eq!(board.len(), shape.num_tubes);
            for &color in &PALETTE[..shape.num_colors] {
                let count = board
                    .tubes
                    .iter()
                    .flat_map(|t| t.candies.iter())
                    .filter(|&&c| c == color)
                    .count();
                assert_eq!(count, CANDIES_PER_COLOR, "level {level}");
            }
            assert!(board.tubes.iter().all(|t| t.len() <= TUBE_CAPACITY));
        }
    }

    #[test]
    fn test_small_palette() {
        let board = LevelGenerator::new(3)
            .with_palette_size(3)
            .generate(30)
            .unwrap();
        assert_eq!(board.total_candies(), 12);
    }

    #[test]
    fn test_generate_shuffles_pool() {
        let mut generator = LevelGenerator::new(2024);
        let shape = generator.shape(12).unwrap();
        let unshuffled = Board::new(deal(&shape.candy_pool(), shape.num_tubes));
        let board = generator.generate(12).unwrap();
        assert_ne!(board, unshuffled);
    }

    #[test]
    fn test_different_seeds_different_boards() {
        let boards: Vec<Board> = (1..=4)
            .map(|seed| LevelGenerator::new(seed).generate(12).unwrap())
            .collect();
        assert!(boards.iter().skip(1).any(|b| *b != boards[0]));
    }

    #[test]
    fn test_deal_is_round_robin() {
        let pool = [Candy::Red, Candy::Blue, Candy::Yellow, Candy::Green, Candy::Pink];
        let tubes = deal(&pool, 2);
        assert_eq!(tubes[0].candies, vec![Candy::Red, Candy::Yellow, Candy::Pink]);
        assert_eq!(tubes[1].candies, vec![Candy::Blue, Candy::Green]);
    }
}
