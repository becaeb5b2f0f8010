use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::ops;

// Internal type aliases for the grid representation
pub(crate) type Cell = u32;
pub(crate) type Score = u64;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four directions in a fixed order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Lowercase name used on the wire and in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Move::Up),
            "down" => Ok(Move::Down),
            "left" => Ok(Move::Left),
            "right" => Ok(Move::Right),
            other => Err(InvalidDirection::new(other)),
        }
    }
}

/// A direction outside `up`, `down`, `left`, `right`.
///
/// Carries the rejected input; the message lists the accepted spellings.
/// This is the only error the engine produces, and it is raised before any
/// state is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction `{value}`: expected one of `up`, `down`, `left`, `right`")]
pub struct InvalidDirection {
    value: String,
}

impl InvalidDirection {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The accepted direction spellings.
    pub fn accepted() -> [&'static str; 4] {
        ["up", "down", "left", "right"]
    }
}

/// Immutable snapshot of one game, as reported to callers.
///
/// The snapshot owns its data: mutating it cannot affect the live game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<Vec<Cell>>,
    pub score: Score,
    pub game_over: bool,
}

/// One 2048 game: an N×N board of literal tile values plus the running
/// score and the RNG that feeds tile spawning.
///
/// The board is row-major; 0 is an empty cell, any other value is a power
/// of two. Score only ever grows, by the value of every tile a merge
/// produces. All mutation goes through [`Game::apply_move`] (or the
/// string-input wrapper [`Game::try_move`]); callers observe state through
/// copies only.
#[derive(Debug, Clone)]
pub struct Game {
    size: usize,
    cells: Vec<Cell>,
    score: Score,
    rng: StdRng,
}

impl Game {
    /// Create a game with two starting tiles, seeding the RNG from entropy.
    ///
    /// # Panics
    /// Panics if `size < 2`.
    pub fn new(size: usize) -> Self {
        Self::from_rng(size, StdRng::from_entropy())
    }

    /// Create a game with two starting tiles and a fixed RNG seed.
    ///
    /// Equal seeds and equal move sequences produce identical games.
    ///
    /// ```
    /// use twenty48_core::Game;
    /// let a = Game::with_seed(4, 7);
    /// let b = Game::with_seed(4, 7);
    /// assert_eq!(a.state(), b.state());
    /// ```
    ///
    /// # Panics
    /// Panics if `size < 2`.
    pub fn with_seed(size: usize, seed: u64) -> Self {
        Self::from_rng(size, StdRng::seed_from_u64(seed))
    }

    fn from_rng(size: usize, rng: StdRng) -> Self {
        assert!(size >= 2, "board size must be at least 2, got {size}");
        let mut game = Self {
            size,
            cells: vec![0; size * size],
            score: 0,
            rng,
        };
        game.spawn_tile();
        game.spawn_tile();
        game
    }

    /// Board edge length N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current score.
    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Copy of the board as row vectors.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Slide and merge all tiles toward `direction`.
    ///
    /// Returns `true` when the move changed at least one cell, in which case
    /// one new tile has been spawned. Returns `false` otherwise, with every
    /// cell, the score, and the RNG untouched; a move that changes nothing
    /// is a normal outcome, not an error.
    pub fn apply_move(&mut self, direction: Move) -> bool {
        let (next, gain) = ops::slide(&self.cells, self.size, direction);
        if next == self.cells {
            return false;
        }
        self.cells = next;
        self.score += gain;
        self.spawn_tile();
        true
    }

    /// Parse `direction` and apply it.
    ///
    /// Validation happens first: an unrecognized direction returns
    /// [`InvalidDirection`] and the board is never touched.
    pub fn try_move(&mut self, direction: &str) -> Result<bool, InvalidDirection> {
        let mv = direction.parse::<Move>()?;
        Ok(self.apply_move(mv))
    }

    /// True when no move can change the board: every cell is occupied and
    /// no two horizontal or vertical neighbors hold equal values.
    ///
    /// Recomputed from the current cells on every call.
    pub fn is_game_over(&self) -> bool {
        ops::is_stuck(&self.cells, self.size)
    }

    /// Immutable snapshot of board, score, and game-over flag.
    pub fn state(&self) -> GameState {
        GameState {
            board: self.rows(),
            score: self.score,
            game_over: self.is_game_over(),
        }
    }

    /// Place one new tile (2 with probability 0.9, else 4) in a uniformly
    /// chosen empty cell. No-op returning `false` when the board is full,
    /// so a board-filling move can still be scored and classified.
    pub(crate) fn spawn_tile(&mut self) -> bool {
        let empty: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, &value)| value == 0)
            .map(|(idx, _)| idx)
            .collect();
        if empty.is_empty() {
            return false;
        }
        let idx = empty[self.rng.gen_range(0..empty.len())];
        self.cells[idx] = if self.rng.gen_range(0..10) < 9 { 2 } else { 4 };
        true
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = |f: &mut fmt::Formatter<'_>, left: &str, mid: &str, right: &str| {
            write!(f, "{left}")?;
            for col in 0..self.size {
                write!(f, "───────")?;
                write!(f, "{}", if col + 1 == self.size { right } else { mid })?;
            }
            writeln!(f)
        };

        writeln!(f, "Score: {}", self.score)?;
        rule(f, "┌", "┬", "┐")?;
        for (idx, row) in self.cells.chunks(self.size).enumerate() {
            if idx > 0 {
                rule(f, "├", "┼", "┤")?;
            }
            write!(f, "│")?;
            for &cell in row {
                if cell == 0 {
                    write!(f, "       │")?;
                } else {
                    write!(f, "{cell:^7}│")?;
                }
            }
            writeln!(f)?;
        }
        rule(f, "└", "┴", "┘")
    }
}
