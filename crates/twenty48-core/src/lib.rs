//! twenty48-core: the 2048 board-mutation engine
//!
//! This crate owns the one algorithmic part of the game: sliding an N×N
//! board of power-of-two tiles in a direction, merging equal neighbors,
//! accumulating score, spawning replacement tiles, and classifying stuck
//! boards. Serving layers (HTTP, terminal) sit on top of the four public
//! operations and never reach into the grid.
//!
//! Quick start:
//! ```
//! use twenty48_core::{Game, Move};
//!
//! // Seeded games replay identically, which tests and debugging rely on.
//! let mut game = Game::with_seed(4, 42);
//! assert_eq!(game.score(), 0);
//!
//! let moved = game.apply_move(Move::Left);
//! let state = game.state();
//! assert_eq!(state.board.len(), 4);
//! if moved {
//!     assert!(state.board.iter().flatten().filter(|&&v| v != 0).count() >= 2);
//! }
//! ```
//!
//! Directions arriving as raw strings (HTTP bodies, key names) go through
//! [`Game::try_move`] or `str::parse::<Move>()`, which reject anything
//! outside `up`/`down`/`left`/`right` before the board is touched.

pub mod engine;

pub use engine::{Game, GameState, InvalidDirection, Move};
