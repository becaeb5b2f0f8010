//! Engine module: N×N 2048 board state and the slide/merge/spawn ops.
//! Public API stays small and ergonomic.
//!
//! - `Game` owns one board plus its score and RNG.
//! - `ops` holds the pure grid transforms shared by all four directions.

mod ops;
pub mod state;

pub use state::{Game, GameState, InvalidDirection, Move};
