//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules and state management.
//! It has zero dependencies on UI, timing, or I/O: the controller drives it
//! through the public operations and the view only reads it.

pub mod board;
pub mod model;
pub mod piece;
pub mod rng;

pub use board::Board;
pub use model::{fall_interval_ms, GameModel};
pub use piece::{Piece, ShapeMatrix};
pub use rng::SimpleRng;
