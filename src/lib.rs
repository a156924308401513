//! One-ply chess move chooser.
//!
//! A FEN position and a list of algebraic moves go in; the index of the move
//! whose resulting board evaluates best for the side to move comes out.

pub mod apply;
pub mod board;
pub mod config;
pub mod eval;
pub mod fen;
pub mod locator;
pub mod notation;
pub mod select;
pub mod visualization;

pub use apply::{ApplyError, apply};
pub use board::{Board, Color, Piece, Position, Role, Square};
pub use eval::evaluate;
pub use select::select;
