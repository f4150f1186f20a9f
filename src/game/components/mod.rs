//! Chess game components
//!
//! Components are pure data. Piece entities carry [`Piece`]; the 64 static
//! squares carry [`BoardCell`].

pub mod piece;


pub use piece::*;
