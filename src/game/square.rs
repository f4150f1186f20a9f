//! Square index - board coordinates to algebraic squares and back
//!
//! The board is laid out on the XZ plane with one unit per square:
//! `x` is the file index (a = 0 … h = 7) and `z` is the rank index
//! (rank 1 = 0 … rank 8 = 7). Both directions are total over the 8×8 domain;
//! anything outside it is a programming error and panics.

use bevy::prelude::*;
use shakmaty::{File, Rank, Square};

/// Squares per side of the board
pub const BOARD_SIZE: u8 = 8;

/// Square at board coordinate `(x, z)`
///
/// # Panics
///
/// Panics if either coordinate is outside `0..8`.
pub fn square_at(x: u8, z: u8) -> Square {
    assert!(
        x < BOARD_SIZE && z < BOARD_SIZE,
        "board coordinate ({x}, {z}) is off the board"
    );
    Square::from_coords(File::new(u32::from(x)), Rank::new(u32::from(z)))
}

/// Board coordinate `(x, z)` of a square
pub fn coordinate_of(square: Square) -> (u8, u8) {
    (square.file() as u8, square.rank() as u8)
}

/// Centre of a square in world space, on the board surface
pub fn world_position(square: Square) -> Vec3 {
    let (x, z) = coordinate_of(square);
    Vec3::new(f32::from(x), 0.0, f32::from(z))
}

/// Light/dark class of a square (a1 is dark)
pub fn is_light(square: Square) -> bool {
    let (x, z) = coordinate_of(square);
    (x + z) % 2 == 1
}

/// All 64 squares in coordinate order
pub fn all_squares() -> impl Iterator<Item = Square> {
    (0..BOARD_SIZE).flat_map(|x| (0..BOARD_SIZE).map(move |z| square_at(x, z)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_corners() {
        assert_eq!(square_at(0, 0), Square::A1);
        assert_eq!(square_at(7, 0), Square::H1);
        assert_eq!(square_at(0, 7), Square::A8);
        assert_eq!(square_at(7, 7), Square::H8);
        assert_eq!(square_at(4, 3), Square::E4);
    }

    #[test]
    fn test_mapping_is_a_bijection() {
        //! Every coordinate maps to a distinct square and back to itself
        let mut seen = HashSet::new();
        for x in 0..BOARD_SIZE {
            for z in 0..BOARD_SIZE {
                let square = square_at(x, z);
                assert!(seen.insert(square), "{square} produced twice");
                assert_eq!(coordinate_of(square), (x, z));
            }
        }
        assert_eq!(seen.len(), 64);
        assert_eq!(all_squares().count(), 64);
    }

    #[test]
    fn test_square_colours() {
        assert!(!is_light(Square::A1));
        assert!(is_light(Square::H1));
        assert!(is_light(Square::A8));
        assert!(!is_light(Square::H8));
        assert!(is_light(Square::E4));
    }

    #[test]
    fn test_world_position() {
        assert_eq!(world_position(Square::C5), Vec3::new(2.0, 0.0, 4.0));
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_out_of_range_panics() {
        square_at(8, 0);
    }
}
