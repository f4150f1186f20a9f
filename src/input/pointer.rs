//! Pointer observers
//!
//! Attached with `.observe(...)` to every board cell and piece entity. Both
//! resolve the clicked entity to a square and emit [`SquareSelected`]; what a
//! click means (select, move, deselect) is decided by the match session.

use crate::game::components::{BoardCell, Piece};
use crate::game::events::SquareSelected;
use bevy::picking::events::{Click, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

fn is_primary(button: PointerButton) -> bool {
    matches!(button, PointerButton::Primary)
}

/// Click on a board cell
pub fn on_cell_click(
    click: On<Pointer<Click>>,
    cells: Query<&BoardCell>,
    mut selected: MessageWriter<SquareSelected>,
) {
    if !is_primary(click.event.button) {
        return;
    }
    let Ok(cell) = cells.get(click.entity) else {
        return;
    };
    debug!("[INPUT] Clicked square {}", cell.square);
    selected.write(SquareSelected {
        square: cell.square,
    });
}

/// Click on a piece; reported as a click on the square it stands on
pub fn on_piece_click(
    click: On<Pointer<Click>>,
    pieces: Query<&Piece>,
    mut selected: MessageWriter<SquareSelected>,
) {
    if !is_primary(click.event.button) {
        return;
    }
    let Ok(piece) = pieces.get(click.entity) else {
        return;
    };
    debug!(
        "[INPUT] Clicked {} {} on {}",
        piece.side,
        piece.kind.name(),
        piece.square
    );
    selected.write(SquareSelected {
        square: piece.square,
    });
}
