//! Move history for the HUD move list

use crate::game::types::{MoveClass, MoveResult, PieceKind, Side};
use shakmaty::Square;

/// One committed half-move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub kind: PieceKind,
    pub side: Side,
    pub from: Square,
    pub to: Square,
    pub class: MoveClass,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    /// Full-move number the half-move belongs to
    pub move_number: u32,
    pub notation: String,
}

impl MoveRecord {
    pub fn from_result(result: &MoveResult, move_number: u32) -> Self {
        Self {
            kind: result.kind,
            side: result.side,
            from: result.source,
            to: result.target,
            class: result.class,
            captured: result.captured,
            promotion: result.promotion,
            move_number,
            notation: result.notation(),
        }
    }
}

/// Ordered list of committed half-moves
#[derive(Debug, Default, Clone)]
pub struct MoveHistory {
    pub moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.moves.iter()
    }

    /// Move-list lines in the usual "12. e4 e5" layout
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        for record in &self.moves {
            match record.side {
                Side::White => lines.push(format!("{}. {}", record.move_number, record.notation)),
                Side::Black => match lines.last_mut() {
                    Some(line) if !line.contains("...") && line.split(' ').count() == 2 => {
                        line.push(' ');
                        line.push_str(&record.notation);
                    }
                    _ => lines.push(format!("{}... {}", record.move_number, record.notation)),
                },
            }
        }
        lines
    }
}
