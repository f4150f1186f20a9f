//! Selection state for the interactive side

use bevy::prelude::*;
use shakmaty::Square;

/// Currently selected piece and the squares it may move to
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Selection {
    pub selected_entity: Option<Entity>,
    pub selected_square: Option<Square>,
    pub legal_targets: Vec<Square>,
}

impl Selection {
    pub fn select(&mut self, entity: Entity, square: Square, legal_targets: Vec<Square>) {
        self.selected_entity = Some(entity);
        self.selected_square = Some(square);
        self.legal_targets = legal_targets;
    }

    pub fn clear(&mut self) {
        self.selected_entity = None;
        self.selected_square = None;
        self.legal_targets.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected_entity.is_some()
    }

    pub fn is_target(&self, square: Square) -> bool {
        self.legal_targets.contains(&square)
    }
}
