//! Spatial entity registry
//!
//! Owns the lifetime of every piece entity and keeps a square → entity index
//! that is updated on each place/remove/spawn, so lookups never scan the scene.
//!
//! The registry does not talk to the ECS directly. Scene side effects go
//! through a [`PieceScene`], which lets the same registry drive the rendered
//! scene (Commands), a bare `World` (headless runs and tests) or nothing at all.

use crate::game::components::Piece;
use crate::game::error::{GameError, GameResult};
use crate::game::square::world_position;
use crate::game::types::{PieceKind, Side};
use bevy::prelude::*;
use shakmaty::Square;
use std::collections::HashMap;

/// Scene collaborator for piece entities
pub trait PieceScene {
    /// Create an entity for `piece` (mesh, scale, material, transform)
    fn spawn_piece(&mut self, piece: Piece) -> Entity;

    /// Retag and move an existing entity
    fn relocate_piece(&mut self, entity: Entity, piece: Piece);

    fn despawn_piece(&mut self, entity: Entity);
}

/// Registry of piece entities indexed by square
#[derive(Resource, Debug, Default)]
pub struct PieceRegistry {
    by_square: HashMap<Square, Entity>,
    pieces: HashMap<Entity, Piece>,
}

impl PieceRegistry {
    pub fn find_piece_at(&self, square: Square) -> Option<(Entity, Piece)> {
        let entity = *self.by_square.get(&square)?;
        self.pieces.get(&entity).map(|piece| (entity, *piece))
    }

    pub fn piece(&self, entity: Entity) -> Option<&Piece> {
        self.pieces.get(&entity)
    }

    /// Move `entity` to `square`
    ///
    /// Does not check whether `square` is occupied; the resolver removes
    /// captured pieces before placing the mover.
    pub fn place(
        &mut self,
        entity: Entity,
        square: Square,
        scene: &mut dyn PieceScene,
    ) -> GameResult<()> {
        let piece = self
            .pieces
            .get_mut(&entity)
            .ok_or(GameError::UnknownEntity { entity })?;
        if self.by_square.get(&piece.square) == Some(&entity) {
            self.by_square.remove(&piece.square);
        }
        piece.square = square;
        self.by_square.insert(square, entity);
        scene.relocate_piece(entity, *piece);
        Ok(())
    }

    /// Detach `entity` from the index and despawn it
    pub fn remove(&mut self, entity: Entity, scene: &mut dyn PieceScene) -> GameResult<Piece> {
        let Some(piece) = self.pieces.remove(&entity) else {
            warn!("[REGISTRY] Refusing to remove unregistered entity {:?}", entity);
            return Err(GameError::UnknownEntity { entity });
        };
        if self.by_square.get(&piece.square) == Some(&entity) {
            self.by_square.remove(&piece.square);
        }
        scene.despawn_piece(entity);
        Ok(piece)
    }

    pub fn spawn(
        &mut self,
        kind: PieceKind,
        side: Side,
        square: Square,
        scene: &mut dyn PieceScene,
    ) -> Entity {
        let piece = Piece::new(side, kind, square);
        let entity = scene.spawn_piece(piece);
        self.pieces.insert(entity, piece);
        self.by_square.insert(square, entity);
        entity
    }

    /// Despawn every piece
    pub fn clear(&mut self, scene: &mut dyn PieceScene) {
        for entity in self.pieces.keys() {
            scene.despawn_piece(*entity);
        }
        self.pieces.clear();
        self.by_square.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, &Piece)> {
        self.pieces.iter().map(|(entity, piece)| (*entity, piece))
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Index and pieces agree: every piece is indexed under its own square
    pub fn is_consistent(&self) -> bool {
        self.by_square.len() == self.pieces.len()
            && self
                .pieces
                .iter()
                .all(|(entity, piece)| self.by_square.get(&piece.square) == Some(entity))
    }
}

/// Scene backed by a bare `World`: entities carry the [`Piece`] tag and a
/// transform but no mesh; used by headless runs and tests
pub struct WorldScene<'w> {
    pub world: &'w mut World,
}

impl<'w> WorldScene<'w> {
    pub fn new(world: &'w mut World) -> Self {
        Self { world }
    }
}

impl PieceScene for WorldScene<'_> {
    fn spawn_piece(&mut self, piece: Piece) -> Entity {
        self.world.spawn((piece, piece_transform(&piece))).id()
    }

    fn relocate_piece(&mut self, entity: Entity, piece: Piece) {
        if let Ok(mut entity_mut) = self.world.get_entity_mut(entity) {
            entity_mut.insert((piece, piece_transform(&piece)));
        }
    }

    fn despawn_piece(&mut self, entity: Entity) {
        self.world.despawn(entity);
    }
}

/// Transform of a piece standing on its square at its kind's scale
pub fn piece_transform(piece: &Piece) -> Transform {
    Transform::from_translation(world_position(piece.square))
        .with_scale(Vec3::splat(piece.base_scale()))
}
