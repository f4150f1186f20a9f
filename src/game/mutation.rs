//! Move result → scene mutations
//!
//! The resolver never touches piece entities directly. It derives an ordered
//! list of [`EntityMutation`]s from the rules engine's [`MoveResult`] and
//! hands it to the registry. Side effects come first, then the primary move:
//!
//! | classification    | side effect                                   |
//! |-------------------|-----------------------------------------------|
//! | capture           | remove the piece on the target square         |
//! | king-side castle  | rook h-file → f-file on the mover's home rank |
//! | queen-side castle | rook a-file → d-file on the mover's home rank |
//! | en passant        | remove the piece on the last landing square   |
//!
//! The primary move relocates the mover, or for a promotion removes the pawn
//! and spawns the promoted kind on the target square.

use crate::game::error::{GameError, GameResult};
use crate::game::resources::{PieceRegistry, PieceScene};
use crate::game::types::{MoveClass, MoveResult, PieceKind, Side};
use bevy::prelude::*;
use shakmaty::Square;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityMutation {
    Remove { square: Square },
    Relocate { from: Square, to: Square },
    Spawn { kind: PieceKind, side: Side, square: Square },
}

/// Ordered scene mutations for an accepted move
///
/// `last_landing` is the target of the previous committed move; en passant
/// removes the piece standing there.
pub fn mutations_for(
    result: &MoveResult,
    last_landing: Option<Square>,
) -> GameResult<Vec<EntityMutation>> {
    let mut mutations = Vec::with_capacity(3);

    match result.class {
        MoveClass::Normal => {}
        MoveClass::Capture => mutations.push(EntityMutation::Remove {
            square: result.target,
        }),
        MoveClass::KingSideCastle | MoveClass::QueenSideCastle => {
            if let Some((from, to)) = result.rook_hop() {
                mutations.push(EntityMutation::Relocate { from, to });
            }
        }
        MoveClass::EnPassant => {
            let square = match (last_landing, result.captured_square) {
                (Some(landing), Some(captured)) if landing != captured => {
                    return Err(GameError::SceneDesync {
                        square: landing,
                        detail: format!("en passant captures on {captured}"),
                    });
                }
                (Some(square), _) | (None, Some(square)) => square,
                (None, None) => {
                    return Err(GameError::SceneDesync {
                        square: result.target,
                        detail: "en passant without a landing square".to_string(),
                    });
                }
            };
            mutations.push(EntityMutation::Remove { square });
        }
    }

    match result.promotion {
        Some(kind) => {
            mutations.push(EntityMutation::Remove {
                square: result.source,
            });
            mutations.push(EntityMutation::Spawn {
                kind,
                side: result.side,
                square: result.target,
            });
        }
        None => mutations.push(EntityMutation::Relocate {
            from: result.source,
            to: result.target,
        }),
    }

    Ok(mutations)
}

/// Check every mutation finds the piece it needs, without touching the scene
fn validate(registry: &PieceRegistry, mutations: &[EntityMutation]) -> GameResult<()> {
    let mut vacated = HashSet::new();
    let mut filled = HashSet::new();
    let occupied = |square: Square, vacated: &HashSet<Square>, filled: &HashSet<Square>| {
        filled.contains(&square)
            || (!vacated.contains(&square) && registry.find_piece_at(square).is_some())
    };

    for mutation in mutations {
        match *mutation {
            EntityMutation::Remove { square } => {
                if !occupied(square, &vacated, &filled) {
                    return Err(GameError::MissingEntity { square });
                }
                filled.remove(&square);
                vacated.insert(square);
            }
            EntityMutation::Relocate { from, to } => {
                if !occupied(from, &vacated, &filled) {
                    return Err(GameError::MissingEntity { square: from });
                }
                filled.remove(&from);
                vacated.insert(from);
                vacated.remove(&to);
                filled.insert(to);
            }
            EntityMutation::Spawn { square, .. } => {
                vacated.remove(&square);
                filled.insert(square);
            }
        }
    }
    Ok(())
}

/// Apply `mutations` in order through the registry
///
/// The whole list is validated first, so a missing entity leaves the scene
/// untouched.
pub fn apply_mutations(
    registry: &mut PieceRegistry,
    mutations: &[EntityMutation],
    scene: &mut dyn PieceScene,
) -> GameResult<()> {
    validate(registry, mutations)?;

    for mutation in mutations {
        match *mutation {
            EntityMutation::Remove { square } => {
                let (entity, piece) = registry
                    .find_piece_at(square)
                    .ok_or(GameError::MissingEntity { square })?;
                registry.remove(entity, scene)?;
                debug!("[MOVE] Removed {} {} from {}", piece.side, piece.kind.name(), square);
            }
            EntityMutation::Relocate { from, to } => {
                let (entity, _) = registry
                    .find_piece_at(from)
                    .ok_or(GameError::MissingEntity { square: from })?;
                registry.place(entity, to, scene)?;
            }
            EntityMutation::Spawn { kind, side, square } => {
                registry.spawn(kind, side, square, scene);
                debug!("[MOVE] Spawned {} {} on {}", side, kind.name(), square);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::resources::WorldScene;

    fn result(class: MoveClass, source: Square, target: Square) -> MoveResult {
        MoveResult {
            kind: PieceKind::Pawn,
            side: Side::White,
            source,
            target,
            class,
            captured: None,
            captured_square: None,
            promotion: None,
        }
    }

    #[test]
    fn test_quiet_move_is_a_single_relocate() {
        let mutations = mutations_for(&result(MoveClass::Normal, Square::E2, Square::E4), None).unwrap();
        assert_eq!(
            mutations,
            vec![EntityMutation::Relocate { from: Square::E2, to: Square::E4 }]
        );
    }

    #[test]
    fn test_capture_removes_before_moving() {
        let mutations =
            mutations_for(&result(MoveClass::Capture, Square::E4, Square::D5), Some(Square::D5)).unwrap();
        assert_eq!(
            mutations,
            vec![
                EntityMutation::Remove { square: Square::D5 },
                EntityMutation::Relocate { from: Square::E4, to: Square::D5 },
            ]
        );
    }

    #[test]
    fn test_castles_move_the_rook_first() {
        //! Castle symmetry: both wings, both sides
        let mut short = result(MoveClass::KingSideCastle, Square::E1, Square::G1);
        short.kind = PieceKind::King;
        assert_eq!(
            mutations_for(&short, None).unwrap()[0],
            EntityMutation::Relocate { from: Square::H1, to: Square::F1 }
        );

        let mut long = result(MoveClass::QueenSideCastle, Square::E8, Square::C8);
        long.kind = PieceKind::King;
        long.side = Side::Black;
        assert_eq!(
            mutations_for(&long, None).unwrap(),
            vec![
                EntityMutation::Relocate { from: Square::A8, to: Square::D8 },
                EntityMutation::Relocate { from: Square::E8, to: Square::C8 },
            ]
        );
    }

    #[test]
    fn test_en_passant_uses_last_landing_square() {
        let mut ep = result(MoveClass::EnPassant, Square::E5, Square::D6);
        ep.captured_square = Some(Square::D5);
        assert_eq!(
            mutations_for(&ep, Some(Square::D5)).unwrap()[0],
            EntityMutation::Remove { square: Square::D5 }
        );
        assert!(matches!(
            mutations_for(&ep, Some(Square::H7)),
            Err(GameError::SceneDesync { .. })
        ));
    }

    #[test]
    fn test_promotion_with_capture() {
        let mut promo = result(MoveClass::Capture, Square::B7, Square::A8);
        promo.promotion = Some(PieceKind::Knight);
        assert_eq!(
            mutations_for(&promo, None).unwrap(),
            vec![
                EntityMutation::Remove { square: Square::A8 },
                EntityMutation::Remove { square: Square::B7 },
                EntityMutation::Spawn {
                    kind: PieceKind::Knight,
                    side: Side::White,
                    square: Square::A8
                },
            ]
        );
    }

    #[test]
    fn test_missing_entity_leaves_scene_untouched() {
        let mut world = World::new();
        let mut scene = WorldScene::new(&mut world);
        let mut registry = PieceRegistry::default();
        registry.spawn(PieceKind::Pawn, Side::White, Square::E4, &mut scene);

        let mutations = [
            EntityMutation::Relocate { from: Square::E4, to: Square::D5 },
            EntityMutation::Remove { square: Square::C6 },
        ];
        assert_eq!(
            apply_mutations(&mut registry, &mutations, &mut scene),
            Err(GameError::MissingEntity { square: Square::C6 })
        );
        assert!(registry.find_piece_at(Square::E4).is_some());
    }

    #[test]
    fn test_apply_promotion_swaps_entity() {
        let mut world = World::new();
        let mut scene = WorldScene::new(&mut world);
        let mut registry = PieceRegistry::default();
        let pawn = registry.spawn(PieceKind::Pawn, Side::Black, Square::A2, &mut scene);

        let mutations = [
            EntityMutation::Remove { square: Square::A2 },
            EntityMutation::Spawn { kind: PieceKind::Knight, side: Side::Black, square: Square::A1 },
        ];
        apply_mutations(&mut registry, &mutations, &mut scene).unwrap();

        let (knight, piece) = registry.find_piece_at(Square::A1).unwrap();
        assert_ne!(knight, pawn);
        assert_eq!(piece.kind, PieceKind::Knight);
        assert!(registry.piece(pawn).is_none());
        assert_eq!(registry.len(), 1);
    }
}
