//! Piece visuals
//!
//! Every kind has one template mesh from `models/chess_kit/pieces.glb`; a piece
//! entity clones the handle, takes its side's material and the kind's scale.
//! White and Black get separate material assets so tinting one side never
//! touches the other.

use crate::game::components::Piece;
use crate::game::resources::{piece_transform, PieceScene};
use crate::game::types::{PieceKind, Side};
use crate::input::pointer::on_piece_click;
use bevy::prelude::*;

const PIECES_GLB: &str = "models/chess_kit/pieces.glb";

/// Template meshes and side materials
#[derive(Resource, Clone)]
pub struct PieceAssets {
    pub king: Handle<Mesh>,
    pub queen: Handle<Mesh>,
    pub rook: Handle<Mesh>,
    pub bishop: Handle<Mesh>,
    pub knight: Handle<Mesh>,
    pub pawn: Handle<Mesh>,
    pub white: Handle<StandardMaterial>,
    pub black: Handle<StandardMaterial>,
}

impl PieceAssets {
    pub fn mesh(&self, kind: PieceKind) -> Handle<Mesh> {
        match kind {
            PieceKind::King => self.king.clone(),
            PieceKind::Queen => self.queen.clone(),
            PieceKind::Rook => self.rook.clone(),
            PieceKind::Bishop => self.bishop.clone(),
            PieceKind::Knight => self.knight.clone(),
            PieceKind::Pawn => self.pawn.clone(),
        }
    }

    pub fn material(&self, side: Side) -> Handle<StandardMaterial> {
        match side {
            Side::White => self.white.clone(),
            Side::Black => self.black.clone(),
        }
    }
}

fn mesh_path(index: usize) -> String {
    format!("{PIECES_GLB}#Mesh{index}/Primitive0")
}

pub fn load_piece_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(PieceAssets {
        king: asset_server.load(mesh_path(0)),
        pawn: asset_server.load(mesh_path(2)),
        knight: asset_server.load(mesh_path(3)),
        rook: asset_server.load(mesh_path(5)),
        bishop: asset_server.load(mesh_path(6)),
        queen: asset_server.load(mesh_path(7)),
        white: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0xF0, 0xE6, 0xD2),
            perceptual_roughness: 0.6,
            ..default()
        }),
        black: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x2B, 0x2B, 0x2B),
            perceptual_roughness: 0.6,
            ..default()
        }),
    });
    info!("[PIECES] Loading piece meshes from {}", PIECES_GLB);
}

/// Black pieces face the other way
fn piece_rotation(side: Side) -> Quat {
    match side {
        Side::White => Quat::IDENTITY,
        Side::Black => Quat::from_rotation_y(std::f32::consts::PI),
    }
}

fn visual_transform(piece: &Piece) -> Transform {
    piece_transform(piece).with_rotation(piece_rotation(piece.side))
}

/// [`PieceScene`] over `Commands`
///
/// Without [`PieceAssets`] (headless apps, tests) entities get the tag and
/// transform only.
pub struct CommandScene<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    assets: Option<&'a PieceAssets>,
}

impl<'a, 'w, 's> CommandScene<'a, 'w, 's> {
    pub fn new(commands: &'a mut Commands<'w, 's>, assets: Option<&'a PieceAssets>) -> Self {
        Self { commands, assets }
    }
}

impl PieceScene for CommandScene<'_, '_, '_> {
    fn spawn_piece(&mut self, piece: Piece) -> Entity {
        let name = Name::new(format!(
            "{} {} {}",
            piece.side,
            piece.kind.name(),
            piece.square
        ));
        let mut entity = self
            .commands
            .spawn((piece, visual_transform(&piece), Visibility::default(), name));
        if let Some(assets) = self.assets {
            entity
                .insert((
                    Mesh3d(assets.mesh(piece.kind)),
                    MeshMaterial3d(assets.material(piece.side)),
                ))
                .observe(on_piece_click);
        }
        entity.id()
    }

    fn relocate_piece(&mut self, entity: Entity, piece: Piece) {
        self.commands
            .entity(entity)
            .try_insert((piece, visual_transform(&piece)));
    }

    fn despawn_piece(&mut self, entity: Entity) {
        self.commands.entity(entity).try_despawn();
    }
}
