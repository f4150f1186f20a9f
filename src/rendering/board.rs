//! Board cells and highlighting
//!
//! Selected square, its legal targets and the last move's squares are tinted;
//! everything else shows its light/dark base.
//!
//! The 64 cells are spawned once at startup and never move. Clicks on a cell
//! are turned into `SquareSelected` by [`crate::input::pointer::on_cell_click`].

use crate::game::components::BoardCell;
use crate::game::session::MatchSession;
use crate::game::square::{all_squares, world_position};
use crate::game::system_sets::GameSystems;
use crate::input::pointer::on_cell_click;
use bevy::prelude::*;

/// Cell materials: base colours plus selection tints
#[derive(Resource)]
pub struct CellMaterials {
    pub light: Handle<StandardMaterial>,
    pub dark: Handle<StandardMaterial>,
    pub selected: Handle<StandardMaterial>,
    pub target: Handle<StandardMaterial>,
    pub last_move: Handle<StandardMaterial>,
}

impl CellMaterials {
    fn base(&self, cell: &BoardCell) -> Handle<StandardMaterial> {
        if cell.light {
            self.light.clone()
        } else {
            self.dark.clone()
        }
    }
}

impl FromWorld for CellMaterials {
    fn from_world(world: &mut World) -> Self {
        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        CellMaterials {
            light: materials.add(Color::srgb_u8(0xE0, 0xC4, 0xA8)),
            dark: materials.add(Color::srgb_u8(0x6A, 0x42, 0x36)),
            selected: materials.add(Color::srgb_u8(0xD8, 0xB4, 0x3C)),
            target: materials.add(Color::srgb_u8(0x7F, 0xB0, 0x6A)),
            last_move: materials.add(Color::srgb_u8(0xB8, 0x9C, 0x5C)),
        }
    }
}

pub fn create_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    materials: Res<CellMaterials>,
) {
    let cell_mesh = meshes.add(Cuboid::new(1.0, 0.1, 1.0));

    for square in all_squares() {
        let cell = BoardCell::new(square);
        commands
            .spawn((
                Mesh3d(cell_mesh.clone()),
                MeshMaterial3d(materials.base(&cell)),
                Transform::from_translation(world_position(square) - Vec3::Y * 0.05),
                cell,
                Name::new(format!("Square {square}")),
            ))
            .observe(on_cell_click);
    }
    info!("[BOARD] Spawned 64 board cells");
}

/// Tint the selected square, its legal targets and the last move
pub fn highlight_legal_targets(
    session: Res<MatchSession>,
    materials: Res<CellMaterials>,
    mut cells: Query<(&BoardCell, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    if !session.is_changed() {
        return;
    }
    let selection = session.selection();
    let last_move = session.history().last_move().map(|record| (record.from, record.to));

    for (cell, mut material) in cells.iter_mut() {
        let wanted = if selection.selected_square == Some(cell.square) {
            materials.selected.clone()
        } else if selection.is_target(cell.square) {
            materials.target.clone()
        } else if last_move.is_some_and(|(from, to)| cell.square == from || cell.square == to) {
            materials.last_move.clone()
        } else {
            materials.base(cell)
        };
        if material.0 != wanted {
            material.0 = wanted;
        }
    }
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CellMaterials>()
            .add_systems(Startup, create_board)
            .add_systems(Update, highlight_legal_targets.in_set(GameSystems::Visual));
    }
}
