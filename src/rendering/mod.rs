//! Rendering - board cells, piece visuals and the scene collaborator
//!
//! - `board` - the 64 static cells and legal-target highlighting
//! - `pieces` - piece template meshes, side materials and [`CommandScene`]
//!
//! Scene setup (camera, light) lives in the binary.

pub mod board;
pub mod pieces;

pub use board::{BoardPlugin, CellMaterials};
pub use pieces::{load_piece_assets, CommandScene, PieceAssets};

use bevy::prelude::*;

/// Board cells plus piece assets
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(BoardPlugin)
            .add_systems(PreStartup, load_piece_assets);
    }
}
