//! Shared system parameters

use crate::game::resources::{PieceRegistry, PieceScene};
use crate::game::session::MatchSession;
use crate::rendering::{CommandScene, PieceAssets};
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

/// Mutable access to the session, the registry and the scene in one param
#[derive(SystemParam)]
pub struct BoardAccess<'w, 's> {
    pub session: ResMut<'w, MatchSession>,
    pub registry: ResMut<'w, PieceRegistry>,
    pub commands: Commands<'w, 's>,
    pub assets: Option<Res<'w, PieceAssets>>,
}

impl BoardAccess<'_, '_> {
    /// Run `f` against the session with a Commands-backed scene
    pub fn with_scene<R>(
        &mut self,
        f: impl FnOnce(&mut MatchSession, &mut PieceRegistry, &mut dyn PieceScene) -> R,
    ) -> R {
        let mut scene = CommandScene::new(&mut self.commands, self.assets.as_deref());
        f(&mut self.session, &mut self.registry, &mut scene)
    }
}
