use anyhow::Context;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use chess3d::core::{load_config, MatchConfig};
use chess3d::game::ai::Difficulty;
use chess3d::game::types::Side;
use chess3d::game::GamePlugin;
use chess3d::rendering::RenderingPlugin;
use chess3d::simulate::run_simulation;
use chess3d::ui::HudPlugin;

const WINDOW_WIDTH: u32 = 1366;
const WINDOW_HEIGHT: u32 = 768;

#[derive(Parser, Debug)]
#[command(name = "chess3d", version, about = "3D chess against a greedy engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    overrides: MatchArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the board window (default)
    Play,
    /// Play both sides headless and print the game
    Simulate {
        /// Stop after this many half-moves
        #[arg(long, default_value_t = 80)]
        plies: usize,
    },
}

/// Overrides on top of the saved match settings
#[derive(Args, Debug, Default)]
struct MatchArgs {
    /// Settings file instead of the platform config dir
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    side: Option<Side>,
    #[arg(long, global = true)]
    difficulty: Option<Difficulty>,
    /// Seconds per side
    #[arg(long, global = true)]
    clock: Option<u32>,
    /// Fischer increment in seconds
    #[arg(long, global = true)]
    increment: Option<u32>,
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Starting position
    #[arg(long, global = true)]
    fen: Option<String>,
}

impl MatchArgs {
    fn resolve(&self) -> MatchConfig {
        let mut config = load_config(self.config.as_deref());
        if let Some(side) = self.side {
            config.human_side = side;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(clock) = self.clock {
            config.clock_seconds = clock;
        }
        if let Some(increment) = self.increment {
            config.increment_seconds = increment;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.fen.is_some() {
            config.starting_fen = self.fen.clone();
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let config = cli.overrides.resolve();
            play(config);
            Ok(())
        }
        Command::Simulate { plies } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .init();
            let config = cli.overrides.resolve();
            simulate(&config, plies)
        }
    }
}

fn play(config: MatchConfig) {
    let window = Window {
        title: "Chess3D".to_string(),
        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
        ..default()
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(MeshPickingPlugin)
        .add_plugins(EguiPlugin::default())
        // GamePlugin builds the first session from whatever MatchConfig is present
        .insert_resource(config)
        .add_plugins(GamePlugin)
        .add_plugins(RenderingPlugin)
        .add_plugins(HudPlugin)
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn((
        PointLight {
            shadows_enabled: true,
            intensity: 100000.0,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0),
    ));

    // Behind White, looking at the board centre
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(3.5, 9.0, -4.0).looking_at(Vec3::new(3.5, 0.0, 3.5), Vec3::Y),
    ));
}

fn simulate(config: &MatchConfig, plies: usize) -> anyhow::Result<()> {
    let report = run_simulation(config, plies).context("simulation stopped")?;

    for line in &report.moves {
        println!("{line}");
    }
    println!();
    println!("{} after {} plies", report.outcome.message(), report.plies);
    println!("{}", report.position);
    Ok(())
}
