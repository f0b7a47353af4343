use anyhow::{bail, Context};
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use chess_view::core::{init_tracing, CorePlugin, ViewConfig};
use chess_view::game::{ChessSessionPlugin, MoveLogger, Position, SimpleGameEngine};
use chess_view::rendering::ChessRenderPlugin;
use chess_view::ui::UiPlugin;
use chess_view::view::ChessSession;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chess_view", about = "Chess board driven by a pluggable game engine")]
struct Args {
    /// Config file; defaults to view_config.json in the platform config dir
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side of one square in pixels
    #[arg(long)]
    square_size: Option<f32>,

    /// Duration of a move animation in milliseconds
    #[arg(long)]
    animation_ms: Option<u32>,

    /// Play these clicks (`row,column`) without a window and exit
    #[arg(long, num_args = 1..)]
    clicks: Vec<Position>,
}

fn load_config(args: &Args) -> anyhow::Result<ViewConfig> {
    let mut config = match &args.config {
        Some(path) => ViewConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ViewConfig::load_or_default(),
    };
    if let Some(square_size) = args.square_size {
        config.square_size = square_size;
    }
    if let Some(move_ms) = args.animation_ms {
        config.animation.move_ms = move_ms;
    }
    config.validate()?;
    Ok(config)
}

/// Feeds `clicks` straight into the session and logs the outcome
fn run_headless(mut session: ChessSession, clicks: &[Position]) -> anyhow::Result<()> {
    for &position in clicks {
        session.click(position)?;
    }

    let view = session.view();
    for piece in view.displayed().iter() {
        info!("[HEADLESS] {} at {}", piece.image_id(), piece.position);
    }
    if let Some(text) = view.winner_text().or_else(|| view.current_player_text()) {
        info!("[HEADLESS] {}", text);
    }
    if let Some(message) = view.message() {
        info!("[HEADLESS] {}", message);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let headless = !args.clicks.is_empty();
    if headless {
        init_tracing();
    }

    let config = load_config(&args)?;
    let session = ChessSession::new(SimpleGameEngine::new(), config.geometry())?
        .with_listener(MoveLogger);

    if headless {
        return run_headless(session, &args.clicks);
    }

    let board_size = session
        .view()
        .board_size()
        .context("engine reported no board size")?;
    let window = config.to_window(board_size);

    let exit = App::new()
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(config)
        .insert_resource(session)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins((CorePlugin, ChessSessionPlugin, ChessRenderPlugin, UiPlugin))
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("chess view exited with code {}", code),
    }
}
