use app::app_loop::AppState;
use app::config::{ConfigError, GameConfig};
use app::journal_file::{default_journal_path, write_journal_atomic};
use app::pacing::TickGate;
use app::{APP_NAME, format_snapshot_hash};
use core::Game;
use env_logger::{Builder, Env};
use macroquad::Window;
use macroquad::prelude::{get_time, next_frame};
use std::env;
use std::path::PathBuf;
use std::process;

mod frame_input;
mod ui_render;
mod window_config;

struct Session {
    config: GameConfig,
    game: Game,
    journal_path: Option<PathBuf>,
}

fn load_session() -> Result<Session, ConfigError> {
    let config = match GameConfig::find_path() {
        Some(path) => {
            log::info!("reading config from {}", path.display());
            GameConfig::load(&path)?
        }
        None => GameConfig::default(),
    };
    let fps_override = env::var("KEYFALL_FPS").ok();
    let level_override = env::var("KEYFALL_LEVEL").ok();
    let config = config.with_overrides(fps_override.as_deref(), level_override.as_deref());

    let level = config.load_level()?;
    let game =
        Game::new(&level).map_err(ConfigError::InvalidLevel)?.with_input_order(config.input_order);
    log::info!(
        "level '{}' ready at {} fps, snapshot {}",
        level.name,
        config.fps,
        format_snapshot_hash(game.snapshot_hash())
    );

    let journal_path = config.journal.clone().or_else(default_journal_path);
    Ok(Session { config, game, journal_path })
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let session = match load_session() {
        Ok(session) => session,
        Err(err) => {
            log::error!("{err}");
            eprintln!("{APP_NAME}: {err}");
            process::exit(1);
        }
    };
    let conf = window_config::build_window_conf(session.game.map(), session.config.tile_size);
    Window::from_config(conf, run(session));
}

async fn run(session: Session) {
    let Session { config, mut game, journal_path } = session;
    let mut app = AppState::new();
    let mut gate = TickGate::new(config.fps, get_time());

    loop {
        let input = frame_input::capture_frame_input();
        app.tick(&mut game, &input.keys_pressed, gate.poll(get_time()));

        if !app.accepted_inputs.is_empty() {
            if let Some(path) = &journal_path {
                if let Err(err) = write_journal_atomic(&app.journal, path) {
                    log::warn!("could not save journal to {}: {err}", path.display());
                }
            }
        }

        ui_render::draw_frame(&game, config.tile_size);
        next_frame().await
    }
}
