use anyhow::{Context, Result, anyhow};
use clap::Parser;
use env_logger::{Builder, Env};
use game_core::{Game, InputJournal, InputOrder, Level, LogEvent, run_journal};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON level file; the builtin level when omitted
    #[arg(short, long)]
    level: Option<PathBuf>,
    /// One move letter per tick, e.g. `RRDL`
    #[arg(short, long, conflicts_with = "journal")]
    moves: Option<String>,
    /// Path to a recorded journal JSON file to replay
    #[arg(short, long)]
    journal: Option<PathBuf>,
    /// Minimum number of ticks to run, so tiles can settle after the last move
    #[arg(short, long, default_value_t = 0)]
    ticks: u64,
    /// Drain each tick's inputs newest first
    #[arg(long)]
    lifo: bool,
}

fn load_level(path: Option<&Path>) -> Result<Level> {
    let Some(path) = path else {
        return Ok(Level::builtin());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read level file: {}", path.display()))?;
    Level::from_json(&json).with_context(|| "Failed to deserialize level JSON")
}

fn load_journal(args: &Args) -> Result<InputJournal> {
    if let Some(path) = &args.journal {
        let journal_data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read journal file: {}", path.display()))?;
        return serde_json::from_str(&journal_data)
            .with_context(|| "Failed to deserialize journal JSON");
    }
    let moves = args.moves.as_deref().unwrap_or_default();
    InputJournal::from_moves(moves).map_err(|c| anyhow!("Unknown move letter {c:?}"))
}

fn event_counts(log: &[LogEvent]) -> [(&'static str, usize); 5] {
    let mut counts = [("moved", 0), ("pushed", 0), ("keys", 0), ("blocked", 0), ("landed", 0)];
    for event in log {
        let slot = match event {
            LogEvent::PlayerMoved { .. } => 0,
            LogEvent::TilePushed { .. } => 1,
            LogEvent::KeyCollected { .. } => 2,
            LogEvent::MoveBlocked { .. } => 3,
            LogEvent::TileLanded { .. } => 4,
        };
        counts[slot].1 += 1;
    }
    counts
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let level = load_level(args.level.as_deref())?;
    let journal = load_journal(&args)?;
    let order = if args.lifo { InputOrder::Lifo } else { InputOrder::Fifo };
    log::info!("replaying {} inputs on level '{}'", journal.inputs.len(), level.name);

    let mut game = Game::new(&level).context("Level is not playable")?.with_input_order(order);
    run_journal(&mut game, &journal, args.ticks);

    println!("{}", game.map().render_text());
    println!("Replay complete.");
    println!("Final Tick: {}", game.current_tick());
    println!("Player: ({}, {})", game.player().y, game.player().x);
    println!("Snapshot Hash: 0x{:016x}", game.snapshot_hash());
    for (name, count) in event_counts(game.log()) {
        println!("Events {name}: {count}");
    }

    Ok(())
}
