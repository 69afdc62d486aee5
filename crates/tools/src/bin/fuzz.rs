use anyhow::{Context, Result, ensure};
use clap::Parser;
use env_logger::{Builder, Env};
use game_core::{Direction, Game, Level, Tile};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    ticks: u32,
    /// JSON level file; the builtin level when omitted
    #[arg(short, long)]
    level: Option<PathBuf>,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn count(game: &Game, predicate: impl Fn(Tile) -> bool) -> usize {
    game.map().count(predicate)
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let level = match &args.level {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read level file: {}", path.display()))?;
            Level::from_json(&json).with_context(|| "Failed to deserialize level JSON")?
        }
        None => Level::builtin(),
    };

    println!("Starting Fuzz harness on seed {} for {} ticks...", args.seed, args.ticks);
    let mut game = Game::new(&level).context("Level is not playable")?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let loose = count(&game, Tile::can_fall);
    let mut keys = count(&game, |tile| matches!(tile, Tile::Key(_)));
    let mut locks = count(&game, |tile| matches!(tile, Tile::Lock(_)));

    for _ in 0..args.ticks {
        game.queue_input(choose(&mut rng, &Direction::ALL));
        game.update();
        let tick = game.current_tick();

        ensure!(
            game.map().player_cells() == vec![game.player()],
            "Invariant failed: player cell mismatch at tick {tick}"
        );
        ensure!(
            count(&game, Tile::can_fall) == loose,
            "Invariant failed: loose tile count changed at tick {tick}"
        );
        let now_keys = count(&game, |tile| matches!(tile, Tile::Key(_)));
        let now_locks = count(&game, |tile| matches!(tile, Tile::Lock(_)));
        ensure!(
            now_keys <= keys && now_locks <= locks,
            "Invariant failed: keys or locks reappeared at tick {tick}"
        );
        keys = now_keys;
        locks = now_locks;
    }

    log::info!("{} events logged", game.log().len());
    println!("Fuzzing completed successfully.");
    println!("Snapshot Hash: 0x{:016x}", game.snapshot_hash());
    Ok(())
}
