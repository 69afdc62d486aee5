use core::{Direction, Game, Level, Pos, Tile};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn loose_tiles(game: &Game) -> usize {
    game.map().count(Tile::can_fall)
}

fn keys(game: &Game) -> usize {
    game.map().count(|tile| matches!(tile, Tile::Key(_)))
}

fn locks(game: &Game) -> usize {
    game.map().count(|tile| matches!(tile, Tile::Lock(_)))
}

fn border_is_intact(game: &Game) -> bool {
    let map = game.map();
    map.cells().all(|(pos, tile)| {
        let on_border = pos.y == 0
            || pos.x == 0
            || pos.y as usize == map.height() - 1
            || pos.x as usize == map.width() - 1;
        !on_border || tile == Tile::Unbreakable
    })
}

/// Walled room with random interior codes and one player cell.
fn random_level(rng: &mut ChaCha8Rng) -> Level {
    const INTERIOR_CODES: [u8; 14] = [0, 0, 0, 1, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11];
    let width = 4 + (rng.next_u64() % 8) as usize;
    let height = 4 + (rng.next_u64() % 6) as usize;
    let mut rows = vec![vec![2; width]; height];
    for row in rows.iter_mut().take(height - 1).skip(1) {
        for cell in row.iter_mut().take(width - 1).skip(1) {
            *cell = choose(rng, &INTERIOR_CODES);
        }
    }
    let y = 1 + (rng.next_u64() as usize % (height - 2));
    let x = 1 + (rng.next_u64() as usize % (width - 2));
    rows[y][x] = 3;
    Level::new("fuzz", rows)
}

fn run_fuzz_simulation(level: &Level, move_seed: u64, max_ticks: u32) -> Result<(), String> {
    let mut game = Game::new(level).map_err(|err| err.to_string())?;
    let mut rng = ChaCha8Rng::seed_from_u64(move_seed);
    let loose = loose_tiles(&game);
    let mut key_count = keys(&game);
    let mut lock_count = locks(&game);

    for _ in 0..max_ticks {
        // Zero to two inputs per tick, so some ticks are pure gravity.
        for _ in 0..rng.next_u64() % 3 {
            game.queue_input(choose(&mut rng, &Direction::ALL));
        }
        game.update();

        if game.map().player_cells() != vec![game.player()] {
            return Err(format!(
                "Invariant failed: player cell mismatch at tick {} on seed {}",
                game.current_tick(),
                move_seed
            ));
        }
        if loose_tiles(&game) != loose {
            return Err(format!("Invariant failed: loose tile count changed on seed {move_seed}"));
        }
        if keys(&game) > key_count || locks(&game) > lock_count {
            return Err(format!("Invariant failed: keys or locks reappeared on seed {move_seed}"));
        }
        key_count = keys(&game);
        lock_count = locks(&game);
        if !border_is_intact(&game) {
            return Err(format!("Invariant failed: border breached on seed {move_seed}"));
        }
        let Pos { y, x } = game.player();
        if game.map().tile_at(Pos { y: y + 1, x }).is_falling() {
            return Err(format!("Invariant failed: falling tile under player on seed {move_seed}"));
        }
    }

    Ok(())
}

#[test]
fn test_fuzz_game_simulation() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(20));

    runner
        .run(&any::<u64>(), |move_seed| {
            run_fuzz_simulation(&Level::builtin(), move_seed, 400).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("semantic fuzz simulation should preserve invariants");
}

#[test]
fn test_fuzz_random_levels() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(20));
    let seeds = (any::<u64>(), any::<u64>());

    runner
        .run(&seeds, |(level_seed, move_seed)| {
            let level = random_level(&mut ChaCha8Rng::seed_from_u64(level_seed));
            run_fuzz_simulation(&level, move_seed, 200).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("random levels should preserve invariants");
}
