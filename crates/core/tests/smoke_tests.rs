use core::{
    FallingState, Game, InputJournal, InputOrder, Level, LockType, LogEvent, Pos, Tile,
    replay_to_end,
};

// Walks round the builtin level, undermines the stone guarding the key,
// then collects it.
const KEY_ROUTE: &str = "RRRDDDLLRULL";

fn play(moves: &str, settle_ticks: u64) -> Game {
    let mut game = Game::new(&Level::builtin()).expect("builtin level loads");
    let journal = InputJournal::from_moves(moves).expect("valid moves");
    core::run_journal(&mut game, &journal, journal.end_tick() + settle_ticks);
    game
}

#[test]
fn builtin_level_is_stable_without_input() {
    let mut game = Game::new(&Level::builtin()).expect("builtin level loads");
    let before = game.map().clone();

    for _ in 0..10 {
        game.update();
    }

    assert_eq!(game.map(), &before);
    assert_eq!(game.player(), Pos { y: 1, x: 1 });
    assert!(game.log().is_empty());
}

#[test]
fn key_route_opens_the_lock() {
    let game = play(KEY_ROUTE, 3);

    assert_eq!(game.player(), Pos { y: 3, x: 1 });
    assert_eq!(game.map().count(|tile| matches!(tile, Tile::Key(_))), 0);
    assert_eq!(game.map().count(Tile::is_lock1), 0);
    assert_eq!(game.map().tile_at(Pos { y: 4, x: 5 }), Tile::Air);
    assert!(
        game.log().contains(&LogEvent::KeyCollected { lock: LockType::One, locks_removed: 1 })
    );
}

#[test]
fn undermined_tiles_drop_and_settle() {
    let game = play(KEY_ROUTE, 3);
    let resting_stone = Tile::Stone(FallingState::Resting);

    assert_eq!(game.map().tile_at(Pos { y: 3, x: 2 }), Tile::Air);
    assert_eq!(game.map().tile_at(Pos { y: 4, x: 2 }), resting_stone);
    assert_eq!(game.map().tile_at(Pos { y: 4, x: 3 }), Tile::Box(FallingState::Resting));
    assert_eq!(game.map().tile_at(Pos { y: 2, x: 1 }), resting_stone);
    assert!(game.log().contains(&LogEvent::TileLanded { pos: Pos { y: 4, x: 2 } }));
}

#[test]
fn stone_follows_the_player_off_the_key_cell() {
    let game = play(&format!("{KEY_ROUTE}R"), 0);

    assert_eq!(game.player(), Pos { y: 3, x: 2 });
    assert_eq!(game.map().tile_at(Pos { y: 2, x: 1 }), Tile::Air);
    assert_eq!(game.map().tile_at(Pos { y: 3, x: 1 }), Tile::Stone(FallingState::Falling));
}

#[test]
fn lock_blocks_until_its_key_is_taken() {
    let game = play("RRRDDDR", 0);

    assert_eq!(game.player(), Pos { y: 4, x: 4 });
    assert_eq!(game.map().tile_at(Pos { y: 4, x: 5 }), Tile::Lock(LockType::One));
}

#[test]
fn replay_reports_the_final_player_position() {
    let journal = InputJournal::from_moves(KEY_ROUTE).expect("valid moves");
    let result =
        replay_to_end(&Level::builtin(), &journal, 20, InputOrder::Fifo).expect("replay runs");

    assert_eq!(result.final_tick, 20);
    assert_eq!(result.player, Pos { y: 3, x: 1 });
    assert_ne!(result.final_snapshot_hash, 0);
}
