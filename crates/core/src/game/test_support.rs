//! Shared fixtures for the `game` test suite.

use super::*;
use crate::falling::FallingState;
use crate::tile::Tile;

pub(super) const RESTING_BOX: Tile = Tile::Box(FallingState::Resting);
pub(super) const RESTING_STONE: Tile = Tile::Stone(FallingState::Resting);

/// Open 7x5 room with the player at (2, 2) standing on the floor row 3 made solid.
pub(super) fn floor_room_fixture() -> (Game, Pos) {
    let mut map = Map::new(7, 5);
    for x in 1..6 {
        map.set_tile(Pos { y: 3, x }, Tile::Unbreakable);
    }
    let player = Pos { y: 2, x: 2 };
    map.set_tile(player, Tile::Player);
    (Game::from_map(map).expect("fixture has one player"), player)
}

pub(super) fn game_from_rows(rows: &[&[u8]]) -> Game {
    let rows: Vec<Vec<u8>> = rows.iter().map(|row| row.to_vec()).collect();
    Game::new(&Level::new("fixture", rows)).expect("fixture level is valid")
}

pub(super) fn place(game: &mut Game, pos: Pos, tile: Tile) {
    game.map.set_tile(pos, tile);
}
