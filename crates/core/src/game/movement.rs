//! Player movement. The tile being entered decides what happens; the player
//! never checks legality on its own.

use super::*;
use crate::tile::Tile;

impl Game {
    pub fn move_up(&mut self) -> MoveOutcome {
        self.move_player(Direction::Up)
    }

    pub fn move_down(&mut self) -> MoveOutcome {
        self.move_player(Direction::Down)
    }

    pub fn move_left(&mut self) -> MoveOutcome {
        self.move_player(Direction::Left)
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        self.move_player(Direction::Right)
    }

    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        let target = self.player.step(direction);
        let tile = self.map.tile_at(target);

        let outcome = match tile {
            Tile::Air | Tile::Flux => self.relocate_player(target),
            Tile::Key(lock) => {
                let locks_removed = self.map.remove_locks(lock);
                self.relocate_player(target);
                log::debug!("key {lock:?} collected, {locks_removed} lock(s) removed");
                self.log.push(LogEvent::KeyCollected { lock, locks_removed });
                MoveOutcome::CollectedKey { lock, locks_removed }
            }
            Tile::Stone(_) | Tile::Box(_) if direction.is_horizontal() => {
                let (_, dx) = direction.delta();
                self.move_horizontal(tile, dx)
            }
            Tile::Stone(_) | Tile::Box(_) | Tile::Unbreakable | Tile::Player | Tile::Lock(_) => {
                MoveOutcome::Blocked
            }
        };

        if outcome == MoveOutcome::Blocked {
            self.log.push(LogEvent::MoveBlocked { direction, target: tile });
        }
        outcome
    }

    /// Sideways move into a loose tile: a resting tile is pushed, a falling
    /// one blocks.
    pub fn move_horizontal(&mut self, tile: Tile, dx: i32) -> MoveOutcome {
        match tile.falling_state() {
            Some(state) if state.allows_push() => self.push_horizontal(tile, dx),
            _ => MoveOutcome::Blocked,
        }
    }

    /// A push needs Air two columns over, and something solid under that
    /// cell so the pushed tile does not hang over a pit.
    pub fn can_push_horizontal(&self, dx: i32) -> bool {
        let destination = Pos { y: self.player.y, x: self.player.x + dx + dx };
        self.map.is_air(destination) && !self.map.is_air(destination.below())
    }

    /// Shove `tile` from the adjacent column to the next one over, with the
    /// player following into the freed cell.
    pub fn push_horizontal(&mut self, tile: Tile, dx: i32) -> MoveOutcome {
        if !self.can_push_horizontal(dx) {
            return MoveOutcome::Blocked;
        }
        let from = Pos { y: self.player.y, x: self.player.x + dx };
        let to = Pos { y: self.player.y, x: self.player.x + dx + dx };
        self.map.set_tile(to, tile);
        self.relocate_player(from);
        log::trace!("pushed {tile:?} to ({}, {})", to.y, to.x);
        self.log.push(LogEvent::TilePushed { tile, from, to });
        MoveOutcome::Pushed { tile, to }
    }

    fn relocate_player(&mut self, to: Pos) -> MoveOutcome {
        let from = self.player;
        self.map.move_player(from, to);
        self.player = to;
        self.log.push(LogEvent::PlayerMoved { from, to });
        MoveOutcome::Moved { to }
    }
}
