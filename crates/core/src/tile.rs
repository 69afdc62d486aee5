//! Grid cell variants and the raw level encoding they are loaded from.

use crate::falling::FallingState;
use crate::lock::LockType;
use crate::types::Rgb;

const FLUX_COLOR: Rgb = Rgb::from_hex(0xccffcc);
const UNBREAKABLE_COLOR: Rgb = Rgb::from_hex(0x999999);
const STONE_COLOR: Rgb = Rgb::from_hex(0x0000cc);
const BOX_COLOR: Rgb = Rgb::from_hex(0x8b4513);
pub const PLAYER_COLOR: Rgb = Rgb::from_hex(0xff0000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Air,
    /// Soft ground the player can walk into.
    Flux,
    Unbreakable,
    /// Marks the cell the player currently occupies.
    Player,
    Stone(FallingState),
    Box(FallingState),
    Key(LockType),
    Lock(LockType),
}

impl Tile {
    pub fn is_air(self) -> bool {
        matches!(self, Tile::Air)
    }

    pub fn is_lock1(self) -> bool {
        matches!(self, Tile::Lock(lock) if lock.is_lock1())
    }

    pub fn is_lock2(self) -> bool {
        matches!(self, Tile::Lock(lock) if lock.is_lock2())
    }

    pub fn is_stony(self) -> bool {
        matches!(self, Tile::Stone(_))
    }

    pub fn is_boxy(self) -> bool {
        matches!(self, Tile::Box(_))
    }

    /// Always false: whether a loose tile can be pushed depends on its
    /// falling state, not on the variant.
    pub fn is_pushable(self) -> bool {
        false
    }

    /// Tiles the player can step into directly.
    pub fn is_edible(self) -> bool {
        matches!(self, Tile::Air | Tile::Flux)
    }

    pub fn can_fall(self) -> bool {
        matches!(self, Tile::Stone(_) | Tile::Box(_))
    }

    pub fn is_falling(self) -> bool {
        self.falling_state().is_some_and(FallingState::is_falling)
    }

    pub fn falling_state(self) -> Option<FallingState> {
        match self {
            Tile::Stone(state) | Tile::Box(state) => Some(state),
            _ => None,
        }
    }

    /// Same tile with its gravity state replaced. Static tiles are returned unchanged.
    pub fn with_falling_state(self, state: FallingState) -> Tile {
        match self {
            Tile::Stone(_) => Tile::Stone(state),
            Tile::Box(_) => Tile::Box(state),
            other => other,
        }
    }

    pub fn rest(&mut self) {
        *self = self.with_falling_state(FallingState::Resting);
    }

    pub fn start_falling(&mut self) {
        *self = self.with_falling_state(FallingState::Falling);
    }

    /// State a loose tile sitting directly on top of this one should adopt.
    pub fn block_on_top_state(self) -> FallingState {
        match self {
            Tile::Air => FallingState::Falling,
            _ => FallingState::Resting,
        }
    }

    /// Fill color, or `None` for tiles that paint nothing.
    pub fn color(self) -> Option<Rgb> {
        match self {
            Tile::Air | Tile::Player => None,
            Tile::Flux => Some(FLUX_COLOR),
            Tile::Unbreakable => Some(UNBREAKABLE_COLOR),
            Tile::Stone(_) => Some(STONE_COLOR),
            Tile::Box(_) => Some(BOX_COLOR),
            Tile::Key(lock) => Some(lock.key_color()),
            Tile::Lock(lock) => Some(lock.color()),
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Tile::Air => ' ',
            Tile::Flux => ':',
            Tile::Unbreakable => '#',
            Tile::Player => '@',
            Tile::Stone(FallingState::Resting) => 'O',
            Tile::Stone(FallingState::Falling) => 'o',
            Tile::Box(FallingState::Resting) => 'B',
            Tile::Box(FallingState::Falling) => 'b',
            Tile::Key(LockType::One) => '1',
            Tile::Key(LockType::Two) => '2',
            Tile::Lock(LockType::One) => 'I',
            Tile::Lock(LockType::Two) => 'J',
        }
    }

    pub fn raw(self) -> RawTile {
        match self {
            Tile::Air => RawTile::Air,
            Tile::Flux => RawTile::Flux,
            Tile::Unbreakable => RawTile::Unbreakable,
            Tile::Player => RawTile::Player,
            Tile::Stone(FallingState::Resting) => RawTile::Stone,
            Tile::Stone(FallingState::Falling) => RawTile::FallingStone,
            Tile::Box(FallingState::Resting) => RawTile::Box,
            Tile::Box(FallingState::Falling) => RawTile::FallingBox,
            Tile::Key(LockType::One) => RawTile::Key1,
            Tile::Lock(LockType::One) => RawTile::Lock1,
            Tile::Key(LockType::Two) => RawTile::Key2,
            Tile::Lock(LockType::Two) => RawTile::Lock2,
        }
    }
}

/// Numeric level encoding, one code per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTile {
    Air = 0,
    Flux = 1,
    Unbreakable = 2,
    Player = 3,
    Stone = 4,
    FallingStone = 5,
    Box = 6,
    FallingBox = 7,
    Key1 = 8,
    Lock1 = 9,
    Key2 = 10,
    Lock2 = 11,
}

impl RawTile {
    pub fn from_code(code: u8) -> Option<RawTile> {
        let raw = match code {
            0 => RawTile::Air,
            1 => RawTile::Flux,
            2 => RawTile::Unbreakable,
            3 => RawTile::Player,
            4 => RawTile::Stone,
            5 => RawTile::FallingStone,
            6 => RawTile::Box,
            7 => RawTile::FallingBox,
            8 => RawTile::Key1,
            9 => RawTile::Lock1,
            10 => RawTile::Key2,
            11 => RawTile::Lock2,
            _ => return None,
        };
        Some(raw)
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<RawTile> for Tile {
    fn from(raw: RawTile) -> Tile {
        match raw {
            RawTile::Air => Tile::Air,
            RawTile::Flux => Tile::Flux,
            RawTile::Unbreakable => Tile::Unbreakable,
            RawTile::Player => Tile::Player,
            RawTile::Stone => Tile::Stone(FallingState::Resting),
            RawTile::FallingStone => Tile::Stone(FallingState::Falling),
            RawTile::Box => Tile::Box(FallingState::Resting),
            RawTile::FallingBox => Tile::Box(FallingState::Falling),
            RawTile::Key1 => Tile::Key(LockType::One),
            RawTile::Lock1 => Tile::Lock(LockType::One),
            RawTile::Key2 => Tile::Key(LockType::Two),
            RawTile::Lock2 => Tile::Lock(LockType::Two),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_tile() -> Vec<Tile> {
        (0..=11).filter_map(RawTile::from_code).map(Tile::from).collect()
    }

    #[test]
    fn every_code_maps_back_to_itself() {
        for code in 0..=11 {
            let raw = RawTile::from_code(code).expect("codes 0..=11 are valid");
            assert_eq!(Tile::from(raw).raw().code(), code);
        }
        assert_eq!(RawTile::from_code(12), None);
        assert_eq!(RawTile::from_code(255), None);
    }

    #[test]
    fn is_air_holds_only_for_air() {
        for tile in every_tile() {
            assert_eq!(tile.is_air(), tile == Tile::Air, "{tile:?}");
        }
    }

    #[test]
    fn stony_boxy_and_air_are_mutually_exclusive() {
        for tile in every_tile() {
            let flags = [tile.is_stony(), tile.is_boxy(), tile.is_air()];
            assert!(flags.iter().filter(|flag| **flag).count() <= 1, "{tile:?}");
            if tile.is_lock1() || tile.is_lock2() {
                assert!(matches!(tile, Tile::Lock(_)), "{tile:?}");
                assert!(!(tile.is_lock1() && tile.is_lock2()));
            }
        }
    }

    #[test]
    fn only_air_lets_a_tile_on_top_fall() {
        for tile in every_tile() {
            let expected =
                if tile.is_air() { FallingState::Falling } else { FallingState::Resting };
            assert_eq!(tile.block_on_top_state(), expected, "{tile:?}");
        }
    }

    #[test]
    fn rest_and_start_falling_only_touch_loose_tiles() {
        let mut stone = Tile::Stone(FallingState::Falling);
        stone.rest();
        assert_eq!(stone, Tile::Stone(FallingState::Resting));
        stone.start_falling();
        assert!(stone.is_falling());

        let mut wall = Tile::Unbreakable;
        wall.start_falling();
        assert_eq!(wall, Tile::Unbreakable);
        assert!(!wall.can_fall());
    }

    #[test]
    fn edible_tiles_are_air_and_flux() {
        let edible: Vec<_> = every_tile().into_iter().filter(|tile| tile.is_edible()).collect();
        assert_eq!(edible, vec![Tile::Air, Tile::Flux]);
        assert!(every_tile().iter().all(|tile| !tile.is_pushable()));
    }

    #[test]
    fn air_and_player_marker_paint_nothing() {
        assert_eq!(Tile::Air.color(), None);
        assert_eq!(Tile::Player.color(), None);
        assert_eq!(Tile::Box(FallingState::Resting).color(), Some(BOX_COLOR));
    }
}
