//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use super::*;
use xxhash_rust::xxh3::Xxh3;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.tick);
        hasher.write_i32(self.player.y);
        hasher.write_i32(self.player.x);
        hasher.write_u32(self.map.width() as u32);
        hasher.write_u32(self.map.height() as u32);
        for (_, tile) in self.map.cells() {
            hasher.write_u8(tile.raw().code());
        }
        hasher.finish()
    }
}
