pub mod app_loop;
pub mod config;
pub mod journal_file;
pub mod pacing;

pub const APP_NAME: &str = "Keyfall";

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}
