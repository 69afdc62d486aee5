//! On-disk copy of the inputs recorded during a play session.

use core::InputJournal;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

pub fn default_journal_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
        let mut path = proj_dirs.data_dir().to_path_buf();
        path.push("last_session_journal.json");
        path
    })
}

pub fn write_journal_atomic(journal: &InputJournal, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(journal).map_err(io::Error::other)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn load_journal(path: &Path) -> io::Result<InputJournal> {
    let content = fs::read_to_string(path)?;
    let journal: InputJournal = serde_json::from_str(&content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(journal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::Direction;
    use tempfile::tempdir;

    #[test]
    fn journal_atomic_write_and_load() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("sessions").join("journal.json");
        let mut journal = InputJournal::new();
        journal.append(0, Direction::Right);
        journal.append(3, Direction::Down);

        write_journal_atomic(&journal, &path).expect("write");
        let loaded = load_journal(&path).expect("load");
        assert_eq!(journal, loaded);

        let tmp_path = path.with_extension("json.tmp");
        assert!(!tmp_path.exists());
    }

    #[test]
    fn corrupt_journal_is_invalid_data() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("journal.json");
        fs::write(&path, "{ not json").expect("write");

        let err = load_journal(&path).expect_err("corrupt file must not load");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
