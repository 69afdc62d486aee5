//! Player-facing settings from `keyfall.toml`, with environment overrides.

use core::{DEFAULT_TILE_SIZE, InputOrder, Level, LevelError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use toml::de::Error as TomlError;

use crate::APP_NAME;

pub const CONFIG_FILE_NAME: &str = "keyfall.toml";
pub const DEFAULT_FPS: u32 = 30;
pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 240;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tile_size: f32,
    pub fps: u32,
    pub input_order: InputOrder,
    /// JSON level file; the builtin level is used when unset.
    pub level: Option<PathBuf>,
    /// Where the session's inputs are written after every accepted move.
    pub journal: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            fps: DEFAULT_FPS,
            input_order: InputOrder::Fifo,
            level: None,
            journal: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: TomlError },
    LevelFile { path: PathBuf, source: serde_json::Error },
    InvalidLevel(LevelError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "invalid config in {}: {source}", path.display())
            }
            Self::LevelFile { path, source } => {
                write!(f, "invalid level file {}: {source}", path.display())
            }
            Self::InvalidLevel(err) => write!(f, "level cannot be played: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::LevelFile { source, .. } => Some(source),
            Self::InvalidLevel(err) => Some(err),
        }
    }
}

impl GameConfig {
    /// `keyfall.toml` in the per-user config directory.
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME)
            .map(|proj_dirs| proj_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// First existing config file: the working directory wins over the
    /// per-user directory.
    pub fn find_path() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            return Some(local);
        }
        Self::get_default_path().filter(|path| path.is_file())
    }

    /// Read `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ConfigError::Io { path: path.to_path_buf(), source }),
        };
        let mut config: Self = toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        config.fps = clamp_fps(config.fps);
        Ok(config)
    }

    pub fn with_overrides(
        mut self,
        fps_override: Option<&str>,
        level_override: Option<&str>,
    ) -> Self {
        self.fps = resolve_fps(self.fps, fps_override);
        self.level = resolve_level_path(self.level, level_override);
        self
    }

    /// The configured level file, or the builtin layout.
    pub fn load_level(&self) -> Result<Level, ConfigError> {
        let Some(path) = &self.level else {
            return Ok(Level::builtin());
        };
        let json = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.clone(), source })?;
        Level::from_json(&json)
            .map_err(|source| ConfigError::LevelFile { path: path.clone(), source })
    }
}

pub fn clamp_fps(fps: u32) -> u32 {
    fps.clamp(MIN_FPS, MAX_FPS)
}

/// A parseable override wins; anything else falls back to the file value.
pub fn resolve_fps(file_fps: u32, fps_override: Option<&str>) -> u32 {
    let override_fps = fps_override.and_then(|raw| raw.trim().parse::<u32>().ok());
    clamp_fps(override_fps.unwrap_or(file_fps))
}

pub fn resolve_level_path(
    file_level: Option<PathBuf>,
    level_override: Option<&str>,
) -> Option<PathBuf> {
    match level_override.map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(PathBuf::from(raw)),
        _ => file_level,
    }
}
