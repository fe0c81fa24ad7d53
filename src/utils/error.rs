use glam::IVec3;
use std::path::PathBuf;
use thiserror::Error;

use crate::world::block::MaterialKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Couldn't determine a config directory")]
    NoConfigDir,

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("No block targeted")]
    NoTarget,

    #[error("{0} cannot be placed")]
    NotPlaceable(MaterialKind),

    #[error("Cell {0:?} is outside the world column")]
    OutOfWorld(IVec3),

    #[error("Cell {0:?} is occupied by the player")]
    Obstructed(IVec3),
}
