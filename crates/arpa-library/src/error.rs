use std::path::PathBuf;

use arpa_core::EntryId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Configuration parse error: {0}")]
    Parse(#[from] config::ConfigError),
}

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("No entry with id {0}")]
    EntryNotFound(EntryId),

    #[error("Entry {0} has no location")]
    NoLocation(EntryId),

    #[error("File is missing: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to start import of {}", .path.display())]
    ImportSpawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
