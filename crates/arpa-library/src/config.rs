use std::{
    collections::HashMap,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use arpa_core::MediaType;
use config::{Config, File, FileFormat};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Extensiones conocidas con su tipo de medio
pub fn default_extensions() -> HashMap<String, MediaType> {
    let songs = MediaType::SONG_EXTENSIONS
        .iter()
        .map(|ext| (ext.to_string(), MediaType::Song));
    let videos = MediaType::VIDEO_EXTENSIONS
        .iter()
        .map(|ext| (ext.to_string(), MediaType::Video));

    songs.chain(videos).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option), default)]
#[serde(default)]
pub struct LibraryConfig {
    /// Extensión (en minúsculas, sin punto) → tipo de medio. Vacío = importar todo.
    pub extensions: HashMap<String, MediaType>,
    pub follow_symlinks: bool,
    pub max_depth: Option<usize>,
    /// Sustituye la imagen de "sin carátula" de la instalación
    pub missing_artwork: Option<PathBuf>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        LibraryConfig {
            extensions: default_extensions(),
            follow_symlinks: false,
            max_depth: None,
            missing_artwork: None,
        }
    }
}

impl LibraryConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_string_lossy().into_owned();
        let cfg = Config::builder()
            .add_source(File::new(&path, FileFormat::Toml))
            .build()?;
        let mut lc = cfg.try_deserialize::<LibraryConfig>()?;
        // `media_type_for` compara en minúsculas
        lc.extensions = lc
            .extensions
            .into_iter()
            .map(|(ext, ty)| (ext.to_ascii_lowercase(), ty))
            .collect();
        Ok(lc)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Tipo de medio con el que se importa `path`, o `None` si se ignora.
    pub fn media_type_for(&self, path: &Path) -> Option<MediaType> {
        let ext = path.extension().unwrap_or(OsStr::new(""));

        if self.extensions.is_empty() {
            return Some(MediaType::from_extension(ext));
        }

        let ext = ext.to_str()?.to_ascii_lowercase();
        self.extensions.get(&ext).copied()
    }

    pub fn fallback_artwork(&self) -> PathBuf {
        self.missing_artwork
            .clone()
            .unwrap_or_else(arpa_paths::missing_artwork)
    }
}
