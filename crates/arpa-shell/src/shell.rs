use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use arpa_core::{EntryCollection, EntryId};
use arpa_library::{ImportSummary, Importer, LibraryConfig, Player};
use tracing::{Level, info, instrument};

use crate::sidebar::Sidebar;

/// Vistas por defecto de la barra lateral: (ruta, página)
const DEFAULT_SIDEBAR: &[(&str, Option<usize>)] = &[
    ("Library", None),
    ("Library/Music", Some(0)),
    ("Library/Music Videos", Some(1)),
    ("Devices", None),
];

/// Dueño de la colección, el reproductor y la barra lateral.
///
/// Se crea una vez en `main` y se pasa explícitamente a quien lo necesite.
#[derive(Debug)]
pub struct Shell {
    config: LibraryConfig,
    importer: Importer,
    collection: EntryCollection,
    player: Player,
    sidebar: Sidebar,
}

impl Shell {
    pub fn new(config: LibraryConfig) -> Self {
        let mut sidebar = Sidebar::new();
        for (name, page) in DEFAULT_SIDEBAR {
            sidebar.add(name, None, *page);
        }

        Shell {
            importer: Importer::new(config.clone()),
            config,
            collection: EntryCollection::new(),
            player: Player::new(),
            sidebar,
        }
    }

    /// Carga la configuración de `path`, o la de por defecto si no se indica.
    pub fn from_config_file(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => LibraryConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => LibraryConfig::default(),
        };
        Ok(Self::new(config))
    }

    /// Importa un fichero o carpeta y espera a que termine.
    #[instrument(level = Level::DEBUG, skip(self))]
    pub fn import_path(&mut self, path: &Path) -> Result<ImportSummary> {
        let handle = self.importer.spawn(path)?;
        let summary = handle.drain_into(&mut self.collection);
        info!(added = summary.added, total = self.collection.len(), "library updated");
        Ok(summary)
    }

    pub fn play(&mut self, id: EntryId) -> Result<()> {
        self.player.play(&mut self.collection, id)?;
        Ok(())
    }

    pub fn art_path(&self, id: EntryId) -> Option<PathBuf> {
        let fallback = self.config.fallback_artwork();
        self.collection.get(id).map(|e| e.art_path_or(&fallback))
    }

    /// Carátula del panel "sonando ahora", si la entrada actual es una canción activa.
    pub fn now_playing_art(&self) -> Option<PathBuf> {
        self.player
            .now_playing_art(&self.collection, &self.config.fallback_artwork())
    }

    pub fn collection(&self) -> &EntryCollection {
        &self.collection
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arpa_core::EntryState;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_sidebar_is_registered() {
        let shell = Shell::new(LibraryConfig::default());
        assert_eq!(shell.sidebar().walk().len(), 4);
        assert_eq!(shell.sidebar().page_for("Library/Music Videos"), Some(1));
    }

    #[test]
    fn import_then_play() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("track.mp3"), b"").unwrap();
        fs::write(tmp.path().join("front.png"), b"").unwrap();

        let mut shell = Shell::new(LibraryConfig::default());
        let summary = shell.import_path(tmp.path()).unwrap();
        assert_eq!(summary.added, 1);

        let id = shell
            .collection()
            .find_by_location(tmp.path().join("track.mp3"))
            .unwrap();
        assert_eq!(shell.art_path(id), Some(tmp.path().join("front.png")));

        assert_eq!(shell.now_playing_art(), None);

        shell.play(id).unwrap();
        assert_eq!(shell.player().current(), Some(id));
        assert_eq!(shell.collection().get(id).unwrap().state(), EntryState::Playing);
        assert_eq!(shell.now_playing_art(), Some(tmp.path().join("front.png")));
    }

    #[test]
    fn bad_config_file_is_reported() {
        let tmp = tempdir().unwrap();
        let err = Shell::from_config_file(Some(tmp.path().join("missing.toml").as_path())).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }
}
