use std::path::{Path, PathBuf};

use arpa_core::{EntryCollection, EntryId, EntryState, MediaType};
use tracing::{Level, info, instrument, warn};

use crate::error::LibraryError;

/// Pide transiciones de estado a las entradas y recuerda cuál está asociada
/// al reproductor. No decodifica audio: sólo mueve estados.
///
/// La colección se pasa en cada llamada; el reproductor no la posee.
#[derive(Debug, Default)]
pub struct Player {
    current: Option<EntryId>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entrada asociada ahora mismo (sonando, en pausa o parada).
    pub fn current(&self) -> Option<EntryId> {
        self.current
    }

    /// Carátula para el panel de "sonando ahora": sólo canciones sonando o
    /// en pausa. Parada, sin entrada o un vídeo dejan el panel vacío.
    pub fn now_playing_art(&self, collection: &EntryCollection, fallback: &Path) -> Option<PathBuf> {
        let entry = collection.get(self.current?)?;
        let active = matches!(entry.state(), EntryState::Playing | EntryState::Paused);
        (active && entry.media_type() == MediaType::Song).then(|| entry.art_path_or(fallback))
    }

    #[instrument(level = Level::DEBUG, skip(self, collection))]
    pub fn play(&mut self, collection: &mut EntryCollection, id: EntryId) -> Result<(), LibraryError> {
        let entry = collection.get_mut(id).ok_or(LibraryError::EntryNotFound(id))?;

        let location = match entry.location() {
            Some(location) => location.to_owned(),
            None => {
                entry.set_state(EntryState::Missing);
                return Err(LibraryError::NoLocation(id));
            }
        };

        if !Path::new(&location).exists() {
            warn!(id, %location, "entry file is missing");
            entry.set_state(EntryState::Missing);
            if self.current == Some(id) {
                self.current = None;
            }
            return Err(LibraryError::Missing(location.into()));
        }

        entry.set_state(EntryState::Playing);

        if let Some(previous) = self.current.filter(|prev| *prev != id) {
            if let Some(prev) = collection.get_mut(previous) {
                prev.set_state(EntryState::None);
            }
        }

        info!(id, %location, "playing");
        self.current = Some(id);
        Ok(())
    }

    /// `Ok(false)` si no hay nada asociado.
    pub fn pause(&mut self, collection: &mut EntryCollection) -> Result<bool, LibraryError> {
        self.transition(collection, EntryState::Paused)
    }

    pub fn resume(&mut self, collection: &mut EntryCollection) -> Result<bool, LibraryError> {
        self.transition(collection, EntryState::Playing)
    }

    /// La entrada queda parada pero sigue asociada.
    pub fn stop(&mut self, collection: &mut EntryCollection) -> Result<bool, LibraryError> {
        self.transition(collection, EntryState::Stopped)
    }

    /// Reproduce la siguiente entrada por id. `Ok(None)` al final de la colección.
    pub fn next(&mut self, collection: &mut EntryCollection) -> Result<Option<EntryId>, LibraryError> {
        let next = match self.current {
            Some(current) => collection.iter().map(|e| e.id()).find(|id| *id > current),
            None => collection.iter().map(|e| e.id()).next(),
        };
        self.play_if_some(collection, next)
    }

    pub fn previous(
        &mut self,
        collection: &mut EntryCollection,
    ) -> Result<Option<EntryId>, LibraryError> {
        let previous = match self.current {
            Some(current) => collection
                .iter()
                .map(|e| e.id())
                .take_while(|id| *id < current)
                .last(),
            None => None,
        };
        self.play_if_some(collection, previous)
    }

    fn play_if_some(
        &mut self,
        collection: &mut EntryCollection,
        id: Option<EntryId>,
    ) -> Result<Option<EntryId>, LibraryError> {
        match id {
            Some(id) => self.play(collection, id).map(|_| Some(id)),
            None => Ok(None),
        }
    }

    fn transition(
        &mut self,
        collection: &mut EntryCollection,
        state: EntryState,
    ) -> Result<bool, LibraryError> {
        let Some(id) = self.current else {
            return Ok(false);
        };

        match collection.get_mut(id) {
            Some(entry) => {
                entry.set_state(state);
                Ok(true)
            }
            None => {
                // la entrada se descartó mientras estaba asociada
                self.current = None;
                Ok(false)
            }
        }
    }
}
