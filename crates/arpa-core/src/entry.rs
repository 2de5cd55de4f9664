use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use tracing::trace;

use crate::{
    art,
    media::{EntryState, MediaType, StateGlyph},
    signal::{StateObservers, SubscriptionId},
    tags::{self, parse_int_lenient},
};

pub type EntryId = u64;

/// Un elemento de audio o vídeo.
///
/// Los tags son texto libre; los enteros se guardan en decimal. El id y el
/// tipo de medio sólo los cambia la [`EntryCollection`](crate::EntryCollection)
/// que posee la entrada.
#[derive(Debug)]
pub struct Entry {
    id: EntryId,
    media_type: MediaType,
    state: EntryState,
    tags: HashMap<String, String>,
    observers: StateObservers,
}

impl Entry {
    pub fn new(id: EntryId) -> Self {
        Entry {
            id,
            media_type: MediaType::Unknown,
            state: EntryState::None,
            tags: HashMap::new(),
            observers: StateObservers::new(),
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub(crate) fn set_media_type(&mut self, media_type: MediaType) {
        self.media_type = media_type;
    }

    /// Inserta o sobreescribe `tag`. `None` se guarda como cadena vacía.
    pub fn set_tag_str(&mut self, tag: &str, value: Option<&str>) {
        self.tags
            .insert(tag.to_owned(), value.unwrap_or_default().to_owned());
    }

    pub fn set_tag_int(&mut self, tag: &str, value: i32) {
        self.tags.insert(tag.to_owned(), value.to_string());
    }

    /// `None` si el tag nunca se asignó; un tag vacío devuelve `Some("")`.
    pub fn tag_str(&self, tag: &str) -> Option<&str> {
        self.tags.get(tag).map(String::as_str)
    }

    /// 0 si el tag no existe o no empieza por un número.
    pub fn tag_int(&self, tag: &str) -> i32 {
        self.tag_str(tag).map_or(0, parse_int_lenient)
    }

    pub fn location(&self) -> Option<&str> {
        self.tag_str(tags::LOCATION)
    }

    /// Las rutas no UTF-8 se guardan con pérdida (`U+FFFD`), así que dos
    /// nombres que sólo difieren en bytes inválidos acaban siendo la misma.
    pub fn set_location(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_string_lossy();
        self.set_tag_str(tags::LOCATION, Some(&*path));
    }

    pub fn state(&self) -> EntryState {
        self.state
    }

    /// Cambia el estado y avisa a todos los observadores, aunque el estado no cambie.
    pub fn set_state(&mut self, state: EntryState) {
        trace!(id = self.id, from = ?self.state, to = ?state, "entry state changed");
        self.state = state;
        self.observers.emit(state);
    }

    pub fn state_glyph(&self) -> Option<StateGlyph> {
        self.state.glyph()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(EntryState) + Send + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Carátula de la entrada, o la imagen de "sin carátula" de la instalación.
    pub fn art_path(&self) -> PathBuf {
        self.art_path_or(&arpa_paths::missing_artwork())
    }

    pub fn art_path_or(&self, fallback: &Path) -> PathBuf {
        match self.location() {
            Some(location) => art::art_for_location(Path::new(location), fallback),
            None => fallback.to_path_buf(),
        }
    }

    /// Copia de todos los tags, ordenada por nombre.
    pub fn tags(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<_> = self
            .tags
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}
