use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
};

use tracing::debug;

use crate::{
    entry::{Entry, EntryId},
    media::MediaType,
};

/// Dueño de todas las entradas: reparte ids y serializa las mutaciones.
///
/// Los ids empiezan en 1 y nunca se reutilizan, aunque se borre la entrada.
///
/// Las búsquedas por ruta usan un índice que se mantiene en `create`,
/// `insert`, `set_location` y `remove`. Si se cambia la ubicación a mano
/// vía `get_mut`, la entrada deja de encontrarse por ruta hasta que se
/// reasigne con [`EntryCollection::set_location`].
#[derive(Debug)]
pub struct EntryCollection {
    entries: BTreeMap<EntryId, Entry>,
    by_location: HashMap<String, EntryId>,
    next_id: EntryId,
}

impl Default for EntryCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryCollection {
    pub fn new() -> Self {
        EntryCollection {
            entries: BTreeMap::new(),
            by_location: HashMap::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Crea una entrada para `location`. Si ya existe una con esa ruta
    /// devuelve su id sin tocarla.
    pub fn create(&mut self, location: impl AsRef<Path>, media_type: MediaType) -> EntryId {
        let location = location.as_ref();
        if let Some(id) = self.find_by_location(location) {
            return id;
        }

        let id = self.allocate_id();
        let mut entry = Entry::new(id);
        entry.set_media_type(media_type);
        entry.set_location(location);

        debug!(id, location = %location.display(), ?media_type, "entry created");
        self.index(&entry);
        self.entries.insert(id, entry);
        id
    }

    /// Adopta una entrada construida fuera, asignándole un id nuevo.
    pub fn insert(&mut self, mut entry: Entry) -> EntryId {
        let id = self.allocate_id();
        entry.set_id(id);
        if entry.location().is_some_and(|l| self.lookup(l).is_none()) {
            self.index(&entry);
        }
        self.entries.insert(id, entry);
        id
    }

    /// Cambia la ubicación de una entrada manteniendo el índice por ruta.
    pub fn set_location(&mut self, id: EntryId, location: impl AsRef<Path>) -> bool {
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };

        if let Some(old) = entry.location() {
            if self.by_location.get(old) == Some(&id) {
                self.by_location.remove(old);
            }
        }
        entry.set_location(location);

        if let Some(new) = entry.location() {
            self.by_location.insert(new.to_owned(), id);
        }
        true
    }

    fn index(&mut self, entry: &Entry) {
        if let Some(location) = entry.location() {
            self.by_location.insert(location.to_owned(), entry.id());
        }
    }

    /// Id indexado para `location`, sólo si la entrada sigue teniendo esa ruta.
    fn lookup(&self, location: &str) -> Option<EntryId> {
        let id = *self.by_location.get(location)?;
        let entry = self.entries.get(&id)?;
        (entry.location() == Some(location)).then_some(id)
    }

    /// Cambia el tipo de medio de una entrada ya creada.
    pub fn set_media_type(&mut self, id: EntryId, media_type: MediaType) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) => {
                entry.set_media_type(media_type);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.entries.get_mut(&id)
    }

    /// Descarta la entrada; sus tags y observadores se liberan con ella.
    pub fn remove(&mut self, id: EntryId) -> Option<Entry> {
        let entry = self.entries.remove(&id)?;
        if let Some(location) = entry.location() {
            if self.by_location.get(location) == Some(&id) {
                self.by_location.remove(location);
            }
        }
        Some(entry)
    }

    pub fn find_by_location(&self, location: impl AsRef<Path>) -> Option<EntryId> {
        self.lookup(&location.as_ref().to_string_lossy())
    }

    /// Entradas ordenadas por id.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
