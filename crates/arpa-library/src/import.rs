use std::{
    path::{Path, PathBuf},
    sync::Arc,
    thread,
};

use arpa_core::{EntryCollection, MediaType, tags};
use crossbeam::channel::{self, Receiver, Sender, TryRecvError};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::{config::LibraryConfig, error::LibraryError};

/// Eventos que envía el hilo de importación al dueño de la colección
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportEvent {
    Found { path: PathBuf, media_type: MediaType },
    Finished { found: usize },
}

/// Resultado de volcar una importación en la colección
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub duplicates: usize,
}

/// Lanza importaciones en segundo plano.
///
/// El hilo sólo recorre el disco y envía rutas; nunca toca entradas vivas.
/// Crear las entradas le toca a quien posee la `EntryCollection`, vía
/// [`ImportHandle`].
#[derive(Debug, Clone)]
pub struct Importer {
    config: Arc<LibraryConfig>,
}

impl Importer {
    pub fn new(config: LibraryConfig) -> Self {
        Importer {
            config: Arc::new(config),
        }
    }

    pub fn spawn(&self, path: impl Into<PathBuf>) -> Result<ImportHandle, LibraryError> {
        let root = path.into();
        let (tx, rx) = channel::unbounded();
        let config = self.config.clone();

        info!(path = %root.display(), "importing");

        // el JoinHandle se descarta: el hilo termina solo o al cerrarse el canal
        thread::Builder::new()
            .name("arpa-import".into())
            .spawn({
                let root = root.clone();
                move || {
                    let found = walk(&root, &config, &tx);
                    let _ = tx.send(ImportEvent::Finished { found });
                }
            })
            .map_err(|source| LibraryError::ImportSpawn {
                path: root.clone(),
                source,
            })?;

        Ok(ImportHandle {
            root,
            receiver: rx,
            finished: false,
        })
    }
}

/// Recorre `root` y envía un `Found` por fichero importable. Devuelve cuántos envió.
fn walk(root: &Path, config: &LibraryConfig, tx: &Sender<ImportEvent>) -> usize {
    let mut walker = WalkDir::new(root).follow_links(config.follow_symlinks);
    if let Some(depth) = config.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut found = 0;
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                warn!(root = %root.display(), %err, "skipping unreadable path");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        // la ubicación es un tag de texto: un nombre no UTF-8 no se puede guardar tal cual
        if entry.path().to_str().is_none() {
            warn!(path = %entry.path().display(), "skipping path that is not valid UTF-8");
            continue;
        }

        let Some(media_type) = config.media_type_for(entry.path()) else {
            debug!(path = %entry.path().display(), "ignored extension");
            continue;
        };

        let event = ImportEvent::Found {
            path: entry.into_path(),
            media_type,
        };
        if tx.send(event).is_err() {
            // nadie escucha ya
            debug!(root = %root.display(), "import abandoned");
            break;
        }
        found += 1;
    }

    found
}

/// Extremo receptor de una importación en curso.
#[derive(Debug)]
pub struct ImportHandle {
    root: PathBuf,
    receiver: Receiver<ImportEvent>,
    finished: bool,
}

impl ImportHandle {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Espera a que termine la importación y crea todas las entradas.
    pub fn drain_into(mut self, collection: &mut EntryCollection) -> ImportSummary {
        let mut summary = ImportSummary::default();
        while !self.finished {
            match self.receiver.recv() {
                Ok(event) => self.apply(event, collection, &mut summary),
                // el hilo murió sin enviar Finished
                Err(_) => self.finished = true,
            }
        }
        info!(
            path = %self.root.display(),
            added = summary.added,
            duplicates = summary.duplicates,
            "import complete"
        );
        summary
    }

    /// Procesa lo que haya llegado hasta ahora sin bloquear.
    pub fn try_drain_into(&mut self, collection: &mut EntryCollection) -> ImportSummary {
        let mut summary = ImportSummary::default();
        while !self.finished {
            match self.receiver.try_recv() {
                Ok(event) => self.apply(event, collection, &mut summary),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => self.finished = true,
            }
        }
        summary
    }

    fn apply(
        &mut self,
        event: ImportEvent,
        collection: &mut EntryCollection,
        summary: &mut ImportSummary,
    ) {
        match event {
            ImportEvent::Found { path, media_type } => {
                let before = collection.len();
                let id = collection.create(&path, media_type);

                if collection.len() == before {
                    summary.duplicates += 1;
                    return;
                }
                summary.added += 1;

                if let (Some(entry), Some(stem)) = (collection.get_mut(id), path.file_stem()) {
                    entry.set_tag_str(tags::TITLE, Some(&*stem.to_string_lossy()));
                }
            }
            ImportEvent::Finished { found } => {
                debug!(path = %self.root.display(), found, "import thread finished");
                self.finished = true;
            }
        }
    }
}
