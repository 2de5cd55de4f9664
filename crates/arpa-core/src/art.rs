use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{Level, debug, instrument};

/// Extensiones que se aceptan como carátula (sufijo exacto, sensible a mayúsculas).
pub const ART_SUFFIXES: [&str; 3] = [".jpg", ".bmp", ".png"];

fn is_art_name(name: &[u8]) -> bool {
    ART_SUFFIXES.iter().any(|suffix| name.ends_with(suffix.as_bytes()))
}

/// Busca en `dir` el primer fichero cuyo nombre acaba en una extensión de
/// imagen, en el orden en que los devuelve el sistema (sin ordenar).
///
/// Devuelve `None` si no hay ninguno o si el directorio no se puede leer.
#[instrument(level = Level::TRACE)]
pub fn find_art(dir: &Path) -> Option<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(dir = %dir.display(), %err, "cannot open directory for artwork lookup");
            return None;
        }
    };

    entries
        .filter_map(Result::ok)
        .find(|entry| is_art_name(entry.file_name().as_encoded_bytes()))
        .map(|entry| dir.join(entry.file_name()))
}

/// Carátula del fichero `location`: la primera imagen de su carpeta, o
/// `fallback` si no hay ninguna.
pub fn art_for_location(location: &Path, fallback: &Path) -> PathBuf {
    let dir = match location.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        // ruta relativa sin carpeta: el directorio actual
        Some(_) => Path::new("."),
        None => return fallback.to_path_buf(),
    };

    find_art(dir).unwrap_or_else(|| fallback.to_path_buf())
}
