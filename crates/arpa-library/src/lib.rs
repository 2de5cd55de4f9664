//! Todo lo que rodea a la colección de entradas: configuración, importación
//! de ficheros en segundo plano y el reproductor que mueve sus estados.

pub mod config;
pub mod error;
pub mod import;
pub mod player;

pub use config::{LibraryConfig, LibraryConfigBuilder};
pub use error::{ConfigError, LibraryError};
pub use import::{ImportEvent, ImportHandle, ImportSummary, Importer};
pub use player::Player;
