use std::io;

/// Errores genéricos del crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No se pudo determinar el directorio base (HOME, XDG, etc)
    #[error(
        "Could not determine the project directory, the call to ProjectDirs failed, \
         the system probably does not provide a valid $HOME path."
    )]
    NoHome,

    /// La ruta existe pero no se puede escribir en ella
    #[error("No write permission for {0}")]
    NotWritable(String),

    /// Error de IO al crear dirs o ficheros
    #[error(transparent)]
    Io(#[from] io::Error),
}
