use std::{fs, path::Path};

use tracing::{Level, instrument};

use crate::errors::Error;

/// Asegura que la carpeta `path` existe (creándola recursivamente si hace falta).
#[instrument(level = Level::TRACE, err)]
pub fn ensure_dir(path: &Path) -> Result<(), Error> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Verifica que `path` es escribible.
#[instrument(level = Level::TRACE, err)]
pub fn check_writable(path: &Path) -> Result<(), Error> {
    let meta = fs::metadata(path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // en Unix basta con el bit de escritura del owner
        if meta.permissions().mode() & 0o200 == 0 {
            return Err(Error::NotWritable(path.display().to_string()));
        }
    }

    #[cfg(not(unix))]
    {
        if meta.permissions().readonly() {
            return Err(Error::NotWritable(path.display().to_string()));
        }
    }

    Ok(())
}
