use std::{
    env,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use tracing::debug;

use crate::{errors::Error, fs_utils};

/// Nombre de la ENV var para override de ruta base (modo “portable”)
const ENV_BASE_DIR: &str = "ARPA_BASE_DIR";

/// ENV var que sobreescribe, en runtime, la carpeta de datos compartidos
const ENV_SHARE_DIR: &str = "ARPA_SHARE_DIR";

/// Carpeta de datos compartidos fijada al compilar (imágenes, iconos...)
const SHARE_DIR: &str = match option_env!("ARPA_SHARE_DIR") {
    Some(dir) => dir,
    None => "/usr/share/arpa",
};

const MISSING_ARTWORK: &str = "imgs/missing-artwork.svg";

/// Carpeta de datos compartidos de la instalación.
pub fn share_dir() -> PathBuf {
    env::var_os(ENV_SHARE_DIR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SHARE_DIR))
}

/// Imagen que se muestra cuando una entrada no tiene carátula.
pub fn missing_artwork() -> PathBuf {
    share_dir().join(MISSING_ARTWORK)
}

/// Rutas de configuración de la app
#[derive(Debug, Clone)]
pub struct ArpaPaths {
    pub config_dir: PathBuf,
    pub library_config: PathBuf,
}

impl ArpaPaths {
    /// Resuelve las rutas sin tocar el disco.
    pub fn new() -> Result<Self, Error> {
        let config_dir = if let Some(base) = env::var_os(ENV_BASE_DIR) {
            PathBuf::from(base).join("config")
        } else {
            let proj = ProjectDirs::from("org", "Arpa", "Arpa").ok_or(Error::NoHome)?;
            proj.config_dir().to_path_buf()
        };

        debug!(config = %config_dir.display(), "application directories resolved");

        Ok(Self::from_config_dir(&config_dir))
    }

    fn from_config_dir(config_dir: &Path) -> Self {
        ArpaPaths {
            config_dir: config_dir.to_path_buf(),
            library_config: config_dir.join("library.toml"),
        }
    }

    /// Crea las carpetas necesarias para escribir la configuración.
    pub fn ensure_structure(&self) -> Result<(), Error> {
        fs_utils::ensure_dir(&self.config_dir)?;
        self.validate_structure()
    }

    /// Valida que la carpeta de configuración existe y es escribible.
    pub fn validate_structure(&self) -> Result<(), Error> {
        if !self.config_dir.exists() {
            fs_utils::ensure_dir(&self.config_dir)?;
        }
        fs_utils::check_writable(&self.config_dir)
    }
}
