//! Crate `arpa_paths`: rutas de configuración y recursos compartidos de Arpa

mod errors;
mod fs_utils;
mod paths;

pub use errors::Error;
pub use paths::{ArpaPaths, missing_artwork, share_dir};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    /// Los tests modifican variables de entorno del proceso: se serializan.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// RAII-guard que setea y luego restaura (o elimina) una variable de entorno.
    struct EnvVarGuard {
        key: String,
        original: Option<String>,
    }

    impl EnvVarGuard {
        fn new(key: &str, value: &str) -> Self {
            let original = std::env::var(key).ok();
            // set_var es unsafe en edition 2024
            unsafe { std::env::set_var(key, value) };
            EnvVarGuard {
                key: key.to_owned(),
                original,
            }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            match &self.original {
                Some(val) => unsafe { std::env::set_var(&self.key, val) },
                None => unsafe { std::env::remove_var(&self.key) },
            }
        }
    }

    #[test]
    fn missing_artwork_follows_share_dir_override() {
        let _lock = ENV_LOCK.lock().unwrap();
        let tmp = tempdir().unwrap();
        let _env = EnvVarGuard::new("ARPA_SHARE_DIR", tmp.path().to_str().unwrap());

        assert_eq!(share_dir(), tmp.path());
        assert_eq!(
            missing_artwork(),
            tmp.path().join("imgs").join("missing-artwork.svg")
        );
    }

    #[test]
    fn new_only_resolves_paths() {
        let _lock = ENV_LOCK.lock().unwrap();
        let tmp = tempdir().unwrap();
        let _env = EnvVarGuard::new("ARPA_BASE_DIR", tmp.path().to_str().unwrap());

        let paths = ArpaPaths::new().unwrap();

        assert_eq!(paths.config_dir, tmp.path().join("config"));
        assert_eq!(paths.library_config, tmp.path().join("config").join("library.toml"));
        // resolver no deja nada en disco
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn ensure_structure_creates_config_dir() {
        let _lock = ENV_LOCK.lock().unwrap();
        let tmp = tempdir().unwrap();
        let _env = EnvVarGuard::new("ARPA_BASE_DIR", tmp.path().to_str().unwrap());

        let paths = ArpaPaths::new().unwrap();
        paths.ensure_structure().unwrap();

        assert!(paths.config_dir.is_dir());
        assert!(!paths.library_config.exists());
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn validate_structure_recreates_missing_dirs() {
        let _lock = ENV_LOCK.lock().unwrap();
        let tmp = tempdir().unwrap();
        let _env = EnvVarGuard::new("ARPA_BASE_DIR", tmp.path().to_str().unwrap());

        let paths = ArpaPaths::new().unwrap();
        paths.ensure_structure().unwrap();

        // Simula borrado en caliente
        std::fs::remove_dir_all(&paths.config_dir).unwrap();
        assert!(!paths.config_dir.exists());

        paths.validate_structure().unwrap();
        assert!(paths.config_dir.exists());
    }
}
