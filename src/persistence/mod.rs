use std::{
    env,
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::ConjugaError;

pub mod review_store;

pub use review_store::ReviewSnapshot;

const APP_NAME: &str = "conjuga";

/// Overrides the per-user data directory.
pub const DATA_DIR_ENV: &str = "CONJUGA_DATA_DIR";

/// Directory holding settings and review progress as JSON files.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `$CONJUGA_DATA_DIR`, else the platform data dir, else the working directory.
    pub fn resolve() -> Self {
        if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Self::at(dir);
        }
        match dirs::data_local_dir() {
            Some(data_dir) => Self::at(data_dir.join(APP_NAME)),
            None => Self::at("."),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file_path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    pub fn exists(&self, filename: &str) -> bool {
        self.file_path(filename).exists()
    }

    pub fn save_json<T: Serialize>(&self, data: &T, filename: &str) -> Result<(), ConjugaError> {
        fs::create_dir_all(&self.root)?;
        let file_path = self.file_path(filename);
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&file_path, json)?;
        log::debug!("Data saved to: {}", file_path.display());
        Ok(())
    }

    pub fn load_json<T: for<'de> Deserialize<'de> + Default>(
        &self,
        filename: &str,
    ) -> Result<T, ConjugaError> {
        let file_path = self.file_path(filename);

        if !file_path.exists() {
            return Ok(T::default());
        }

        let json = fs::read_to_string(&file_path)?;
        let data: T = serde_json::from_str(&json)?;
        log::info!("Data loaded from: {}", file_path.display());
        Ok(data)
    }

    pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(&self, filename: &str) -> T {
        match self.load_json::<T>(filename) {
            Ok(data) => data,
            Err(e) => {
                log::warn!("Failed to load {}: {}. Using defaults.", filename, e);
                T::default()
            }
        }
    }

    pub fn delete(&self, filename: &str) -> Result<(), ConjugaError> {
        let file_path = self.file_path(filename);
        if file_path.exists() {
            fs::remove_file(&file_path)?;
            log::info!("Deleted: {}", file_path.display());
        }
        Ok(())
    }
}
