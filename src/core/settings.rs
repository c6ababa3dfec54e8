use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    deck::{
        CardMode,
        VerbFilter,
    },
    persistence::DataDir,
};

pub const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_REVIEW_STATE_FILE: &str = "review_state.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Verb data file. Relative paths resolve against the data directory.
    pub catalog_path: Option<PathBuf>,
    pub mode: CardMode,
    pub filter: VerbFilter,
    pub review_state_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            mode: CardMode::default(),
            filter: VerbFilter::default(),
            review_state_file: DEFAULT_REVIEW_STATE_FILE.to_string(),
        }
    }
}

impl Settings {
    pub fn load(dir: &DataDir) -> Self {
        dir.load_json_or_default(SETTINGS_FILE)
    }

    pub fn save(&self, dir: &DataDir) -> Result<(), super::ConjugaError> {
        dir.save_json(self, SETTINGS_FILE)
    }

    pub fn resolved_catalog_path(&self, dir: &DataDir) -> Option<PathBuf> {
        self.catalog_path.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                dir.root().join(path)
            }
        })
    }
}
