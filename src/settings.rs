//! Key-value settings persistence
//!
//! The search core never needs these; the CLI uses them to remember the last
//! search parameters between runs.

use chrono::Utc;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{PhraseForgeError, Result};
use crate::internal_error;
use crate::types::SearchParameters;

/// Key the last search parameters are stored under
pub const SEARCH_PARAMETERS_KEY: &str = "search-parameters";

/// Minimal key-value store
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<Value>;

    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

/// In-memory store, starts empty
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: HashMap<String, Value>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by one JSON object on disk, rewritten on every `set`
#[derive(Debug, Clone)]
pub struct JsonFileSettings {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonFileSettings {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self> {
        let values = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| {
                PhraseForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
            })?;
            match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(PhraseForgeError::parse(
                        "settings file must contain a JSON object",
                        Some(content),
                    ))
                }
                Err(e) => return Err(PhraseForgeError::parse(e.to_string(), Some(content))),
            }
        } else {
            Map::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                PhraseForgeError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
            })?;
        }

        let content = serde_json::to_string_pretty(&self.values)
            .map_err(|e| internal_error!("Failed to serialize settings: {}", e))?;

        std::fs::write(&self.path, content).map_err(|e| {
            PhraseForgeError::io(e.to_string(), Some(self.path.to_string_lossy().to_string()))
        })
    }
}

impl SettingsStore for JsonFileSettings {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.save()
    }
}

/// Last saved search parameters, if any were stored and still parse
pub fn load_parameters(store: &impl SettingsStore) -> Option<SearchParameters> {
    let value = store.get(SEARCH_PARAMETERS_KEY)?;
    match serde_json::from_value(value) {
        Ok(params) => Some(params),
        Err(e) => {
            tracing::warn!(key = SEARCH_PARAMETERS_KEY, error = %e, "Ignoring unreadable saved parameters");
            None
        }
    }
}

/// Store search parameters, stamping the save time
pub fn save_parameters(store: &mut impl SettingsStore, params: &SearchParameters) -> Result<()> {
    let mut params = params.clone();
    params.saved_at = Some(Utc::now());
    let value = serde_json::to_value(&params)
        .map_err(|e| PhraseForgeError::settings(SEARCH_PARAMETERS_KEY, e.to_string()))?;
    store.set(SEARCH_PARAMETERS_KEY, value)
}
