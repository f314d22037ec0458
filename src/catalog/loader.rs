//! Loading word lists from a directory of JSON files

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::{WordCatalog, WordEntry};
use crate::error::{PhraseForgeError, Result};
use crate::types::Category;

/// A word list item: either a bare string or a record
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawWord {
    Plain(String),
    Record {
        #[serde(alias = "surfaceForm", alias = "surface_form")]
        word: String,
    },
}

impl RawWord {
    fn into_word(self) -> String {
        match self {
            RawWord::Plain(word) | RawWord::Record { word } => word,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawDefinition {
    word: String,
    #[serde(default)]
    definitions: Vec<String>,
}

/// `single_nouns.json` etc.
pub fn words_file_name(category: Category) -> String {
    format!("{}.json", category.file_stem())
}

/// `single_nouns_definitions.json` etc.
pub fn definitions_file_name(category: Category) -> String {
    format!("{}_definitions.json", category.file_stem())
}

impl WordCatalog {
    /// Load every category from `dir`.
    ///
    /// A missing word list leaves that category empty. Definition files are
    /// optional.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(PhraseForgeError::io(
                "words directory not found",
                Some(dir.to_string_lossy().to_string()),
            ));
        }

        let mut catalog = WordCatalog::new();
        for category in Category::ALL {
            let words_path = dir.join(words_file_name(category));
            if !words_path.is_file() {
                tracing::warn!(category = %category, path = %words_path.display(), "Word list missing, category will be empty");
                continue;
            }

            let words_json = read_file(&words_path)?;
            let defs_path = dir.join(definitions_file_name(category));
            let defs_json = if defs_path.is_file() {
                Some(read_file(&defs_path)?)
            } else {
                None
            };

            catalog.load_category(category, &words_json, defs_json.as_deref())?;
        }

        tracing::info!(dir = %dir.display(), words = catalog.total(), "Word catalog loaded");
        Ok(catalog)
    }

    /// Parse one category's word list (and optional definitions) from JSON text
    pub fn load_category(
        &mut self,
        category: Category,
        words_json: &str,
        definitions_json: Option<&str>,
    ) -> Result<()> {
        let raw: Vec<RawWord> = serde_json::from_str(words_json)
            .map_err(|e| PhraseForgeError::catalog(category, e.to_string()))?;
        let before = self.len(category);
        self.insert(category, raw.into_iter().map(|w| WordEntry::new(w.into_word())));

        let mut with_definitions = 0;
        if let Some(json) = definitions_json {
            let raw: Vec<RawDefinition> = serde_json::from_str(json)
                .map_err(|e| PhraseForgeError::catalog(category, format!("definitions: {}", e)))?;
            let definitions: HashMap<String, Vec<String>> = raw
                .into_iter()
                .map(|d| (d.word, d.definitions))
                .collect();
            with_definitions = self.attach_definitions(category, definitions);
        }

        tracing::info!(
            category = %category,
            words = self.len(category) - before,
            with_definitions,
            "Loaded word list"
        );
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| PhraseForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string())))
}
