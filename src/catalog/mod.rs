//! Word catalog - the static, read-only word lists a search runs over
//!
//! Five categories, each an ordered list of [`WordEntry`]. The catalog is
//! loaded once and only ever borrowed afterwards.

mod builtin;
mod loader;

pub use loader::{definitions_file_name, words_file_name};

use std::collections::HashMap;

use crate::types::{Category, SuperGroup};

/// A single word as shown to the user, plus its letters-only projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    surface_form: String,
    letters_only: String,
    letter_count: usize,
    definitions: Option<Vec<String>>,
}

impl WordEntry {
    pub fn new(surface_form: impl Into<String>) -> Self {
        let surface_form = surface_form.into();
        let letters_only: String = surface_form
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_uppercase)
            .collect();
        let letter_count = letters_only.chars().count();

        Self {
            surface_form,
            letters_only,
            letter_count,
            definitions: None,
        }
    }

    pub fn with_definitions(mut self, definitions: Vec<String>) -> Self {
        self.definitions = Some(definitions);
        self
    }

    /// The word as written, separators included ("Air Pump", "Half-Mast")
    pub fn surface_form(&self) -> &str {
        &self.surface_form
    }

    /// Uppercase letters with spaces and hyphens removed ("AIRPUMP")
    pub fn letters_only(&self) -> &str {
        &self.letters_only
    }

    /// Length used for template fitting and pairing
    pub fn letter_count(&self) -> usize {
        self.letter_count
    }

    pub fn letters(&self) -> std::str::Chars<'_> {
        self.letters_only.chars()
    }

    pub fn definitions(&self) -> Option<&[String]> {
        self.definitions.as_deref()
    }
}

impl std::fmt::Display for WordEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.surface_form)
    }
}

/// All word lists, one per [`Category`]
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    lists: [Vec<WordEntry>; 5],
}

impl WordCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper that appends plain words to one category
    pub fn with_words<I, S>(mut self, category: Category, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(category, words.into_iter().map(WordEntry::new));
        self
    }

    /// Append entries to a category, skipping any with no letters
    pub fn insert(&mut self, category: Category, entries: impl IntoIterator<Item = WordEntry>) {
        let list = &mut self.lists[category.index()];
        for entry in entries {
            if entry.letter_count == 0 {
                tracing::warn!(category = %category, word = %entry.surface_form, "Skipping word with no letters");
                continue;
            }
            list.push(entry);
        }
    }

    /// Attach definitions by exact surface-form match. Returns how many entries got one.
    pub fn attach_definitions(
        &mut self,
        category: Category,
        mut definitions: HashMap<String, Vec<String>>,
    ) -> usize {
        let mut attached = 0;
        for entry in &mut self.lists[category.index()] {
            if let Some(defs) = definitions.remove(&entry.surface_form) {
                entry.definitions = Some(defs);
                attached += 1;
            }
        }
        attached
    }

    /// Entries of one category in their original order
    pub fn entries(&self, category: Category) -> &[WordEntry] {
        &self.lists[category.index()]
    }

    pub fn len(&self, category: Category) -> usize {
        self.lists[category.index()].len()
    }

    pub fn total(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Find an entry by its exact surface form
    pub fn find(&self, category: Category, surface_form: &str) -> Option<&WordEntry> {
        self.entries(category)
            .iter()
            .find(|e| e.surface_form == surface_form)
    }

    /// Definitions for an exact word; `None` means "no definitions found"
    pub fn definitions(&self, category: Category, surface_form: &str) -> Option<&[String]> {
        self.find(category, surface_form)
            .and_then(WordEntry::definitions)
    }

    /// Definitions for a word in any category of a super-group
    pub fn definitions_in_group(&self, group: SuperGroup, surface_form: &str) -> Option<&[String]> {
        Category::ALL
            .into_iter()
            .filter(|c| c.super_group() == group)
            .find_map(|c| self.definitions(c, surface_form))
    }
}
