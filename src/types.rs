//! Core types and structures for phrase-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::config_error;
use crate::error::Result;
use crate::search::{Slot, Template};

/// Word category as stored in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SingleNoun,
    CompoundNoun,
    HyphenatedNoun,
    SingleAdjective,
    CompoundAdjective,
}

impl Category {
    /// Every category, in catalog order
    pub const ALL: [Category; 5] = [
        Category::SingleNoun,
        Category::CompoundNoun,
        Category::HyphenatedNoun,
        Category::SingleAdjective,
        Category::CompoundAdjective,
    ];

    /// Pairing role this category plays in an adjective + noun phrase
    pub fn super_group(&self) -> SuperGroup {
        match self {
            Category::SingleNoun | Category::CompoundNoun | Category::HyphenatedNoun => {
                SuperGroup::Noun
            }
            Category::SingleAdjective | Category::CompoundAdjective => SuperGroup::Adjective,
        }
    }

    /// File stem used for this category's word list files
    pub fn file_stem(&self) -> &'static str {
        match self {
            Category::SingleNoun => "single_nouns",
            Category::CompoundNoun => "compound_nouns",
            Category::HyphenatedNoun => "hyphenated_nouns",
            Category::SingleAdjective => "single_adjectives",
            Category::CompoundAdjective => "compound_adjectives",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Category::SingleNoun => 0,
            Category::CompoundNoun => 1,
            Category::HyphenatedNoun => 2,
            Category::SingleAdjective => 3,
            Category::CompoundAdjective => 4,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::SingleNoun => write!(f, "single nouns"),
            Category::CompoundNoun => write!(f, "compound nouns"),
            Category::HyphenatedNoun => write!(f, "hyphenated nouns"),
            Category::SingleAdjective => write!(f, "single adjectives"),
            Category::CompoundAdjective => write!(f, "compound adjectives"),
        }
    }
}

/// The two pairing roles. The phrase always reads adjective then noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuperGroup {
    Adjective,
    Noun,
}

impl SuperGroup {
    pub fn opposite(&self) -> SuperGroup {
        match self {
            SuperGroup::Adjective => SuperGroup::Noun,
            SuperGroup::Noun => SuperGroup::Adjective,
        }
    }

    /// Short label used next to a word, e.g. "adj." or "n."
    pub fn abbreviation(&self) -> &'static str {
        match self {
            SuperGroup::Adjective => "adj.",
            SuperGroup::Noun => "n.",
        }
    }
}

impl std::fmt::Display for SuperGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuperGroup::Adjective => write!(f, "adjective"),
            SuperGroup::Noun => write!(f, "noun"),
        }
    }
}

/// One value per super-group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerGroup<T> {
    pub adjective: T,
    pub noun: T,
}

impl<T> PerGroup<T> {
    pub fn new(adjective: T, noun: T) -> Self {
        Self { adjective, noun }
    }

    pub fn get(&self, group: SuperGroup) -> &T {
        match group {
            SuperGroup::Adjective => &self.adjective,
            SuperGroup::Noun => &self.noun,
        }
    }

    pub fn get_mut(&mut self, group: SuperGroup) -> &mut T {
        match group {
            SuperGroup::Adjective => &mut self.adjective,
            SuperGroup::Noun => &mut self.noun,
        }
    }
}

/// Which categories take part in a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelection {
    selected: BTreeSet<Category>,
}

impl CategorySelection {
    /// Nothing selected
    pub fn none() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }

    /// Every category selected
    pub fn all() -> Self {
        Self {
            selected: Category::ALL.into_iter().collect(),
        }
    }

    pub fn contains(&self, category: Category) -> bool {
        self.selected.contains(&category)
    }

    pub fn set(&mut self, category: Category, included: bool) {
        if included {
            self.selected.insert(category);
        } else {
            self.selected.remove(&category);
        }
    }

    /// Flip one category, returning whether it is now included
    pub fn toggle(&mut self, category: Category) -> bool {
        let included = !self.contains(category);
        self.set(category, included);
        included
    }

    /// Deselect everything when all are selected, otherwise select everything
    pub fn toggle_all(&mut self) {
        *self = if self.is_all() { Self::none() } else { Self::all() };
    }

    pub fn is_all(&self) -> bool {
        self.selected.len() == Category::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected categories of one super-group, in catalog order
    pub fn in_group(&self, group: SuperGroup) -> impl Iterator<Item = Category> + '_ {
        self.selected
            .iter()
            .copied()
            .filter(move |c| c.super_group() == group)
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.selected.iter().copied()
    }
}

impl Default for CategorySelection {
    fn default() -> Self {
        Self {
            selected: [Category::SingleNoun, Category::SingleAdjective]
                .into_iter()
                .collect(),
        }
    }
}

impl FromIterator<Category> for CategorySelection {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

/// Search form values as persisted between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParameters {
    pub char_count: usize,
    /// One entry per slot, empty string for "any letter"
    pub letters: Vec<String>,
    pub include_nouns: bool,
    pub include_compound_nouns: bool,
    #[serde(alias = "includeHypenatedNouns")]
    pub include_hyphenated_nouns: bool,
    pub include_adjectives: bool,
    pub include_compound_adjectives: bool,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

impl SearchParameters {
    /// Capture the current template and category selection
    pub fn from_parts(template: &Template, categories: &CategorySelection) -> Self {
        Self {
            char_count: template.len(),
            letters: template
                .slots()
                .iter()
                .map(|slot| match slot {
                    Slot::Any => String::new(),
                    Slot::Fixed(ch) => ch.to_string(),
                })
                .collect(),
            include_nouns: categories.contains(Category::SingleNoun),
            include_compound_nouns: categories.contains(Category::CompoundNoun),
            include_hyphenated_nouns: categories.contains(Category::HyphenatedNoun),
            include_adjectives: categories.contains(Category::SingleAdjective),
            include_compound_adjectives: categories.contains(Category::CompoundAdjective),
            saved_at: None,
        }
    }

    /// Rebuild the template; letters beyond `char_count` are dropped
    pub fn template(&self) -> Result<Template> {
        let mut template = Template::new(self.char_count)?;
        for (index, letter) in self.letters.iter().enumerate().take(self.char_count) {
            let ch = letter.chars().find(|c| !c.is_whitespace());
            template.set_slot(index, ch)?;
        }
        Ok(template)
    }

    pub fn categories(&self) -> CategorySelection {
        let mut selection = CategorySelection::none();
        selection.set(Category::SingleNoun, self.include_nouns);
        selection.set(Category::CompoundNoun, self.include_compound_nouns);
        selection.set(Category::HyphenatedNoun, self.include_hyphenated_nouns);
        selection.set(Category::SingleAdjective, self.include_adjectives);
        selection.set(Category::CompoundAdjective, self.include_compound_adjectives);
        selection
    }
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self::from_parts(&Template::default(), &CategorySelection::default())
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the word list JSON files; built-in lists when unset
    pub words_dir: Option<PathBuf>,
    pub settings_path: PathBuf,
    pub log_filter: String,
}

impl AppConfig {
    /// Build configuration from `PHRASE_FORGE_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            words_dir: std::env::var_os("PHRASE_FORGE_WORDS_DIR").map(PathBuf::from),
            settings_path: std::env::var_os("PHRASE_FORGE_SETTINGS")
                .map(PathBuf::from)
                .unwrap_or(defaults.settings_path),
            log_filter: std::env::var("PHRASE_FORGE_LOG")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or(defaults.log_filter),
        }
    }

    /// Check settings that would otherwise fail later with a less useful error
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.words_dir {
            if !dir.is_dir() {
                return Err(config_error!(
                    "words directory {} does not exist",
                    dir.display()
                ));
            }
        }
        if self.settings_path.as_os_str().is_empty() {
            return Err(config_error!("settings path must not be empty"));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            words_dir: None,
            settings_path: PathBuf::from("output/phrase_forge_settings.json"),
            log_filter: "warn".to_string(),
        }
    }
}
