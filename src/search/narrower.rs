//! Pin narrowing and the favorite/hidden overlay
//!
//! Neither touches the candidate lists themselves; both produce new views.

use serde::Serialize;
use std::collections::HashSet;

use crate::catalog::WordEntry;

/// Restrict candidates to the length left over by the opposite pin.
///
/// Without a pin the candidates come back unchanged.
pub fn narrow<'c>(
    candidates: &[&'c WordEntry],
    pinned_opposite: Option<&WordEntry>,
    total_length: usize,
) -> Vec<&'c WordEntry> {
    let Some(pinned) = pinned_opposite else {
        return candidates.to_vec();
    };

    match total_length.checked_sub(pinned.letter_count()) {
        Some(required) => candidates
            .iter()
            .copied()
            .filter(|w| w.letter_count() == required)
            .collect(),
        None => Vec::new(),
    }
}

/// User curation for one super-group.
///
/// A favorited word is always listed in the favorites section, even when it
/// is also hidden. Hidden only removes words from the plain list. There is no
/// unhide; `reset` on the session is the way back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    favorited: Vec<String>,
    hidden: HashSet<String>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove a favorite, returning whether it is now favorited
    pub fn toggle_favorite(&mut self, word: &str) -> bool {
        if let Some(pos) = self.favorited.iter().position(|w| w == word) {
            self.favorited.remove(pos);
            false
        } else {
            self.favorited.push(word.to_string());
            true
        }
    }

    /// Hide a word from the plain list. Returns false if it was already hidden.
    pub fn hide(&mut self, word: &str) -> bool {
        self.hidden.insert(word.to_string())
    }

    pub fn is_favorite(&self, word: &str) -> bool {
        self.favorited.iter().any(|w| w == word)
    }

    pub fn is_hidden(&self, word: &str) -> bool {
        self.hidden.contains(word)
    }

    /// Favorites in the order they were added
    pub fn favorites(&self) -> &[String] {
        &self.favorited
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorited.is_empty() && self.hidden.is_empty()
    }

    /// Compose the display list from already narrowed candidates
    pub fn compose<'c>(&self, narrowed: &[&'c WordEntry]) -> DisplayList<'c> {
        let matches = narrowed
            .iter()
            .copied()
            .filter(|w| !self.is_favorite(w.surface_form()) && !self.is_hidden(w.surface_form()))
            .collect();

        DisplayList {
            favorites: self.favorited.clone(),
            matches,
        }
    }
}

/// What one results column shows: favorites, a divider, then the plain list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayList<'c> {
    pub favorites: Vec<String>,
    #[serde(serialize_with = "serialize_surface_forms")]
    pub matches: Vec<&'c WordEntry>,
}

impl<'c> DisplayList<'c> {
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty() && self.matches.is_empty()
    }

    /// Surface forms of the plain list
    pub fn match_words(&self) -> Vec<&'c str> {
        self.matches.iter().map(|w| w.surface_form()).collect()
    }
}

fn serialize_surface_forms<S>(words: &[&WordEntry], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(words.iter().map(|w| w.surface_form()))
}
