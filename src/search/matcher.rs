//! Template matching for single categories
//!
//! The combined phrase reads adjective then noun, so an adjective is fitted
//! against the leftmost slots and a noun against the rightmost ones. The
//! slots a word does not cover are padding and accept anything.

use crate::catalog::{WordCatalog, WordEntry};
use crate::search::Template;
use crate::types::{Category, CategorySelection, SuperGroup};

/// Which end of the template a word is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Word fills the leftmost slots (adjectives)
    Left,
    /// Word fills the rightmost slots (nouns)
    Right,
}

impl From<SuperGroup> for Alignment {
    fn from(group: SuperGroup) -> Self {
        match group {
            SuperGroup::Adjective => Alignment::Left,
            SuperGroup::Noun => Alignment::Right,
        }
    }
}

/// Whether a word fits the template at the given alignment
pub fn fits(entry: &WordEntry, template: &Template, alignment: Alignment) -> bool {
    let word_len = entry.letter_count();
    let len = template.len();
    if word_len > len {
        return false;
    }

    let offset = match alignment {
        Alignment::Left => 0,
        Alignment::Right => len - word_len,
    };

    template.slots()[offset..offset + word_len]
        .iter()
        .zip(entry.letters())
        .all(|(slot, letter)| slot.accepts(letter))
}

/// Stable filter of one category's entries against the template
pub fn match_category<'c>(
    entries: &'c [WordEntry],
    category: Category,
    template: &Template,
) -> Vec<&'c WordEntry> {
    let alignment = Alignment::from(category.super_group());
    entries
        .iter()
        .filter(|entry| fits(entry, template, alignment))
        .collect()
}

/// Matches for every selected category of a super-group, concatenated in catalog order
pub fn match_group<'c>(
    catalog: &'c WordCatalog,
    selection: &CategorySelection,
    group: SuperGroup,
    template: &Template,
) -> Vec<&'c WordEntry> {
    selection
        .in_group(group)
        .flat_map(|category| match_category(catalog.entries(category), category, template))
        .collect()
}
