//! Search session - template, categories, results, pins and overlays
//!
//! Every template or category edit drops the cached candidate lists. Once a
//! search has been submitted, edits recompute immediately so the results
//! never lag the inputs. Pins and overlays only change what is displayed.

use serde::Serialize;

use crate::catalog::{WordCatalog, WordEntry};
use crate::error::Result;
use crate::search::{matcher, narrower, preview, reducer, DisplayList, Overlay, Template};
use crate::types::{Category, CategorySelection, PerGroup, SearchParameters, SuperGroup};
use crate::validation_error;

/// Where the session is in its edit/search cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Fresh or just reset
    Empty,
    /// Inputs edited, no current results
    Configuring,
    /// Matching in progress (only observable from inside a recompute)
    Searching,
    ResultsReady,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Empty => write!(f, "empty"),
            SessionState::Configuring => write!(f, "configuring"),
            SessionState::Searching => write!(f, "searching"),
            SessionState::ResultsReady => write!(f, "results ready"),
        }
    }
}

/// One user's search over a shared catalog
#[derive(Debug, Clone)]
pub struct SearchSession<'c> {
    catalog: &'c WordCatalog,
    template: Template,
    categories: CategorySelection,
    state: SessionState,
    /// Set by a successful `search`, cleared by `reset`
    live: bool,
    candidates: Option<PerGroup<Vec<&'c WordEntry>>>,
    pins: PerGroup<Option<&'c WordEntry>>,
    overlays: PerGroup<Overlay>,
}

impl<'c> SearchSession<'c> {
    /// New session with default parameters
    pub fn new(catalog: &'c WordCatalog) -> Self {
        Self {
            catalog,
            template: Template::default(),
            categories: CategorySelection::default(),
            state: SessionState::Empty,
            live: false,
            candidates: None,
            pins: PerGroup::default(),
            overlays: PerGroup::default(),
        }
    }

    /// New session pre-filled from saved parameters
    pub fn with_parameters(catalog: &'c WordCatalog, params: &SearchParameters) -> Result<Self> {
        let mut session = Self::new(catalog);
        session.apply_parameters(params)?;
        Ok(session)
    }

    pub fn catalog(&self) -> &'c WordCatalog {
        self.catalog
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn categories(&self) -> &CategorySelection {
        &self.categories
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn has_results(&self) -> bool {
        self.candidates.is_some()
    }

    /// Whether `search` would currently be accepted
    pub fn is_searchable(&self) -> bool {
        self.template.has_fixed_letters() && !self.categories.is_empty()
    }

    // ---- template and category edits -------------------------------------

    /// Resize the template, keeping letters that still fit
    pub fn set_template_length(&mut self, length: usize) -> Result<()> {
        self.template.resize(length)?;
        self.inputs_changed();
        Ok(())
    }

    /// Set or clear one slot's letter
    pub fn set_slot_letter(&mut self, index: usize, letter: Option<char>) -> Result<()> {
        self.template.set_slot(index, letter)?;
        self.inputs_changed();
        Ok(())
    }

    /// Replace the whole template
    pub fn set_template(&mut self, template: Template) {
        self.template = template;
        self.inputs_changed();
    }

    /// Flip one category, returning whether it is now included
    pub fn toggle_category(&mut self, category: Category) -> bool {
        let included = self.categories.toggle(category);
        self.inputs_changed();
        included
    }

    /// "Enable all": select everything, or clear everything if all were selected
    pub fn toggle_all_categories(&mut self) {
        self.categories.toggle_all();
        self.inputs_changed();
    }

    /// Load template and categories from saved parameters
    pub fn apply_parameters(&mut self, params: &SearchParameters) -> Result<()> {
        let template = params.template()?;
        self.template = template;
        self.categories = params.categories();
        self.inputs_changed();
        Ok(())
    }

    /// Snapshot of the current template and categories
    pub fn parameters(&self) -> SearchParameters {
        SearchParameters::from_parts(&self.template, &self.categories)
    }

    // ---- searching --------------------------------------------------------

    /// Submit the search. Later edits keep the results current until `reset`.
    pub fn search(&mut self) -> Result<()> {
        if !self.template.has_fixed_letters() {
            return Err(validation_error!("Enter at least one letter in the template"));
        }
        if self.categories.is_empty() {
            return Err(validation_error!("Select at least one word category"));
        }

        self.live = true;
        self.recompute();
        Ok(())
    }

    /// Back to a fresh session. The catalog stays loaded.
    pub fn reset(&mut self) {
        self.template = Template::default();
        self.categories = CategorySelection::default();
        self.state = SessionState::Empty;
        self.live = false;
        self.candidates = None;
        self.pins = PerGroup::default();
        self.overlays = PerGroup::default();
        tracing::debug!("Search session reset");
    }

    fn inputs_changed(&mut self) {
        self.state = SessionState::Configuring;
        self.candidates = None;

        if self.live && self.is_searchable() {
            self.recompute();
        } else {
            self.pins = PerGroup::default();
        }
    }

    fn recompute(&mut self) {
        self.state = SessionState::Searching;

        let adjectives =
            matcher::match_group(self.catalog, &self.categories, SuperGroup::Adjective, &self.template);
        let nouns = matcher::match_group(self.catalog, &self.categories, SuperGroup::Noun, &self.template);
        let (matched_adjectives, matched_nouns) = (adjectives.len(), nouns.len());

        let (adjectives, nouns) = reducer::reduce(adjectives, nouns, self.template.len());

        tracing::debug!(
            template = %self.template,
            matched_adjectives,
            matched_nouns,
            adjectives = adjectives.len(),
            nouns = nouns.len(),
            "Recomputed candidates"
        );

        let candidates = PerGroup::new(adjectives, nouns);
        for group in [SuperGroup::Adjective, SuperGroup::Noun] {
            let pin = self.pins.get_mut(group);
            if let Some(word) = *pin {
                if !candidates.get(group).iter().any(|c| std::ptr::eq(*c, word)) {
                    tracing::debug!(group = %group, word = %word, "Dropping stale pin");
                    *pin = None;
                }
            }
        }
        if let (Some(adjective), Some(noun)) = (self.pins.adjective, self.pins.noun) {
            if adjective.letter_count() + noun.letter_count() != self.template.len() {
                tracing::debug!(adjective = %adjective, noun = %noun, "Dropping pins that no longer fill the template");
                self.pins = PerGroup::default();
            }
        }

        self.candidates = Some(candidates);
        self.state = SessionState::ResultsReady;
    }

    // ---- results ----------------------------------------------------------

    /// Reduced candidates for a super-group, empty when there are no results
    pub fn candidates(&self, group: SuperGroup) -> &[&'c WordEntry] {
        self.candidates
            .as_ref()
            .map(|c| c.get(group).as_slice())
            .unwrap_or(&[])
    }

    /// Candidates narrowed by the opposite group's pin
    pub fn narrowed(&self, group: SuperGroup) -> Vec<&'c WordEntry> {
        narrower::narrow(
            self.candidates(group),
            *self.pins.get(group.opposite()),
            self.template.len(),
        )
    }

    /// Favorites, then the narrowed and unhidden candidates
    pub fn view(&self, group: SuperGroup) -> DisplayList<'c> {
        self.overlays.get(group).compose(&self.narrowed(group))
    }

    /// Tiles showing the pinned words laid over the template
    pub fn preview(&self) -> Vec<Option<char>> {
        preview::preview(&self.template, self.pins.adjective, self.pins.noun)
    }

    /// Definitions of a word in one super-group; `None` when there are none
    pub fn definitions(&self, group: SuperGroup, word: &str) -> Option<&'c [String]> {
        self.catalog.definitions_in_group(group, word)
    }

    // ---- pins and overlays ------------------------------------------------

    /// Pin a candidate of `group` (replacing any earlier pin), or clear with `None`.
    ///
    /// Only words left after narrowing by the opposite pin can be pinned.
    /// Exact surface form is tried first, then a case-insensitive match.
    pub fn pin(&mut self, group: SuperGroup, word: Option<&str>) -> Result<()> {
        let Some(word) = word else {
            *self.pins.get_mut(group) = None;
            return Ok(());
        };

        if !self.has_results() {
            return Err(validation_error!("Run a search before selecting a {}", group));
        }

        let lookup = |list: &[&'c WordEntry]| {
            list.iter()
                .find(|c| c.surface_form() == word)
                .or_else(|| list.iter().find(|c| c.surface_form().eq_ignore_ascii_case(word)))
                .copied()
        };

        let entry = match lookup(&self.narrowed(group)) {
            Some(entry) => entry,
            None => {
                let opposite = self.pinned(group.opposite());
                return Err(match (lookup(self.candidates(group)), opposite) {
                    (Some(entry), Some(other)) => validation_error!(
                        "'{}' ({} letters) does not complete '{}' ({} letters) in a {}-letter template",
                        entry,
                        entry.letter_count(),
                        other,
                        other.letter_count(),
                        self.template.len()
                    ),
                    _ => validation_error!("'{}' is not among the matching {}s", word, group),
                });
            }
        };

        tracing::debug!(group = %group, word = %entry, "Pinned word");
        *self.pins.get_mut(group) = Some(entry);
        Ok(())
    }

    pub fn pinned(&self, group: SuperGroup) -> Option<&'c WordEntry> {
        *self.pins.get(group)
    }

    /// Toggle a favorite, returning whether the word is now favorited
    pub fn favorite(&mut self, group: SuperGroup, word: &str) -> bool {
        let favorited = self.overlays.get_mut(group).toggle_favorite(word);
        tracing::debug!(group = %group, word, favorited, "Favorite toggled");
        favorited
    }

    /// Hide a word from the plain list of its group
    pub fn hide(&mut self, group: SuperGroup, word: &str) -> bool {
        let newly_hidden = self.overlays.get_mut(group).hide(word);
        tracing::debug!(group = %group, word, "Word hidden");
        newly_hidden
    }

    pub fn overlay(&self, group: SuperGroup) -> &Overlay {
        self.overlays.get(group)
    }
}
