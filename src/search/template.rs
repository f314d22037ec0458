//! Fixed-length letter templates

use regex::Regex;
use std::sync::OnceLock;

use crate::error::Result;
use crate::validation_error;

/// Shortest template a search accepts
pub const MIN_LENGTH: usize = 4;
/// Longest template a search accepts
pub const MAX_LENGTH: usize = 50;

const DEFAULT_LENGTH: usize = 9;

/// One position of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Any,
    /// Uppercase letter
    Fixed(char),
}

impl Slot {
    /// Whether an (uppercase) word letter may sit in this slot
    pub fn accepts(&self, letter: char) -> bool {
        match self {
            Slot::Any => true,
            Slot::Fixed(fixed) => *fixed == letter,
        }
    }

    pub fn letter(&self) -> Option<char> {
        match self {
            Slot::Any => None,
            Slot::Fixed(ch) => Some(*ch),
        }
    }
}

/// The slots a combined adjective + noun must fill.
///
/// Length and slots live in the same vector, so they cannot disagree. Every
/// constructor checks the length against [`MIN_LENGTH`]..=[`MAX_LENGTH`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    slots: Vec<Slot>,
}

impl Template {
    /// All-wildcard template of the given length
    pub fn new(length: usize) -> Result<Self> {
        validate_length(length)?;
        Ok(Self {
            slots: vec![Slot::Any; length],
        })
    }

    /// Parse a pattern such as `___Z_B_L_` or `_ _ _ Z _ B _ L _`.
    ///
    /// Letters are fixed slots, `_`, `.` and `?` are wildcards and whitespace
    /// is ignored.
    pub fn parse(pattern: &str) -> Result<Self> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| {
            Regex::new(r"^[\p{Alphabetic}_.?\s]*$").expect("template pattern regex is valid")
        });

        if !re.is_match(pattern) {
            return Err(validation_error!(
                "Template '{}' may only contain letters and the wildcards _ . ?",
                pattern.trim()
            ));
        }

        let slots = pattern
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '_' | '.' | '?' => Ok(Slot::Any),
                letter => normalize_letter(letter).map(Slot::Fixed),
            })
            .collect::<Result<Vec<_>>>()?;

        validate_length(slots.len())?;
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<Slot> {
        self.slots.get(index).copied()
    }

    /// Number of fixed letters entered
    pub fn fixed_count(&self) -> usize {
        self.slots.iter().filter(|s| matches!(s, Slot::Fixed(_))).count()
    }

    pub fn has_fixed_letters(&self) -> bool {
        self.fixed_count() > 0
    }

    /// Change the length, keeping letters at indices that still exist
    pub fn resize(&mut self, length: usize) -> Result<()> {
        validate_length(length)?;
        self.slots.resize(length, Slot::Any);
        Ok(())
    }

    /// Set or clear the letter at `index`
    pub fn set_slot(&mut self, index: usize, letter: Option<char>) -> Result<()> {
        let len = self.slots.len();
        let slot = self.slots.get_mut(index).ok_or_else(|| {
            validation_error!("Slot {} does not exist in a {}-letter template", index + 1, len)
        })?;

        *slot = match letter {
            None | Some('_') | Some('.') | Some('?') => Slot::Any,
            Some(ch) => Slot::Fixed(normalize_letter(ch)?),
        };
        Ok(())
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            slots: vec![Slot::Any; DEFAULT_LENGTH],
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Any => write!(f, "_")?,
                Slot::Fixed(ch) => write!(f, "{}", ch)?,
            }
        }
        Ok(())
    }
}

fn validate_length(length: usize) -> Result<()> {
    if length < MIN_LENGTH {
        return Err(validation_error!(
            "Template must be at least {} letters, got {}",
            MIN_LENGTH,
            length
        ));
    }
    if length > MAX_LENGTH {
        return Err(validation_error!(
            "Template can be at most {} letters, got {}",
            MAX_LENGTH,
            length
        ));
    }
    Ok(())
}

/// Uppercase a single letter, rejecting anything that is not one
fn normalize_letter(ch: char) -> Result<char> {
    if !ch.is_alphabetic() {
        return Err(validation_error!("'{}' is not a letter", ch));
    }
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => Ok(single),
        _ => Err(validation_error!("'{}' has no single uppercase form", ch)),
    }
}
