//! Phrase Forge - find adjective + noun pairs that fill a letter template
//!
//! Give it a length and a few fixed letters; it lists the adjectives that fit
//! the left of the template and the nouns that fit the right, keeping only
//! words that have a partner of exactly the remaining length.

pub mod catalog;
pub mod error;
pub mod search;
pub mod settings;
pub mod types;

// Re-export commonly used types
pub use catalog::{WordCatalog, WordEntry};
pub use error::{PhraseForgeError, Result};
pub use types::{
    AppConfig, Category, CategorySelection, PerGroup, SearchParameters, SuperGroup,
};

// Re-export main functionality
pub use search::{DisplayList, Overlay, SearchSession, SessionState, Slot, Template};
pub use settings::{JsonFileSettings, MemorySettings, SettingsStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
