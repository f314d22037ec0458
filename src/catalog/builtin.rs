//! Built-in sample word lists
//!
//! Small enough to embed, large enough to try the tool without any data files.

use super::WordCatalog;
use crate::types::Category;

/// Single-word nouns
pub const SINGLE_NOUNS: &[&str] = &[
    // Animals
    "RAVEN", "OTTER", "TIGER", "EAGLE", "SHARK", "WHALE", "PANDA", "KOALA",
    "HORSE", "ZEBRA", "COBRA", "VIPER", "WOLF", "BEAR", "HAWK", "CRAB",
    // Things
    "BALL", "BELL", "BOLT", "BULL", "BUGLE", "TABLE", "LADDER", "LANTERN",
    "ANCHOR", "BASKET", "BOTTLE", "CANDLE", "HAMMER", "KETTLE", "MIRROR",
    "PILLOW", "RIBBON", "SADDLE", "TROWEL", "WAGON", "BLANKET", "COMPASS",
    // Nature
    "RIVER", "STONE", "PEARL", "AMBER", "CORAL", "MAPLE", "OCEAN", "STORM",
    "CLOUD", "FLAME", "BLOOM", "MEADOW", "CANYON", "GLACIER", "TOADSTOOL",
    // Abstract
    "ADVICE", "CHAOS", "ORDER", "UNITY", "QUEST", "DREAM", "ECHO", "PULSE",
    "RHYTHM", "WHISPER", "MYSTERY", "BALANCE",
    // Food
    "APPLE", "GRAPE", "LEMON", "MELON", "BERRY", "MANGO", "PEACH", "OLIVE",
    "HONEY", "SUGAR", "SPICE", "TOAST", "BISCUIT", "PRETZEL",
];

/// Multi-word nouns
pub const COMPOUND_NOUNS: &[&str] = &[
    "AIR PUMP", "SEA MOSS", "BLOOD VESSEL", "ICE CREAM", "FIRE ALARM",
    "SUN DIAL", "BUS STOP", "TIDE POOL", "RAIN BOOT", "TEA LEAF",
    "OAK TREE", "BEE HIVE", "SAND DUNE", "GOLD LEAF", "ROCK SALT",
];

/// Hyphenated nouns
pub const HYPHENATED_NOUNS: &[&str] = &[
    "WOULD-BE", "HALF-MAST", "SELF-DISCIPLINE", "GO-BETWEEN", "HAS-BEEN",
    "KNOW-HOW", "LOOK-ALIKE", "MAKE-UP", "RUN-IN", "SET-UP",
    "TIE-DYE", "YO-YO", "X-RAY", "FOLLOW-UP", "SHOW-OFF",
];

/// Single-word adjectives
pub const SINGLE_ADJECTIVES: &[&str] = &[
    "FUZZY", "FIZZY", "DIZZY", "JAZZY", "HAZY", "LAZY", "COZY", "ZIPPY",
    "HAPPY", "LUCKY", "SUNNY", "FUNNY", "BOLD", "BRAVE", "CRISP", "GRAND",
    "NOBLE", "ROYAL", "SLEEK", "SOLID", "SWIFT", "VIVID", "BIG", "RED",
    "TINY", "WILD", "CALM", "DARK", "WARM", "COOL", "AQUEOUS", "MALICIOUS",
    "GENTLE", "HUMBLE", "MELLOW", "SILENT", "GOLDEN", "HOLLOW", "QUIET",
    "RUSTIC", "VELVET", "FRAGRANT", "RADIANT", "WHIMSICAL",
];

/// Hyphenated adjectives
pub const COMPOUND_ADJECTIVES: &[&str] = &[
    "DRY-EYED", "LONG-ARMED", "SELF-TAUGHT", "WELL-READ", "OLD-FASHIONED",
    "RED-HOT", "ICE-COLD", "WIDE-EYED", "LOW-KEY", "HIGH-END",
    "FAR-OFF", "HALF-BAKED", "TWO-FACED", "BLUE-EYED", "OPEN-ENDED",
];

/// Definitions for a handful of the built-in words
const DEFINITIONS: &[(Category, &str, &[&str])] = &[
    (Category::SingleNoun, "RAVEN", &["A large black bird of the crow family."]),
    (Category::SingleNoun, "ADVICE", &["Guidance or recommendations offered with regard to future action."]),
    (
        Category::SingleNoun,
        "TOADSTOOL",
        &["The spore-bearing fruiting body of a fungus, typically poisonous."],
    ),
    (
        Category::SingleNoun,
        "BALL",
        &[
            "A solid or hollow spherical object used in games.",
            "A formal social gathering for dancing.",
        ],
    ),
    (Category::SingleNoun, "BUGLE", &["A brass instrument like a small trumpet."]),
    (Category::CompoundNoun, "AIR PUMP", &["A device for pumping air."]),
    (Category::CompoundNoun, "SEA MOSS", &["A red seaweed harvested for food."]),
    (Category::HyphenatedNoun, "HALF-MAST", &["The position of a flag lowered halfway as a sign of mourning."]),
    (Category::HyphenatedNoun, "WOULD-BE", &["A person who wants or aspires to be something."]),
    (
        Category::SingleAdjective,
        "FUZZY",
        &["Having a frizzy, fluffy, or frayed texture.", "Difficult to perceive clearly."],
    ),
    (Category::SingleAdjective, "AQUEOUS", &["Of or containing water."]),
    (Category::SingleAdjective, "MALICIOUS", &["Characterized by malice; intending harm."]),
    (Category::SingleAdjective, "HAZY", &["Covered by a haze.", "Vague, indistinct, or ill-defined."]),
    (Category::CompoundAdjective, "DRY-EYED", &["Not crying."]),
    (Category::CompoundAdjective, "SELF-TAUGHT", &["Having acquired knowledge without formal instruction."]),
];

impl WordCatalog {
    /// The embedded sample catalog
    pub fn builtin() -> Self {
        let mut catalog = WordCatalog::new()
            .with_words(Category::SingleNoun, SINGLE_NOUNS.iter().copied())
            .with_words(Category::CompoundNoun, COMPOUND_NOUNS.iter().copied())
            .with_words(Category::HyphenatedNoun, HYPHENATED_NOUNS.iter().copied())
            .with_words(Category::SingleAdjective, SINGLE_ADJECTIVES.iter().copied())
            .with_words(Category::CompoundAdjective, COMPOUND_ADJECTIVES.iter().copied());

        for (category, word, definitions) in DEFINITIONS {
            let defs = definitions.iter().map(|d| d.to_string()).collect();
            if let Some(entry) = catalog.lists[category.index()]
                .iter_mut()
                .find(|e| e.surface_form() == *word)
            {
                entry.definitions = Some(defs);
            }
        }

        tracing::debug!(words = catalog.total(), "Built-in word catalog ready");
        catalog
    }
}
