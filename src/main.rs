//! Phrase Forge - adjective + noun finder for letter templates
//!
//! One-shot search, definition lookup, or an interactive session that keeps
//! results current as the template changes.

mod interactive;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use phrase_forge::{
    search::render_tiles, AppConfig, Category, CategorySelection, DisplayList, JsonFileSettings,
    PhraseForgeError, SearchSession, SuperGroup, Template, WordCatalog,
};

/// Find adjective + noun pairs that fill a fixed-length letter template
#[derive(Parser, Debug)]
#[command(name = "phrase-forge")]
#[command(about = "Find adjective + noun pairs that fill a fixed-length letter template", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory with word list JSON files (built-in lists when omitted)
    #[arg(long, global = true, value_name = "DIR")]
    words: Option<PathBuf>,

    /// Settings file used to remember the last search
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search once and print the matching adjectives and nouns
    Search(SearchArgs),
    /// Show the definitions of a word
    Define {
        /// Word as written in the word list (case-insensitive)
        word: String,
    },
    /// Interactive session (default)
    Interactive,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Template, e.g. "___Z_B_L_" (letters fixed; _ . ? any letter; spaces ignored)
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Include single-word nouns
    #[arg(long)]
    nouns: bool,

    /// Include compound nouns ("air pump")
    #[arg(long)]
    compound_nouns: bool,

    /// Include hyphenated nouns ("half-mast")
    #[arg(long)]
    hyphenated_nouns: bool,

    /// Include single-word adjectives
    #[arg(long)]
    adjectives: bool,

    /// Include hyphenated adjectives ("dry-eyed")
    #[arg(long)]
    compound_adjectives: bool,

    /// Include every category
    #[arg(long, conflicts_with_all = ["nouns", "compound_nouns", "hyphenated_nouns", "adjectives", "compound_adjectives"])]
    all: bool,

    /// Select an adjective; only nouns that complete it are listed
    #[arg(long, value_name = "WORD")]
    adjective: Option<String>,

    /// Select a noun; only adjectives that complete it are listed
    #[arg(long, value_name = "WORD")]
    noun: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    /// Chosen categories; nouns + adjectives when no flag is given
    fn categories(&self) -> CategorySelection {
        if self.all {
            return CategorySelection::all();
        }

        let flags = [
            (Category::SingleNoun, self.nouns),
            (Category::CompoundNoun, self.compound_nouns),
            (Category::HyphenatedNoun, self.hyphenated_nouns),
            (Category::SingleAdjective, self.adjectives),
            (Category::CompoundAdjective, self.compound_adjectives),
        ];
        if flags.iter().all(|(_, on)| !on) {
            return CategorySelection::default();
        }
        flags
            .into_iter()
            .filter(|(_, on)| *on)
            .map(|(category, _)| category)
            .collect()
    }
}

#[derive(Serialize)]
struct SearchOutput<'c> {
    template: String,
    length: usize,
    preview: String,
    adjectives: DisplayList<'c>,
    nouns: DisplayList<'c>,
}

fn main() -> ExitCode {
    // Initialize the library
    if let Err(e) = phrase_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(words) = cli.words.clone() {
        config.words_dir = Some(words);
    }
    if let Some(settings) = cli.settings.clone() {
        config.settings_path = settings;
    }
    init_logging(&config.log_filter);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<PhraseForgeError>() {
                Some(err) => eprintln!("{}", err.user_message()),
                None => eprintln!("❌ Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    config.validate()?;
    let catalog = load_catalog(config)?;

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Search(args) => run_search(&catalog, &args)?,
        Command::Define { word } => run_define(&catalog, &word),
        Command::Interactive => {
            let mut settings = JsonFileSettings::open(&config.settings_path).with_context(|| {
                format!("opening settings file {}", config.settings_path.display())
            })?;
            interactive::run(&catalog, &mut settings)?;
        }
    }

    Ok(())
}

fn load_catalog(config: &AppConfig) -> anyhow::Result<WordCatalog> {
    match &config.words_dir {
        Some(dir) => {
            WordCatalog::from_dir(dir).with_context(|| format!("loading word lists from {}", dir.display()))
        }
        None => Ok(WordCatalog::builtin()),
    }
}

/// One-shot search
fn run_search(catalog: &WordCatalog, args: &SearchArgs) -> phrase_forge::Result<()> {
    let template = Template::parse(&args.pattern)?;
    let mut session = SearchSession::new(catalog);
    session.set_template(template);
    for category in Category::ALL {
        if session.categories().contains(category) != args.categories().contains(category) {
            session.toggle_category(category);
        }
    }
    session.search()?;

    if let Some(word) = &args.adjective {
        session.pin(SuperGroup::Adjective, Some(word))?;
    }
    if let Some(word) = &args.noun {
        session.pin(SuperGroup::Noun, Some(word))?;
    }

    if args.json {
        let output = SearchOutput {
            template: session.template().to_string(),
            length: session.template().len(),
            preview: render_tiles(&session.preview()),
            adjectives: session.view(SuperGroup::Adjective),
            nouns: session.view(SuperGroup::Noun),
        };
        let json = serde_json::to_string_pretty(&output)?;
        println!("{}", json);
    } else {
        print_results(&session);
    }

    Ok(())
}

/// Print both result columns of a session
pub(crate) fn print_results(session: &SearchSession<'_>) {
    let template = session.template();
    println!();
    println!("🔤 Template: {} ({} letters)", template, template.len());
    if session.pinned(SuperGroup::Adjective).is_some() || session.pinned(SuperGroup::Noun).is_some() {
        println!("🧩 Preview:  {}", render_tiles(&session.preview()));
    }

    let adjectives = session.view(SuperGroup::Adjective);
    let nouns = session.view(SuperGroup::Noun);
    if adjectives.is_empty() && nouns.is_empty() {
        println!();
        println!("😔 No adjective + noun pairs fit this template. Try fewer letters or more categories.");
        return;
    }

    print_column("🎨 Matching Adjectives", &adjectives, session.pinned(SuperGroup::Adjective));
    print_column("🧱 Matching Nouns", &nouns, session.pinned(SuperGroup::Noun));
}

fn print_column(title: &str, list: &DisplayList<'_>, pinned: Option<&phrase_forge::WordEntry>) {
    println!();
    println!("{} ({}):", title, list.favorites.len() + list.matches.len());
    println!("─────────────────────────");

    let marker = |word: &str| {
        if pinned.map_or(false, |p| p.surface_form() == word) {
            "✅"
        } else {
            "  "
        }
    };

    for word in &list.favorites {
        println!("{} ♥ {}", marker(word), word);
    }
    if !list.favorites.is_empty() {
        println!("   ···");
    }
    for word in list.match_words() {
        println!("{}   {}", marker(word), word);
    }
}

fn run_define(catalog: &WordCatalog, word: &str) {
    let mut found = false;
    for category in Category::ALL {
        let Some(entry) = catalog
            .entries(category)
            .iter()
            .find(|e| e.surface_form().eq_ignore_ascii_case(word))
        else {
            continue;
        };
        found = true;

        println!();
        println!("📖 {} ({}) - {}", entry.surface_form(), category.super_group().abbreviation(), category);
        match entry.definitions() {
            Some(definitions) if !definitions.is_empty() => {
                for (i, definition) in definitions.iter().enumerate() {
                    println!("   {}. {}", i + 1, definition);
                }
            }
            _ => println!("   No definitions found."),
        }
    }

    if !found {
        println!("❌ '{}' is not in any word list.", word);
    }
}
