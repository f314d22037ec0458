//! Integration tests for phrase-forge

use phrase_forge::{
    search::{match_category, reduce},
    settings::{load_parameters, save_parameters},
    Category, CategorySelection, MemorySettings, PhraseForgeError, SearchSession, SessionState,
    SuperGroup, Template, WordCatalog, WordEntry,
};

fn puzzle_catalog() -> WordCatalog {
    WordCatalog::new()
        .with_words(Category::SingleNoun, ["BUGLE", "BALL", "BELL", "GRAPE", "BULL", "TABLE"])
        .with_words(Category::CompoundNoun, ["SEA MOSS", "AIR PUMP"])
        .with_words(Category::HyphenatedNoun, ["X-RAY", "YO-YO"])
        .with_words(Category::SingleAdjective, ["FUZZY", "HAZY", "BIG", "FIZZY", "COZY"])
        .with_words(Category::CompoundAdjective, ["RED-HOT", "LOW-KEY"])
}

fn words(list: &[&WordEntry]) -> Vec<String> {
    list.iter().map(|w| w.surface_form().to_string()).collect()
}

fn searched<'c>(catalog: &'c WordCatalog, pattern: &str) -> SearchSession<'c> {
    let mut session = SearchSession::new(catalog);
    session.set_template(Template::parse(pattern).unwrap());
    session.search().unwrap();
    session
}

#[test]
fn test_zbl_scenario() {
    let catalog = puzzle_catalog();
    let session = searched(&catalog, "_ _ _ Z _ B _ L _");

    let adjectives = words(session.candidates(SuperGroup::Adjective));
    let nouns = words(session.candidates(SuperGroup::Noun));

    assert_eq!(adjectives, vec!["FUZZY", "FIZZY"]);
    assert_eq!(nouns, vec!["BALL", "BELL", "BULL"]);

    // FUZZY + BUGLE would be 10 letters
    assert!(!nouns.contains(&"BUGLE".to_string()));
    // HAZY puts a Y where the Z must go
    assert!(!adjectives.contains(&"HAZY".to_string()));

    for adjective in session.candidates(SuperGroup::Adjective) {
        for noun in session.candidates(SuperGroup::Noun) {
            assert_eq!(adjective.letter_count() + noun.letter_count(), 9);
        }
    }
}

#[test]
fn test_length_filter_property() {
    let catalog = puzzle_catalog();
    let template = Template::parse("____").unwrap();
    for category in Category::ALL {
        for word in match_category(catalog.entries(category), category, &template) {
            assert!(word.letter_count() <= template.len());
        }
    }
}

#[test]
fn test_mutual_coverage_against_unreduced_sets() {
    let catalog = puzzle_catalog();
    let template = Template::parse("_______Y").unwrap();

    let adjectives: Vec<_> = [Category::SingleAdjective, Category::CompoundAdjective]
        .into_iter()
        .flat_map(|c| match_category(catalog.entries(c), c, &template))
        .collect();
    let nouns: Vec<_> = [Category::SingleNoun, Category::CompoundNoun, Category::HyphenatedNoun]
        .into_iter()
        .flat_map(|c| match_category(catalog.entries(c), c, &template))
        .collect();

    let (reduced_adj, reduced_nouns) = reduce(adjectives.clone(), nouns.clone(), 8);
    assert!(!reduced_adj.is_empty());
    for a in &reduced_adj {
        assert!(nouns.iter().any(|n| n.letter_count() == 8 - a.letter_count()));
    }
    for n in &reduced_nouns {
        assert!(adjectives.iter().any(|a| a.letter_count() == 8 - n.letter_count()));
    }
}

#[test]
fn test_pin_narrowing_and_unpin_restores() {
    let catalog = WordCatalog::new()
        .with_words(Category::SingleNoun, ["BALL", "CAMEL", "GEL"])
        .with_words(Category::SingleAdjective, ["FUZZY", "COOL", "MELLOW"]);
    let mut session = searched(&catalog, "________L");

    let before = session.narrowed(SuperGroup::Noun);
    session.pin(SuperGroup::Adjective, Some("COOL")).unwrap();
    let narrowed = session.narrowed(SuperGroup::Noun);
    assert_eq!(words(&narrowed), vec!["CAMEL"]);
    assert!(narrowed.iter().all(|n| n.letter_count() == 9 - 4));

    // a new pin replaces the old one
    session.pin(SuperGroup::Adjective, Some("MELLOW")).unwrap();
    assert_eq!(words(&session.narrowed(SuperGroup::Noun)), vec!["GEL"]);

    session.pin(SuperGroup::Adjective, None).unwrap();
    assert_eq!(session.narrowed(SuperGroup::Noun), before);
}

#[test]
fn test_category_toggle_is_idempotent() {
    let catalog = puzzle_catalog();
    let mut session = searched(&catalog, "________Y");
    session.toggle_category(Category::HyphenatedNoun);
    let original_adj = words(session.candidates(SuperGroup::Adjective));
    let original_nouns = words(session.candidates(SuperGroup::Noun));

    for category in Category::ALL {
        session.toggle_category(category);
        session.toggle_category(category);
        assert_eq!(words(session.candidates(SuperGroup::Adjective)), original_adj);
        assert_eq!(words(session.candidates(SuperGroup::Noun)), original_nouns);
    }
}

#[test]
fn test_empty_side_means_no_results() {
    let catalog = puzzle_catalog();
    let mut session = searched(&catalog, "___Z_B_L_");
    session.toggle_category(Category::SingleAdjective);

    assert_eq!(session.state(), SessionState::ResultsReady);
    assert!(session.candidates(SuperGroup::Adjective).is_empty());
    assert!(session.candidates(SuperGroup::Noun).is_empty());
}

#[test]
fn test_favorite_and_hide_precedence() {
    let catalog = puzzle_catalog();
    let mut session = searched(&catalog, "___Z_B_L_");

    session.hide(SuperGroup::Noun, "BALL");
    let view = session.view(SuperGroup::Noun);
    assert_eq!(view.match_words(), vec!["BELL", "BULL"]);

    // favoriting a hidden word shows it among favorites only
    assert!(session.favorite(SuperGroup::Noun, "BALL"));
    session.favorite(SuperGroup::Noun, "BULL");
    let view = session.view(SuperGroup::Noun);
    assert_eq!(view.favorites, vec!["BALL".to_string(), "BULL".to_string()]);
    assert_eq!(view.match_words(), vec!["BELL"]);

    // hiding a favorite keeps it in favorites
    session.hide(SuperGroup::Noun, "BULL");
    let view = session.view(SuperGroup::Noun);
    assert_eq!(view.favorites, vec!["BALL".to_string(), "BULL".to_string()]);

    // overlays are per super-group
    assert!(session.view(SuperGroup::Adjective).favorites.is_empty());
}

#[test]
fn test_favorites_survive_refilter() {
    let catalog = puzzle_catalog();
    let mut session = searched(&catalog, "___Z_B_L_");
    session.favorite(SuperGroup::Noun, "BULL");
    session.set_slot_letter(6, Some('E')).unwrap();

    let view = session.view(SuperGroup::Noun);
    assert_eq!(view.favorites, vec!["BULL".to_string()]);
    assert_eq!(view.match_words(), vec!["BELL"]);
}

#[test]
fn test_reset_keeps_catalog_usable() {
    let catalog = puzzle_catalog();
    let mut session = searched(&catalog, "___Z_B_L_");
    session.pin(SuperGroup::Noun, Some("BALL")).unwrap();
    session.favorite(SuperGroup::Adjective, "FUZZY");
    session.hide(SuperGroup::Noun, "BELL");

    session.reset();
    assert_eq!(session.state(), SessionState::Empty);
    assert!(session.pinned(SuperGroup::Noun).is_none());
    assert!(session.overlay(SuperGroup::Adjective).is_empty());
    assert!(session.overlay(SuperGroup::Noun).is_empty());
    assert_eq!(session.template().len(), 9);
    assert_eq!(session.categories(), &CategorySelection::default());

    session.set_template(Template::parse("___Z_B_L_").unwrap());
    session.search().unwrap();
    assert_eq!(words(session.candidates(SuperGroup::Noun)), vec!["BALL", "BELL", "BULL"]);
    assert!(session.view(SuperGroup::Noun).match_words().contains(&"BELL"));
}

#[test]
fn test_compound_words_match_on_letters_only() {
    let catalog = puzzle_catalog();
    let mut session = SearchSession::new(&catalog);
    session.set_template(Template::parse("L________Y").unwrap());
    session.toggle_all_categories();
    session.search().unwrap();

    // LOWKEY (6) + XRAY (4); separators never take a slot
    assert_eq!(words(session.candidates(SuperGroup::Adjective)), vec!["LOW-KEY"]);
    assert_eq!(words(session.candidates(SuperGroup::Noun)), vec!["X-RAY"]);
}

#[test]
fn test_validation_errors() {
    let catalog = puzzle_catalog();
    let mut session = SearchSession::new(&catalog);

    let err = session.search().unwrap_err();
    assert!(matches!(err, PhraseForgeError::Validation { .. }));

    assert!(session.set_template_length(3).is_err());
    assert!(session.set_template_length(51).is_err());
    assert!(session.set_slot_letter(20, Some('A')).is_err());
}

#[test]
fn test_parameters_persist_across_sessions() {
    let catalog = puzzle_catalog();
    let mut store = MemorySettings::new();

    let mut session = searched(&catalog, "___Z_B_L_");
    session.toggle_category(Category::CompoundAdjective);
    save_parameters(&mut store, &session.parameters()).unwrap();

    let params = load_parameters(&store).unwrap();
    let restored = SearchSession::with_parameters(&catalog, &params).unwrap();
    assert_eq!(restored.template().to_string(), "___Z_B_L_");
    assert!(restored.categories().contains(Category::CompoundAdjective));
    assert_eq!(restored.state(), SessionState::Configuring);
}

#[test]
fn test_builtin_catalog_default_puzzle() {
    let catalog = WordCatalog::builtin();
    let session = searched(&catalog, "F__Z_B_L_");

    let adjectives = words(session.candidates(SuperGroup::Adjective));
    let nouns = words(session.candidates(SuperGroup::Noun));
    assert!(adjectives.contains(&"FUZZY".to_string()));
    assert!(adjectives.contains(&"FIZZY".to_string()));
    assert!(nouns.contains(&"BALL".to_string()));
    assert!(nouns.contains(&"BELL".to_string()));
}

#[test]
fn test_catalog_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("single_nouns.json"), r#"["BALL", "BELL", {"word": "BULL"}]"#).unwrap();
    std::fs::write(
        dir.path().join("single_nouns_definitions.json"),
        r#"[{"word": "BELL", "definitions": ["a hollow metal cup that rings"]}]"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("single_adjectives.json"), r#"["FUZZY", "HAZY"]"#).unwrap();

    let catalog = WordCatalog::from_dir(dir.path()).unwrap();
    assert_eq!(catalog.len(Category::SingleNoun), 3);
    assert!(catalog.entries(Category::CompoundNoun).is_empty());
    assert_eq!(
        catalog.definitions(Category::SingleNoun, "BELL").map(|d| d.len()),
        Some(1)
    );

    let session = searched(&catalog, "___Z_B_L_");
    assert_eq!(words(session.candidates(SuperGroup::Adjective)), vec!["FUZZY"]);
    assert_eq!(words(session.candidates(SuperGroup::Noun)), vec!["BALL", "BELL", "BULL"]);
    assert!(session.definitions(SuperGroup::Noun, "BELL").is_some());
}

#[test]
fn test_catalog_from_bad_dir() {
    let dir = tempfile::tempdir().unwrap();
    assert!(WordCatalog::from_dir(&dir.path().join("missing")).is_err());

    std::fs::write(dir.path().join("single_nouns.json"), "{not json").unwrap();
    let err = WordCatalog::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, PhraseForgeError::Catalog { category: Category::SingleNoun, .. }));
}

#[test]
fn test_error_handling() {
    let error = PhraseForgeError::validation("test error".to_string());
    assert!(error.to_string().contains("test error"));

    let error = PhraseForgeError::config("config error".to_string());
    assert!(error.to_string().contains("config error"));

    let error = PhraseForgeError::internal("internal error");
    assert!(error.to_string().contains("internal error"));
}

#[test]
fn test_library_initialization() {
    let result = phrase_forge::init();
    assert!(result.is_ok());
}
