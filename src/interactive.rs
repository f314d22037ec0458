//! Interactive search session driven by inquire prompts

use inquire::{CustomType, InquireError, MultiSelect, Select, Text};

use phrase_forge::{
    search::{MAX_LENGTH, MIN_LENGTH},
    settings, Category, PhraseForgeError, Result, SearchSession, SettingsStore, SuperGroup,
    Template, WordCatalog,
};

use crate::print_results;

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Search,
    EditTemplate,
    ChangeLength,
    SetLetter,
    ChooseCategories,
    ToggleAll,
    SelectAdjective,
    SelectNoun,
    Favorite,
    Hide,
    Define,
    Reset,
    Quit,
}

impl Action {
    const ALL: [Action; 13] = [
        Action::Search,
        Action::EditTemplate,
        Action::ChangeLength,
        Action::SetLetter,
        Action::ChooseCategories,
        Action::ToggleAll,
        Action::SelectAdjective,
        Action::SelectNoun,
        Action::Favorite,
        Action::Hide,
        Action::Define,
        Action::Reset,
        Action::Quit,
    ];

    /// Actions that only make sense with results on screen
    fn needs_results(&self) -> bool {
        matches!(
            self,
            Action::SelectAdjective | Action::SelectNoun | Action::Favorite | Action::Hide | Action::Define
        )
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Search => write!(f, "🔍 Search"),
            Action::EditTemplate => write!(f, "🔤 Edit template"),
            Action::ChangeLength => write!(f, "📏 Change length"),
            Action::SetLetter => write!(f, "✏️  Set one letter"),
            Action::ChooseCategories => write!(f, "📚 Choose word categories"),
            Action::ToggleAll => write!(f, "🔁 Enable / disable all categories"),
            Action::SelectAdjective => write!(f, "🎨 Select adjective"),
            Action::SelectNoun => write!(f, "🧱 Select noun"),
            Action::Favorite => write!(f, "♥  Favorite / unfavorite a word"),
            Action::Hide => write!(f, "🙈 Hide a word"),
            Action::Define => write!(f, "📖 Show definitions"),
            Action::Reset => write!(f, "♻️  Reset"),
            Action::Quit => write!(f, "👋 Quit"),
        }
    }
}

/// Turn a cancelled prompt into `None`
fn answered<T>(result: std::result::Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(PhraseForgeError::from(e)),
    }
}

/// Run the session loop until the user quits
pub fn run(catalog: &WordCatalog, store: &mut impl SettingsStore) -> Result<()> {
    println!("🔥 Phrase Forge - adjective + noun template search");
    println!("═══════════════════════════════════════════════════");
    println!("📚 {} words loaded", catalog.total());

    let mut session = match settings::load_parameters(&*store) {
        Some(params) => match SearchSession::with_parameters(catalog, &params) {
            Ok(session) => {
                println!("↩️  Restored last search: {}", session.template());
                session
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saved parameters no longer valid");
                SearchSession::new(catalog)
            }
        },
        None => SearchSession::new(catalog),
    };

    loop {
        println!();
        println!("🔤 {}  ({} letters, {})", session.template(), session.template().len(), session.state());

        let actions: Vec<Action> = Action::ALL
            .into_iter()
            .filter(|a| session.has_results() || !a.needs_results())
            .collect();
        let Some(action) = answered(Select::new("What next?", actions).with_page_size(13).prompt())? else {
            break;
        };

        let outcome = match action {
            Action::Quit => break,
            Action::Search => session
                .search()
                .and_then(|()| settings::save_parameters(store, &session.parameters())),
            Action::EditTemplate => edit_template(&mut session),
            Action::ChangeLength => change_length(&mut session),
            Action::SetLetter => set_letter(&mut session),
            Action::ChooseCategories => choose_categories(&mut session),
            Action::ToggleAll => {
                session.toggle_all_categories();
                Ok(())
            }
            Action::SelectAdjective => select_word(&mut session, SuperGroup::Adjective),
            Action::SelectNoun => select_word(&mut session, SuperGroup::Noun),
            Action::Favorite => favorite_word(&mut session),
            Action::Hide => hide_word(&mut session),
            Action::Define => {
                show_definitions(&session);
                Ok(())
            }
            Action::Reset => {
                session.reset();
                println!("♻️  Search reset");
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {
                if session.has_results() && action != Action::Define {
                    print_results(&session);
                }
            }
            Err(e) if e.is_user_error() => println!("{}", e.user_message()),
            Err(e) => return Err(e),
        }
    }

    println!("👋 Bye!");
    Ok(())
}

fn edit_template(session: &mut SearchSession<'_>) -> Result<()> {
    let current = session.template().to_string();
    let Some(pattern) = answered(
        Text::new("Template:")
            .with_default(&current)
            .with_help_message("Letters are fixed, _ . ? match any letter, spaces are ignored")
            .prompt(),
    )?
    else {
        return Ok(());
    };

    session.set_template(Template::parse(&pattern)?);
    Ok(())
}

fn change_length(session: &mut SearchSession<'_>) -> Result<()> {
    let Some(length) = answered(
        CustomType::<usize>::new("How many letters?")
            .with_default(session.template().len())
            .with_help_message(&format!("Between {} and {}", MIN_LENGTH, MAX_LENGTH))
            .with_error_message("Please type a whole number")
            .prompt(),
    )?
    else {
        return Ok(());
    };

    session.set_template_length(length)
}

fn set_letter(session: &mut SearchSession<'_>) -> Result<()> {
    let len = session.template().len();
    let Some(position) = answered(
        CustomType::<usize>::new("Position:")
            .with_help_message(&format!("1 to {}", len))
            .with_error_message("Please type a whole number")
            .prompt(),
    )?
    else {
        return Ok(());
    };
    if position == 0 {
        return Err(PhraseForgeError::validation("Positions start at 1"));
    }

    let Some(letter) = answered(
        Text::new("Letter:")
            .with_help_message("Leave empty to clear the slot")
            .prompt(),
    )?
    else {
        return Ok(());
    };

    let letter = letter.trim().chars().next();
    session.set_slot_letter(position - 1, letter)
}

fn choose_categories(session: &mut SearchSession<'_>) -> Result<()> {
    let defaults: Vec<usize> = Category::ALL
        .iter()
        .enumerate()
        .filter(|(_, c)| session.categories().contains(**c))
        .map(|(i, _)| i)
        .collect();

    let Some(chosen) = answered(
        MultiSelect::new("Word categories:", Category::ALL.to_vec())
            .with_default(&defaults)
            .prompt(),
    )?
    else {
        return Ok(());
    };

    for category in Category::ALL {
        if session.categories().contains(category) != chosen.contains(&category) {
            session.toggle_category(category);
        }
    }
    Ok(())
}

fn select_word(session: &mut SearchSession<'_>, group: SuperGroup) -> Result<()> {
    const CLEAR: &str = "(clear selection)";

    let view = session.view(group);
    let narrowed = session.narrowed(group);
    let mut options: Vec<String> = vec![CLEAR.to_string()];
    options.extend(
        view.favorites
            .iter()
            .filter(|f| narrowed.iter().any(|w| w.surface_form() == f.as_str()))
            .cloned(),
    );
    options.extend(view.match_words().into_iter().map(str::to_string));

    let Some(choice) = answered(Select::new(&format!("Select {}:", group), options).prompt())? else {
        return Ok(());
    };

    if choice == CLEAR {
        session.pin(group, None)
    } else {
        session.pin(group, Some(&choice))
    }
}

fn pick_group() -> Result<Option<SuperGroup>> {
    answered(Select::new("Which list?", vec![SuperGroup::Adjective, SuperGroup::Noun]).prompt())
}

fn favorite_word(session: &mut SearchSession<'_>) -> Result<()> {
    let Some(group) = pick_group()? else {
        return Ok(());
    };

    let view = session.view(group);
    let mut options: Vec<String> = view.favorites.clone();
    options.extend(view.match_words().into_iter().map(str::to_string));
    if options.is_empty() {
        return Err(PhraseForgeError::validation(format!("No {}s to favorite", group)));
    }

    let Some(word) = answered(Select::new("Favorite:", options).prompt())? else {
        return Ok(());
    };
    if session.favorite(group, &word) {
        println!("♥ {} added to favorites", word);
    } else {
        println!("♡ {} removed from favorites", word);
    }
    Ok(())
}

fn hide_word(session: &mut SearchSession<'_>) -> Result<()> {
    let Some(group) = pick_group()? else {
        return Ok(());
    };

    let options: Vec<String> = session
        .view(group)
        .match_words()
        .into_iter()
        .map(str::to_string)
        .collect();
    if options.is_empty() {
        return Err(PhraseForgeError::validation(format!("No {}s to hide", group)));
    }

    let Some(word) = answered(Select::new("Hide:", options).prompt())? else {
        return Ok(());
    };
    session.hide(group, &word);
    Ok(())
}

fn show_definitions(session: &SearchSession<'_>) {
    let pinned: Vec<_> = [SuperGroup::Adjective, SuperGroup::Noun]
        .into_iter()
        .filter_map(|g| session.pinned(g).map(|w| (g, w)))
        .collect();

    if pinned.is_empty() {
        println!("💡 Select an adjective or noun first");
        return;
    }

    for (group, word) in pinned {
        println!();
        println!("📖 {} ({})", word.surface_form(), group.abbreviation());
        match session.definitions(group, word.surface_form()) {
            Some(definitions) => {
                for (i, definition) in definitions.iter().enumerate() {
                    println!("   {}. {}", i + 1, definition);
                }
            }
            None => println!("   No definitions found."),
        }
    }
}
