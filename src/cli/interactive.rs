//! The five-page interactive session
//!
//! Each loop iteration renders the current page, runs its interaction, then
//! shows the navigation menu. A failed model call ends only the interaction
//! that made it.

use super::glossary::print_glossary;
use super::standards::{print_scenario, print_standard_overview};
use super::tutorial::check_and_print;
use super::{AppContext, print_error, print_page_header, with_spinner};
use anyhow::Result;
use console::{Term, style};
use dialoguer::{Confirm, Select};
use fastutor_core::ui::{Page, UiText};
use fastutor_core::{Language, Session, StandardId, Tutor};

enum MenuChoice {
    Go(Page),
    ToggleLanguage,
    Quit,
}

/// Handle the interactive command
pub async fn handle_interactive_command(app: &AppContext, tutor: &Tutor) -> Result<()> {
    let mut session = Session::start(app.language());
    print_banner(session.language);

    loop {
        match session.router.current() {
            Page::Home => app.renderer.print(UiText::get(session.language).home_body),
            Page::StandardsExplorer => standards_explorer(app, tutor, &mut session).await?,
            Page::InteractiveTutorial => interactive_tutorial(app, tutor, &mut session).await?,
            Page::Glossary => print_glossary(app, tutor.content(), session.language),
            Page::CustomQuestion => custom_question(app, tutor, &mut session).await?,
        }

        match navigation_menu(&session)? {
            MenuChoice::Go(page) => session.router.navigate(page),
            MenuChoice::ToggleLanguage => {
                let language = session.toggle_language();
                print_banner(language);
            }
            MenuChoice::Quit => break,
        }
    }

    Ok(())
}

fn print_banner(language: Language) {
    let text = UiText::get(language);
    println!();
    println!("{}", style(text.app_title).green().bold());
    println!("{}", style(text.app_subtitle).dim());
}

fn navigation_menu(session: &Session) -> Result<MenuChoice> {
    let language = session.language;
    let text = UiText::get(language);

    let mut items: Vec<String> = Page::ALL
        .iter()
        .map(|page| page.name(language).to_string())
        .collect();
    items.push(format!(
        "{} → {}",
        text.switch_language,
        language.toggled().label()
    ));
    items.push(text.quit.to_string());

    let current = Page::ALL
        .iter()
        .position(|page| *page == session.router.current())
        .unwrap_or(0);

    println!();
    let selection = Select::new()
        .with_prompt(format!("{} · {}", text.navigation, text.go_to))
        .items(&items)
        .default(current)
        .interact_opt()?;

    Ok(match selection {
        Some(index) if index < Page::ALL.len() => MenuChoice::Go(Page::ALL[index]),
        Some(index) if index == Page::ALL.len() => MenuChoice::ToggleLanguage,
        _ => MenuChoice::Quit,
    })
}

fn select_standard(tutor: &Tutor, language: Language, prompt: &str) -> Result<Option<StandardId>> {
    let items: Vec<String> = tutor
        .content()
        .standards()
        .map(|standard| standard.heading(language))
        .collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(selection.and_then(|index| StandardId::ALL.get(index).copied()))
}

/// Read lines until an empty one; the text-area stand-in
fn read_multiline(prompt: &str, hint: &str) -> Result<String> {
    println!("{} {}", style(prompt).bold(), style(hint).dim());

    let term = Term::stdout();
    let mut lines = Vec::new();
    loop {
        let line = term.read_line()?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

async fn standards_explorer(app: &AppContext, tutor: &Tutor, session: &mut Session) -> Result<()> {
    let language = session.language;
    let text = UiText::get(language);
    print_page_header(text.explorer_heading, text.explorer_intro);

    let Some(id) = select_standard(tutor, language, text.standard_label)? else {
        return Ok(());
    };
    print_standard_overview(app, tutor.content(), id, language);

    let wants_explanation = Confirm::new()
        .with_prompt(text.get_explanation)
        .default(true)
        .interact()?;
    if !wants_explanation {
        return Ok(());
    }

    match with_spinner(text.generating_explanation, tutor.explain(session, id)).await {
        Ok(explanation) => app.print_section(text.explanation_heading, &explanation),
        Err(err) => print_error(language, err),
    }
    Ok(())
}

async fn interactive_tutorial(
    app: &AppContext,
    tutor: &Tutor,
    session: &mut Session,
) -> Result<()> {
    let language = session.language;
    let text = UiText::get(language);
    print_page_header(text.tutorial_heading, text.tutorial_intro);

    let Some(id) = select_standard(tutor, language, text.tutorial_select)? else {
        return Ok(());
    };
    print_scenario(app, tutor.content(), id, language);

    let answer = read_multiline(text.enter_solution, text.multiline_hint)?;
    if answer.trim().is_empty() {
        println!("{}", style(text.empty_input).yellow());
        return Ok(());
    }
    println!("{}", style(text.check_answer).dim());

    if let Err(err) = check_and_print(app, tutor, session, id, &answer).await {
        print_error(language, err);
    }
    Ok(())
}

async fn custom_question(app: &AppContext, tutor: &Tutor, session: &mut Session) -> Result<()> {
    let language = session.language;
    let text = UiText::get(language);
    print_page_header(text.question_heading, text.question_intro);

    let question = read_multiline(text.your_question, text.multiline_hint)?;
    if question.trim().is_empty() {
        println!("{}", style(text.empty_input).yellow());
        return Ok(());
    }
    println!("{}", style(text.get_answer).dim());

    match with_spinner(text.generating_answer, tutor.ask(session, &question)).await {
        Ok(answer) => app.print_section(text.answer_heading, &answer),
        Err(err) => print_error(language, err),
    }
    Ok(())
}
