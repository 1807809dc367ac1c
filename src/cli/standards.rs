use super::{AppContext, print_page_header};
use anyhow::Result;
use console::style;
use fastutor_core::ui::UiText;
use fastutor_core::{ContentStore, Language, StandardId};

/// Handle the standards command - list every standard with its summary
pub fn handle_standards_command(app: &AppContext) -> Result<()> {
    let language = app.language();
    let text = UiText::get(language);
    let store = ContentStore::builtin();

    print_page_header(text.explorer_heading, text.explorer_intro);
    for standard in store.standards() {
        println!("{}", style(standard.heading(language)).bold());
        println!("  {}", standard.description.get(language));
        println!();
    }
    Ok(())
}

/// "{id} - {title}", the description, then the worked example
pub fn print_standard_overview(
    app: &AppContext,
    store: &ContentStore,
    id: StandardId,
    language: Language,
) {
    let standard = store.standard(id);
    let example = store.example(id);

    app.renderer.print(&format!(
        "### {}\n\n{}\n\n#### {}\n\n{}",
        standard.heading(language),
        standard.description.get(language),
        example.title.get(language),
        example.scenario.get(language),
    ));
}

/// Example title and scenario only, as shown on the tutorial page
pub fn print_scenario(app: &AppContext, store: &ContentStore, id: StandardId, language: Language) {
    let example = store.example(id);
    app.renderer.print(&format!(
        "### {}\n\n{}",
        example.title.get(language),
        example.scenario.get(language),
    ));
}
