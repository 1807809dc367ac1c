use super::{AppContext, print_page_header};
use anyhow::Result;
use fastutor_core::ContentStore;
use fastutor_core::ui::UiText;

/// Handle the glossary command
pub fn handle_glossary_command(app: &AppContext) -> Result<()> {
    print_glossary(app, &ContentStore::builtin(), app.language());
    Ok(())
}

/// `**term**: definition` entries separated by rules
pub fn print_glossary(app: &AppContext, store: &ContentStore, language: fastutor_core::Language) {
    let text = UiText::get(language);
    print_page_header(text.glossary_heading, text.glossary_intro);

    for (term, definition) in store.get_glossary(language) {
        app.renderer.print(&format!("**{term}**: {definition}"));
        app.renderer.print("---");
    }
}
