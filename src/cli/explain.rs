use super::standards::print_standard_overview;
use super::{AppContext, with_spinner};
use anyhow::{Context, Result};
use fastutor_core::ui::UiText;
use fastutor_core::{Session, StandardId, Tutor};

/// Handle the explain command - show a standard and explain its example
pub async fn handle_explain_command(app: &AppContext, tutor: &Tutor, standard: &str) -> Result<()> {
    let id: StandardId = standard
        .parse()
        .with_context(|| format!("'{standard}' is not one of FAS 4, 7, 10, 28 or 32"))?;
    let mut session = Session::start(app.language());
    let text = UiText::get(session.language);

    print_standard_overview(app, tutor.content(), id, session.language);

    let explanation = with_spinner(
        text.generating_explanation,
        tutor.explain(&mut session, id),
    )
    .await
    .context("failed to generate explanation")?;

    app.print_section(text.explanation_heading, &explanation);
    Ok(())
}
