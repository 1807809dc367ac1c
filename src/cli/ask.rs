use super::{AppContext, with_spinner};
use anyhow::{Context, Result};
use fastutor_core::ui::UiText;
use fastutor_core::{Session, Tutor};

/// Handle the ask command - answer one free-form question
pub async fn handle_ask_command(app: &AppContext, tutor: &Tutor, question: &str) -> Result<()> {
    if question.trim().is_empty() {
        anyhow::bail!("No question provided. Use: fastutor ask \"Your question here\"");
    }

    let mut session = Session::start(app.language());
    let text = UiText::get(session.language);

    let answer = with_spinner(text.generating_answer, tutor.ask(&mut session, question))
        .await
        .context("failed to generate answer")?;

    app.print_section(text.answer_heading, &answer);
    Ok(())
}
