use super::standards::print_scenario;
use super::{AppContext, with_spinner};
use anyhow::{Context, Result};
use console::style;
use fastutor_core::ui::UiText;
use fastutor_core::{Session, StandardId, Tutor, TutorialOutcome};

/// Handle the tutorial command - grade an answer without prompting
pub async fn handle_tutorial_command(
    app: &AppContext,
    tutor: &Tutor,
    standard: &str,
    answer: &str,
) -> Result<()> {
    let id: StandardId = standard
        .parse()
        .with_context(|| format!("'{standard}' is not one of FAS 4, 7, 10, 28 or 32"))?;
    let mut session = Session::start(app.language());

    print_scenario(app, tutor.content(), id, session.language);
    check_and_print(app, tutor, &mut session, id, answer)
        .await
        .context("failed to check answer")
}

/// Grade `answer` and print feedback plus the expert solution.
///
/// Only a failed expert solution is returned as an error; a failed grading
/// call is printed inline.
pub async fn check_and_print(
    app: &AppContext,
    tutor: &Tutor,
    session: &mut Session,
    id: StandardId,
    answer: &str,
) -> fastutor_core::Result<()> {
    let text = UiText::get(session.language);
    let TutorialOutcome {
        expert_solution,
        feedback,
    } = with_spinner(text.analyzing_answer, tutor.check_answer(session, id, answer)).await?;

    match feedback {
        Ok(feedback) => {
            app.print_section(text.feedback_heading, &feedback);
            app.print_section(text.expert_solution_heading, &expert_solution);
        }
        Err(err) => eprintln!("{}", style(format!("{}: {err}", text.feedback_error)).red()),
    }
    Ok(())
}
