//! The three model-backed operations, wired from content to session memory.

use crate::content::{ContentStore, StandardId};
use crate::error::{FasError, Result};
use crate::language::Language;
use crate::llm::LlmGateway;
use crate::prompts::{PromptComposer, PromptPair, PromptRequest};
use crate::session::Session;
use indexmap::IndexMap;
use tracing::warn;

/// Result of checking a tutorial answer.
///
/// The expert solution is required for grading, so failing to produce it fails
/// the whole check. Feedback failure is reported alongside the expert solution.
#[derive(Debug)]
pub struct TutorialOutcome {
    pub expert_solution: String,
    pub feedback: Result<String>,
}

pub struct Tutor {
    content: ContentStore,
    composer: PromptComposer,
    gateway: Box<dyn LlmGateway>,
}

impl Tutor {
    pub fn new(gateway: Box<dyn LlmGateway>) -> Self {
        Self::with_content(ContentStore::builtin(), gateway)
    }

    pub fn with_content(content: ContentStore, gateway: Box<dyn LlmGateway>) -> Self {
        Self {
            content,
            composer: PromptComposer::new(),
            gateway,
        }
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    /// Prompt asking the model to explain a standard through its example
    pub fn explanation_prompt(&self, language: Language, id: StandardId) -> Result<PromptPair> {
        let standard = self.content.standard(id);
        let example = self.content.example(id);
        self.composer.compose(&PromptRequest::explain(
            language,
            standard.title.get(language),
            example.scenario.get(language),
        ))
    }

    /// Explain a standard and log the exchange as `Explain {id}`
    pub async fn explain(&self, session: &mut Session, id: StandardId) -> Result<String> {
        let explanation = self.expert_solution(session.language, id).await?;
        session
            .memory_mut()
            .record(format!("Explain {id}"), explanation.as_str());
        Ok(explanation)
    }

    /// The model's own worked solution to a standard's example, not logged
    pub async fn expert_solution(&self, language: Language, id: StandardId) -> Result<String> {
        let prompt = self.explanation_prompt(language, id)?;
        self.generate(&prompt).await
    }

    /// Grade a learner's answer against a reference solution
    pub async fn grade(
        &self,
        language: Language,
        id: StandardId,
        user_solution: &str,
        expert_solution: &str,
    ) -> Result<String> {
        let scenario = self.content.example(id).scenario.get(language);
        let prompt = self.composer.compose(&PromptRequest::grade(
            language,
            scenario,
            user_solution,
            expert_solution,
        ))?;
        self.generate(&prompt).await
    }

    /// Produce the expert solution, then grade the answer against it.
    ///
    /// A blank answer is rejected before any model call. Successful feedback
    /// is logged as `Check answer for {id}`.
    pub async fn check_answer(
        &self,
        session: &mut Session,
        id: StandardId,
        user_solution: &str,
    ) -> Result<TutorialOutcome> {
        if user_solution.trim().is_empty() {
            return Err(FasError::Validation {
                field: "user_solution",
            });
        }

        let language = session.language;
        let expert_solution = self.expert_solution(language, id).await?;

        let feedback = self
            .grade(language, id, user_solution, &expert_solution)
            .await;
        match &feedback {
            Ok(text) => session
                .memory_mut()
                .record(format!("Check answer for {id}"), text.as_str()),
            Err(err) => warn!(standard = %id, "feedback generation failed: {err}"),
        }

        Ok(TutorialOutcome {
            expert_solution,
            feedback,
        })
    }

    /// Answer a free-form question and log it under the question text
    pub async fn ask(&self, session: &mut Session, question: &str) -> Result<String> {
        let prompt = self
            .composer
            .compose(&PromptRequest::question(session.language, question))?;
        let answer = self.generate(&prompt).await?;
        session.memory_mut().record(question, answer.as_str());
        Ok(answer)
    }

    pub fn glossary(&self, language: Language) -> IndexMap<&'static str, &'static str> {
        self.content.get_glossary(language)
    }

    async fn generate(&self, prompt: &PromptPair) -> Result<String> {
        self.gateway.generate(prompt).await.map_err(FasError::from)
    }
}
