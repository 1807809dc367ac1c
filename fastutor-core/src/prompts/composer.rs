//! Typed prompt composition for the three LLM intents.

use super::templates::{self, IntentTemplates};
use crate::error::{FasError, Result};
use crate::language::Language;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Which kind of prompt is being composed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    Explain,
    Grade,
    Question,
}

impl IntentKind {
    /// Variable names each intent requires, in template order
    pub fn required_variables(self) -> &'static [&'static str] {
        match self {
            Self::Explain => &["standard_title", "scenario"],
            Self::Grade => &["scenario", "user_solution", "expert_solution"],
            Self::Question => &["question"],
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Explain => "explain",
            Self::Grade => "grade",
            Self::Question => "question",
        })
    }
}

/// Variables for explaining a standard through its example scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplainStandard<'a> {
    pub standard_title: &'a str,
    pub scenario: &'a str,
}

/// Variables for grading a learner's answer against a reference solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeAnswer<'a> {
    pub scenario: &'a str,
    pub user_solution: &'a str,
    pub expert_solution: &'a str,
}

/// Variables for answering a free-form question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomQuestion<'a> {
    pub question: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent<'a> {
    Explain(ExplainStandard<'a>),
    Grade(GradeAnswer<'a>),
    Question(CustomQuestion<'a>),
}

impl Intent<'_> {
    pub fn kind(&self) -> IntentKind {
        match self {
            Self::Explain(_) => IntentKind::Explain,
            Self::Grade(_) => IntentKind::Grade,
            Self::Question(_) => IntentKind::Question,
        }
    }

    fn fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Explain(v) => vec![
                ("standard_title", v.standard_title),
                ("scenario", v.scenario),
            ],
            Self::Grade(v) => vec![
                ("scenario", v.scenario),
                ("user_solution", v.user_solution),
                ("expert_solution", v.expert_solution),
            ],
            Self::Question(v) => vec![("question", v.question)],
        }
    }
}

/// A single prompt to compose: intent variables plus the target language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptRequest<'a> {
    pub language: Language,
    pub intent: Intent<'a>,
}

impl<'a> PromptRequest<'a> {
    pub fn explain(language: Language, standard_title: &'a str, scenario: &'a str) -> Self {
        Self {
            language,
            intent: Intent::Explain(ExplainStandard {
                standard_title,
                scenario,
            }),
        }
    }

    pub fn grade(
        language: Language,
        scenario: &'a str,
        user_solution: &'a str,
        expert_solution: &'a str,
    ) -> Self {
        Self {
            language,
            intent: Intent::Grade(GradeAnswer {
                scenario,
                user_solution,
                expert_solution,
            }),
        }
    }

    pub fn question(language: Language, question: &'a str) -> Self {
        Self {
            language,
            intent: Intent::Question(CustomQuestion { question }),
        }
    }

    /// Build a request from loosely keyed variables, failing on any absent name
    pub fn from_variables(
        kind: IntentKind,
        language: Language,
        variables: &'a IndexMap<String, String>,
    ) -> Result<Self> {
        let lookup = move |name: &'static str| -> Result<&'a str> {
            variables
                .get(name)
                .map(String::as_str)
                .ok_or(FasError::Validation { field: name })
        };

        let intent = match kind {
            IntentKind::Explain => Intent::Explain(ExplainStandard {
                standard_title: lookup("standard_title")?,
                scenario: lookup("scenario")?,
            }),
            IntentKind::Grade => Intent::Grade(GradeAnswer {
                scenario: lookup("scenario")?,
                user_solution: lookup("user_solution")?,
                expert_solution: lookup("expert_solution")?,
            }),
            IntentKind::Question => Intent::Question(CustomQuestion {
                question: lookup("question")?,
            }),
        };

        Ok(Self { language, intent })
    }

    /// Reject blank variables before any substitution happens
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.intent.fields() {
            if value.trim().is_empty() {
                return Err(FasError::Validation { field });
            }
        }
        Ok(())
    }
}

/// Fully substituted prompt, ready for the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptPair {
    pub role_instruction: String,
    pub task_instruction: String,
}

/// Merges request variables into the language's template for the intent
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptComposer;

impl PromptComposer {
    pub fn new() -> Self {
        Self
    }

    pub fn compose(&self, request: &PromptRequest<'_>) -> Result<PromptPair> {
        request.validate()?;

        let language = request.language;
        let pair = match &request.intent {
            Intent::Explain(vars) => render(&templates::EXPLAIN, language, |task| task(vars)),
            Intent::Grade(vars) => render(&templates::GRADE, language, |task| task(vars)),
            Intent::Question(vars) => render(&templates::QUESTION, language, |task| task(vars)),
        };

        debug!(
            intent = %request.intent.kind(),
            language = %language,
            task_len = pair.task_instruction.len(),
            "composed prompt"
        );
        Ok(pair)
    }
}

fn render<R: Copy>(
    table: &IntentTemplates<R>,
    language: Language,
    apply: impl FnOnce(R) -> String,
) -> PromptPair {
    PromptPair {
        role_instruction: table.role.get(language).to_string(),
        task_instruction: apply(*table.task.get(language)),
    }
}
