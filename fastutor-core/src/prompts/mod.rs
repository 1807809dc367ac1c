//! Prompt templates and composition
//!
//! Each intent has an English and an Arabic template kept side by side in
//! [`templates`]; [`PromptComposer`] validates the typed variables of a
//! [`PromptRequest`] and substitutes them into the template for the
//! requested language.

pub mod composer;
pub mod templates;

pub use composer::{
    CustomQuestion, ExplainStandard, GradeAnswer, Intent, IntentKind, PromptComposer, PromptPair,
    PromptRequest,
};
