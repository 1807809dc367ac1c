//! Prompt composition across intents and languages

use fastutor_core::prompts::IntentKind;
use fastutor_core::{FasError, Language, PromptComposer, PromptRequest};
use indexmap::IndexMap;

#[test]
fn composition_is_deterministic() {
    let composer = PromptComposer::new();
    for language in Language::ALL {
        let request = PromptRequest::grade(language, "scenario", "mine", "theirs");
        assert_eq!(
            composer.compose(&request).unwrap(),
            composer.compose(&request).unwrap()
        );
    }
}

#[test]
fn each_intent_has_distinct_language_variants() {
    let composer = PromptComposer::new();
    let requests = |language| {
        [
            PromptRequest::explain(language, "title", "scenario"),
            PromptRequest::grade(language, "scenario", "mine", "theirs"),
            PromptRequest::question(language, "What is Wakala?"),
        ]
    };

    for (en, ar) in requests(Language::English)
        .iter()
        .zip(requests(Language::Arabic).iter())
    {
        let en = composer.compose(en).unwrap();
        let ar = composer.compose(ar).unwrap();
        assert_ne!(en.role_instruction, ar.role_instruction);
        assert_ne!(en.task_instruction, ar.task_instruction);
    }
}

#[test]
fn every_empty_variable_is_named_in_the_error() {
    let composer = PromptComposer::new();
    let cases = [
        (PromptRequest::explain(Language::English, "", "s"), "standard_title"),
        (PromptRequest::explain(Language::Arabic, "t", " \t"), "scenario"),
        (PromptRequest::grade(Language::English, "", "u", "e"), "scenario"),
        (PromptRequest::grade(Language::English, "s", "u", ""), "expert_solution"),
        (PromptRequest::question(Language::Arabic, "\n"), "question"),
    ];

    for (request, expected) in cases {
        match composer.compose(&request) {
            Err(FasError::Validation { field }) => assert_eq!(field, expected),
            other => panic!("expected validation error for {expected}, got {other:?}"),
        }
    }
}

#[test]
fn loosely_keyed_variables_compose_like_typed_ones() {
    let mut variables = IndexMap::new();
    variables.insert("question".to_string(), "What is Sukuk?".to_string());

    let loose = PromptRequest::from_variables(IntentKind::Question, Language::English, &variables)
        .unwrap();
    let typed = PromptRequest::question(Language::English, "What is Sukuk?");

    let composer = PromptComposer::new();
    assert_eq!(composer.compose(&loose).unwrap(), composer.compose(&typed).unwrap());
}

#[test]
fn absent_variables_fail_validation() {
    let variables = IndexMap::new();
    for kind in [IntentKind::Explain, IntentKind::Grade, IntentKind::Question] {
        let err = PromptRequest::from_variables(kind, Language::English, &variables).unwrap_err();
        match err {
            FasError::Validation { field } => {
                assert_eq!(field, kind.required_variables()[0]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
