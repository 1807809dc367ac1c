//! Per-session state: language, current page and the conversation log.
//!
//! A [`Session`] is created when the user starts the tutor and dropped when
//! they leave; nothing in it outlives the process.

use crate::language::Language;
use crate::ui::PageRouter;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

/// One completed exchange with the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    pub input: String,
    pub output: String,
}

/// Append-only log of exchanges, in the order they happened
#[derive(Debug, Clone, Default)]
pub struct SessionMemory {
    records: Vec<SessionRecord>,
}

impl SessionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, input: impl Into<String>, output: impl Into<String>) {
        self.records.push(SessionRecord {
            input: input.into(),
            output: output.into(),
        });
    }

    pub fn all(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Everything one user session owns
#[derive(Debug)]
pub struct Session {
    pub language: Language,
    pub router: PageRouter,
    memory: SessionMemory,
    started: Instant,
}

impl Session {
    pub fn start(language: Language) -> Self {
        info!(language = %language, "session started");
        Self {
            language,
            router: PageRouter::new(),
            memory: SessionMemory::new(),
            started: Instant::now(),
        }
    }

    pub fn memory(&self) -> &SessionMemory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut SessionMemory {
        &mut self.memory
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        info!(
            records = self.memory.len(),
            elapsed_secs = self.started.elapsed().as_secs(),
            "session ended"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Page;

    #[test]
    fn records_are_kept_in_call_order() {
        let mut memory = SessionMemory::new();
        assert!(memory.is_empty());
        for i in 0..4 {
            memory.record(format!("in {i}"), format!("out {i}"));
        }

        assert_eq!(memory.len(), 4);
        let inputs: Vec<&str> = memory.all().iter().map(|r| r.input.as_str()).collect();
        assert_eq!(inputs, ["in 0", "in 1", "in 2", "in 3"]);
        assert_eq!(memory.all()[3].output, "out 3");
    }

    #[test]
    fn session_starts_home_with_empty_memory() {
        let mut session = Session::start(Language::Arabic);
        assert_eq!(session.router.current(), Page::Home);
        assert!(session.memory().is_empty());

        assert_eq!(session.toggle_language(), Language::English);
        session.router.navigate(Page::Glossary);
        session.memory_mut().record("q", "a");
        assert_eq!(session.memory().len(), 1);
    }
}
