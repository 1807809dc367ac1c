//! Page identifiers and the navigation state machine

use crate::language::{Language, Localized};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    StandardsExplorer,
    InteractiveTutorial,
    Glossary,
    CustomQuestion,
}

impl Page {
    /// Navigation order
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::StandardsExplorer,
        Page::InteractiveTutorial,
        Page::Glossary,
        Page::CustomQuestion,
    ];

    pub fn name(self, language: Language) -> &'static str {
        let names = match self {
            Page::Home => Localized::new("Home", "الصفحة الرئيسية"),
            Page::StandardsExplorer => Localized::new("Standards Explorer", "مستكشف المعايير"),
            Page::InteractiveTutorial => Localized::new("Interactive Tutorial", "الدروس التفاعلية"),
            Page::Glossary => Localized::new("Glossary", "المصطلحات"),
            Page::CustomQuestion => Localized::new("Custom Question", "سؤال مخصص"),
        };
        *names.get(language)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Language::English))
    }
}

/// Current page of a session; any page can be reached from any other
#[derive(Debug, Clone, Default)]
pub struct PageRouter {
    current: Page,
}

impl PageRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn navigate(&mut self, page: Page) {
        debug!(from = %self.current, to = %page, "navigate");
        self.current = page;
    }
}
