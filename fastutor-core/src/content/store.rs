use super::glossary::GLOSSARY;
use super::standards::{EXAMPLES, STANDARDS};
use super::{Example, GlossaryTerm, Standard, StandardId};
use crate::error::Result;
use crate::language::Language;
use indexmap::IndexMap;

/// Read-only access to the built-in standards, examples and glossary
#[derive(Debug, Clone, Copy)]
pub struct ContentStore {
    standards: &'static [Standard],
    examples: &'static [Example],
    glossary: &'static [GlossaryTerm],
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentStore {
    pub fn builtin() -> Self {
        Self {
            standards: &STANDARDS,
            examples: &EXAMPLES,
            glossary: &GLOSSARY,
        }
    }

    /// Look up a standard by its textual identifier
    pub fn get_standard(&self, id: &str) -> Result<&Standard> {
        let id: StandardId = id.parse()?;
        Ok(self.standard(id))
    }

    /// Look up the worked example for a standard by its textual identifier
    pub fn get_example(&self, id: &str) -> Result<&Example> {
        let id: StandardId = id.parse()?;
        Ok(self.example(id))
    }

    /// Glossary terms mapped to their definitions in `language`, in display order
    pub fn get_glossary(&self, language: Language) -> IndexMap<&'static str, &'static str> {
        self.glossary
            .iter()
            .map(|entry| (entry.term, *entry.definition.get(language)))
            .collect()
    }

    pub fn standard(&self, id: StandardId) -> &Standard {
        // Both tables are indexed in StandardId::ALL order.
        &self.standards[Self::index_of(id)]
    }

    pub fn example(&self, id: StandardId) -> &Example {
        &self.examples[Self::index_of(id)]
    }

    pub fn standards(&self) -> impl Iterator<Item = &Standard> {
        self.standards.iter()
    }

    pub fn glossary_terms(&self) -> &[GlossaryTerm] {
        self.glossary
    }

    fn index_of(id: StandardId) -> usize {
        match id {
            StandardId::Fas4 => 0,
            StandardId::Fas7 => 1,
            StandardId::Fas10 => 2,
            StandardId::Fas28 => 3,
            StandardId::Fas32 => 4,
        }
    }
}
