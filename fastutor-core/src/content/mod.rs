//! Static bilingual content: the five AAOIFI standards, one worked example per
//! standard, and the glossary.
//!
//! Everything here is compiled into the binary and never mutated.

mod glossary;
mod standards;
mod store;

pub use store::ContentStore;

use crate::error::FasError;
use crate::language::{Language, Localized};
use std::fmt;
use std::str::FromStr;

/// Identifier of one of the supported financial accounting standards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardId {
    Fas4,
    Fas7,
    Fas10,
    Fas28,
    Fas32,
}

impl StandardId {
    /// Canonical display order
    pub const ALL: [StandardId; 5] = [
        StandardId::Fas4,
        StandardId::Fas7,
        StandardId::Fas10,
        StandardId::Fas28,
        StandardId::Fas32,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fas4 => "FAS 4",
            Self::Fas7 => "FAS 7",
            Self::Fas10 => "FAS 10",
            Self::Fas28 => "FAS 28",
            Self::Fas32 => "FAS 32",
        }
    }

    fn number(self) -> &'static str {
        match self {
            Self::Fas4 => "4",
            Self::Fas7 => "7",
            Self::Fas10 => "10",
            Self::Fas28 => "28",
            Self::Fas32 => "32",
        }
    }
}

impl fmt::Display for StandardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StandardId {
    type Err = FasError;

    /// Accepts "FAS 10", "fas10", "FAS-10", "FAS_10" and a bare "10".
    ///
    /// At most one separator may follow the prefix and the number must be
    /// written exactly as in the canonical form.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        let digits = match normalized.strip_prefix("fas") {
            Some(rest) => rest.strip_prefix([' ', '-', '_']).unwrap_or(rest),
            None => normalized.as_str(),
        };

        Self::ALL
            .into_iter()
            .find(|id| id.number() == digits)
            .ok_or_else(|| FasError::NotFound(value.trim().to_string()))
    }
}

/// A financial accounting standard with its bilingual title and summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standard {
    pub id: StandardId,
    pub title: Localized<&'static str>,
    pub description: Localized<&'static str>,
}

impl Standard {
    /// "FAS 10 - Istisna'a and Parallel Istisna'a"
    pub fn heading(&self, language: Language) -> String {
        format!("{} - {}", self.id, self.title.get(language))
    }
}

/// A worked scenario illustrating one standard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub id: StandardId,
    pub title: Localized<&'static str>,
    pub scenario: Localized<&'static str>,
}

/// A glossary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossaryTerm {
    pub term: &'static str,
    pub definition: Localized<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_and_loose_identifiers() {
        for id in StandardId::ALL {
            assert_eq!(id.as_str().parse::<StandardId>().unwrap(), id);
        }
        assert_eq!("fas10".parse::<StandardId>().unwrap(), StandardId::Fas10);
        assert_eq!("FAS-28".parse::<StandardId>().unwrap(), StandardId::Fas28);
        assert_eq!("32".parse::<StandardId>().unwrap(), StandardId::Fas32);
        assert_eq!("FAS_7".parse::<StandardId>().unwrap(), StandardId::Fas7);
        assert_eq!(" fas 4 ".parse::<StandardId>().unwrap(), StandardId::Fas4);
    }

    #[test]
    fn rejects_unknown_identifiers() {
        for raw in ["FAS 5", "IFRS 9", "", "fas"] {
            let err = raw.parse::<StandardId>().unwrap_err();
            assert!(matches!(err, FasError::NotFound(_)), "{raw}");
        }
    }

    #[test]
    fn rejects_loosely_written_numbers() {
        for raw in ["+10", "0010", "f a s 1 0", "fas__28", "FAS  4", "fas-_7"] {
            let err = raw.parse::<StandardId>().unwrap_err();
            assert!(matches!(err, FasError::NotFound(_)), "{raw}");
        }
    }
}
