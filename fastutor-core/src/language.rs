//! Supported interface languages and the bilingual lookup table type.
//!
//! Every bilingual literal in the crate (standard titles, scenarios, prompt
//! templates, page labels) is stored as a [`Localized`] pair and resolved with
//! a single [`Localized::get`] call per request.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::FasError;

/// Interface and generation language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Arabic];

    /// Short code used in configuration files and on the command line
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Arabic => "ar",
        }
    }

    /// Label shown in the language toggle
    pub fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Arabic => "Arabic / العربية",
        }
    }

    /// The other supported language
    pub fn toggled(self) -> Self {
        match self {
            Self::English => Self::Arabic,
            Self::Arabic => Self::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = FasError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ar" | "arabic" => Ok(Self::Arabic),
            other => Err(FasError::Configuration(format!(
                "unsupported language '{other}' (expected 'en' or 'ar')"
            ))),
        }
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A value held once per supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized<T> {
    pub en: T,
    pub ar: T,
}

impl<T> Localized<T> {
    pub const fn new(en: T, ar: T) -> Self {
        Self { en, ar }
    }

    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::English => &self.en,
            Language::Arabic => &self.ar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("Arabic".parse::<Language>().unwrap(), Language::Arabic);
        assert_eq!(" AR ".parse::<Language>().unwrap(), Language::Arabic);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn toggles_between_languages() {
        assert_eq!(Language::English.toggled(), Language::Arabic);
        assert_eq!(Language::Arabic.toggled(), Language::English);
    }

    #[test]
    fn localized_selects_by_language() {
        let pair = Localized::new("hello", "مرحبا");
        assert_eq!(*pair.get(Language::English), "hello");
        assert_eq!(*pair.get(Language::Arabic), "مرحبا");
    }
}
