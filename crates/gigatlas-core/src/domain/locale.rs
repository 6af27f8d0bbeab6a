use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Language scope of a category or post, e.g. `en` or `nl`.
///
/// Locales are matched exactly against stored records, so the value is kept
/// verbatim; blank values and surrounding whitespace are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    pub const ENGLISH: &'static str = "en";
    pub const DUTCH: &'static str = "nl";

    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("locale cannot be empty".to_string()));
        }
        if value.trim() != value {
            return Err(DomainError::Validation(format!(
                "locale '{value}' has surrounding whitespace"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(Self::ENGLISH.to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Locale {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}
