use std::fmt;

use serde::Serialize;

use super::DomainError;

/// Languages offered by the editor, keyed to the judge's compiler ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Cpp,
    Java,
    Python,
    JavaScript,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Cpp,
        Language::Java,
        Language::Python,
        Language::JavaScript,
    ];

    pub fn id(self) -> LanguageId {
        LanguageId(match self {
            Language::Cpp => 54,
            Language::Java => 62,
            Language::Python => 71,
            Language::JavaScript => 63,
        })
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
        }
    }

    pub fn from_id(id: LanguageId) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.id() == id)
    }
}

/// The judge's numeric language id.
///
/// The judge owns the enumeration, so ids outside [`Language`] are still
/// valid as long as they are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageId(u32);

impl LanguageId {
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidLanguageId(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for LanguageId {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Language> for LanguageId {
    fn from(value: Language) -> Self {
        value.id()
    }
}

impl From<LanguageId> for u32 {
    fn from(value: LanguageId) -> Self {
        value.value()
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
