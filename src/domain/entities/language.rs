use std::fmt::{Display, Formatter, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Romanian,
    Russian,
}

/// A supported language paired with the name shown in the language picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AvailableLanguage {
    pub language: Language,
    pub name: &'static str,
}

impl AvailableLanguage {
    const fn of(language: Language) -> Self {
        Self {
            language,
            name: language.display_name(),
        }
    }
}

const AVAILABLE_LANGUAGES: [AvailableLanguage; 3] = [
    AvailableLanguage::of(Language::English),
    AvailableLanguage::of(Language::Romanian),
    AvailableLanguage::of(Language::Russian),
];

impl Language {
    /// Language every catalog must provide and every lookup falls back to.
    pub const FALLBACK: Self = Self::English;

    pub const ALL: [Self; 3] = [Self::English, Self::Romanian, Self::Russian];

    /// Parses a language code. Only the exact codes `en`, `ro` and `ru` are accepted.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "ro" => Some(Self::Romanian),
            "ru" => Some(Self::Russian),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Romanian => "ro",
            Self::Russian => "ru",
        }
    }

    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Romanian => "Română",
            Self::Russian => "Русский",
        }
    }

    #[must_use]
    pub const fn available() -> &'static [AvailableLanguage] {
        &AVAILABLE_LANGUAGES
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.code())
    }
}
