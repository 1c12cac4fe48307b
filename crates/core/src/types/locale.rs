//! Display locales supported by the catalog and the system instruction.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

/// Language of the catalog labels and the instruction text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    /// English labels.
    #[serde(rename = "en")]
    English,
    /// Swedish labels.
    #[default]
    #[serde(rename = "sv")]
    Swedish,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Self; 2] = [Self::English, Self::Swedish];

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Swedish => "sv",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "sv" | "swedish" => Ok(Self::Swedish),
            other => Err(CatalogError::UnknownLocale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!("sv".parse::<Locale>().expect("parse"), Locale::Swedish);
        assert_eq!("EN".parse::<Locale>().expect("parse"), Locale::English);
        assert_eq!("english".parse::<Locale>().expect("parse"), Locale::English);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_display_matches_code() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string(), locale.code());
        }
    }

    #[test]
    fn test_locale_serde() {
        let json = serde_json::to_string(&Locale::Swedish).expect("serialize");
        assert_eq!(json, "\"sv\"");
        let locale: Locale = serde_json::from_str("\"en\"").expect("deserialize");
        assert_eq!(locale, Locale::English);
    }
}
